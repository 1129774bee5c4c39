//! News verification models.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A news article submitted for credibility checking.
///
/// Both fields are required; the screen rejects the send action until
/// they are filled in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct NewsArticle {
    /// Article body text
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,

    /// Publishing source (brand) of the article
    #[validate(length(min = 1, message = "source is required"))]
    pub source: String,
}

impl NewsArticle {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }
}

/// Per-model credibility verdicts returned by the prediction service.
///
/// Verdicts are free-text ("Credible", "Not Credible", or a model error
/// string). Keys are kept in a sorted map so rendering is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CredibilityReport {
    pub predictions: BTreeMap<String, String>,
}

impl CredibilityReport {
    pub fn new(predictions: BTreeMap<String, String>) -> Self {
        Self { predictions }
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Render one `"{model}: {verdict}"` line per model.
    pub fn lines(&self) -> Vec<String> {
        self.predictions
            .iter()
            .map(|(model, verdict)| format!("{}: {}", model, verdict))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_requires_both_fields() {
        assert!(NewsArticle::new("some content", "The Daily").validate().is_ok());
        assert!(NewsArticle::new("", "The Daily").validate().is_err());
        assert!(NewsArticle::new("some content", "").validate().is_err());
    }

    #[test]
    fn test_report_lines_sorted_by_model() {
        let mut predictions = BTreeMap::new();
        predictions.insert("SVM".to_string(), "Credible".to_string());
        predictions.insert("Naive_Bayes".to_string(), "Not Credible".to_string());

        let report = CredibilityReport::new(predictions);
        assert_eq!(
            report.lines(),
            vec!["Naive_Bayes: Not Credible", "SVM: Credible"]
        );
    }
}
