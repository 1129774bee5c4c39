//! Feature catalog.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the assistant's four features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Check whether a news article is credible
    NewsVerify,
    /// Extract text from a captured image (OCR)
    TextReader,
    /// Classify wounds and narrate first-aid guidance
    WoundClassify,
    /// Identify objects in a captured image
    ObjectIdentify,
}

impl Feature {
    /// All features, in dashboard order.
    pub const ALL: [Feature; 4] = [
        Feature::NewsVerify,
        Feature::TextReader,
        Feature::WoundClassify,
        Feature::ObjectIdentify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::NewsVerify => "news_verify",
            Feature::TextReader => "text_reader",
            Feature::WoundClassify => "wound_classify",
            Feature::ObjectIdentify => "object_identify",
        }
    }

    /// Human-facing title, as shown on the dashboard.
    pub fn title(&self) -> &'static str {
        match self {
            Feature::NewsVerify => "News Verification",
            Feature::TextReader => "Text Reader",
            Feature::WoundClassify => "Wound Classification",
            Feature::ObjectIdentify => "Object Identification",
        }
    }

    /// Short description for the feature list.
    pub fn blurb(&self) -> &'static str {
        match self {
            Feature::NewsVerify => "Check if the news you read is real or fake",
            Feature::TextReader => "Scan and read text from images",
            Feature::WoundClassify => "Identify and classify wounds",
            Feature::ObjectIdentify => "Identify objects in your surroundings",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown feature: {0}")]
pub struct FeatureParseError(String);

impl FromStr for Feature {
    type Err = FeatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "news_verify" => Ok(Feature::NewsVerify),
            "text_reader" => Ok(Feature::TextReader),
            "wound_classify" => Ok(Feature::WoundClassify),
            "object_identify" => Ok(Feature::ObjectIdentify),
            _ => Err(FeatureParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_roundtrip() {
        for feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn test_feature_parse_hyphenated() {
        assert_eq!("news-verify".parse::<Feature>().unwrap(), Feature::NewsVerify);
        assert_eq!("wound-classify".parse::<Feature>().unwrap(), Feature::WoundClassify);
    }

    #[test]
    fn test_feature_parse_unknown() {
        assert!("selfie-mode".parse::<Feature>().is_err());
    }

    #[test]
    fn test_feature_serde() {
        let json = serde_json::to_string(&Feature::TextReader).unwrap();
        assert_eq!(json, "\"text_reader\"");
    }
}
