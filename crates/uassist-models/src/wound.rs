//! Wound classification models.
//!
//! These types are produced entirely by the classification service; the
//! front-end only reads them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One classified wound with its definition and first-aid steps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectionRecord {
    /// Wound type name (e.g. "Cut", "Burn")
    #[serde(rename = "type")]
    pub wound_type: String,

    /// Free-text definition of the wound type
    pub definition: String,

    /// Ordered first-aid steps
    #[serde(default)]
    pub first_aid: Vec<String>,
}

/// Full classification response: a lead message plus zero or more records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WoundReport {
    /// Lead message (e.g. "All clear" or "Found issues")
    pub message: String,

    /// Classified wounds, in server order
    #[serde(default)]
    pub wounds: Vec<DetectionRecord>,
}

impl WoundReport {
    pub fn has_wounds(&self) -> bool {
        !self.wounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_field_rename() {
        let json = r#"{"type":"Cut","definition":"A break in skin","first_aid":["Clean wound"]}"#;
        let record: DetectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.wound_type, "Cut");
        assert_eq!(record.first_aid, vec!["Clean wound"]);
    }

    #[test]
    fn test_report_missing_wounds_defaults_empty() {
        let report: WoundReport = serde_json::from_str(r#"{"message":"All clear"}"#).unwrap();
        assert!(!report.has_wounds());
    }
}
