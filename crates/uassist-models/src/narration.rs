//! Speech narration for wound classification reports.
//!
//! Flattens a [`WoundReport`](crate::wound::WoundReport) into a single
//! utterance string for the speech collaborator. The output is opaque
//! plain text; no markup, no parsing downstream.

use crate::wound::{DetectionRecord, WoundReport};

/// Narrate one detection record.
pub fn narrate_record(record: &DetectionRecord) -> String {
    format!(
        "{}. Definition: {}. First aid: {}",
        record.wound_type,
        record.definition,
        record.first_aid.join(" ")
    )
}

/// Narrate a full report.
///
/// With no wounds the narration is the lead message alone. Otherwise the
/// message is followed by " Detected wounds: " and the record narrations
/// joined by "; ", in server order.
pub fn narrate_report(report: &WoundReport) -> String {
    if report.wounds.is_empty() {
        return report.message.clone();
    }

    let wounds: Vec<String> = report.wounds.iter().map(narrate_record).collect();
    format!("{} Detected wounds: {}", report.message, wounds.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wound_type: &str, definition: &str, first_aid: &[&str]) -> DetectionRecord {
        DetectionRecord {
            wound_type: wound_type.to_string(),
            definition: definition.to_string(),
            first_aid: first_aid.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_narrate_empty_report_is_message_only() {
        let report = WoundReport {
            message: "All clear".to_string(),
            wounds: vec![],
        };
        assert_eq!(narrate_report(&report), "All clear");
    }

    #[test]
    fn test_narrate_single_record() {
        let report = WoundReport {
            message: "Found issues".to_string(),
            wounds: vec![record(
                "Cut",
                "A break in skin",
                &["Clean wound", "Apply bandage"],
            )],
        };
        assert_eq!(
            narrate_report(&report),
            "Found issues Detected wounds: Cut. Definition: A break in skin. \
             First aid: Clean wound Apply bandage"
        );
    }

    #[test]
    fn test_narrate_preserves_record_order() {
        let report = WoundReport {
            message: "Found issues".to_string(),
            wounds: vec![
                record("Burn", "Tissue damage from heat", &["Cool with water"]),
                record("Cut", "A break in skin", &["Clean wound"]),
            ],
        };
        assert_eq!(
            narrate_report(&report),
            "Found issues Detected wounds: Burn. Definition: Tissue damage from heat. \
             First aid: Cool with water; Cut. Definition: A break in skin. \
             First aid: Clean wound"
        );
    }

    #[test]
    fn test_narrate_record_without_steps() {
        let r = record("Bruise", "Bleeding under the skin", &[]);
        assert_eq!(
            narrate_record(&r),
            "Bruise. Definition: Bleeding under the skin. First aid: "
        );
    }

    #[test]
    fn test_narrate_is_idempotent() {
        let report = WoundReport {
            message: "Found issues".to_string(),
            wounds: vec![record("Cut", "A break in skin", &["Clean wound"])],
        };
        assert_eq!(narrate_report(&report), narrate_report(&report));
    }
}
