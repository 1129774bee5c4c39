//! Wound classification screen.

use tracing::warn;

use uassist_ml_client::MlClient;
use uassist_models::{narrate_report, ActivityLog, Feature, WoundReport};
use uassist_speech::SpeechSink;

use crate::capture::CaptureSource;
use crate::error::AppResult;
use crate::logging::SubmitLogger;
use crate::session::ScreenSession;

pub async fn run(
    client: &MlClient,
    speech: &dyn SpeechSink,
    session: &mut ScreenSession<WoundReport>,
    activity: &mut ActivityLog,
    capture: &dyn CaptureSource,
) -> AppResult<Vec<String>> {
    let image = super::acquire(capture).await?;

    let logger = SubmitLogger::new(Feature::WoundClassify);
    logger.log_start(&format!("{} byte photo", image.len()));

    session.set_capture(image.clone());
    session.begin()?;
    let report = match client.classify_wounds(&image).await {
        Ok(report) => {
            session.finish(Some(report.clone()));
            report
        }
        Err(e) => {
            session.finish(None);
            logger.log_error(&e.to_string());
            return Err(e.into());
        }
    };

    logger.log_completion(&format!("{} wounds classified", report.wounds.len()));
    activity.record(Feature::WoundClassify, report.message.clone());

    let narration = narrate_report(&report);
    if let Err(e) = speech.speak(&narration).await {
        warn!("Speech output failed: {}", e);
    }

    Ok(render(&report))
}

/// On-screen rendering of a report: the lead message, then one block per
/// wound.
fn render(report: &WoundReport) -> Vec<String> {
    let mut lines = vec![report.message.clone()];
    for wound in &report.wounds {
        lines.push(format!("{}: {}", wound.wound_type, wound.definition));
        if !wound.first_aid.is_empty() {
            lines.push(format!("  First aid: {}", wound.first_aid.join("; ")));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use uassist_models::DetectionRecord;

    #[test]
    fn test_render_report_with_wounds() {
        let report = WoundReport {
            message: "Found issues".to_string(),
            wounds: vec![DetectionRecord {
                wound_type: "Cut".to_string(),
                definition: "A break in skin".to_string(),
                first_aid: vec!["Clean wound".to_string(), "Apply bandage".to_string()],
            }],
        };
        assert_eq!(
            render(&report),
            vec![
                "Found issues",
                "Cut: A break in skin",
                "  First aid: Clean wound; Apply bandage",
            ]
        );
    }

    #[test]
    fn test_render_clear_report_is_message_only() {
        let report = WoundReport {
            message: "All clear".to_string(),
            wounds: vec![],
        };
        assert_eq!(render(&report), vec!["All clear"]);
    }
}
