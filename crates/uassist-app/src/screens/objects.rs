//! Object identification screen.

use tracing::warn;

use uassist_ml_client::MlClient;
use uassist_models::{summarize_labels, ActivityLog, Feature};
use uassist_speech::SpeechSink;

use crate::capture::CaptureSource;
use crate::error::AppResult;
use crate::logging::SubmitLogger;
use crate::session::ScreenSession;

pub async fn run(
    client: &MlClient,
    speech: &dyn SpeechSink,
    session: &mut ScreenSession<Vec<String>>,
    activity: &mut ActivityLog,
    capture: &dyn CaptureSource,
) -> AppResult<Vec<String>> {
    let image = super::acquire(capture).await?;

    let logger = SubmitLogger::new(Feature::ObjectIdentify);
    logger.log_start(&format!("{} byte photo", image.len()));

    session.set_capture(image.clone());
    session.begin()?;
    let labels = match client.detect_objects(&image).await {
        Ok(labels) => {
            session.finish(Some(labels.clone()));
            labels
        }
        Err(e) => {
            session.finish(None);
            logger.log_error(&e.to_string());
            return Err(e.into());
        }
    };

    let summary = summarize_labels(&labels);
    logger.log_completion(&format!("{} labels detected", labels.len()));
    activity.record(Feature::ObjectIdentify, summary.join(", "));

    if let Err(e) = speech.speak(&summary.join(". ")).await {
        warn!("Speech output failed: {}", e);
    }

    let mut lines = vec!["Detected Objects:".to_string()];
    lines.extend(summary);
    Ok(lines)
}
