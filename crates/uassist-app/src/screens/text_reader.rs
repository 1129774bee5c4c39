//! Text reader (OCR) screen.

use tracing::warn;

use uassist_ml_client::MlClient;
use uassist_models::{ActivityLog, Feature};
use uassist_speech::SpeechSink;

use crate::capture::CaptureSource;
use crate::error::AppResult;
use crate::logging::SubmitLogger;
use crate::session::ScreenSession;

const NO_TEXT_DETECTED: &str = "No text detected.";

pub async fn run(
    client: &MlClient,
    speech: &dyn SpeechSink,
    session: &mut ScreenSession<String>,
    activity: &mut ActivityLog,
    capture: &dyn CaptureSource,
) -> AppResult<Vec<String>> {
    let image = super::acquire(capture).await?;

    let logger = SubmitLogger::new(Feature::TextReader);
    logger.log_start(&format!("{} byte photo", image.len()));

    session.set_capture(image.clone());
    session.begin()?;
    let text = match client.extract_text(&image).await {
        Ok(text) => text,
        Err(e) => {
            session.finish(None);
            logger.log_error(&e.to_string());
            return Err(e.into());
        }
    };

    let text = if text.trim().is_empty() {
        NO_TEXT_DETECTED.to_string()
    } else {
        text.trim().to_string()
    };
    session.finish(Some(text.clone()));

    logger.log_completion(&format!("{} characters", text.len()));
    activity.record(Feature::TextReader, format!("Read {} characters", text.len()));

    // Speech is best-effort; a silent read-out should not fail the send.
    if let Err(e) = speech.speak(&text).await {
        warn!("Speech output failed: {}", e);
    }

    Ok(vec!["Extracted Text:".to_string(), text])
}
