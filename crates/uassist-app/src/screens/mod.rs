//! Feature screens.
//!
//! Each screen is the same thin loop the app has always been: validate
//! input, submit to the ML service, transform the response for display,
//! speak where the feature calls for it. Screens return their rendered
//! lines so flows are testable without touching stdout.

pub mod news;
pub mod objects;
pub mod text_reader;
pub mod wound;

use uassist_ml_client::ImageUpload;

use crate::capture::CaptureSource;
use crate::error::AppResult;

/// Shared acquire step for the photo screens.
pub(crate) async fn acquire(capture: &dyn CaptureSource) -> AppResult<ImageUpload> {
    capture.request_permission().await?;
    capture.capture().await
}
