//! Screen-local session state.
//!
//! Each screen owns one session: the current capture, the last result,
//! and the in-flight flag that keeps user-triggered sends serialized.
//! The transforms the screens call stay pure; all mutation lives here.

use uassist_ml_client::ImageUpload;

use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct ScreenSession<T> {
    capture: Option<ImageUpload>,
    result: Option<T>,
    in_flight: bool,
}

impl<T> ScreenSession<T> {
    pub fn new() -> Self {
        Self {
            capture: None,
            result: None,
            in_flight: false,
        }
    }

    /// Store a new capture. Any previous result is discarded, the same
    /// way a new photo cleared the old text on screen.
    pub fn set_capture(&mut self, capture: ImageUpload) {
        self.capture = Some(capture);
        self.result = None;
    }

    pub fn capture(&self) -> Option<&ImageUpload> {
        self.capture.as_ref()
    }

    /// Mark a send as started. Refuses re-entry while one is in flight.
    pub fn begin(&mut self) -> AppResult<()> {
        if self.in_flight {
            return Err(AppError::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Mark the send as finished, storing the result if it succeeded.
    pub fn finish(&mut self, result: Option<T>) {
        self.in_flight = false;
        if let Some(result) = result {
            self.result = Some(result);
        }
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Reset capture and result. Not allowed while a send is in flight.
    pub fn clear(&mut self) -> AppResult<()> {
        if self.in_flight {
            return Err(AppError::Busy);
        }
        self.capture = None;
        self.result = None;
        Ok(())
    }
}

impl<T> Default for ScreenSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_refuses_reentry() {
        let mut session: ScreenSession<String> = ScreenSession::new();
        session.begin().unwrap();
        assert!(matches!(session.begin(), Err(AppError::Busy)));

        session.finish(Some("done".to_string()));
        assert!(!session.is_busy());
        assert_eq!(session.result(), Some(&"done".to_string()));
        session.begin().unwrap();
    }

    #[test]
    fn test_new_capture_discards_old_result() {
        let mut session: ScreenSession<String> = ScreenSession::new();
        session.begin().unwrap();
        session.finish(Some("old text".to_string()));

        session.set_capture(ImageUpload::jpeg(vec![1, 2, 3]));
        assert!(session.result().is_none());
        assert!(session.capture().is_some());
    }

    #[test]
    fn test_clear_resets_everything_unless_busy() {
        let mut session: ScreenSession<String> = ScreenSession::new();
        session.set_capture(ImageUpload::jpeg(vec![1]));
        session.begin().unwrap();
        assert!(matches!(session.clear(), Err(AppError::Busy)));

        session.finish(None);
        session.clear().unwrap();
        assert!(session.capture().is_none());
        assert!(session.result().is_none());
    }
}
