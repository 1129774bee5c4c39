//! Structured submission logging.
//!
//! One logger per submit round trip, carrying the request id and feature
//! so log lines from a single send can be correlated.

use tracing::{error, info};
use uuid::Uuid;

use uassist_models::Feature;

/// Logger scoped to one submission.
#[derive(Debug, Clone)]
pub struct SubmitLogger {
    request_id: String,
    feature: Feature,
}

impl SubmitLogger {
    /// Create a logger with a fresh request id.
    pub fn new(feature: Feature) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            feature,
        }
    }

    /// Log the start of a submission.
    pub fn log_start(&self, message: &str) {
        info!(
            request_id = %self.request_id,
            feature = %self.feature,
            "Submit started: {}", message
        );
    }

    /// Log a successful round trip.
    pub fn log_completion(&self, message: &str) {
        info!(
            request_id = %self.request_id,
            feature = %self.feature,
            "Submit completed: {}", message
        );
    }

    /// Log a failed round trip.
    pub fn log_error(&self, message: &str) {
        error!(
            request_id = %self.request_id,
            feature = %self.feature,
            "Submit failed: {}", message
        );
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_carries_feature() {
        let logger = SubmitLogger::new(Feature::ObjectIdentify);
        assert_eq!(logger.feature(), Feature::ObjectIdentify);
        assert!(!logger.request_id().is_empty());
    }

    #[test]
    fn test_loggers_get_distinct_request_ids() {
        let a = SubmitLogger::new(Feature::TextReader);
        let b = SubmitLogger::new(Feature::TextReader);
        assert_ne!(a.request_id(), b.request_id());
    }
}
