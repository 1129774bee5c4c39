//! Front-end configuration.

use std::time::Duration;

use uassist_ml_client::MlClientConfig;
use uassist_speech::SpeechConfig;

use crate::cli::AppArgs;

/// Front-end configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ML service client settings
    pub ml: MlClientConfig,
    /// Speech output settings
    pub speech: SpeechConfig,
    /// Recent-activity feed capacity
    pub activity_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ml: MlClientConfig::default(),
            speech: SpeechConfig::default(),
            activity_limit: 20,
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            ml: MlClientConfig::from_env(),
            speech: SpeechConfig::from_env(),
            activity_limit: std::env::var("UASSIST_ACTIVITY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_args(mut self, args: &AppArgs) -> Self {
        if let Some(url) = &args.service_url {
            self.ml.base_url = url.clone();
        }
        if let Some(secs) = args.timeout {
            self.ml.timeout = Duration::from_secs(secs);
        }
        if args.no_speak {
            self.speech.enabled = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_override_env_defaults() {
        let args = AppArgs::parse_from([
            "uassist",
            "features",
            "--service-url",
            "http://10.0.0.2:5000",
            "--timeout",
            "5",
            "--no-speak",
        ]);
        let config = AppConfig::default().with_args(&args);

        assert_eq!(config.ml.base_url, "http://10.0.0.2:5000");
        assert_eq!(config.ml.timeout, Duration::from_secs(5));
        assert!(!config.speech.enabled);
    }
}
