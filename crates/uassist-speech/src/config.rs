//! Speech configuration.

/// Configuration for the speech collaborator.
///
/// Defaults mirror the mobile app's playback settings: en-US voice,
/// slightly slowed rate, neutral pitch.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Engine binary name; auto-detected when unset
    pub engine: Option<String>,
    /// Voice/language tag
    pub voice: String,
    /// Rate multiplier (1.0 = engine default)
    pub rate: f64,
    /// Pitch multiplier (1.0 = engine default)
    pub pitch: f64,
    /// Whether speech output is enabled at all
    pub enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            engine: None,
            voice: "en-US".to_string(),
            rate: 0.9,
            pitch: 1.0,
            enabled: true,
        }
    }
}

impl SpeechConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            engine: std::env::var("SPEECH_ENGINE").ok(),
            voice: std::env::var("SPEECH_VOICE").unwrap_or_else(|_| "en-US".to_string()),
            rate: std::env::var("SPEECH_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.9),
            pitch: std::env::var("SPEECH_PITCH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
            enabled: std::env::var("SPEECH_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SpeechConfig::default();
        assert_eq!(config.voice, "en-US");
        assert!((config.rate - 0.9).abs() < f64::EPSILON);
        assert!(config.enabled);
        assert!(config.engine.is_none());
    }
}
