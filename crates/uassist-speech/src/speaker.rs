//! Speech engine discovery and process control.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::SpeechConfig;
use crate::error::{SpeechError, SpeechResult};

/// Engine binaries probed when none is configured, in preference order.
const ENGINE_CANDIDATES: [&str; 4] = ["espeak-ng", "espeak", "say", "flite"];

/// Output sink for narration text.
#[async_trait]
pub trait SpeechSink: Send + Sync {
    /// Speak the utterance, returning once playback has finished (or was
    /// stopped).
    async fn speak(&self, text: &str) -> SpeechResult<()>;

    /// Stop any utterance still playing.
    async fn stop(&self) -> SpeechResult<()>;
}

/// Sink used when speech output is disabled.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait]
impl SpeechSink for NullSink {
    async fn speak(&self, _text: &str) -> SpeechResult<()> {
        Ok(())
    }

    async fn stop(&self) -> SpeechResult<()> {
        Ok(())
    }
}

/// Supported engine families; each takes a different argument dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineKind {
    Espeak,
    Say,
    Flite,
}

impl EngineKind {
    fn from_binary_name(name: &str) -> Self {
        match name {
            "say" => EngineKind::Say,
            "flite" => EngineKind::Flite,
            _ => EngineKind::Espeak,
        }
    }
}

/// Build the argument list for one utterance.
///
/// Rate is a multiplier over the engine's default speaking rate
/// (175 words per minute for the espeak family and `say`).
fn engine_args(kind: EngineKind, config: &SpeechConfig, text: &str) -> Vec<String> {
    match kind {
        EngineKind::Espeak => {
            let wpm = (175.0 * config.rate).round() as i32;
            let pitch = ((50.0 * config.pitch).round() as i32).clamp(0, 99);
            vec![
                "-v".to_string(),
                config.voice.to_lowercase(),
                "-s".to_string(),
                wpm.to_string(),
                "-p".to_string(),
                pitch.to_string(),
                text.to_string(),
            ]
        }
        EngineKind::Say => {
            let wpm = (175.0 * config.rate).round() as i32;
            vec!["-r".to_string(), wpm.to_string(), text.to_string()]
        }
        EngineKind::Flite => vec!["-t".to_string(), text.to_string()],
    }
}

/// Speaks through an external engine process, one utterance at a time.
///
/// A new utterance replaces any still playing; `stop` kills the in-flight
/// process (the Clear-button semantics).
pub struct EngineSpeaker {
    binary: PathBuf,
    kind: EngineKind,
    config: SpeechConfig,
    current: Mutex<Option<Child>>,
}

impl EngineSpeaker {
    /// Resolve the engine binary and build a speaker.
    ///
    /// A configured engine name must resolve; otherwise the candidate
    /// list is probed in order.
    pub fn new(config: SpeechConfig) -> SpeechResult<Self> {
        let (binary, name) = match &config.engine {
            Some(name) => {
                let path = which::which(name)
                    .map_err(|_| SpeechError::EngineNotFound(name.clone()))?;
                (path, name.clone())
            }
            None => ENGINE_CANDIDATES
                .iter()
                .find_map(|name| which::which(name).ok().map(|path| (path, name.to_string())))
                .ok_or_else(|| SpeechError::EngineNotFound(ENGINE_CANDIDATES.join(", ")))?,
        };

        debug!("Using speech engine {}", binary.display());

        Ok(Self {
            binary,
            kind: EngineKind::from_binary_name(&name),
            config,
            current: Mutex::new(None),
        })
    }

    fn spawn(&self, text: &str) -> SpeechResult<Child> {
        let args = engine_args(self.kind, &self.config, text);
        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;
        Ok(child)
    }
}

#[async_trait]
impl SpeechSink for EngineSpeaker {
    async fn speak(&self, text: &str) -> SpeechResult<()> {
        if text.is_empty() {
            return Ok(());
        }

        self.stop().await?;

        {
            let mut current = self.current.lock().await;
            *current = Some(self.spawn(text)?);
        }

        // Poll rather than wait so stop() can interrupt playback.
        loop {
            {
                let mut current = self.current.lock().await;
                match current.as_mut() {
                    // Stopped from another task.
                    None => return Ok(()),
                    Some(child) => {
                        if let Some(status) = child.try_wait()? {
                            *current = None;
                            if !status.success() {
                                warn!("Speech engine failed: {}", status);
                                return Err(SpeechError::EngineFailed {
                                    code: status.code(),
                                });
                            }
                            return Ok(());
                        }
                    }
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }

    async fn stop(&self) -> SpeechResult<()> {
        let mut current = self.current.lock().await;
        if let Some(mut child) = current.take() {
            child.start_kill().ok();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_espeak_args_scale_rate_and_pitch() {
        let config = SpeechConfig::default();
        let args = engine_args(EngineKind::Espeak, &config, "2 cats detected");
        assert_eq!(
            args,
            vec!["-v", "en-us", "-s", "158", "-p", "50", "2 cats detected"]
        );
    }

    #[test]
    fn test_say_args_only_carry_rate() {
        let config = SpeechConfig {
            rate: 1.0,
            ..SpeechConfig::default()
        };
        let args = engine_args(EngineKind::Say, &config, "hello");
        assert_eq!(args, vec!["-r", "175", "hello"]);
    }

    #[test]
    fn test_flite_args_are_text_only() {
        let args = engine_args(EngineKind::Flite, &SpeechConfig::default(), "hello");
        assert_eq!(args, vec!["-t", "hello"]);
    }

    #[test]
    fn test_engine_kind_from_binary_name() {
        assert_eq!(EngineKind::from_binary_name("say"), EngineKind::Say);
        assert_eq!(EngineKind::from_binary_name("flite"), EngineKind::Flite);
        assert_eq!(EngineKind::from_binary_name("espeak-ng"), EngineKind::Espeak);
    }

    #[tokio::test]
    async fn test_null_sink_accepts_everything() {
        let sink = NullSink;
        sink.speak("anything").await.unwrap();
        sink.stop().await.unwrap();
    }
}
