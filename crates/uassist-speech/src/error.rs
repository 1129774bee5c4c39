//! Speech error types.

use thiserror::Error;

pub type SpeechResult<T> = Result<T, SpeechError>;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("No speech engine found (tried: {0})")]
    EngineNotFound(String),

    #[error("Speech engine exited with status {code:?}")]
    EngineFailed { code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
