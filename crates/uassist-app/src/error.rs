//! Front-end error types.

use thiserror::Error;

use uassist_ml_client::MlError;
use uassist_speech::SpeechError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("A send is already in progress")]
    Busy,

    #[error("ML service error: {0}")]
    Ml(#[from] MlError),

    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Process exit code for the binary: usage problems exit 2,
    /// everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::invalid_input("missing").exit_code(), 2);
        assert_eq!(AppError::Busy.exit_code(), 1);
    }
}
