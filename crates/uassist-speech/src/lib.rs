//! Text-to-speech collaborator.
//!
//! Speaks narration text through an external speech engine (espeak-ng,
//! espeak, macOS `say`, or flite), spawned per utterance. Consumers hand
//! over opaque plain text; there is no markup and no parsing here.

pub mod config;
pub mod error;
pub mod speaker;

pub use config::SpeechConfig;
pub use error::{SpeechError, SpeechResult};
pub use speaker::{EngineSpeaker, NullSink, SpeechSink};
