//! Utility Assistant terminal front-end.
//!
//! This crate provides:
//! - The CLI surface (one subcommand per feature screen)
//! - Screen flows: validate, submit, transform, render/speak
//! - The capture-and-submit collaborator shared by the photo screens
//! - Screen-local session state with an in-flight guard

pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod screens;
pub mod session;

pub use capture::{CaptureSource, FileCapture};
pub use cli::{AppArgs, AppCommand};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use logging::SubmitLogger;
pub use session::ScreenSession;
