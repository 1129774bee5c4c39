//! Client for the Python ML inference service.
//!
//! The service is a single Flask-style HTTP server exposing one endpoint
//! per assistant feature: news credibility prediction, OCR text
//! extraction, object detection, and wound classification. This crate
//! owns the wire formats and the request/retry plumbing; everything the
//! caller sees is a typed domain model from `uassist-models`.

pub mod client;
pub mod error;
pub mod types;

pub use client::{MlClient, MlClientConfig};
pub use error::{MlError, MlResult};
pub use types::ImageUpload;
