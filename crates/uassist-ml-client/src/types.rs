//! ML service request/response types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uassist_models::NewsArticle;

/// A captured photo ready for upload.
///
/// The capture collaborator fills this in; the client only turns it into
/// a multipart part. Defaults mirror the mobile capture path: JPEG named
/// "photo.jpg".
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
}

impl ImageUpload {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            mime: mime.into(),
        }
    }

    /// A JPEG capture with the default upload name.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "photo.jpg", "image/jpeg")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Request body for `/predict`.
///
/// The service calls the article source "brand".
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub content: String,
    pub brand: String,
}

impl From<&NewsArticle> for PredictRequest {
    fn from(article: &NewsArticle) -> Self {
        Self {
            content: article.content.clone(),
            brand: article.source.clone(),
        }
    }
}

/// Response body for `/predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: BTreeMap<String, String>,
}

/// Response body for `/ocr`.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrResponse {
    #[serde(default)]
    pub extracted_text: String,
}

/// Response body for `/process_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub yolo_labels: Vec<String>,
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
