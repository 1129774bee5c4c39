//! ML service HTTP client.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use uassist_models::{CredibilityReport, NewsArticle, WoundReport};

use crate::error::{MlError, MlResult};
use crate::types::{
    DetectResponse, ErrorBody, HealthResponse, ImageUpload, OcrResponse, PredictRequest,
    PredictResponse,
};

/// Configuration for ML client.
#[derive(Debug, Clone)]
pub struct MlClientConfig {
    /// Base URL of ML service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Max retries
    pub max_retries: u32,
}

impl Default for MlClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

impl MlClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ML_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("ML_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_retries: std::env::var("ML_SERVICE_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}

/// Client for the Python ML inference service.
pub struct MlClient {
    http: Client,
    config: MlClientConfig,
}

impl MlClient {
    /// Create a new ML client.
    pub fn new(config: MlClientConfig) -> MlResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MlError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> MlResult<Self> {
        Self::new(MlClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Check if ML service is healthy.
    pub async fn health_check(&self) -> MlResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("ML service health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("ML service health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Check a news article's credibility against the prediction models.
    pub async fn verify_news(&self, article: &NewsArticle) -> MlResult<CredibilityReport> {
        let request = PredictRequest::from(article);
        let response: PredictResponse = self.post_json("/predict", &request).await?;

        if response.status != "success" {
            return Err(MlError::InvalidResponse(format!(
                "prediction status was '{}'",
                response.status
            )));
        }

        Ok(CredibilityReport::new(response.predictions))
    }

    /// Extract text from a captured image via OCR.
    pub async fn extract_text(&self, image: &ImageUpload) -> MlResult<String> {
        let response: OcrResponse = self.post_image("/ocr", image).await?;
        Ok(response.extracted_text)
    }

    /// Detect objects in a captured image.
    ///
    /// Returns the raw label sequence; duplicates mean multiple instances.
    pub async fn detect_objects(&self, image: &ImageUpload) -> MlResult<Vec<String>> {
        let response: DetectResponse = self.post_image("/process_image", image).await?;
        Ok(response.yolo_labels)
    }

    /// Classify wounds in a captured image.
    pub async fn classify_wounds(&self, image: &ImageUpload) -> MlResult<WoundReport> {
        self.post_image("/wound", image).await
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> MlResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("Sending JSON request to {}", url);

        let response = self
            .with_retry(|| async { self.send_checked(self.http.post(&url).json(body)).await })
            .await?;

        Self::read_json(response).await
    }

    /// POST a captured image as multipart form data and decode the JSON
    /// response. The form is rebuilt on every retry attempt.
    async fn post_image<T>(&self, path: &str, image: &ImageUpload) -> MlResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("Uploading {} bytes to {}", image.len(), url);

        let response = self
            .with_retry(|| async {
                let part = Part::bytes(image.bytes.clone())
                    .file_name(image.file_name.clone())
                    .mime_str(&image.mime)
                    .map_err(MlError::Network)?;
                let form = Form::new().part("image", part);
                self.send_checked(self.http.post(&url).multipart(form)).await
            })
            .await?;

        Self::read_json(response).await
    }

    /// Send a request, mapping transport failures and 503s to retryable
    /// errors.
    async fn send_checked(&self, request: reqwest::RequestBuilder) -> MlResult<Response> {
        let response = request.send().await.map_err(MlError::Network)?;

        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Err(MlError::ServiceUnavailable(format!(
                "ML service returned {}",
                response.status()
            )));
        }

        Ok(response)
    }

    /// Decode a JSON response, surfacing the service's `{"error": ...}`
    /// body on non-2xx statuses.
    async fn read_json<T: DeserializeOwned>(response: Response) -> MlResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(error) = serde_json::from_str::<ErrorBody>(&body) {
                return Err(MlError::Rejected {
                    status: status.as_u16(),
                    message: error.error,
                });
            }
            return Err(MlError::RequestFailed(format!(
                "ML service returned {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> MlResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = MlResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "ML request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(MlError::RequestFailed("Unknown error".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MlClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
    }
}
