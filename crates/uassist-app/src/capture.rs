//! Photo capture collaborator.
//!
//! Every photo screen runs the same acquire flow: probe access, produce
//! an upload-ready capture, submit. This module owns the first two steps
//! so the screens stay thin.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use uassist_ml_client::ImageUpload;

use crate::error::{AppError, AppResult};

/// Source of captured photos.
#[async_trait]
pub trait CaptureSource: Send + Sync {
    /// Probe whether captures can be produced at all.
    async fn request_permission(&self) -> AppResult<()>;

    /// Produce the captured photo.
    async fn capture(&self) -> AppResult<ImageUpload>;
}

/// Capture backed by a photo already on disk.
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Content type from the file extension; the service only ever saw
    /// JPEG from the mobile capture path, so that stays the fallback.
    fn mime_for(path: &Path) -> &'static str {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            _ => "image/jpeg",
        }
    }
}

#[async_trait]
impl CaptureSource for FileCapture {
    async fn request_permission(&self) -> AppResult<()> {
        let metadata = tokio::fs::metadata(&self.path).await.map_err(|_| {
            AppError::invalid_input(format!("Cannot access photo: {}", self.path.display()))
        })?;

        if !metadata.is_file() {
            return Err(AppError::invalid_input(format!(
                "Not a photo file: {}",
                self.path.display()
            )));
        }

        Ok(())
    }

    async fn capture(&self) -> AppResult<ImageUpload> {
        let bytes = tokio::fs::read(&self.path).await?;
        if bytes.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Photo is empty: {}",
                self.path.display()
            )));
        }

        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("photo.jpg")
            .to_string();

        Ok(ImageUpload::new(bytes, file_name, Self::mime_for(&self.path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_capture_reads_photo() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"not really a png").unwrap();

        let capture = FileCapture::new(file.path());
        capture.request_permission().await.unwrap();

        let upload = capture.capture().await.unwrap();
        assert_eq!(upload.bytes, b"not really a png");
        assert_eq!(upload.mime, "image/png");
        assert!(upload.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_missing_photo_is_rejected_at_permission_check() {
        let capture = FileCapture::new("/nonexistent/photo.jpg");
        let err = capture.request_permission().await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_empty_photo_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let capture = FileCapture::new(file.path());
        let err = capture.capture().await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_extension_falls_back_to_jpeg() {
        assert_eq!(FileCapture::mime_for(Path::new("photo.heic")), "image/jpeg");
        assert_eq!(FileCapture::mime_for(Path::new("photo")), "image/jpeg");
        assert_eq!(FileCapture::mime_for(Path::new("photo.PNG")), "image/png");
    }
}
