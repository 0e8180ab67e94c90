//! Client for the external image hosting collaborator.
//!
//! Binary image data is never persisted locally. Uploads go straight to the
//! hosting service, which returns a durable public URL; only that URL (and
//! the host-side identifier needed to delete the asset later) is kept.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ImageHostConfig;

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Durable public URL, safe to persist and hand to clients.
    pub url: String,
    /// Host-side identifier used for deletion.
    pub public_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("image host request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("image host rejected the request: {0}")]
    Rejected(String),
}

/// Abstraction over the image hosting service.
///
/// Handlers depend on this trait so tests can substitute an in-memory
/// recording store and exercise the upload workflow without a network.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload raw image bytes, returning the public URL and host-side id.
    async fn upload(
        &self,
        folder: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, UploadError>;

    /// Delete a previously uploaded asset by its host-side id.
    async fn delete(&self, public_id: &str) -> Result<(), UploadError>;
}

/// HTTP implementation talking to the configured hosting API.
pub struct HttpImageStore {
    http: reqwest::Client,
    config: ImageHostConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

impl HttpImageStore {
    pub fn new(config: ImageHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn upload(
        &self,
        folder: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, UploadError> {
        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string()),
            )
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", folder.to_string());

        let resp = self
            .http
            .post(format!("{}/upload", self.config.base_url))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(UploadError::Rejected(format!("{status}: {body}")));
        }

        let parsed: UploadResponse = resp.json().await?;
        Ok(StoredImage {
            url: parsed.secure_url,
            public_id: parsed.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), UploadError> {
        let resp = self
            .http
            .post(format!("{}/destroy", self.config.base_url))
            .json(&serde_json::json!({ "public_id": public_id }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(UploadError::Rejected(resp.status().to_string()));
        }
        Ok(())
    }
}
