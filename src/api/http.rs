use super::{Backend, HttpReply};
use crate::app::UploadCandidate;
use crate::config::Config;
use crate::error::{LegalEaseError, Result};
use async_trait::async_trait;
use legalease_common::{DownloadRequest, GenerateRequest};
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// reqwest-backed client for the LegalEase API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    async fn read_reply(response: reqwest::Response) -> Result<HttpReply> {
        let status = response.status().as_u16();
        let content_disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();
        log::debug!("reply {} ({} bytes)", status, body.len());
        Ok(HttpReply {
            status,
            content_disposition,
            body,
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<HttpReply> {
        let response = self
            .client
            .post(self.url("generate"))
            .json(request)
            .send()
            .await?;
        Self::read_reply(response).await
    }

    async fn download(&self, request: &DownloadRequest) -> Result<HttpReply> {
        let response = self
            .client
            .post(self.url("download-doc"))
            .json(request)
            .send()
            .await?;
        Self::read_reply(response).await
    }

    async fn upload(&self, candidate: &UploadCandidate) -> Result<HttpReply> {
        let data = tokio::fs::read(&candidate.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LegalEaseError::FileNotFound(candidate.path.display().to_string())
            } else {
                LegalEaseError::Io(e)
            }
        })?;

        let part = Part::bytes(data)
            .file_name(candidate.info.name.clone())
            .mime_str(&candidate.media_type_or_guess())?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await?;
        Self::read_reply(response).await
    }

    async fn document_types(&self) -> Result<HttpReply> {
        let response = self.client.get(self.url("document-types")).send().await?;
        Self::read_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let backend = HttpBackend::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.url("generate"), "http://localhost:5000/generate");
        assert_eq!(backend.url("/upload"), "http://localhost:5000/upload");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let backend = HttpBackend::new("https://example.com/api", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.url("download-doc"), "https://example.com/api/download-doc");
    }
}
