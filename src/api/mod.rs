//! LegalEase backend access
//!
//! One method per endpoint. Implementations only move bytes; reading the
//! reply (status, `success` flag, error message) is the controller's job.

mod http;

pub use http::HttpBackend;

use crate::app::UploadCandidate;
use crate::error::Result;
use async_trait::async_trait;
use legalease_common::{DocumentTypesResponse, DownloadRequest, GenerateRequest};

/// Raw reply of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_disposition: None,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn with_content_disposition(mut self, value: impl Into<String>) -> Self {
        self.content_disposition = Some(value.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `Err` means the request never produced a reply (connection refused,
/// timeout, unreadable body)
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /generate`
    async fn generate(&self, request: &GenerateRequest) -> Result<HttpReply>;

    /// `POST /download-doc`
    async fn download(&self, request: &DownloadRequest) -> Result<HttpReply>;

    /// `POST /upload`, multipart with one `file` part
    async fn upload(&self, candidate: &UploadCandidate) -> Result<HttpReply>;

    /// `GET /document-types`
    async fn document_types(&self) -> Result<HttpReply>;
}

/// Decode the backend's catalog listing
pub fn parse_document_types(reply: &HttpReply) -> Result<DocumentTypesResponse> {
    let response: DocumentTypesResponse = serde_json::from_slice(&reply.body)?;
    Ok(response)
}
