//! Shared test doubles
#![allow(dead_code)]

use async_trait::async_trait;
use legalease::app::{App, UploadCandidate};
use legalease::error::{LegalEaseError, Result};
use legalease::save::SaveSink;
use legalease::{Backend, HttpReply};
use legalease_common::{DownloadRequest, FileInfo, GenerateRequest};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Backend returning scripted replies and recording what it was sent
#[derive(Default)]
pub struct FakeBackend {
    replies: Mutex<VecDeque<Result<HttpReply>>>,
    pub generated: Mutex<Vec<GenerateRequest>>,
    pub downloaded: Mutex<Vec<DownloadRequest>>,
    pub uploaded: Mutex<Vec<UploadCandidate>>,
}

impl FakeBackend {
    pub fn replying(reply: HttpReply) -> Self {
        let backend = Self::default();
        backend.push(Ok(reply));
        backend
    }

    pub fn failing() -> Self {
        let backend = Self::default();
        backend.push(Err(network_error()));
        backend
    }

    pub fn push(&self, reply: Result<HttpReply>) {
        self.replies.lock().push_back(reply);
    }

    fn next(&self) -> Result<HttpReply> {
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpReply::new(500, "")))
    }

    pub fn request_count(&self) -> usize {
        self.generated.lock().len() + self.downloaded.lock().len() + self.uploaded.lock().len()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<HttpReply> {
        self.generated.lock().push(request.clone());
        self.next()
    }

    async fn download(&self, request: &DownloadRequest) -> Result<HttpReply> {
        self.downloaded.lock().push(request.clone());
        self.next()
    }

    async fn upload(&self, candidate: &UploadCandidate) -> Result<HttpReply> {
        self.uploaded.lock().push(candidate.clone());
        self.next()
    }

    async fn document_types(&self) -> Result<HttpReply> {
        self.next()
    }
}

pub fn network_error() -> LegalEaseError {
    LegalEaseError::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "connection reset",
    ))
}

/// Sink that keeps everything in memory and counts releases
#[derive(Default)]
pub struct RecordingSink {
    next_handle: u32,
    pub staged: Vec<u32>,
    pub presented: Vec<(String, Vec<u8>)>,
    pub released: Vec<u32>,
    pub fail_present: bool,
    bytes: Vec<(u32, Vec<u8>)>,
}

impl RecordingSink {
    /// Sink whose `present` always fails
    pub fn failing_present() -> Self {
        Self {
            fail_present: true,
            ..Default::default()
        }
    }
}

impl SaveSink for RecordingSink {
    type Handle = u32;

    fn stage(&mut self, bytes: Vec<u8>) -> Result<u32> {
        self.next_handle += 1;
        self.staged.push(self.next_handle);
        self.bytes.push((self.next_handle, bytes));
        Ok(self.next_handle)
    }

    fn present(&mut self, handle: &u32, filename: &str) -> Result<PathBuf> {
        if self.fail_present {
            return Err(LegalEaseError::Save("disk full".into()));
        }
        let bytes = self
            .bytes
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, b)| b.clone())
            .unwrap_or_default();
        self.presented.push((filename.to_string(), bytes));
        Ok(PathBuf::from("/downloads").join(filename))
    }

    fn release(&mut self, handle: u32) {
        self.bytes.retain(|(h, _)| *h != handle);
        self.released.push(handle);
    }
}

pub fn candidate(name: &str, size: u64, media_type: &str) -> UploadCandidate {
    UploadCandidate::new(FileInfo::new(name, size, media_type), format!("/tmp/{}", name))
}

pub fn nda_success() -> Value {
    json!({
        "success": true,
        "document_type": "nda",
        "document_title": "Non-Disclosure Agreement",
        "document_text": "MUTUAL NON-DISCLOSURE AGREEMENT\n\n1. Definitions ...",
        "generated_at": "2025-06-01T09:30:00.123456",
        "message": "Document generated successfully"
    })
}

/// App on the nda form with every field filled
pub fn filled_nda() -> App {
    let mut app = App::new();
    app.select_document_type("nda").unwrap();
    for (field, value) in [
        ("disclosing_party", "Acme Corp"),
        ("receiving_party", "Beta LLC"),
        ("effective_date", "2025-06-01"),
        ("jurisdiction", "Delaware"),
        ("term_years", "3"),
    ] {
        assert!(app.set_field(field, value).unwrap());
    }
    app
}

/// App on the result view for the nda document
pub async fn nda_result() -> App {
    let mut app = filled_nda();
    let backend = FakeBackend::replying(HttpReply::json(200, &nda_success()));
    app.generate(&backend).await.unwrap();
    app
}
