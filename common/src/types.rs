//! Wire format and view-model types
//!
//! Request bodies sent to the LegalEase backend, the raw response shapes it
//! returns, and the view-model values built from successful responses.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Characters of extracted text shown before the preview is cut
pub const EXTRACT_PREVIEW_CHARS: usize = 2000;

const TRUNCATION_MARKER: &str = "\n\n[truncated…]";

/// Field values in submission order, serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details(pub Vec<(String, String)>);

impl Details {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// `POST /generate` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub document_type: String,
    pub details: Details,
}

/// `POST /generate` response, success or failure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateResponse {
    pub success: bool,
    pub document_type: Option<String>,
    pub document_title: Option<String>,
    pub document_text: Option<String>,
    pub error: Option<String>,
}

impl GenerateResponse {
    /// The generated document, when the response is a complete success
    pub fn into_document(self) -> Option<GeneratedDocument> {
        if !self.success {
            return None;
        }
        Some(GeneratedDocument {
            document_type: self.document_type?,
            document_title: self.document_title?,
            document_text: self.document_text?,
        })
    }
}

/// Result of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub document_type: String,
    pub document_title: String,
    pub document_text: String,
}

impl GeneratedDocument {
    /// Download name used when the server does not send one
    pub fn fallback_filename(&self) -> String {
        format!("LegalEase_{}.docx", self.document_title.replace(' ', "_"))
    }

    pub fn download_request(&self) -> DownloadRequest {
        DownloadRequest {
            document_type: self.document_type.clone(),
            document_text: self.document_text.clone(),
        }
    }
}

/// `POST /download-doc` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub document_type: String,
    pub document_text: String,
}

/// `POST /upload` response, success or failure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: Option<String>,
    pub extracted_text: Option<String>,
    pub analysis: Option<String>,
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn into_result(self) -> Option<UploadResult> {
        if !self.success {
            return None;
        }
        Some(UploadResult {
            filename: self.filename?,
            extracted_text: self.extracted_text?,
            analysis: self.analysis,
        })
    }
}

/// Extraction (and optional analysis) of an uploaded document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    pub extracted_text: String,
    /// Absent when the backend extracted text but analysis failed
    pub analysis: Option<String>,
}

impl UploadResult {
    /// Analysis text, or `None` when there is nothing to show
    pub fn analysis_panel(&self) -> Option<&str> {
        self.analysis.as_deref().filter(|a| !a.is_empty())
    }

    /// Extracted text cut to the preview length
    pub fn extracted_preview(&self) -> String {
        match self.extracted_text.char_indices().nth(EXTRACT_PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}{}", &self.extracted_text[..cut], TRUNCATION_MARKER),
            None => self.extracted_text.clone(),
        }
    }
}

/// One entry of `GET /document-types`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteDocumentType {
    pub title: String,
    pub fields: Vec<String>,
}

/// `GET /document-types` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentTypesResponse {
    pub success: bool,
    pub document_types: BTreeMap<String, RemoteDocumentType>,
    pub error: Option<String>,
}
