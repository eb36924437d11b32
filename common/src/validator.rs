//! Upload file validation
//!
//! Checks a candidate against the accepted extensions / media types and the
//! size ceiling. Looks only at metadata, never at file contents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upload size ceiling (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".doc", ".txt"];

pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/plain",
];

/// Metadata of a file offered for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    /// Declared media type, empty when unknown
    #[serde(default)]
    pub media_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }

    /// Size as shown next to the selected file, e.g. `2048.0 KB`
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File type not supported. Allowed: .pdf, .docx, .doc, .txt")]
    UnsupportedType,

    #[error("File exceeds the 10 MB size limit.")]
    TooLarge,
}

/// Lower-cased extension including the dot
///
/// `None` when the name has no `.` or nothing follows the last one.
pub fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// Validate a file before it may become the upload candidate
///
/// Extension and declared media type are independent signals; either one
/// matching is enough. The size ceiling applies regardless.
pub fn validate(file: &FileInfo) -> Result<(), ValidationError> {
    let ext_ok = extension(&file.name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    let type_ok = ALLOWED_MEDIA_TYPES.contains(&file.media_type.as_str());

    if !ext_ok && !type_ok {
        return Err(ValidationError::UnsupportedType);
    }
    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}
