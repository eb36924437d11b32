//! Upload intake: drag state, file selection and validation
//!
//! At most one candidate is held. A new file always replaces the old one;
//! a rejected file leaves no candidate behind.

use crate::error::{LegalEaseError, Result};
use legalease_common::{validate, FileInfo, ValidationError};
use std::path::{Path, PathBuf};

/// A validated file waiting to be uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub info: FileInfo,
    pub path: PathBuf,
}

impl UploadCandidate {
    pub fn new(info: FileInfo, path: impl Into<PathBuf>) -> Self {
        Self {
            info,
            path: path.into(),
        }
    }

    /// Build from a file on disk; the declared type is guessed from the name
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| LegalEaseError::FileNotFound(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(LegalEaseError::FileNotFound(path.display().to_string()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let media_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        Ok(Self::new(FileInfo::new(name, metadata.len(), media_type), path))
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.info.size
    }

    pub(crate) fn media_type_or_guess(&self) -> String {
        if !self.info.media_type.is_empty() {
            return self.info.media_type.clone();
        }
        mime_guess::from_path(&self.info.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    Empty,
    Dragging,
    CandidateSelected,
    Error,
}

/// What a drop or selection did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted,
    Rejected(ValidationError),
    /// Drop carried no file
    NoFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadIntake {
    dragging: bool,
    candidate: Option<UploadCandidate>,
    rejection: Option<ValidationError>,
}

impl UploadIntake {
    pub fn state(&self) -> IntakeState {
        if self.dragging {
            IntakeState::Dragging
        } else if self.candidate.is_some() {
            IntakeState::CandidateSelected
        } else if self.rejection.is_some() {
            IntakeState::Error
        } else {
            IntakeState::Empty
        }
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    pub fn rejection(&self) -> Option<ValidationError> {
        self.rejection
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// A drop ends the drag whether or not it carried a file
    pub fn drop_file(&mut self, file: Option<UploadCandidate>) -> IntakeOutcome {
        self.dragging = false;
        match file {
            Some(file) => self.take(file),
            None => IntakeOutcome::NoFile,
        }
    }

    /// File chosen through the picker
    pub fn select(&mut self, file: UploadCandidate) -> IntakeOutcome {
        self.take(file)
    }

    pub fn reset(&mut self) {
        self.dragging = false;
        self.candidate = None;
        self.rejection = None;
    }

    fn take(&mut self, file: UploadCandidate) -> IntakeOutcome {
        match validate(&file.info) {
            Ok(()) => {
                log::debug!("accepted {} ({} bytes)", file.info.name, file.info.size);
                self.rejection = None;
                self.candidate = Some(file);
                IntakeOutcome::Accepted
            }
            Err(err) => {
                log::debug!("rejected {}: {}", file.info.name, err);
                self.rejection = Some(err);
                self.candidate = None;
                IntakeOutcome::Rejected(err)
            }
        }
    }
}
