//! Screens of the application
//!
//! Each screen owns the state only it displays, so leaving a screen drops
//! its error slot along with it.

use super::form::FormValues;
use super::status::OpStatus;
use chrono::{DateTime, Local};
use legalease_common::GeneratedDocument;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Generate,
    Result,
    Upload,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Generate => "generate",
            ViewKind::Result => "result",
            ViewKind::Upload => "upload",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum View {
    #[default]
    Home,
    Generate(GenerateScreen),
    Result(ResultScreen),
    Upload,
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Home => ViewKind::Home,
            View::Generate(_) => ViewKind::Generate,
            View::Result(_) => ViewKind::Result,
            View::Upload => ViewKind::Upload,
        }
    }
}

/// Form entry for one document type
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateScreen {
    pub(crate) form: FormValues,
    pub(crate) status: OpStatus,
}

impl GenerateScreen {
    pub(crate) fn new(form: FormValues) -> Self {
        Self {
            form,
            status: OpStatus::Idle,
        }
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn status(&self) -> &OpStatus {
        &self.status
    }
}

/// A generated document, plus the form it came from for the way back
#[derive(Debug, Clone, PartialEq)]
pub struct ResultScreen {
    pub(crate) form: FormValues,
    pub(crate) document: GeneratedDocument,
    pub(crate) generated_at: DateTime<Local>,
    pub(crate) download: OpStatus,
    pub(crate) saved_to: Option<PathBuf>,
}

impl ResultScreen {
    pub(crate) fn new(form: FormValues, document: GeneratedDocument) -> Self {
        Self {
            form,
            document,
            generated_at: Local::now(),
            download: OpStatus::Idle,
            saved_to: None,
        }
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn document(&self) -> &GeneratedDocument {
        &self.document
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    pub fn download(&self) -> &OpStatus {
        &self.download
    }

    /// Where the last successful download of this document went
    pub fn saved_to(&self) -> Option<&Path> {
        self.saved_to.as_deref()
    }
}
