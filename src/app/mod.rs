//! Application controller
//!
//! Holds the active view, the upload panel and the toast, and applies every
//! user event to them. Front-ends render from the accessors and call the
//! event methods; the requests live in `requests.rs`.

mod form;
mod intake;
mod requests;
mod responses;
mod status;
mod toast;
mod upload;
mod view;

pub use form::{missing_fields_message, FormValues};
pub use intake::{IntakeOutcome, IntakeState, UploadCandidate, UploadIntake};
pub use requests::{DownloadTicket, GenerateTicket, UploadTicket, DOWNLOAD_SUCCESS_MESSAGE};
pub use responses::{interpret_download, interpret_generate, interpret_upload};
pub use status::{OpStatus, Operation, Ticket};
pub use toast::{Toast, TOAST_DURATION};
pub use upload::UploadPanel;
pub use view::{GenerateScreen, ResultScreen, View, ViewKind};

use crate::error::{LegalEaseError, Result};
use legalease_common::{describe, GeneratedDocument};

#[derive(Debug, Default)]
pub struct App {
    view: View,
    upload: UploadPanel,
    toast: Toast,
    next_ticket: Ticket,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    /// Form of the generate view, or the one behind the result view
    pub fn form(&self) -> Option<&FormValues> {
        match &self.view {
            View::Generate(screen) => Some(&screen.form),
            View::Result(screen) => Some(&screen.form),
            _ => None,
        }
    }

    pub fn document(&self) -> Option<&GeneratedDocument> {
        match &self.view {
            View::Result(screen) => Some(&screen.document),
            _ => None,
        }
    }

    /// Error banner of the active view
    pub fn error(&self) -> Option<String> {
        match &self.view {
            View::Home => None,
            View::Generate(screen) => screen.status.error().map(str::to_string),
            View::Result(screen) => screen.download.error().map(str::to_string),
            View::Upload => self.upload.error(),
        }
    }

    pub fn upload(&self) -> &UploadPanel {
        &self.upload
    }

    pub fn toast(&self) -> Option<String> {
        self.toast.message()
    }

    // ---- navigation ----

    /// Pick a document type on the home view
    pub fn select_document_type(&mut self, id: &str) -> Result<()> {
        if self.kind() != ViewKind::Home {
            return Err(LegalEaseError::InvalidAction(
                "document types are chosen on the home view",
            ));
        }
        let descriptor =
            describe(id).ok_or_else(|| LegalEaseError::UnknownDocumentType(id.to_string()))?;
        log::debug!("selected {}", descriptor.id);
        self.view = View::Generate(GenerateScreen::new(FormValues::new(descriptor)));
        Ok(())
    }

    /// The in-view back link
    pub fn back(&mut self) {
        self.view = match std::mem::take(&mut self.view) {
            View::Result(screen) => View::Generate(GenerateScreen::new(screen.form)),
            View::Home | View::Generate(_) | View::Upload => View::Home,
        };
    }

    /// Header logo: home from anywhere, banners cleared
    pub fn go_home(&mut self) {
        self.toast.clear();
        self.view = View::Home;
    }

    /// Header upload button: upload view from anywhere, banners cleared
    pub fn go_upload(&mut self) {
        self.toast.clear();
        self.view = View::Upload;
    }

    /// The upload link on the home view; toast left alone
    pub fn open_upload(&mut self) -> Result<()> {
        if self.kind() != ViewKind::Home {
            return Err(LegalEaseError::InvalidAction("upload link is on the home view"));
        }
        self.view = View::Upload;
        Ok(())
    }

    // ---- form ----

    /// Returns `false` when the field is not part of the active form
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<bool> {
        match &mut self.view {
            View::Generate(screen) => Ok(screen.form.set(field, value)),
            _ => Err(LegalEaseError::InvalidAction("fields are edited on the generate view")),
        }
    }

    // ---- upload intake ----

    fn upload_view(&mut self) -> Result<&mut UploadPanel> {
        if self.kind() != ViewKind::Upload {
            return Err(LegalEaseError::InvalidAction("files are chosen on the upload view"));
        }
        Ok(&mut self.upload)
    }

    pub fn drag_enter(&mut self) -> Result<()> {
        self.upload_view()?.intake.drag_enter();
        Ok(())
    }

    pub fn drag_leave(&mut self) -> Result<()> {
        self.upload_view()?.intake.drag_leave();
        Ok(())
    }

    pub fn drop_file(&mut self, file: Option<UploadCandidate>) -> Result<IntakeOutcome> {
        let panel = self.upload_view()?;
        let outcome = panel.intake.drop_file(file);
        Self::after_intake(panel, outcome);
        Ok(outcome)
    }

    pub fn select_file(&mut self, file: UploadCandidate) -> Result<IntakeOutcome> {
        let panel = self.upload_view()?;
        let outcome = panel.intake.select(file);
        Self::after_intake(panel, outcome);
        Ok(outcome)
    }

    /// "Remove file": candidate, error and previous result all go
    pub fn remove_file(&mut self) -> Result<()> {
        let panel = self.upload_view()?;
        panel.intake.reset();
        panel.status = OpStatus::Idle;
        panel.result = None;
        Ok(())
    }

    fn after_intake(panel: &mut UploadPanel, outcome: IntakeOutcome) {
        match outcome {
            IntakeOutcome::Accepted => {
                panel.status = OpStatus::Idle;
                panel.result = None;
            }
            IntakeOutcome::Rejected(_) => panel.status = OpStatus::Idle,
            IntakeOutcome::NoFile => {}
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        self.next_ticket
    }
}
