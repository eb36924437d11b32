//! Generate, download and upload
//!
//! Each request is split in two so a front-end never has to hold the
//! controller across an await: `begin_*` checks the control is reachable,
//! marks the operation in flight and hands out a ticket; `complete_*`
//! applies the reply if that ticket is still the current one. The async
//! methods run both halves against a [`Backend`].

use super::form::missing_fields_message;
use super::responses::{interpret_download, interpret_generate, interpret_upload};
use super::status::{OpStatus, Operation, Ticket};
use super::view::{ResultScreen, View};
use super::{App, UploadCandidate};
use crate::api::{Backend, HttpReply};
use crate::error::{LegalEaseError, Result};
use crate::save::{save_document, SaveSink};
use legalease_common::{DownloadRequest, GenerateRequest};

pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "Document downloaded successfully!";

#[derive(Debug, Clone)]
pub struct GenerateTicket {
    pub id: Ticket,
    pub request: GenerateRequest,
}

#[derive(Debug, Clone)]
pub struct DownloadTicket {
    pub id: Ticket,
    pub request: DownloadRequest,
    pub fallback_filename: String,
}

#[derive(Debug, Clone)]
pub struct UploadTicket {
    pub id: Ticket,
    pub candidate: UploadCandidate,
}

impl App {
    // ---- generate ----

    /// `Ok(None)` when required fields are empty; the form's error slot
    /// names them and nothing is sent
    pub fn begin_generate(&mut self) -> Result<Option<GenerateTicket>> {
        let id = self.issue_ticket();
        let View::Generate(screen) = &mut self.view else {
            return Err(LegalEaseError::InvalidAction("generate is on the generate view"));
        };
        if screen.status.is_in_flight() {
            return Err(LegalEaseError::OperationInFlight("Generate"));
        }

        let missing = screen.form.missing_fields();
        if !missing.is_empty() {
            screen.status = OpStatus::Failed(missing_fields_message(&missing));
            return Ok(None);
        }

        let request = GenerateRequest {
            document_type: screen.form.descriptor().id.to_string(),
            details: screen.form.details(),
        };
        log::debug!("generate {} (ticket {})", request.document_type, id);
        screen.status = OpStatus::InFlight(id);
        Ok(Some(GenerateTicket { id, request }))
    }

    /// Returns `false` when the ticket is stale and the reply was dropped
    pub fn complete_generate(&mut self, ticket: GenerateTicket, outcome: Result<HttpReply>) -> bool {
        let current = matches!(&self.view, View::Generate(s) if s.status.is_current(ticket.id));
        if !current {
            log::warn!("discarding stale generate reply (ticket {})", ticket.id);
            return false;
        }

        match interpret_generate(outcome) {
            Ok(document) => {
                log::info!("generated {}", document.document_title);
                if let View::Generate(screen) = std::mem::take(&mut self.view) {
                    self.view = View::Result(ResultScreen::new(screen.form, document));
                }
            }
            Err(message) => {
                if let View::Generate(screen) = &mut self.view {
                    screen.status = OpStatus::Failed(message);
                }
            }
        }
        true
    }

    pub async fn generate<B: Backend + ?Sized>(&mut self, backend: &B) -> Result<()> {
        let Some(ticket) = self.begin_generate()? else {
            return Ok(());
        };
        let outcome = backend.generate(&ticket.request).await;
        self.complete_generate(ticket, outcome);
        Ok(())
    }

    // ---- download ----

    pub fn begin_download(&mut self) -> Result<DownloadTicket> {
        let id = self.issue_ticket();
        let View::Result(screen) = &mut self.view else {
            return Err(LegalEaseError::InvalidAction("download is on the result view"));
        };
        if screen.download.is_in_flight() {
            return Err(LegalEaseError::OperationInFlight("Download"));
        }

        log::debug!("download {} (ticket {})", screen.document.document_type, id);
        screen.download = OpStatus::InFlight(id);
        Ok(DownloadTicket {
            id,
            request: screen.document.download_request(),
            fallback_filename: screen.document.fallback_filename(),
        })
    }

    /// Saves the document even if the user has left the result view; the
    /// status slot is only updated when the ticket is still current
    pub fn complete_download<S: SaveSink + ?Sized>(
        &mut self,
        ticket: DownloadTicket,
        outcome: Result<HttpReply>,
        sink: &mut S,
    ) -> bool {
        let saved = interpret_download(outcome, &ticket.fallback_filename).and_then(
            |(bytes, filename)| {
                save_document(sink, bytes, &filename).map_err(|err| {
                    log::warn!("saving {} failed: {}", filename, err);
                    Operation::Download.failure_message().to_string()
                })
            },
        );

        if let Ok(path) = &saved {
            log::info!("saved {}", path.display());
            self.toast.show(DOWNLOAD_SUCCESS_MESSAGE);
        }

        match &mut self.view {
            View::Result(screen) if screen.download.is_current(ticket.id) => {
                match saved {
                    Ok(path) => {
                        screen.download = OpStatus::Succeeded;
                        screen.saved_to = Some(path);
                    }
                    Err(message) => screen.download = OpStatus::Failed(message),
                }
                true
            }
            _ => {
                log::warn!("download finished after leaving the result view (ticket {})", ticket.id);
                false
            }
        }
    }

    pub async fn download<B, S>(&mut self, backend: &B, sink: &mut S) -> Result<()>
    where
        B: Backend + ?Sized,
        S: SaveSink + ?Sized,
    {
        let ticket = self.begin_download()?;
        let outcome = backend.download(&ticket.request).await;
        self.complete_download(ticket, outcome, sink);
        Ok(())
    }

    // ---- upload ----

    pub fn begin_upload(&mut self) -> Result<UploadTicket> {
        let id = self.issue_ticket();
        let panel = self.upload_view()?;
        if panel.status.is_in_flight() {
            return Err(LegalEaseError::OperationInFlight("Upload"));
        }
        let candidate = panel
            .intake
            .candidate()
            .cloned()
            .ok_or(LegalEaseError::NoCandidate)?;

        log::debug!("upload {} (ticket {})", candidate.info.name, id);
        panel.status = OpStatus::InFlight(id);
        panel.result = None;
        Ok(UploadTicket { id, candidate })
    }

    /// Applies wherever the user is; the upload panel outlives the view
    pub fn complete_upload(&mut self, ticket: UploadTicket, outcome: Result<HttpReply>) -> bool {
        if !self.upload.status.is_current(ticket.id) {
            log::warn!("discarding stale upload reply (ticket {})", ticket.id);
            return false;
        }

        match interpret_upload(outcome) {
            Ok(result) => {
                log::info!("uploaded {}", result.filename);
                self.upload.status = OpStatus::Succeeded;
                self.upload.result = Some(result);
            }
            Err(message) => self.upload.status = OpStatus::Failed(message),
        }
        true
    }

    pub async fn upload_file<B: Backend + ?Sized>(&mut self, backend: &B) -> Result<()> {
        let ticket = self.begin_upload()?;
        let outcome = backend.upload(&ticket.candidate).await;
        self.complete_upload(ticket, outcome);
        Ok(())
    }
}
