//! Terminal front-end
//!
//! Renders the controller's active view and offers the controls that view
//! has. The one-shot commands (`types`, `generate`, `upload`) drive the same
//! controller without the loop.

use crate::api::{parse_document_types, Backend};
use crate::app::{App, FormValues, IntakeOutcome, ResultScreen, UploadCandidate, View, ViewKind};
use crate::error::{LegalEaseError, Result};
use crate::save::DirectorySink;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use legalease_common::{
    document_types, field_placeholder, format_field_label, DocumentTypesResponse, UploadResult,
};
use std::future::Future;
use std::path::Path;
use std::time::Duration;

const DISCLAIMER: &str = "Documents are for informational purposes only. \
Please consult a qualified legal professional before use.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SelectType(&'static str),
    OpenUpload,
    FillFields,
    Generate,
    Download,
    ChooseFile,
    UploadFile,
    RemoveFile,
    Back,
    Home,
    HeaderUpload,
    Quit,
}

/// Interactive session over one controller
pub struct Shell<'a> {
    app: App,
    backend: &'a dyn Backend,
    sink: DirectorySink,
}

impl<'a> Shell<'a> {
    pub fn new(backend: &'a dyn Backend, sink: DirectorySink) -> Self {
        Self {
            app: App::new(),
            backend,
            sink,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("⚖️  LegalEase - AI legal documents\n");
        println!("{}\n", DISCLAIMER);

        loop {
            if let Some(toast) = self.app.toast() {
                println!("✔ {}", toast);
            }
            if let Some(error) = self.app.error() {
                println!("✗ {}", error);
            }

            let action = match self.app.kind() {
                ViewKind::Home => {
                    println!("\nWhat document do you need?\n");
                    choose("Choose a document type", &home_actions())?
                }
                ViewKind::Generate => {
                    if let Some(form) = self.app.form() {
                        println!("\n{}", render_form(form));
                    }
                    choose("Generate", &generate_actions())?
                }
                ViewKind::Result => {
                    if let View::Result(screen) = self.app.view() {
                        println!("\n{}", render_document(screen));
                    }
                    choose("Document", &result_actions())?
                }
                ViewKind::Upload => {
                    println!("\n{}", self.render_upload());
                    choose("Upload Document", &self.upload_actions())?
                }
            };

            if action == Action::Quit {
                break;
            }
            if let Err(err) = self.apply(action).await {
                println!("✗ {}", err);
            }
        }
        Ok(())
    }

    async fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::SelectType(id) => self.app.select_document_type(id)?,
            Action::OpenUpload => self.app.open_upload()?,
            Action::FillFields => self.fill_fields()?,
            Action::Generate => {
                with_spinner("Generating document...", self.app.generate(self.backend)).await?
            }
            Action::Download => {
                with_spinner(
                    "Downloading...",
                    self.app.download(self.backend, &mut self.sink),
                )
                .await?;
                if let View::Result(screen) = self.app.view() {
                    if let Some(path) = screen.saved_to() {
                        println!("✔ Saved: {}", path.display());
                    }
                }
            }
            Action::ChooseFile => {
                let path = ask("File path", "")?;
                let path = path.trim();
                if !path.is_empty() {
                    let candidate = UploadCandidate::from_path(Path::new(path))?;
                    self.app.select_file(candidate)?;
                }
            }
            Action::UploadFile => {
                with_spinner("Uploading...", self.app.upload_file(self.backend)).await?
            }
            Action::RemoveFile => self.app.remove_file()?,
            Action::Back => self.app.back(),
            Action::Home => self.app.go_home(),
            Action::HeaderUpload => self.app.go_upload(),
            Action::Quit => {}
        }
        Ok(())
    }

    fn fill_fields(&mut self) -> Result<()> {
        let Some(form) = self.app.form() else {
            return Ok(());
        };
        let entries: Vec<(&'static str, String)> = form
            .descriptor()
            .fields
            .iter()
            .map(|field| (*field, form.get(field).to_string()))
            .collect();

        for (field, current) in entries {
            let value = ask(&field_prompt(field, &current), &current)?;
            self.app.set_field(field, value)?;
        }
        Ok(())
    }

    fn render_upload(&self) -> String {
        let panel = self.app.upload();
        let mut out = String::from("Upload a PDF, DOCX, or TXT file (max 10 MB)\n");
        match panel.intake().candidate() {
            Some(candidate) => out.push_str(&format!(
                "Selected: {} ({})\n",
                candidate.name(),
                candidate.info.size_label()
            )),
            None => out.push_str("No file selected\n"),
        }
        if let Some(result) = panel.result() {
            out.push('\n');
            out.push_str(&render_upload_result(result));
        }
        out
    }

    fn upload_actions(&self) -> Vec<(String, Action)> {
        let panel = self.app.upload();
        let mut actions = vec![("Choose file".to_string(), Action::ChooseFile)];
        if panel.can_upload() {
            actions.push(("Upload & Analyze".to_string(), Action::UploadFile));
        }
        if panel.intake().candidate().is_some() || panel.result().is_some() {
            actions.push(("Remove file".to_string(), Action::RemoveFile));
        }
        actions.extend(header_actions("Back to home"));
        actions
    }
}

fn home_actions() -> Vec<(String, Action)> {
    let mut actions: Vec<(String, Action)> = document_types()
        .iter()
        .map(|t| (format!("{} ({})", t.title, t.fields_caption()), Action::SelectType(t.id)))
        .collect();
    actions.push(("Upload & Analyze Document".to_string(), Action::OpenUpload));
    actions.push(("Quit".to_string(), Action::Quit));
    actions
}

fn generate_actions() -> Vec<(String, Action)> {
    let mut actions = vec![
        ("Fill in fields".to_string(), Action::FillFields),
        ("Generate Document".to_string(), Action::Generate),
    ];
    actions.extend(header_actions("Back"));
    actions
}

fn result_actions() -> Vec<(String, Action)> {
    let mut actions = vec![("Download as Word".to_string(), Action::Download)];
    actions.extend(header_actions("Back to form"));
    actions
}

/// Back link plus the header's logo and upload button
fn header_actions(back_label: &str) -> Vec<(String, Action)> {
    vec![
        (back_label.to_string(), Action::Back),
        ("Home".to_string(), Action::Home),
        ("Upload".to_string(), Action::HeaderUpload),
        ("Quit".to_string(), Action::Quit),
    ]
}

fn field_prompt(field: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{} ({})", format_field_label(field), field_placeholder(field))
    } else {
        format_field_label(field)
    }
}

pub fn render_form(form: &FormValues) -> String {
    let descriptor = form.descriptor();
    let mut out = format!("{}\nFill in the details below\n\n", descriptor.title);
    for field in descriptor.fields {
        let value = form.get(field);
        let shown = if value.is_empty() { "-" } else { value };
        out.push_str(&format!("  {}: {}\n", format_field_label(field), shown));
    }
    out
}

pub fn render_document(screen: &ResultScreen) -> String {
    format!(
        "{}\nGenerated on {}\n\n{}\n",
        screen.document().document_title,
        screen.generated_at().format("%Y-%m-%d %H:%M"),
        screen.document().document_text
    )
}

pub fn render_upload_result(result: &UploadResult) -> String {
    let mut out = format!("File uploaded successfully\nFilename: {}\n", result.filename);
    if let Some(analysis) = result.analysis_panel() {
        out.push_str(&format!("\nAI Analysis\n{}\n", analysis));
    }
    out.push_str(&format!("\nExtracted Text\n{}\n", result.extracted_preview()));
    out
}

/// One line per document type, in catalog order
pub fn render_catalog() -> String {
    document_types()
        .iter()
        .map(|t| format!("{:<22} {} ({})\n", t.id, t.title, t.fields_caption()))
        .collect()
}

/// Where the backend's catalog disagrees with the local one
pub fn catalog_differences(remote: &DocumentTypesResponse) -> Vec<String> {
    let mut differences = Vec::new();
    for local in document_types() {
        match remote.document_types.get(local.id) {
            None => differences.push(format!("{}: missing on the server", local.id)),
            Some(entry) => {
                if entry.title != local.title {
                    differences.push(format!(
                        "{}: title is \"{}\" on the server",
                        local.id, entry.title
                    ));
                }
                if entry.fields.iter().map(String::as_str).ne(local.fields.iter().copied()) {
                    differences.push(format!(
                        "{}: fields are [{}] on the server",
                        local.id,
                        entry.fields.join(", ")
                    ));
                }
            }
        }
    }
    for id in remote.document_types.keys() {
        if !document_types().iter().any(|t| t.id == id.as_str()) {
            differences.push(format!("{}: only on the server", id));
        }
    }
    differences
}

/// `types --remote`
pub async fn compare_remote_catalog(backend: &dyn Backend) -> Result<Vec<String>> {
    let reply = with_spinner("Fetching document types...", backend.document_types()).await?;
    let failed = || format!("document types request failed ({})", reply.status);

    // error bodies of non-2xx replies are optional and may not be JSON
    if !reply.is_success() {
        let message = parse_document_types(&reply)
            .ok()
            .and_then(|response| response.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(failed);
        return Err(LegalEaseError::OperationFailed(message));
    }

    let response = parse_document_types(&reply)?;
    if !response.success {
        return Err(LegalEaseError::OperationFailed(
            response.error.unwrap_or_else(failed),
        ));
    }
    Ok(catalog_differences(&response))
}

/// `generate`: fields not given on the command line are prompted for
pub async fn generate_once(
    backend: &dyn Backend,
    document_type: &str,
    fields: &[(String, String)],
    sink: Option<DirectorySink>,
) -> Result<()> {
    let mut app = App::new();
    app.select_document_type(document_type)?;

    for (field, value) in fields {
        if !app.set_field(field, value.clone())? {
            log::warn!("{} has no field {}", document_type, field);
            println!("⚠ ignored unknown field: {}", field);
        }
    }
    let missing = app.form().map(|f| f.missing_fields()).unwrap_or_default();
    for field in missing {
        let value = ask(&field_prompt(field, ""), "")?;
        app.set_field(field, value)?;
    }

    with_spinner("Generating document...", app.generate(backend)).await?;
    if let Some(error) = app.error() {
        return Err(LegalEaseError::OperationFailed(error));
    }
    if let View::Result(screen) = app.view() {
        println!("{}", render_document(screen));
    }

    if let Some(mut sink) = sink {
        with_spinner("Downloading...", app.download(backend, &mut sink)).await?;
        if let Some(error) = app.error() {
            return Err(LegalEaseError::OperationFailed(error));
        }
        if let View::Result(screen) = app.view() {
            if let Some(path) = screen.saved_to() {
                println!("✔ Saved: {}", path.display());
            }
        }
    }
    Ok(())
}

/// `upload`: validate, send, print what came back
pub async fn upload_once(backend: &dyn Backend, path: &Path) -> Result<()> {
    let mut app = App::new();
    app.open_upload()?;

    let candidate = UploadCandidate::from_path(path)?;
    if let IntakeOutcome::Rejected(err) = app.select_file(candidate)? {
        return Err(err.into());
    }

    with_spinner("Uploading...", app.upload_file(backend)).await?;
    if let Some(error) = app.error() {
        return Err(LegalEaseError::OperationFailed(error));
    }
    if let Some(result) = app.upload().result() {
        println!("{}", render_upload_result(result));
    }
    Ok(())
}

async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let output = future.await;
    spinner.finish_and_clear();
    output
}

fn choose(prompt: &str, actions: &[(String, Action)]) -> Result<Action> {
    let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| LegalEaseError::Prompt(e.to_string()))?;
    Ok(actions[index].1)
}

fn ask(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| LegalEaseError::Prompt(e.to_string()))
}
