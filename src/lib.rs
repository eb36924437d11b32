//! LegalEase client
//!
//! Controller for the LegalEase document generator: catalog browsing, form
//! entry, generation, Word download and document upload for analysis.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod save;
pub mod shell;

pub use api::{Backend, HttpBackend, HttpReply};
pub use app::App;
pub use error::{LegalEaseError, Result};
