//! LegalEase Common Library
//!
//! Types and pure logic shared by every LegalEase front-end:
//! the document-type catalog, upload validation and the wire format.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validator;

pub use catalog::{
    describe, document_types, field_placeholder, format_field_label, require, DocumentTypeDescriptor,
};
pub use error::{Error, Result};
pub use types::{
    Details, DocumentTypesResponse, DownloadRequest, GenerateRequest, GenerateResponse,
    GeneratedDocument, RemoteDocumentType, UploadResponse, UploadResult,
};
pub use validator::{validate, FileInfo, ValidationError, MAX_FILE_SIZE};
