//! Error cases
//!
//! Error construction, conversion and display

use legalease::app::UploadCandidate;
use legalease::config::Config;
use legalease::error::LegalEaseError;
use legalease_common::ValidationError;
use std::path::Path;
use tempfile::tempdir;

/// Candidate from a path that does not exist
#[test]
fn test_candidate_from_missing_path() {
    let result = UploadCandidate::from_path(Path::new("/nonexistent/path/12345/lease.pdf"));
    assert!(matches!(result, Err(LegalEaseError::FileNotFound(_))));
}

/// A directory is not an upload candidate
#[test]
fn test_candidate_from_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = UploadCandidate::from_path(dir.path());
    assert!(matches!(result, Err(LegalEaseError::FileNotFound(_))));
}

/// Candidate metadata comes from the file on disk
#[test]
fn test_candidate_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let candidate = UploadCandidate::from_path(&path).unwrap();
    assert_eq!(candidate.name(), "notes.txt");
    assert_eq!(candidate.size_bytes(), 5);
    assert_eq!(candidate.info.media_type, "text/plain");
}

/// Display of every variant is non-empty
#[test]
fn test_error_display() {
    let errors = vec![
        LegalEaseError::Config("bad config".to_string()),
        LegalEaseError::UnknownDocumentType("last_will".to_string()),
        LegalEaseError::InvalidAction("download is on the result view"),
        LegalEaseError::OperationInFlight("Upload"),
        LegalEaseError::NoCandidate,
        LegalEaseError::FileNotFound("lease.pdf".to_string()),
        LegalEaseError::Save("disk full".to_string()),
        LegalEaseError::Prompt("not a terminal".to_string()),
        LegalEaseError::OperationFailed("Generation failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_in_flight_message() {
    let err = LegalEaseError::OperationInFlight("Upload");
    assert_eq!(err.to_string(), "Upload is already in progress");
}

/// Validation errors keep their user-facing text
#[test]
fn test_validation_error_is_transparent() {
    let err: LegalEaseError = ValidationError::TooLarge.into();
    assert!(matches!(err, LegalEaseError::Validation(_)));
    assert_eq!(err.to_string(), "File exceeds the 10 MB size limit.");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LegalEaseError = io_err.into();

    assert!(matches!(err, LegalEaseError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LegalEaseError = json_err.into();

    assert!(matches!(err, LegalEaseError::JsonParse(_)));
}

/// common::Error passes through unchanged
#[test]
fn test_common_error_conversion() {
    let common_err = legalease_common::require("last_will").unwrap_err();
    let err: LegalEaseError = common_err.into();

    assert!(matches!(err, LegalEaseError::Common(_)));
    assert!(err.to_string().contains("last_will"));
}

/// Unparseable config file is an error, not a silent default
#[test]
fn test_corrupt_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(LegalEaseError::JsonParse(_))));
}

/// Non-http base URLs are refused
#[test]
fn test_invalid_api_base() {
    let mut config = Config::default();
    let result = config.set_api_base("ftp://example.com".to_string());
    assert!(matches!(result, Err(LegalEaseError::Config(_))));
    assert_eq!(config.api_base, "http://localhost:5000");
}
