//! Presenting downloaded documents to the user
//!
//! Saving goes through a transient handle: the bytes are staged, presented
//! under a filename, and the handle is released afterwards on every path,
//! including failures.

use crate::error::{LegalEaseError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

lazy_static! {
    static ref FILENAME_PARAM: Regex =
        Regex::new(r#"(?i)(?:^|;)\s*filename\s*=\s*(?:"([^"]*)"|([^;]*))"#).unwrap();
}

/// `filename` parameter of a content-disposition header, reduced to a bare
/// file name
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let captures = FILENAME_PARAM.captures(header)?;
    let raw = captures.get(1).or_else(|| captures.get(2))?.as_str();
    let name = raw
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
        .trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

/// Somewhere a downloaded document can be handed to the user
pub trait SaveSink {
    type Handle;

    /// Acquire a transient handle over the bytes
    fn stage(&mut self, bytes: Vec<u8>) -> Result<Self::Handle>;

    /// Expose the staged bytes under `filename`
    fn present(&mut self, handle: &Self::Handle, filename: &str) -> Result<PathBuf>;

    fn release(&mut self, handle: Self::Handle);
}

struct Staged<'a, S: SaveSink + ?Sized> {
    sink: &'a mut S,
    handle: Option<S::Handle>,
}

impl<S: SaveSink + ?Sized> Staged<'_, S> {
    fn present(&mut self, filename: &str) -> Result<PathBuf> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| LegalEaseError::Save("handle already released".into()))?;
        self.sink.present(handle, filename)
    }
}

impl<S: SaveSink + ?Sized> Drop for Staged<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.sink.release(handle);
        }
    }
}

/// Stage, present and release in one go
pub fn save_document<S: SaveSink + ?Sized>(
    sink: &mut S,
    bytes: Vec<u8>,
    filename: &str,
) -> Result<PathBuf> {
    let handle = sink.stage(bytes)?;
    let mut staged = Staged {
        sink,
        handle: Some(handle),
    };
    staged.present(filename)
}

/// Saves into a directory, staging through a temp file there
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveSink for DirectorySink {
    type Handle = NamedTempFile;

    fn stage(&mut self, bytes: Vec<u8>) -> Result<NamedTempFile> {
        std::fs::create_dir_all(&self.dir)?;
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(&bytes)?;
        staged.flush()?;
        Ok(staged)
    }

    /// Never replaces an existing file, even one created while saving
    fn present(&mut self, handle: &NamedTempFile, filename: &str) -> Result<PathBuf> {
        let mut file = NamedTempFile::new_in(&self.dir)?;
        std::io::copy(&mut handle.reopen()?, &mut file)?;
        file.flush()?;

        for n in 0..MAX_NUMBERED_NAMES {
            let target = self.dir.join(numbered_name(filename, n));
            match file.persist_noclobber(&target) {
                Ok(_) => return Ok(target),
                Err(err) if err.error.kind() == ErrorKind::AlreadyExists => file = err.file,
                Err(err) => return Err(err.error.into()),
            }
        }
        Err(LegalEaseError::Save(format!("no free name for {}", filename)))
    }

    fn release(&mut self, handle: NamedTempFile) {
        if let Err(err) = handle.close() {
            log::warn!("could not remove staged download: {}", err);
        }
    }
}

const MAX_NUMBERED_NAMES: u32 = 10_000;

/// `name.ext` for 0, `name (n).ext` otherwise
pub fn numbered_name(filename: &str, n: u32) -> String {
    if n == 0 {
        return filename.to_string();
    }
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{} ({}).{}", stem, n, ext),
        _ => format!("{} ({})", filename, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bare_filename() {
        assert_eq!(
            filename_from_disposition("attachment; filename=LegalEase_NDA_20250101.docx").as_deref(),
            Some("LegalEase_NDA_20250101.docx")
        );
    }

    #[test]
    fn test_quoted_filename() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="Lease Agreement.docx""#).as_deref(),
            Some("Lease Agreement.docx")
        );
    }

    #[test]
    fn test_filename_with_extended_parameter() {
        let header = r#"attachment; filename="x.docx"; filename*=UTF-8''x.docx"#;
        assert_eq!(filename_from_disposition(header).as_deref(), Some("x.docx"));
    }

    #[test]
    fn test_only_extended_parameter() {
        assert_eq!(filename_from_disposition("attachment; filename*=UTF-8''x.docx"), None);
    }

    #[test]
    fn test_missing_or_empty_filename() {
        assert_eq!(filename_from_disposition("attachment"), None);
        assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn test_quoted_filename_with_semicolon() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="Smith; Jones Lease.docx""#).as_deref(),
            Some("Smith; Jones Lease.docx")
        );
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="a;b.docx"; size=10"#).as_deref(),
            Some("a;b.docx")
        );
    }

    #[test]
    fn test_path_components_are_stripped() {
        assert_eq!(
            filename_from_disposition("attachment; filename=../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="C:\temp\a.docx""#).as_deref(),
            Some("a.docx")
        );
    }

    #[test]
    fn test_directory_sink_saves_and_cleans_up() {
        let dir = tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let path = save_document(&mut sink, b"docx bytes".to_vec(), "a.docx").unwrap();

        assert_eq!(path, dir.path().join("a.docx"));
        assert_eq!(std::fs::read(&path).unwrap(), b"docx bytes");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1, "staged temp file left behind");
    }

    #[test]
    fn test_directory_sink_does_not_overwrite() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.docx"), b"old").unwrap();
        let mut sink = DirectorySink::new(dir.path());

        let first = save_document(&mut sink, b"new".to_vec(), "a.docx").unwrap();
        let second = save_document(&mut sink, b"newer".to_vec(), "a.docx").unwrap();
        assert_eq!(first, dir.path().join("a (1).docx"));
        assert_eq!(second, dir.path().join("a (2).docx"));
        assert_eq!(std::fs::read(dir.path().join("a.docx")).unwrap(), b"old");
    }

    #[test]
    fn test_directory_sink_skips_every_taken_name() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.docx"), b"old").unwrap();
        std::fs::write(dir.path().join("a (1).docx"), b"older").unwrap();
        let mut sink = DirectorySink::new(dir.path());

        let path = save_document(&mut sink, b"new".to_vec(), "a.docx").unwrap();
        assert_eq!(path, dir.path().join("a (2).docx"));
        assert_eq!(std::fs::read(dir.path().join("a (1).docx")).unwrap(), b"older");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_numbered_name() {
        assert_eq!(numbered_name("a.docx", 0), "a.docx");
        assert_eq!(numbered_name("a.docx", 2), "a (2).docx");
        assert_eq!(numbered_name("README", 1), "README (1)");
        assert_eq!(numbered_name(".env", 1), ".env (1)");
    }
}
