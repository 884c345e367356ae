//! # Content Repository
//!
//! The JSON data file on disk, its backups, and the generated module.
//!
//! ## Write path
//!
//! ```text
//! backup existing file → overwrite data file → regenerate module
//! ```
//!
//! There is no locking and no temp-file swap. Two writers racing each other
//! both succeed and the last one wins; a crash mid-write is recovered from
//! the newest backup.

use chrono::{DateTime, SecondsFormat, Utc};
use dwd_compiler_js::{compile_content_module, CompileError, CompileOptions};
use dwd_content::{ContentError, Document};
use dwd_editor::SaveReceipt;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "content.data.json";
pub const DEFAULT_BACKUP_DIR: &str = "content.backups";
pub const DEFAULT_OUTPUT_FILE: &str = "src/content.jsx";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),
}

#[derive(Debug, Clone)]
pub struct ContentRepository {
    data_path: PathBuf,
    backup_dir: PathBuf,
    output_path: PathBuf,
}

impl ContentRepository {
    pub fn new(data_path: PathBuf, backup_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            data_path,
            backup_dir,
            output_path,
        }
    }

    /// Default layout relative to a project root
    pub fn from_root(root: &Path) -> Self {
        Self::new(
            root.join(DEFAULT_DATA_FILE),
            root.join(DEFAULT_BACKUP_DIR),
            root.join(DEFAULT_OUTPUT_FILE),
        )
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// File name of the data file, for messages
    pub fn data_file_name(&self) -> String {
        self.data_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
    }

    pub fn read(&self) -> Result<Document, RepositoryError> {
        Ok(Document::load(&self.data_path)?)
    }

    /// Back up, overwrite, regenerate
    pub fn write(&self, document: &Document) -> Result<SaveReceipt, RepositoryError> {
        self.persist(&document.to_pretty_json()?, document)
    }

    /// Like [`write`](Self::write), for a request body: `body` must read as a
    /// [`Document`], but the file gets `body` itself, pretty-printed, with its
    /// key order intact.
    pub fn write_json(&self, body: &Value) -> Result<SaveReceipt, RepositoryError> {
        let document: Document =
            serde_json::from_value(body.clone()).map_err(ContentError::from)?;
        let text = serde_json::to_string_pretty(body).map_err(ContentError::from)?;
        self.persist(&text, &document)
    }

    fn persist(&self, text: &str, document: &Document) -> Result<SaveReceipt, RepositoryError> {
        let now = Utc::now();

        self.backup_at(now)?;
        fs::write(&self.data_path, text)?;
        self.generate(document)?;

        tracing::info!(path = ?self.data_path, "content saved");

        Ok(SaveReceipt {
            ok: true,
            saved_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Copy the current data file into the backup directory.
    ///
    /// Returns `None` when there is nothing to back up yet.
    pub fn backup(&self) -> Result<Option<PathBuf>, RepositoryError> {
        self.backup_at(Utc::now())
    }

    fn backup_at(&self, now: DateTime<Utc>) -> Result<Option<PathBuf>, RepositoryError> {
        if !self.data_path.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir)?;
        let backup_path = self
            .backup_dir
            .join(format!("content.{}.json", backup_stamp(now)));
        fs::copy(&self.data_path, &backup_path)?;

        tracing::info!(path = ?backup_path, "content backed up");
        Ok(Some(backup_path))
    }

    /// Emit the generated module for `document`
    pub fn generate(&self, document: &Document) -> Result<&Path, RepositoryError> {
        let options = CompileOptions {
            source_name: self.data_file_name(),
            ..CompileOptions::default()
        };
        let module = compile_content_module(document, options)?;

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.output_path, module)?;

        Ok(&self.output_path)
    }

    /// Read the data file and emit the module from it
    pub fn regenerate(&self) -> Result<&Path, RepositoryError> {
        let document = self.read()?;
        self.generate(&document)
    }

    /// Backup files, oldest first
    pub fn backups(&self) -> Result<Vec<PathBuf>, RepositoryError> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)? {
            let path = entry?.path();
            let is_backup = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with("content.") && name.ends_with(".json"))
                .unwrap_or(false);
            if is_backup {
                backups.push(path);
            }
        }

        backups.sort();
        Ok(backups)
    }
}

/// ISO-8601 UTC time with `:` and `.` swapped for `-`, e.g.
/// `2026-10-18T09-30-00-123Z`. Sorts chronologically as text.
pub fn backup_stamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_backup_stamp_is_filesystem_safe() {
        let time = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(backup_stamp(time), "2026-10-18T09-30-05-042Z");
    }

    #[test]
    fn test_backup_without_data_file_is_noop() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::from_root(temp.path());

        assert_eq!(repo.backup().unwrap(), None);
        assert!(!repo.backup_dir().exists());
        assert!(repo.backups().unwrap().is_empty());
    }

    #[test]
    fn test_first_write_creates_data_file_without_backup() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::from_root(temp.path());
        let document = Document::seed().unwrap();

        let receipt = repo.write(&document).unwrap();

        assert!(receipt.ok);
        assert!(receipt.saved_at.ends_with('Z'));
        assert_eq!(repo.read().unwrap(), document);
        assert!(repo.backups().unwrap().is_empty());
        assert!(repo.output_path().exists());
    }

    #[test]
    fn test_data_file_is_two_space_pretty_json() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::from_root(temp.path());
        repo.write(&Document::seed().unwrap()).unwrap();

        let raw = fs::read_to_string(repo.data_path()).unwrap();
        assert!(raw.starts_with("{\n  \"brand\": {\n    \"left\": \"DWD\","));
    }

    #[test]
    fn test_write_json_stores_body_as_given() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::from_root(temp.path());
        let mut body: Value = serde_json::from_str(include_str!("../../content/data/seed.json")).unwrap();
        body["seo"] = serde_json::json!({"title": "DWD"});

        repo.write_json(&body).unwrap();

        let raw = fs::read_to_string(repo.data_path()).unwrap();
        assert_eq!(raw, serde_json::to_string_pretty(&body).unwrap());
        assert!(!raw.contains("null"));
        assert_eq!(repo.read().unwrap().extra["seo"]["title"], "DWD");
    }

    #[test]
    fn test_write_json_rejects_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::from_root(temp.path());

        let err = repo.write_json(&serde_json::json!({"brand": {}})).unwrap_err();

        assert!(matches!(err, RepositoryError::Content(_)));
        assert!(!repo.data_path().exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::from_root(temp.path());
        assert!(repo.read().is_err());
    }

    #[test]
    fn test_regenerate_uses_data_file_name_in_header() {
        let temp = TempDir::new().unwrap();
        let repo = ContentRepository::new(
            temp.path().join("site.json"),
            temp.path().join("backups"),
            temp.path().join("out").join("content.jsx"),
        );
        fs::write(repo.data_path(), Document::seed().unwrap().to_pretty_json().unwrap()).unwrap();

        let output = repo.regenerate().unwrap();
        let module = fs::read_to_string(output).unwrap();
        assert!(module.starts_with("// AUTO-GENERATED from site.json."));
    }
}
