//! File-backed session store.
//!
//! Persists each session's history as a single JSON document under a base
//! directory, one file per session id. Writes go through a temporary file and
//! an atomic rename so a crash mid-write never leaves a truncated document.
//! A corrupt document is logged and treated as empty rather than failing the
//! whole session.

use super::SessionStore;
use crate::error::TrackerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// On-disk history document for one session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryDocument {
    /// When this document was last written, in UTC.
    saved_at: DateTime<Utc>,

    /// The history list, most-recent-first.
    entries: Vec<String>,
}

/// File-backed [`SessionStore`], one JSON document per session.
///
/// The store must be bound to a session id before use; history operations
/// on an unbound store fail with [`TrackerError::SessionNotStarted`].
#[derive(Debug)]
pub struct FileStore {
    base_dir: PathBuf,
    session: Option<String>,
}

impl FileStore {
    /// Creates a store rooted at `base_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if the directory cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = base_dir.into();
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }

        Ok(Self {
            base_dir,
            session: None,
        })
    }

    /// Binds the store to a session id.
    ///
    /// No file is created until history is first stored.
    pub fn bind_session(&mut self, id: impl Into<String>) {
        self.session = Some(id.into());
    }

    /// Unbinds the current session. Subsequent history operations fail until
    /// a session is bound again.
    pub fn unbind_session(&mut self) {
        self.session = None;
    }

    /// Returns the bound session id, if any.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    fn session_path(&self) -> Result<PathBuf, TrackerError> {
        let id = self.session.as_deref().ok_or(TrackerError::SessionNotStarted)?;
        Ok(self.base_dir.join(format!("{}.json", id)))
    }

    fn read_document(path: &Path) -> Result<Option<HistoryDocument>, TrackerError> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        match serde_json::from_str::<HistoryDocument>(&raw) {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                log::warn!(
                    "Skipping corrupted history document at {}: {}",
                    path.display(),
                    e
                );
                Ok(None)
            }
        }
    }
}

impl SessionStore for FileStore {
    fn load_history(&self) -> Result<Vec<String>, TrackerError> {
        let path = self.session_path()?;
        Ok(Self::read_document(&path)?
            .map(|document| document.entries)
            .unwrap_or_default())
    }

    fn store_history(&mut self, entries: &[String]) -> Result<(), TrackerError> {
        let path = self.session_path()?;

        let document = HistoryDocument {
            saved_at: Utc::now(),
            entries: entries.to_vec(),
        };
        let json = serde_json::to_string(&document)?;

        // Write to a temporary file first, then rename into place.
        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = File::create(&temp_path)?;
        writeln!(temp_file, "{}", json)?;
        temp_file.flush()?;
        drop(temp_file);

        fs::rename(&temp_path, &path)?;

        log::trace!("stored {} history entries at {}", entries.len(), path.display());
        Ok(())
    }
}
