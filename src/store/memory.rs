//! In-memory session store.
//!
//! Keeps every session's records in a process-local map keyed by session id.
//! Intended for tests and for single-process hosts that don't need history to
//! survive a restart.

use super::{SessionStore, SESSION_KEY};
use crate::error::TrackerError;
use std::collections::HashMap;

/// A session record: named storage slots within one session.
type SessionRecord = HashMap<String, Vec<String>>;

/// In-memory [`SessionStore`] keyed by session id.
///
/// A freshly constructed store has no active session; every history
/// operation fails with [`TrackerError::SessionNotStarted`] until
/// [`start_session`](MemoryStore::start_session) or
/// [`resume_session`](MemoryStore::resume_session) is called.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: HashMap<String, SessionRecord>,
    active: Option<String>,
}

impl MemoryStore {
    /// Creates a store with no sessions and no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session with a generated id and makes it active.
    ///
    /// # Returns
    ///
    /// The generated session id, for later [`resume_session`](MemoryStore::resume_session).
    pub fn start_session(&mut self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        log::debug!("starting session {}", id);
        self.sessions.insert(id.clone(), SessionRecord::new());
        self.active = Some(id.clone());
        id
    }

    /// Makes a previously started session active again.
    ///
    /// An unknown id starts an empty session under that id, matching how
    /// session stores treat a stale cookie.
    pub fn resume_session(&mut self, id: &str) {
        self.sessions.entry(id.to_string()).or_default();
        self.active = Some(id.to_string());
    }

    /// Deactivates the current session without discarding its data.
    pub fn end_session(&mut self) {
        self.active = None;
    }

    /// Destroys a session and all of its stored slots.
    pub fn destroy_session(&mut self, id: &str) {
        self.sessions.remove(id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    /// Returns the active session id, if any.
    pub fn active_session(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn active_record(&self) -> Result<&SessionRecord, TrackerError> {
        let id = self.active.as_deref().ok_or(TrackerError::SessionNotStarted)?;
        self.sessions.get(id).ok_or(TrackerError::SessionNotStarted)
    }
}

impl SessionStore for MemoryStore {
    fn load_history(&self) -> Result<Vec<String>, TrackerError> {
        let record = self.active_record()?;
        Ok(record.get(SESSION_KEY).cloned().unwrap_or_default())
    }

    fn store_history(&mut self, entries: &[String]) -> Result<(), TrackerError> {
        let id = self
            .active
            .clone()
            .ok_or(TrackerError::SessionNotStarted)?;
        let record = self
            .sessions
            .get_mut(&id)
            .ok_or(TrackerError::SessionNotStarted)?;
        record.insert(SESSION_KEY.to_string(), entries.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_session_fails() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.load_history(),
            Err(TrackerError::SessionNotStarted)
        ));
        assert!(matches!(
            store.store_history(&["/a".to_string()]),
            Err(TrackerError::SessionNotStarted)
        ));
    }

    #[test]
    fn test_fresh_session_is_empty() {
        let mut store = MemoryStore::new();
        assert!(store.active_session().is_none());

        let id = store.start_session();
        assert_eq!(store.active_session(), Some(id.as_str()));
        assert_eq!(store.load_history().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let mut store = MemoryStore::new();
        store.start_session();

        let entries = vec!["/b".to_string(), "/a".to_string()];
        store.store_history(&entries).unwrap();
        assert_eq!(store.load_history().unwrap(), entries);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = MemoryStore::new();
        let first = store.start_session();
        store.store_history(&["/a".to_string()]).unwrap();

        store.start_session();
        assert_eq!(store.load_history().unwrap(), Vec::<String>::new());

        store.resume_session(&first);
        assert_eq!(store.load_history().unwrap(), vec!["/a".to_string()]);
    }

    #[test]
    fn test_end_session_requires_restart() {
        let mut store = MemoryStore::new();
        let id = store.start_session();
        store.store_history(&["/a".to_string()]).unwrap();

        store.end_session();
        assert!(store.load_history().is_err());

        store.resume_session(&id);
        assert_eq!(store.load_history().unwrap(), vec!["/a".to_string()]);
    }

    #[test]
    fn test_destroy_session_discards_data() {
        let mut store = MemoryStore::new();
        let id = store.start_session();
        store.store_history(&["/a".to_string()]).unwrap();

        store.destroy_session(&id);
        assert!(store.load_history().is_err());

        store.resume_session(&id);
        assert_eq!(store.load_history().unwrap(), Vec::<String>::new());
    }
}
