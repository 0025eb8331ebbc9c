//! The history tracker itself.
//!
//! A [`Tracker`] owns a per-session history of visited locations: an ordered
//! list of opaque identifier strings, most-recent-first, bounded by a
//! configured capacity. Tracking is opt-in per request: a collaborator calls
//! [`mark_save`](Tracker::mark_save) while handling the request, and the host
//! calls [`commit`](Tracker::commit) once the request's kind and final
//! routing are known. Only request kinds in the tracked set are ever
//! recorded, so side-effecting requests stay out of history.
//!
//! # Example
//!
//! ```
//! use visit_tracker::{MemoryStore, Tracker};
//!
//! let mut store = MemoryStore::new();
//! store.start_session();
//!
//! let mut tracker = Tracker::new(store, Box::new(|| "/users/42".to_string()));
//! tracker.mark_save();
//! tracker.commit("GET").unwrap();
//!
//! assert_eq!(tracker.get_all().unwrap(), vec!["/users/42".to_string()]);
//! ```

mod lookup;

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::store::SessionStore;
use std::collections::HashSet;

/// Produces the identifier for the current request.
///
/// Supplied by the host's request-context collaborator; the conventional
/// implementation returns the current request's full URI. Returning an empty
/// string signals "record nothing for this request".
pub type IdentifierSource = Box<dyn Fn() -> String + Send>;

/// Whether the tracker has been ordered to save on the next commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Record the current request at commit time.
    Save,
    /// Skip the current request. This is the default; every request starts
    /// out untracked.
    DontSave,
}

/// Bounded, ordered history of visited locations for one session.
///
/// Owned by the request-handling layer; all state is explicit and the
/// persistence backend is injected, so a tracker is trivially testable with
/// a [`MemoryStore`](crate::store::MemoryStore).
pub struct Tracker<S: SessionStore> {
    config: TrackerConfig,
    pending: PendingAction,
    identifier_source: IdentifierSource,
    store: S,
}

impl<S: SessionStore> Tracker<S> {
    /// Creates a tracker with the default configuration (capacity 7,
    /// tracked kinds `{"GET"}`).
    ///
    /// # Arguments
    ///
    /// * `store` - Session-scoped persistence backend
    /// * `identifier_source` - Closure producing the current request's
    ///   identifier, typically its URI
    pub fn new(store: S, identifier_source: IdentifierSource) -> Self {
        Self {
            config: TrackerConfig::default(),
            pending: PendingAction::DontSave,
            identifier_source,
            store,
        }
    }

    /// Creates a tracker with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` with a descriptive message if the configuration is
    /// invalid (see [`TrackerConfig::validate`]).
    pub fn with_config(
        store: S,
        config: TrackerConfig,
        identifier_source: IdentifierSource,
    ) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            config,
            pending: PendingAction::DontSave,
            identifier_source,
            store,
        })
    }

    /// Orders the tracker to save the current request at commit time.
    ///
    /// May be called any number of times before [`commit`](Tracker::commit);
    /// the last call wins.
    pub fn mark_save(&mut self) {
        self.pending = PendingAction::Save;
    }

    /// Orders the tracker not to save the current request at commit time.
    pub fn mark_dont_save(&mut self) {
        self.pending = PendingAction::DontSave;
    }

    /// Replaces the set of request kinds eligible for tracking.
    pub fn set_tracked_kinds(&mut self, kinds: HashSet<String>) {
        self.config.tracked_kinds = kinds;
    }

    /// Replaces the identifier-generation closure.
    pub fn set_identifier_source(&mut self, identifier_source: IdentifierSource) {
        self.identifier_source = identifier_source;
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the current pending action.
    pub fn pending_action(&self) -> PendingAction {
        self.pending
    }

    /// Finalizes tracking for the current request.
    ///
    /// Called by the host at most once per request, once the request's kind
    /// and final routing are known. The request is recorded only when all of
    /// the following hold: `kind` is in the tracked set, the pending action
    /// is [`Save`](PendingAction::Save), and the identifier source produces
    /// a non-empty string.
    ///
    /// # Arguments
    ///
    /// * `kind` - The current request's kind, e.g. its HTTP method
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn commit(&mut self, kind: &str) -> Result<(), TrackerError> {
        if !self.config.tracked_kinds.contains(kind) {
            log::trace!("commit: kind {:?} not tracked", kind);
            return Ok(());
        }

        if self.pending != PendingAction::Save {
            log::trace!("commit: no save ordered");
            return Ok(());
        }

        let identifier = (self.identifier_source)();
        if identifier.is_empty() {
            return Ok(());
        }

        self.append(&identifier)
    }

    /// Appends an identifier unconditionally, bypassing the request-kind and
    /// pending-action gating of [`commit`](Tracker::commit).
    ///
    /// Useful for programmatic navigation tracking. An empty identifier is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn force_add(&mut self, identifier: &str) -> Result<(), TrackerError> {
        self.append(identifier)
    }

    /// Replaces the persisted history with an empty list.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn clear(&mut self) -> Result<(), TrackerError> {
        self.store.store_history(&[])
    }

    /// Consumes the tracker and returns its persistence backend.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Prepends an identifier, suppressing adjacent duplicates and evicting
    /// the oldest entry past capacity.
    fn append(&mut self, identifier: &str) -> Result<(), TrackerError> {
        if identifier.is_empty() {
            return Ok(());
        }

        let mut entries = self.store.load_history()?;

        // A refresh or re-render of the current page stays out of history.
        if entries.first().map(String::as_str) == Some(identifier) {
            return Ok(());
        }

        entries.insert(0, identifier.to_string());
        entries.truncate(self.config.capacity);

        self.store.store_history(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn test_tracker(identifier: &str) -> Tracker<MemoryStore> {
        let mut store = MemoryStore::new();
        store.start_session();
        let identifier = identifier.to_string();
        Tracker::new(store, Box::new(move || identifier.clone()))
    }

    #[test]
    fn test_commit_defaults_to_dont_save() {
        let mut tracker = test_tracker("/home");
        tracker.commit("GET").unwrap();
        assert!(tracker.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_commit_after_mark_save_appends() {
        let mut tracker = test_tracker("/home");
        tracker.mark_save();
        tracker.commit("GET").unwrap();
        assert_eq!(tracker.get_all().unwrap(), vec!["/home".to_string()]);
    }

    #[test]
    fn test_commit_ignores_untracked_kind() {
        let mut tracker = test_tracker("/submit");
        tracker.mark_save();
        tracker.commit("POST").unwrap();
        assert!(tracker.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_last_mark_before_commit_wins() {
        let mut tracker = test_tracker("/home");
        tracker.mark_save();
        tracker.mark_dont_save();
        tracker.commit("GET").unwrap();
        assert!(tracker.get_all().unwrap().is_empty());

        tracker.mark_dont_save();
        tracker.mark_save();
        tracker.commit("GET").unwrap();
        assert_eq!(tracker.get_all().unwrap(), vec!["/home".to_string()]);
    }

    #[test]
    fn test_empty_identifier_is_not_appended() {
        let mut tracker = test_tracker("");
        tracker.mark_save();
        tracker.commit("GET").unwrap();
        assert!(tracker.get_all().unwrap().is_empty());

        tracker.force_add("").unwrap();
        assert!(tracker.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_set_tracked_kinds_replaces_set() {
        let mut tracker = test_tracker("/resource");
        let mut kinds = HashSet::new();
        kinds.insert("HEAD".to_string());
        tracker.set_tracked_kinds(kinds);

        tracker.mark_save();
        tracker.commit("GET").unwrap();
        assert!(tracker.get_all().unwrap().is_empty());

        tracker.commit("HEAD").unwrap();
        assert_eq!(tracker.get_all().unwrap(), vec!["/resource".to_string()]);
    }

    #[test]
    fn test_set_identifier_source_replaces_closure() {
        let mut tracker = test_tracker("/ignored");
        tracker.set_identifier_source(Box::new(|| "/custom".to_string()));
        tracker.mark_save();
        tracker.commit("GET").unwrap();
        assert_eq!(tracker.get_all().unwrap(), vec!["/custom".to_string()]);
    }

    #[test]
    fn test_force_add_bypasses_gating() {
        let mut tracker = test_tracker("/home");
        // No mark_save, and the identifier source is never consulted.
        tracker.force_add("/direct").unwrap();
        assert_eq!(tracker.get_all().unwrap(), vec!["/direct".to_string()]);
    }

    #[test]
    fn test_adjacent_duplicate_suppressed() {
        let mut tracker = test_tracker("/home");
        tracker.force_add("/a").unwrap();
        tracker.force_add("/a").unwrap();
        assert_eq!(tracker.get_all().unwrap(), vec!["/a".to_string()]);
    }

    #[test]
    fn test_non_adjacent_duplicate_preserved() {
        let mut tracker = test_tracker("/home");
        tracker.force_add("/a").unwrap();
        tracker.force_add("/b").unwrap();
        tracker.force_add("/a").unwrap();
        assert_eq!(
            tracker.get_all().unwrap(),
            vec!["/a".to_string(), "/b".to_string(), "/a".to_string()]
        );
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = {
            let mut store = MemoryStore::new();
            store.start_session();
            store
        };
        let config = TrackerConfig {
            capacity: 3,
            ..Default::default()
        };
        let mut tracker =
            Tracker::with_config(store, config, Box::new(String::new)).unwrap();

        for path in ["/1", "/2", "/3", "/4"] {
            tracker.force_add(path).unwrap();
        }

        assert_eq!(
            tracker.get_all().unwrap(),
            vec!["/4".to_string(), "/3".to_string(), "/2".to_string()]
        );
    }

    #[test]
    fn test_clear_empties_history() {
        let mut tracker = test_tracker("/home");
        tracker.force_add("/a").unwrap();
        tracker.force_add("/b").unwrap();

        tracker.clear().unwrap();
        assert!(tracker.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_pending_action_accessor() {
        let mut tracker = test_tracker("/home");
        assert_eq!(tracker.pending_action(), PendingAction::DontSave);
        tracker.mark_save();
        assert_eq!(tracker.pending_action(), PendingAction::Save);
    }

    #[test]
    fn test_capacity_accessor() {
        let tracker = test_tracker("/home");
        assert_eq!(tracker.capacity(), 7);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut store = MemoryStore::new();
        store.start_session();
        let config = TrackerConfig {
            capacity: 0,
            ..Default::default()
        };
        assert!(Tracker::with_config(store, config, Box::new(String::new)).is_err());
    }

    #[test]
    fn test_commit_without_session_propagates_error() {
        // Session never started.
        let store = MemoryStore::new();
        let mut tracker = Tracker::new(store, Box::new(|| "/home".to_string()));
        tracker.mark_save();
        assert!(matches!(
            tracker.commit("GET"),
            Err(TrackerError::SessionNotStarted)
        ));
    }
}
