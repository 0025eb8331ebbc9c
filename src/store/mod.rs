//! Persistence backends for session-scoped history.
//!
//! The tracker reads and writes the ordered history list through the
//! [`SessionStore`] trait, scoped to "the current session". It never manages
//! session lifecycle itself: starting, resuming, and expiring sessions is the
//! host's job, and accessing history without an active session fails with
//! [`TrackerError::SessionNotStarted`](crate::error::TrackerError).
//!
//! Two implementations are provided:
//!
//! - [`MemoryStore`]: an in-process map keyed by session id, suitable for
//!   tests and single-process hosts.
//! - [`FileStore`]: one JSON document per session on disk, written
//!   atomically, for hosts without their own session mechanism.
//!
//! Hosts with an existing session layer (cookie store, framework session,
//! database) implement `SessionStore` as a thin adapter over it.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::TrackerError;

/// Storage slot that namespaces the history list inside a session record.
///
/// Implementation-internal detail; not stable across versions.
pub const SESSION_KEY: &str = "visit-tracker.history";

/// Session-scoped persistence for the ordered history list.
///
/// Both operations fail with [`TrackerError::SessionNotStarted`] when no
/// session context is active.
pub trait SessionStore {
    /// Loads the history list for the current session.
    ///
    /// A session that has never stored history yields an empty list.
    fn load_history(&self) -> Result<Vec<String>, TrackerError>;

    /// Replaces the history list for the current session.
    fn store_history(&mut self, entries: &[String]) -> Result<(), TrackerError>;
}
