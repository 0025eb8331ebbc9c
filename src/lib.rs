//! Visit Tracker
//!
//! An embeddable, session-scoped history of recently visited locations
//! (opaque identifier strings, typically request URIs) with navigational
//! lookups over that history: "what came before X", "what came after X".
//!
//! # Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - **tracker**: The [`Tracker`] itself: commit gating, bounded append with
//!   oldest-entry eviction, and the ordered lookups
//! - **store**: The [`SessionStore`] persistence abstraction plus in-memory
//!   and file-backed implementations
//! - **config**: [`TrackerConfig`] with serde support and validation
//! - **error**: [`TrackerError`], the crate's error type
//!
//! # Tracking model
//!
//! Tracking is opt-in per request. A collaborator calls
//! [`Tracker::mark_save`] while handling a request, and the host calls
//! [`Tracker::commit`] exactly once when the request's kind and final routing
//! are known. Commit records the request only when its kind is in the
//! tracked set (by default only `GET`), a save was ordered, and the injected
//! identifier source produces a non-empty string. [`Tracker::force_add`]
//! bypasses the gating entirely.
//!
//! The history itself is a bounded, most-recent-first list: inserting past
//! the capacity evicts the oldest entry, and an identifier equal to the
//! current most-recent entry is silently dropped so that refreshes don't
//! clutter history.
//!
//! # Sessions
//!
//! The tracker never manages session lifecycle. It reads and writes through
//! a [`SessionStore`] scoped to "the current session"; accessing history
//! without an active session fails with [`TrackerError::SessionNotStarted`],
//! which the tracker propagates unchanged since it indicates a lifecycle
//! ordering bug in the host.
//!
//! # Usage
//!
//! ```
//! use visit_tracker::{MemoryStore, Tracker};
//!
//! let mut store = MemoryStore::new();
//! store.start_session();
//!
//! // The identifier source is host-supplied; it conventionally captures the
//! // request context and returns the current request's URI.
//! let mut tracker = Tracker::new(store, Box::new(|| "/orders/7".to_string()));
//!
//! tracker.mark_save();
//! tracker.commit("GET")?;
//!
//! tracker.force_add("/orders")?;
//! assert_eq!(tracker.get_after("/orders/7", &[])?, "/orders");
//! assert_eq!(tracker.get_by_order(1)?, "/orders");
//! # Ok::<(), visit_tracker::TrackerError>(())
//! ```
//!
//! # Concurrency
//!
//! One request at a time per session: the append path is a read-modify-write
//! over the backend and is not atomic, so hosts that allow overlapping
//! requests for the same session must serialize access to that session's
//! tracker externally.

pub mod config;
pub mod error;
pub mod store;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use store::{FileStore, MemoryStore, SessionStore};
pub use tracker::{IdentifierSource, PendingAction, Tracker};
