//! Ordered lookups over the persisted history.
//!
//! All lookups are pure reads and use sentinel empty results (empty string,
//! empty list) for out-of-range or missing entries. Only backend failures
//! surface as errors.

use super::Tracker;
use crate::error::TrackerError;
use crate::store::SessionStore;

impl<S: SessionStore> Tracker<S> {
    /// Returns the full history, most-recent-first.
    ///
    /// A session with no stored history yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn get_all(&self) -> Result<Vec<String>, TrackerError> {
        self.store.load_history()
    }

    /// Returns the entry at 1-based rank `order`.
    ///
    /// Order 1 is the most recent entry; order equal to the capacity is the
    /// oldest possible entry. An out-of-range order (`0` or beyond the list
    /// length) yields an empty string, never an error.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn get_by_order(&self, order: usize) -> Result<String, TrackerError> {
        Ok(nth(&self.get_all()?, order))
    }

    /// Returns the entry chronologically before (older than) `identifier`.
    ///
    /// Entries whose value occurs in `except` are skipped, as is the matched
    /// entry itself. Yields an empty string when `identifier` is absent from
    /// the filtered history or nothing older remains.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn get_before(&self, identifier: &str, except: &[String]) -> Result<String, TrackerError> {
        let filtered = self.filtered(except)?;
        Ok(match position_of(&filtered, identifier) {
            Some(key) => nth(&filtered, key + 2),
            None => String::new(),
        })
    }

    /// Returns the entry chronologically after (more recent than)
    /// `identifier`, with the same filtering semantics as
    /// [`get_before`](Tracker::get_before).
    ///
    /// Yields an empty string when `identifier` is absent or nothing newer
    /// exists.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError`] from the persistence backend.
    pub fn get_after(&self, identifier: &str, except: &[String]) -> Result<String, TrackerError> {
        let filtered = self.filtered(except)?;
        Ok(match position_of(&filtered, identifier) {
            Some(key) => nth(&filtered, key),
            None => String::new(),
        })
    }

    /// History with every occurrence of the excluded values removed,
    /// preserving the relative order of what remains.
    ///
    /// Filtering is by value, not by position: a duplicate excluded value
    /// elsewhere in the list is removed too, which shifts the index
    /// arithmetic of the before/after lookups accordingly.
    fn filtered(&self, except: &[String]) -> Result<Vec<String>, TrackerError> {
        let mut entries = self.get_all()?;
        if !except.is_empty() {
            entries.retain(|entry| !except.contains(entry));
        }
        Ok(entries)
    }
}

/// 0-based position of `identifier` in `entries`, or `None`.
fn position_of(entries: &[String], identifier: &str) -> Option<usize> {
    entries.iter().position(|entry| entry == identifier)
}

/// Entry at 1-based rank `order`, or an empty string when out of range.
fn nth(entries: &[String], order: usize) -> String {
    if order == 0 {
        return String::new();
    }
    entries.get(order - 1).cloned().unwrap_or_default()
}
