//! Configuration for the history tracker.
//!
//! All settings have sensible defaults and can be deserialized directly from
//! a host application's settings JSON. Missing fields fall back to defaults;
//! an invalid configuration is rejected by [`TrackerConfig::validate`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a [`Tracker`](crate::tracker::Tracker) instance.
///
/// Capacity is fixed for the lifetime of the tracker; the tracked-kind set
/// can be replaced later via `Tracker::set_tracked_kinds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Maximum number of locations retained in history.
    ///
    /// Appending beyond this limit evicts the oldest entry. Defaults to 7.
    ///
    /// Must be greater than 0.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Request kinds eligible for tracking through `commit`.
    ///
    /// Only structurally safe request kinds should be listed so that
    /// side-effecting requests never pollute history. Defaults to `{"GET"}`.
    ///
    /// An empty set is valid and simply tracks nothing.
    #[serde(default = "default_tracked_kinds")]
    pub tracked_kinds: HashSet<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            tracked_kinds: default_tracked_kinds(),
        }
    }
}

impl TrackerConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive message.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

fn default_capacity() -> usize {
    7
}

fn default_tracked_kinds() -> HashSet<String> {
    let mut kinds = HashSet::new();
    kinds.insert("GET".to_string());
    kinds
}
