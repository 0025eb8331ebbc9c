//! Error types for tracker and session store operations.

use std::fmt;

/// Errors that can occur while reading or writing session history.
#[derive(Debug)]
pub enum TrackerError {
    /// No session context is active.
    ///
    /// Raised by a [`SessionStore`](crate::store::SessionStore) when history
    /// is accessed before the host has started (or bound) a session. This is
    /// a lifecycle ordering bug in the host and is propagated unchanged
    /// rather than masked with an empty history.
    SessionNotStarted,

    /// Error occurred during storage operations (file I/O).
    Storage(std::io::Error),

    /// Error occurred while encoding or decoding a persisted history record.
    Serialization(serde_json::Error),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::SessionNotStarted => {
                write!(f, "Session hasn't been started yet")
            }
            TrackerError::Storage(err) => {
                write!(f, "History storage error: {}", err)
            }
            TrackerError::Serialization(err) => {
                write!(f, "History serialization error: {}", err)
            }
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::SessionNotStarted => None,
            TrackerError::Storage(err) => Some(err),
            TrackerError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err)
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let not_started = TrackerError::SessionNotStarted;
        assert!(format!("{}", not_started).contains("started"));

        let io_error = TrackerError::Storage(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(format!("{}", io_error).contains("storage error"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        assert!(TrackerError::SessionNotStarted.source().is_none());

        let io_error = TrackerError::Storage(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(io_error.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let err: TrackerError =
            std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into();
        assert!(matches!(err, TrackerError::Storage(_)));
    }
}
