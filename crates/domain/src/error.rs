//! Domain error types.

use gallery_store::StoreError;
use thiserror::Error;

use crate::gallery::{GalleryError, LoadError};

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field value was rejected.
    Validation,
    /// A per-artist or gallery-wide display limit was reached.
    Capacity,
    /// An equal entity already exists.
    Duplicate,
    /// A referenced entity does not exist.
    NotFound,
    /// The artwork's state does not allow the request.
    StateTransition,
    /// Saving or loading failed.
    Persistence,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Capacity => "capacity",
            ErrorKind::Duplicate => "duplicate",
            ErrorKind::NotFound => "not_found",
            ErrorKind::StateTransition => "state_transition",
            ErrorKind::Persistence => "persistence",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A gallery operation was rejected.
    #[error(transparent)]
    Gallery(#[from] GalleryError),

    /// The gallery could not be written to its store.
    #[error("Failed to save gallery: {0}")]
    SaveFailed(#[source] StoreError),

    /// The stored gallery could not be read back.
    #[error("Failed to load gallery: {0}")]
    LoadFailed(#[source] LoadError),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Gallery(e) => e.kind(),
            DomainError::SaveFailed(_) | DomainError::LoadFailed(_) => ErrorKind::Persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_kind() {
        let io = std::io::Error::other("disk full");
        let err = DomainError::SaveFailed(StoreError::Io(io));
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(err.to_string(), "Failed to save gallery: I/O error: disk full");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::StateTransition.to_string(), "state_transition");
    }
}
