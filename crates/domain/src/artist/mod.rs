//! Artist entity and related types.

mod entity;

pub use entity::Artist;

use thiserror::Error;

/// Errors that can occur during artist operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtistError {
    /// Name is empty after trimming.
    #[error("Name is blank")]
    BlankName,

    /// Name exceeds the character limit.
    #[error("Name length is too long by {overflow} characters")]
    BadName { overflow: usize },

    /// The artist already has the maximum number of artworks on display.
    #[error("Artist has already reached maximum allowance of Artworks in Gallery: {max}")]
    QuotaExceeded { max: usize },

    /// Search text is empty or too long.
    #[error("Search term must be between 1 and {max} characters")]
    InvalidSearchTerm { max: usize },
}
