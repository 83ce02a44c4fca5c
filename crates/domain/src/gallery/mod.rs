//! Gallery aggregate root, its persistence mapping and the shared service.

mod aggregate;
mod persistence;
mod policy;
mod service;

pub use aggregate::Gallery;
pub use persistence::LoadError;
pub use policy::{DuplicateScope, GalleryPolicy, ParseDuplicateScopeError};
pub use service::GalleryService;

use common::{ArtistId, ArtworkId, CustomerId, OrderId};
use thiserror::Error;

use crate::artist::ArtistError;
use crate::artwork::ArtworkError;
use crate::customer::CustomerError;
use crate::error::ErrorKind;

/// Most artworks that may be on display across the whole gallery.
pub const GALLERY_CAPACITY: usize = 50;

/// Errors that can occur during gallery operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Artwork(#[from] ArtworkError),

    #[error(transparent)]
    Artist(#[from] ArtistError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// The gallery floor is full.
    #[error("Gallery has reached its capacity of {capacity} artworks on display")]
    CapacityExceeded { capacity: usize },

    /// An artwork with the same content is already stocked.
    #[error("Artwork is a duplicate of artwork {existing}")]
    DuplicateArtwork { existing: ArtworkId },

    /// An order for the same artwork and date already exists.
    #[error("Order is a duplicate of order {existing}")]
    DuplicateOrder { existing: OrderId },

    #[error("Artist not found: {0}")]
    ArtistNotFound(ArtistId),

    #[error("Artwork not found: {0}")]
    ArtworkNotFound(ArtworkId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Name search pattern is empty or too long.
    #[error("Search term must be between 1 and {max} characters")]
    InvalidSearchTerm { max: usize },
}

impl GalleryError {
    /// Classifies the error for callers that only need the broad category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GalleryError::Artwork(ArtworkError::BadStateTransition { .. }) => {
                ErrorKind::StateTransition
            }
            GalleryError::Artwork(_) => ErrorKind::Validation,
            GalleryError::Artist(ArtistError::QuotaExceeded { .. }) => ErrorKind::Capacity,
            GalleryError::Artist(_) | GalleryError::Customer(_) => ErrorKind::Validation,
            GalleryError::CapacityExceeded { .. } => ErrorKind::Capacity,
            GalleryError::DuplicateArtwork { .. } | GalleryError::DuplicateOrder { .. } => {
                ErrorKind::Duplicate
            }
            GalleryError::ArtistNotFound(_)
            | GalleryError::ArtworkNotFound(_)
            | GalleryError::CustomerNotFound(_) => ErrorKind::NotFound,
            GalleryError::InvalidSearchTerm { .. } => ErrorKind::Validation,
        }
    }
}
