//! Domain layer for the gallery inventory.
//!
//! This crate provides:
//! - Artwork entity with its lifecycle state machine
//! - Artist and Customer entities with name validation
//! - Gallery aggregate root enforcing capacity and duplicate rules
//! - Mapping to and from the persisted gallery document
//! - GalleryService for shared, store-backed access

pub mod artist;
pub mod artwork;
pub mod customer;
pub mod error;
pub mod gallery;
mod validation;

pub use artist::{Artist, ArtistError};
pub use artwork::{
    Artwork, ArtworkError, ArtworkState, ArtworkType, Money, ParseMoneyError, Transition,
};
pub use common::{ArtistId, ArtworkId, CustomerId, OrderId};
pub use customer::{Customer, CustomerError, Order};
pub use error::{DomainError, ErrorKind};
pub use gallery::{
    DuplicateScope, GALLERY_CAPACITY, Gallery, GalleryError, GalleryPolicy, GalleryService,
    LoadError, ParseDuplicateScopeError,
};
pub use validation::MAX_NAME_CHARS;
