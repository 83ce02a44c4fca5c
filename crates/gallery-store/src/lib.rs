pub mod document;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use common::{ArtistId, ArtworkId, CustomerId, OrderId};
pub use document::{ArtistElement, ArtworkElement, CustomerElement, GalleryDocument, OrderElement};
pub use error::{Result, StoreError};
pub use file::FileGalleryStore;
pub use memory::InMemoryGalleryStore;
pub use store::GalleryStore;
