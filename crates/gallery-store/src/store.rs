use async_trait::async_trait;

use crate::{GalleryDocument, Result};

/// Core trait for gallery persistence backends.
///
/// A store holds at most one document and always reads or writes it whole;
/// there is no partial or incremental persistence. All implementations must
/// be thread-safe (Send + Sync).
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Replaces the stored document.
    ///
    /// A failed save must leave any previously saved document readable.
    async fn save(&self, document: &GalleryDocument) -> Result<()>;

    /// Reads the stored document.
    ///
    /// Returns None if nothing has been saved yet.
    async fn load(&self) -> Result<Option<GalleryDocument>>;
}
