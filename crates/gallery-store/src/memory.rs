use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{GalleryDocument, Result, store::GalleryStore};

/// In-memory gallery store for testing.
///
/// Documents are kept as encoded JSON text rather than as values, so a
/// save/load cycle goes through the same codec as the file store.
#[derive(Clone, Default)]
pub struct InMemoryGalleryStore {
    text: Arc<RwLock<Option<String>>>,
}

impl InMemoryGalleryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds the given raw text.
    ///
    /// Useful for exercising the loader against hand-written or corrupt
    /// documents.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(RwLock::new(Some(text.into()))),
        }
    }

    /// Returns the raw text of the stored document, if any.
    pub async fn text(&self) -> Option<String> {
        self.text.read().await.clone()
    }

    /// Forgets the stored document.
    pub async fn clear(&self) {
        *self.text.write().await = None;
    }
}

#[async_trait]
impl GalleryStore for InMemoryGalleryStore {
    async fn save(&self, document: &GalleryDocument) -> Result<()> {
        // Encode before taking the lock so a failed encode leaves the old text.
        let encoded = document.to_json()?;
        *self.text.write().await = Some(encoded);
        Ok(())
    }

    async fn load(&self) -> Result<Option<GalleryDocument>> {
        let guard = self.text.read().await;
        match guard.as_deref() {
            Some(text) => Ok(Some(GalleryDocument::from_json(text)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArtistElement, ArtistId, StoreError};

    fn document_with_artist(name: &str) -> GalleryDocument {
        GalleryDocument {
            artist_id_count: 1,
            artists: vec![ArtistElement {
                id: ArtistId::new(0),
                name: name.to_string(),
                artworks: vec![],
            }],
            ..GalleryDocument::empty()
        }
    }

    #[tokio::test]
    async fn load_from_empty_store() {
        let store = InMemoryGalleryStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_and_load() {
        let store = InMemoryGalleryStore::new();
        let doc = document_with_artist("Rob Miles");

        store.save(&doc).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, doc);
        assert!(store.text().await.unwrap().contains("Rob Miles"));
    }

    #[tokio::test]
    async fn save_replaces_previous_document() {
        let store = InMemoryGalleryStore::new();
        store.save(&document_with_artist("First")).await.unwrap();
        store.save(&document_with_artist("Second")).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.artists[0].name, "Second");
    }

    #[tokio::test]
    async fn clones_share_the_document() {
        let store = InMemoryGalleryStore::new();
        let other = store.clone();
        store.save(&GalleryDocument::empty()).await.unwrap();
        assert!(other.load().await.unwrap().is_some());

        other.clear().await;
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_text_fails_to_load() {
        let store = InMemoryGalleryStore::with_text("<Gallery>not json</Gallery>");
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
