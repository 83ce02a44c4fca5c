//! Shared, store-backed access to a gallery.

use std::time::Instant;

use chrono::{DateTime, Utc};
use common::{ArtistId, ArtworkId, CustomerId, OrderId};
use gallery_store::GalleryStore;
use tokio::sync::RwLock;

use super::{Gallery, GalleryError, GalleryPolicy};
use crate::artist::Artist;
use crate::artwork::{Artwork, ArtworkState};
use crate::customer::{Customer, Order};
use crate::error::DomainError;

/// Owns a gallery and the store it is persisted to.
///
/// Commands run under the write lock, so a check and the mutation it guards
/// never interleave with another command. Queries share the read lock.
pub struct GalleryService<S: GalleryStore> {
    gallery: RwLock<Gallery>,
    store: S,
}

impl<S: GalleryStore> GalleryService<S> {
    pub fn new(gallery: Gallery, store: S) -> Self {
        Self {
            gallery: RwLock::new(gallery),
            store,
        }
    }

    /// Loads the gallery saved in `store`, or starts an empty one if nothing
    /// has been saved yet.
    #[tracing::instrument(skip(store))]
    pub async fn open(store: S, policy: GalleryPolicy) -> Result<Self, DomainError> {
        metrics::counter!("gallery_loads_total").increment(1);
        let gallery = match Gallery::load(&store, policy).await? {
            Some(gallery) => gallery,
            None => {
                tracing::info!("starting a new gallery");
                Gallery::with_policy(policy)
            }
        };
        Ok(Self::new(gallery, store))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs a command against the gallery under the write lock.
    pub async fn execute<T, F>(&self, command: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Gallery) -> Result<T, GalleryError>,
    {
        metrics::counter!("gallery_commands_total").increment(1);
        let mut gallery = self.gallery.write().await;
        command(&mut gallery).map_err(|e| {
            metrics::counter!("gallery_command_failures_total").increment(1);
            tracing::warn!(error = %e, kind = %e.kind(), "gallery command rejected");
            DomainError::from(e)
        })
    }

    /// Runs a read-only closure against the gallery under the read lock.
    pub async fn query<T, F>(&self, query: F) -> T
    where
        F: FnOnce(&Gallery) -> T,
    {
        let gallery = self.gallery.read().await;
        query(&gallery)
    }

    /// Returns a copy of the current gallery.
    pub async fn snapshot(&self) -> Gallery {
        self.gallery.read().await.clone()
    }

    /// Persists the current gallery.
    #[tracing::instrument(skip(self))]
    pub async fn save(&self) -> Result<(), DomainError> {
        let start = Instant::now();
        self.gallery.read().await.save(&self.store).await?;
        metrics::counter!("gallery_saves_total").increment(1);
        metrics::histogram!("gallery_save_duration_seconds").record(start.elapsed().as_secs_f64());
        Ok(())
    }

    /// Replaces the in-memory gallery with the stored one.
    ///
    /// Returns false, leaving the gallery untouched, if nothing is stored.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<bool, DomainError> {
        metrics::counter!("gallery_loads_total").increment(1);
        let mut gallery = self.gallery.write().await;
        match Gallery::load(&self.store, gallery.policy()).await? {
            Some(loaded) => {
                *gallery = loaded;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[tracing::instrument(skip(self, artist), fields(name = artist.name()))]
    pub async fn add_artist(&self, artist: Artist) -> Result<ArtistId, DomainError> {
        self.execute(|gallery| Ok(gallery.add_artist(artist))).await
    }

    #[tracing::instrument(skip(self, artwork))]
    pub async fn add_artwork(
        &self,
        artist_id: ArtistId,
        artwork: Artwork,
    ) -> Result<ArtworkId, DomainError> {
        self.execute(|gallery| gallery.add_artwork(artist_id, artwork))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn change_artwork_state(
        &self,
        artwork_id: ArtworkId,
        new_state: ArtworkState,
        date: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.execute(|gallery| gallery.change_artwork_state(artwork_id, new_state, date))
            .await
    }

    #[tracing::instrument(skip(self, customer), fields(name = customer.name()))]
    pub async fn add_customer(&self, customer: Customer) -> Result<CustomerId, DomainError> {
        self.execute(|gallery| Ok(gallery.add_customer(customer)))
            .await
    }

    #[tracing::instrument(skip(self, order), fields(artwork_id = %order.artwork_id()))]
    pub async fn add_order(
        &self,
        customer_id: CustomerId,
        order: Order,
    ) -> Result<OrderId, DomainError> {
        self.execute(|gallery| gallery.add_order(customer_id, order))
            .await
    }

    /// Returns a copy of the artwork with the given id.
    pub async fn artwork(&self, id: ArtworkId) -> Option<Artwork> {
        self.query(|gallery| gallery.find_artwork(id).cloned()).await
    }
}
