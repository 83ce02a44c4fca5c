//! Mapping between the gallery and its persisted document.

use std::collections::{BTreeMap, BTreeSet};

use common::{ArtistId, ArtworkId, CustomerId, OrderId};
use gallery_store::{
    ArtistElement, ArtworkElement, CustomerElement, GalleryDocument, GalleryStore, OrderElement,
    StoreError,
};
use thiserror::Error;

use super::{GALLERY_CAPACITY, Gallery, GalleryPolicy};
use crate::artist::{Artist, ArtistError};
use crate::artwork::{Artwork, ArtworkError, ArtworkState, ParseMoneyError};
use crate::customer::{Customer, CustomerError, Order};
use crate::error::DomainError;

/// Reasons a stored document cannot be turned back into a gallery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Artwork {id} has an invalid price: {source}")]
    InvalidPrice {
        id: ArtworkId,
        #[source]
        source: ParseMoneyError,
    },

    #[error("Artwork {id} is invalid: {source}")]
    InvalidArtwork {
        id: ArtworkId,
        #[source]
        source: ArtworkError,
    },

    #[error("Artist {id} is invalid: {source}")]
    InvalidArtist {
        id: ArtistId,
        #[source]
        source: ArtistError,
    },

    #[error("Customer {id} is invalid: {source}")]
    InvalidCustomer {
        id: CustomerId,
        #[source]
        source: CustomerError,
    },

    #[error("{entity} id {id} appears more than once")]
    DuplicateId { entity: &'static str, id: u64 },

    #[error("{entity} id {id} was never issued (counter is {counter})")]
    UnissuedId {
        entity: &'static str,
        id: u64,
        counter: u64,
    },

    #[error("{entity} id counter {counter} is above the maximum of {max}")]
    CounterOutOfRange {
        entity: &'static str,
        counter: u64,
        max: u64,
    },

    #[error("Artwork {id} is in the gallery but has no display date")]
    MissingDisplayDate { id: ArtworkId },

    #[error("Artist {id} has {count} artworks in the gallery, above the limit of {max}")]
    QuotaExceeded { id: ArtistId, count: usize, max: usize },

    #[error("{count} artworks are in the gallery, above the capacity of {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },

    #[error("Order {order} refers to artwork {artwork}, which does not exist")]
    UnknownArtwork { order: OrderId, artwork: ArtworkId },
}

/// Tracks the ids seen for one entity kind while loading.
struct IdLedger {
    entity: &'static str,
    counter: u64,
    seen: BTreeSet<u64>,
}

impl IdLedger {
    fn new(entity: &'static str, counter: u64) -> Result<Self, LoadError> {
        let max = ArtworkId::MAX.value();
        if counter > max {
            return Err(LoadError::CounterOutOfRange {
                entity,
                counter,
                max,
            });
        }
        Ok(Self {
            entity,
            counter,
            seen: BTreeSet::new(),
        })
    }

    fn record(&mut self, id: u64) -> Result<(), LoadError> {
        if id >= self.counter {
            return Err(LoadError::UnissuedId {
                entity: self.entity,
                id,
                counter: self.counter,
            });
        }
        if !self.seen.insert(id) {
            return Err(LoadError::DuplicateId {
                entity: self.entity,
                id,
            });
        }
        Ok(())
    }
}

impl Gallery {
    /// Builds the persisted form of the whole gallery.
    pub fn to_document(&self) -> GalleryDocument {
        GalleryDocument {
            artwork_id_count: self.next_artwork_id.value(),
            artist_id_count: self.next_artist_id.value(),
            order_id_count: self.next_order_id.value(),
            customer_id_count: self.next_customer_id.value(),
            artists: self
                .artists()
                .map(|(id, artist)| ArtistElement {
                    id,
                    name: artist.name().to_string(),
                    artworks: artist.stock().map(artwork_element).collect(),
                })
                .collect(),
            customers: self
                .customers()
                .map(|(id, customer)| CustomerElement {
                    id,
                    name: customer.name().to_string(),
                    orders: customer
                        .orders()
                        .map(|(id, order)| OrderElement {
                            id,
                            artwork_id: order.artwork_id(),
                            order_date: order.order_date(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuilds a gallery from a document, re-validating every entity.
    ///
    /// Owner and customer back-references are recomputed from nesting.
    pub fn from_document(
        document: GalleryDocument,
        policy: GalleryPolicy,
    ) -> Result<Self, LoadError> {
        let mut artist_ids = IdLedger::new("Artist", document.artist_id_count)?;
        let mut artwork_ids = IdLedger::new("Artwork", document.artwork_id_count)?;
        let mut customer_ids = IdLedger::new("Customer", document.customer_id_count)?;
        let mut order_ids = IdLedger::new("Order", document.order_id_count)?;

        let mut artists = BTreeMap::new();
        for element in document.artists {
            artist_ids.record(element.id.value())?;

            let mut stock = BTreeMap::new();
            for artwork in element.artworks {
                artwork_ids.record(artwork.id.value())?;
                let id = artwork.id;
                let mut artwork = restore_artwork(artwork)?;
                artwork.set_owner(element.id);
                stock.insert(id, artwork);
            }

            let artist = Artist::restore(&element.name, stock).map_err(|source| {
                LoadError::InvalidArtist {
                    id: element.id,
                    source,
                }
            })?;
            artists.insert(element.id, artist);
        }

        let mut customers = BTreeMap::new();
        for element in document.customers {
            customer_ids.record(element.id.value())?;

            let mut orders = BTreeMap::new();
            for order in element.orders {
                order_ids.record(order.id.value())?;
                let mut restored = Order::new(order.artwork_id, order.order_date);
                restored.set_customer(element.id);
                orders.insert(order.id, restored);
            }

            let customer = Customer::restore(&element.name, orders).map_err(|source| {
                LoadError::InvalidCustomer {
                    id: element.id,
                    source,
                }
            })?;
            customers.insert(element.id, customer);
        }

        let gallery = Self {
            artists,
            customers,
            next_artwork_id: ArtworkId::new(document.artwork_id_count),
            next_artist_id: ArtistId::new(document.artist_id_count),
            next_order_id: OrderId::new(document.order_id_count),
            next_customer_id: CustomerId::new(document.customer_id_count),
            policy,
        };
        gallery.check_display_limits()?;
        gallery.check_order_references()?;
        Ok(gallery)
    }

    fn check_display_limits(&self) -> Result<(), LoadError> {
        for (id, artist) in self.artists() {
            let count = artist.artworks_in_gallery_count();
            if count > Artist::MAX_ARTWORKS_IN_GALLERY {
                return Err(LoadError::QuotaExceeded {
                    id,
                    count,
                    max: Artist::MAX_ARTWORKS_IN_GALLERY,
                });
            }
        }

        let count = self.artworks_in_gallery();
        if count > GALLERY_CAPACITY {
            return Err(LoadError::CapacityExceeded {
                count,
                capacity: GALLERY_CAPACITY,
            });
        }
        Ok(())
    }

    fn check_order_references(&self) -> Result<(), LoadError> {
        for (_, customer) in self.customers() {
            for (order, placed) in customer.orders() {
                let artwork = placed.artwork_id();
                if self.find_artwork(artwork).is_none() {
                    return Err(LoadError::UnknownArtwork { order, artwork });
                }
            }
        }
        Ok(())
    }

    /// Writes the whole gallery to `store`.
    pub async fn save<S>(&self, store: &S) -> Result<(), DomainError>
    where
        S: GalleryStore + ?Sized,
    {
        let document = self.to_document();
        store
            .save(&document)
            .await
            .map_err(DomainError::SaveFailed)?;
        tracing::info!(
            artists = document.artists.len(),
            artworks = document.artwork_count(),
            customers = document.customers.len(),
            orders = document.order_count(),
            "gallery saved"
        );
        Ok(())
    }

    /// Reads a gallery from `store`; None if nothing has been saved yet.
    pub async fn load<S>(store: &S, policy: GalleryPolicy) -> Result<Option<Self>, DomainError>
    where
        S: GalleryStore + ?Sized,
    {
        let Some(document) = store
            .load()
            .await
            .map_err(|e| DomainError::LoadFailed(e.into()))?
        else {
            tracing::info!("no saved gallery found");
            return Ok(None);
        };

        let gallery = Self::from_document(document, policy).map_err(DomainError::LoadFailed)?;
        tracing::info!(
            artists = gallery.artist_count(),
            customers = gallery.customer_count(),
            "gallery loaded"
        );
        Ok(Some(gallery))
    }
}

fn artwork_element((id, artwork): (ArtworkId, &Artwork)) -> ArtworkElement {
    ArtworkElement {
        id,
        description: artwork.description().to_string(),
        price: artwork.price().to_decimal_string(),
        display_dates: artwork.display_dates().to_vec(),
        artwork_type: artwork.artwork_type().to_string(),
        state: artwork.state().to_string(),
    }
}

fn restore_artwork(element: ArtworkElement) -> Result<Artwork, LoadError> {
    let id = element.id;
    let invalid = |source| LoadError::InvalidArtwork { id, source };

    let price = element
        .price
        .parse()
        .map_err(|source| LoadError::InvalidPrice { id, source })?;
    let artwork_type = element.artwork_type.parse().map_err(invalid)?;
    let state: ArtworkState = element.state.parse().map_err(invalid)?;
    if state == ArtworkState::InGallery && element.display_dates.is_empty() {
        return Err(LoadError::MissingDisplayDate { id });
    }

    Artwork::restore(
        &element.description,
        price,
        element.display_dates,
        artwork_type,
        state,
    )
    .map_err(invalid)
}
