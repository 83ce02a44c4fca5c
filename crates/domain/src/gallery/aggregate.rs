//! Gallery aggregate root.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::{ArtistId, ArtworkId, CustomerId, OrderId};

use super::{DuplicateScope, GALLERY_CAPACITY, GalleryError, GalleryPolicy};
use crate::artist::{Artist, ArtistError};
use crate::artwork::{Artwork, ArtworkState, Money};
use crate::customer::{Customer, Order};
use crate::validation::{MAX_NAME_CHARS, SearchTerm};

/// The gallery: every artist and customer, and the counters that issue
/// their ids.
///
/// All rules that span more than one entity are enforced here. Every check
/// runs before anything is changed, so a rejected operation leaves the
/// gallery (including its counters) exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    pub(super) artists: BTreeMap<ArtistId, Artist>,
    pub(super) customers: BTreeMap<CustomerId, Customer>,

    pub(super) next_artwork_id: ArtworkId,
    pub(super) next_artist_id: ArtistId,
    pub(super) next_order_id: OrderId,
    pub(super) next_customer_id: CustomerId,

    pub(super) policy: GalleryPolicy,
}

impl Gallery {
    /// Creates an empty gallery with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: GalleryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> GalleryPolicy {
        self.policy
    }
}

// Id issuance
impl Gallery {
    pub fn new_artist_id(&mut self) -> ArtistId {
        let id = self.next_artist_id;
        self.next_artist_id = id.next();
        id
    }

    pub fn new_artwork_id(&mut self) -> ArtworkId {
        let id = self.next_artwork_id;
        self.next_artwork_id = id.next();
        id
    }

    pub fn new_customer_id(&mut self) -> CustomerId {
        let id = self.next_customer_id;
        self.next_customer_id = id.next();
        id
    }

    pub fn new_order_id(&mut self) -> OrderId {
        let id = self.next_order_id;
        self.next_order_id = id.next();
        id
    }

    /// The id the next added artwork will receive.
    pub fn artwork_id_counter(&self) -> ArtworkId {
        self.next_artwork_id
    }

    pub fn artist_id_counter(&self) -> ArtistId {
        self.next_artist_id
    }

    pub fn customer_id_counter(&self) -> CustomerId {
        self.next_customer_id
    }

    pub fn order_id_counter(&self) -> OrderId {
        self.next_order_id
    }
}

// Artists and artworks
impl Gallery {
    pub fn add_artist(&mut self, artist: Artist) -> ArtistId {
        let id = self.new_artist_id();
        tracing::debug!(artist_id = %id, name = artist.name(), "artist added");
        self.artists.insert(id, artist);
        id
    }

    pub fn find_artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    /// Mutable access to an artist's own fields. Stock changes go through the
    /// gallery.
    pub fn artist_mut(&mut self, id: ArtistId) -> Option<&mut Artist> {
        self.artists.get_mut(&id)
    }

    pub fn artists(&self) -> impl Iterator<Item = (ArtistId, &Artist)> {
        self.artists.iter().map(|(id, artist)| (*id, artist))
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Case-insensitive substring search over artist names.
    pub fn find_artists_by_name(
        &self,
        pattern: &str,
    ) -> Result<Vec<(ArtistId, &Artist)>, GalleryError> {
        let term = SearchTerm::parse(pattern, MAX_NAME_CHARS).ok_or(
            GalleryError::InvalidSearchTerm {
                max: MAX_NAME_CHARS,
            },
        )?;
        Ok(self
            .artists()
            .filter(|(_, artist)| term.matches(artist.name()))
            .collect())
    }

    /// Artists whose name is shared with at least one other artist.
    pub fn check_duplicate_artists(&self) -> Vec<(ArtistId, &Artist)> {
        self.artists()
            .filter(|(id, artist)| {
                self.artists()
                    .any(|(other_id, other)| other_id != *id && other.is_duplicate_of(artist))
            })
            .collect()
    }

    /// Adds `artwork` to an artist's stock and returns its new id.
    pub fn add_artwork(
        &mut self,
        artist_id: ArtistId,
        mut artwork: Artwork,
    ) -> Result<ArtworkId, GalleryError> {
        let artist = self
            .artists
            .get(&artist_id)
            .ok_or(GalleryError::ArtistNotFound(artist_id))?;

        if artwork.is_in_gallery() && !self.has_gallery_space() {
            tracing::warn!(artist_id = %artist_id, "gallery is full, artwork rejected");
            return Err(GalleryError::CapacityExceeded {
                capacity: GALLERY_CAPACITY,
            });
        }

        if let Some(existing) = self.find_duplicate_artwork(artist_id, &artwork) {
            tracing::warn!(artist_id = %artist_id, existing = %existing, "duplicate artwork rejected");
            return Err(GalleryError::DuplicateArtwork { existing });
        }

        artist.ensure_quota_for(&artwork)?;

        let id = self.new_artwork_id();
        artwork.set_owner(artist_id);
        self.artists
            .get_mut(&artist_id)
            .ok_or(GalleryError::ArtistNotFound(artist_id))?
            .add_artwork(id, artwork)?;

        tracing::debug!(artwork_id = %id, artist_id = %artist_id, "artwork added");
        Ok(id)
    }

    fn find_duplicate_artwork(&self, artist_id: ArtistId, artwork: &Artwork) -> Option<ArtworkId> {
        match self.policy.duplicate_scope {
            DuplicateScope::Gallery => self
                .artists
                .values()
                .find_map(|artist| artist.check_duplicates(artwork)),
            DuplicateScope::Artist => self
                .artists
                .get(&artist_id)
                .and_then(|artist| artist.check_duplicates(artwork)),
        }
    }

    pub fn find_artwork(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artists
            .values()
            .find_map(|artist| artist.find_artwork(id))
    }

    /// Every artwork of every artist, grouped by artist.
    pub fn artworks(&self) -> impl Iterator<Item = (ArtworkId, &Artwork)> {
        self.artists.values().flat_map(|artist| artist.stock())
    }

    /// Searches each artist's stock by description.
    ///
    /// The pattern is validated by the per-artist search, so a gallery with
    /// no artists returns an empty list for any pattern.
    pub fn find_artworks_by_description(
        &self,
        pattern: &str,
    ) -> Result<Vec<(ArtworkId, &Artwork)>, GalleryError> {
        let mut found = Vec::new();
        for artist in self.artists.values() {
            found.extend(artist.find_artworks(pattern)?);
        }
        Ok(found)
    }

    /// Number of artworks on display across all artists.
    pub fn artworks_in_gallery(&self) -> usize {
        self.artists
            .values()
            .map(Artist::artworks_in_gallery_count)
            .sum()
    }

    fn has_gallery_space(&self) -> bool {
        self.artworks_in_gallery() < GALLERY_CAPACITY
    }

    /// In-gallery artworks whose display period has run out at `now`.
    pub fn expired_artworks(&self, now: DateTime<Utc>) -> Vec<(ArtworkId, &Artwork)> {
        self.artworks()
            .filter(|(_, artwork)| artwork.gallery_time_expired(now))
            .collect()
    }

    /// Moves an artwork to `new_state`.
    ///
    /// Entering the gallery is subject to the gallery capacity and the
    /// owning artist's quota, and records `date` as a display date.
    pub fn change_artwork_state(
        &mut self,
        id: ArtworkId,
        new_state: ArtworkState,
        date: DateTime<Utc>,
    ) -> Result<(), GalleryError> {
        let owner = self
            .owner_of(id)
            .ok_or(GalleryError::ArtworkNotFound(id))?;

        if new_state == ArtworkState::InGallery {
            if !self.has_gallery_space() {
                tracing::warn!(artwork_id = %id, "gallery is full, artwork not placed");
                return Err(GalleryError::CapacityExceeded {
                    capacity: GALLERY_CAPACITY,
                });
            }
            if self
                .artists
                .get(&owner)
                .is_some_and(|artist| !artist.has_gallery_space())
            {
                return Err(ArtistError::QuotaExceeded {
                    max: Artist::MAX_ARTWORKS_IN_GALLERY,
                }
                .into());
            }
        }

        let artwork = self.artwork_mut(id)?;
        let previous = artwork.state();
        match new_state {
            ArtworkState::InGallery => artwork.add_to_gallery(date)?,
            ArtworkState::Sold => artwork.sell()?,
            ArtworkState::ReturnedToArtist => artwork.return_to_artist()?,
            ArtworkState::AwaitingGalleryEntry => artwork.send_to_waiting_list()?,
        }

        tracing::debug!(artwork_id = %id, from = %previous, to = %new_state, "artwork state changed");
        Ok(())
    }

    /// Replaces an artwork's description; false if `description` is blank.
    pub fn update_artwork_description(
        &mut self,
        id: ArtworkId,
        description: &str,
    ) -> Result<bool, GalleryError> {
        Ok(self.artwork_mut(id)?.update_description(description)?)
    }

    pub fn update_artwork_price(&mut self, id: ArtworkId, price: Money) -> Result<(), GalleryError> {
        self.artwork_mut(id)?.update_price(price)?;
        Ok(())
    }

    fn owner_of(&self, id: ArtworkId) -> Option<ArtistId> {
        self.artists()
            .find(|(_, artist)| artist.find_artwork(id).is_some())
            .map(|(artist_id, _)| artist_id)
    }

    fn artwork_mut(&mut self, id: ArtworkId) -> Result<&mut Artwork, GalleryError> {
        self.artists
            .values_mut()
            .find_map(|artist| artist.artwork_mut(id))
            .ok_or(GalleryError::ArtworkNotFound(id))
    }
}

// Customers and orders
impl Gallery {
    pub fn add_customer(&mut self, customer: Customer) -> CustomerId {
        let id = self.new_customer_id();
        tracing::debug!(customer_id = %id, name = customer.name(), "customer added");
        self.customers.insert(id, customer);
        id
    }

    pub fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Mutable access to a customer's own fields. Orders go through the
    /// gallery.
    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.get_mut(&id)
    }

    pub fn customers(&self) -> impl Iterator<Item = (CustomerId, &Customer)> {
        self.customers.iter().map(|(id, customer)| (*id, customer))
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Case-insensitive substring search over customer names.
    pub fn find_customers_by_name(
        &self,
        pattern: &str,
    ) -> Result<Vec<(CustomerId, &Customer)>, GalleryError> {
        let term = SearchTerm::parse(pattern, MAX_NAME_CHARS).ok_or(
            GalleryError::InvalidSearchTerm {
                max: MAX_NAME_CHARS,
            },
        )?;
        Ok(self
            .customers()
            .filter(|(_, customer)| term.matches(customer.name()))
            .collect())
    }

    /// Customers whose name is shared with at least one other customer.
    pub fn check_duplicate_customers(&self) -> Vec<(CustomerId, &Customer)> {
        self.customers()
            .filter(|(id, customer)| {
                self.customers()
                    .any(|(other_id, other)| other_id != *id && other.is_duplicate_of(customer))
            })
            .collect()
    }

    /// Records an order for an existing artwork and returns its new id.
    pub fn add_order(
        &mut self,
        customer_id: CustomerId,
        mut order: Order,
    ) -> Result<OrderId, GalleryError> {
        if !self.customers.contains_key(&customer_id) {
            return Err(GalleryError::CustomerNotFound(customer_id));
        }

        if self.find_artwork(order.artwork_id()).is_none() {
            return Err(GalleryError::ArtworkNotFound(order.artwork_id()));
        }

        if let Some(existing) = self
            .customers
            .values()
            .find_map(|customer| customer.check_duplicates(&order))
        {
            tracing::warn!(customer_id = %customer_id, existing = %existing, "duplicate order rejected");
            return Err(GalleryError::DuplicateOrder { existing });
        }

        let id = self.new_order_id();
        order.set_customer(customer_id);
        let artwork_id = order.artwork_id();
        self.customers
            .get_mut(&customer_id)
            .ok_or(GalleryError::CustomerNotFound(customer_id))?
            .add_order(id, order);

        tracing::debug!(order_id = %id, customer_id = %customer_id, artwork_id = %artwork_id, "order added");
        Ok(id)
    }

    /// First order for `artwork_id`, searching customers in id order.
    pub fn find_order_by_artwork_id(
        &self,
        artwork_id: ArtworkId,
    ) -> Option<(CustomerId, OrderId, &Order)> {
        self.customers().find_map(|(customer_id, customer)| {
            customer
                .find_order_by_artwork_id(artwork_id)
                .map(|(order_id, order)| (customer_id, order_id, order))
        })
    }
}

impl std::fmt::Display for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No. of Artists: {}, No. of Customers: {}",
            self.artists.len(),
            self.customers.len()
        )
    }
}
