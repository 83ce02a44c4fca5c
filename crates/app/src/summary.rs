//! Point-in-time overview of a gallery.

use chrono::{DateTime, Utc};
use domain::{ArtistId, ArtworkId, CustomerId, Gallery};

/// Counts and flagged entities reported on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySummary {
    pub artists: usize,
    pub customers: usize,
    pub artworks: usize,
    pub artworks_in_gallery: usize,
    pub orders: usize,
    /// In-gallery artworks past their display period.
    pub expired_artworks: Vec<ArtworkId>,
    pub duplicate_artists: Vec<ArtistId>,
    pub duplicate_customers: Vec<CustomerId>,
}

impl GallerySummary {
    pub fn of(gallery: &Gallery, now: DateTime<Utc>) -> Self {
        Self {
            artists: gallery.artist_count(),
            customers: gallery.customer_count(),
            artworks: gallery.artworks().count(),
            artworks_in_gallery: gallery.artworks_in_gallery(),
            orders: gallery
                .customers()
                .map(|(_, customer)| customer.order_count())
                .sum(),
            expired_artworks: gallery
                .expired_artworks(now)
                .into_iter()
                .map(|(id, _)| id)
                .collect(),
            duplicate_artists: gallery
                .check_duplicate_artists()
                .into_iter()
                .map(|(id, _)| id)
                .collect(),
            duplicate_customers: gallery
                .check_duplicate_customers()
                .into_iter()
                .map(|(id, _)| id)
                .collect(),
        }
    }
}

impl std::fmt::Display for GallerySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No. of Artists: {}, No. of Customers: {}, Artworks: {} ({} in gallery, {} expired), Orders: {}",
            self.artists,
            self.customers,
            self.artworks,
            self.artworks_in_gallery,
            self.expired_artworks.len(),
            self.orders
        )
    }
}
