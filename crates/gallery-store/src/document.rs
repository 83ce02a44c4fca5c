//! The persisted shape of a gallery.
//!
//! A document is one hierarchy rooted at the gallery:
//!
//! ```text
//! Gallery
//!   ArtworkIDCount, ArtistIDCount, OrderIDCount, CustomerIDCount
//!   Artist[] (ID)
//!     Name
//!     Artwork[] (ID)
//!       Description, Price, DisplayDate[], Type, State
//!   Customer[] (ID)
//!     Name
//!     Order[] (ID)
//!       ArtworkID, OrderDate
//! ```
//!
//! Prices, artwork types and states are kept as text so the store stays
//! ignorant of domain rules; the domain layer parses and validates them when
//! it rebuilds a gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ArtistId, ArtworkId, CustomerId, OrderId, Result};

/// Root element of a saved gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryDocument {
    #[serde(rename = "ArtworkIDCount")]
    pub artwork_id_count: u64,

    #[serde(rename = "ArtistIDCount")]
    pub artist_id_count: u64,

    #[serde(rename = "OrderIDCount")]
    pub order_id_count: u64,

    #[serde(rename = "CustomerIDCount")]
    pub customer_id_count: u64,

    #[serde(rename = "Artist", default)]
    pub artists: Vec<ArtistElement>,

    #[serde(rename = "Customer", default)]
    pub customers: Vec<CustomerElement>,
}

/// An artist and the artworks in their stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistElement {
    #[serde(rename = "ID")]
    pub id: ArtistId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Artwork", default)]
    pub artworks: Vec<ArtworkElement>,
}

/// A single artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkElement {
    #[serde(rename = "ID")]
    pub id: ArtworkId,

    #[serde(rename = "Description")]
    pub description: String,

    /// Decimal text such as `"12000.00"`.
    #[serde(rename = "Price")]
    pub price: String,

    /// Zero entries means the artwork has never been displayed.
    #[serde(rename = "DisplayDate", default)]
    pub display_dates: Vec<DateTime<Utc>>,

    #[serde(rename = "Type")]
    pub artwork_type: String,

    #[serde(rename = "State")]
    pub state: String,
}

/// A customer and their orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerElement {
    #[serde(rename = "ID")]
    pub id: CustomerId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Order", default)]
    pub orders: Vec<OrderElement>,
}

/// A purchase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderElement {
    #[serde(rename = "ID")]
    pub id: OrderId,

    #[serde(rename = "ArtworkID")]
    pub artwork_id: ArtworkId,

    #[serde(rename = "OrderDate")]
    pub order_date: DateTime<Utc>,
}

impl GalleryDocument {
    /// An empty document with every counter at its starting value.
    pub fn empty() -> Self {
        Self {
            artwork_id_count: 0,
            artist_id_count: 0,
            order_id_count: 0,
            customer_id_count: 0,
            artists: Vec::new(),
            customers: Vec::new(),
        }
    }

    /// Encodes the document as indented JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a document from JSON text.
    ///
    /// Missing required elements and values of the wrong shape are rejected
    /// here; domain-level validation happens when the gallery is rebuilt.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Total number of artworks across all artists.
    pub fn artwork_count(&self) -> usize {
        self.artists.iter().map(|a| a.artworks.len()).sum()
    }

    /// Total number of orders across all customers.
    pub fn order_count(&self) -> usize {
        self.customers.iter().map(|c| c.orders.len()).sum()
    }
}

impl Default for GalleryDocument {
    fn default() -> Self {
        Self::empty()
    }
}
