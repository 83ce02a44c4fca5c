//! Types shared by every crate in the gallery workspace.

pub mod types;

pub use types::{ArtistId, ArtworkId, CustomerId, OrderId};
