//! Gallery inventory application.
//!
//! Opens the gallery document named by the configuration, reports on it and
//! writes it back.

pub mod config;
pub mod error;
pub mod summary;

use chrono::Utc;
use domain::GalleryService;
use gallery_store::FileGalleryStore;

pub use config::Config;
pub use error::AppError;
pub use summary::GallerySummary;

/// Loads the gallery (or starts a new one), logs a summary and saves it.
#[tracing::instrument(skip(config), fields(file = %config.gallery_file.display()))]
pub async fn run(config: &Config) -> Result<GallerySummary, AppError> {
    let store = FileGalleryStore::new(&config.gallery_file);
    let service = GalleryService::open(store, config.policy()).await?;

    let summary = service
        .query(|gallery| GallerySummary::of(gallery, Utc::now()))
        .await;
    tracing::info!(%summary, "gallery opened");

    for id in &summary.expired_artworks {
        tracing::warn!(artwork_id = %id, "artwork has been on display past its period");
    }
    if !summary.duplicate_artists.is_empty() {
        tracing::warn!(ids = ?summary.duplicate_artists, "artists share a name");
    }
    if !summary.duplicate_customers.is_empty() {
        tracing::warn!(ids = ?summary.duplicate_customers, "customers share a name");
    }

    service.save().await?;
    Ok(summary)
}
