//! Artist entity implementation.

use std::collections::BTreeMap;

use common::ArtworkId;

use super::ArtistError;
use crate::artwork::Artwork;
use crate::validation::{NameCheck, SearchTerm, check_name};

/// An artist and the stock of artworks they have consigned.
///
/// The artist owns its artworks but not their ids: those are issued by the
/// gallery, which also enforces the gallery-wide rules before delegating
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    name: String,

    /// Artworks keyed by id, in id order.
    stock: BTreeMap<ArtworkId, Artwork>,
}

impl Artist {
    /// Most artworks one artist may have on display at a time.
    pub const MAX_ARTWORKS_IN_GALLERY: usize = 5;

    /// Creates an artist with an empty stock.
    pub fn new(name: &str) -> Result<Self, ArtistError> {
        Self::restore(name, BTreeMap::new())
    }

    pub(crate) fn restore(
        name: &str,
        stock: BTreeMap<ArtworkId, Artwork>,
    ) -> Result<Self, ArtistError> {
        let mut artist = Self {
            name: String::new(),
            stock,
        };
        if !artist.update_name(name)? {
            return Err(ArtistError::BlankName);
        }
        Ok(artist)
    }
}

// Query methods
impl Artist {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stock in id order.
    pub fn stock(&self) -> impl Iterator<Item = (ArtworkId, &Artwork)> {
        self.stock.iter().map(|(id, artwork)| (*id, artwork))
    }

    /// Returns the number of artworks in stock, whatever their state.
    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    /// Returns the number of this artist's artworks currently on display.
    pub fn artworks_in_gallery_count(&self) -> usize {
        self.stock.values().filter(|a| a.is_in_gallery()).count()
    }

    /// Returns true if another artwork can be put on display for this artist.
    pub fn has_gallery_space(&self) -> bool {
        self.artworks_in_gallery_count() < Self::MAX_ARTWORKS_IN_GALLERY
    }

    pub fn find_artwork(&self, id: ArtworkId) -> Option<&Artwork> {
        self.stock.get(&id)
    }

    /// Case-insensitive substring search over descriptions.
    ///
    /// The trimmed pattern must be between 1 and 140 characters.
    pub fn find_artworks(&self, pattern: &str) -> Result<Vec<(ArtworkId, &Artwork)>, ArtistError> {
        let term = SearchTerm::parse(pattern, Artwork::MAX_DESCRIPTION_CHARS).ok_or(
            ArtistError::InvalidSearchTerm {
                max: Artwork::MAX_DESCRIPTION_CHARS,
            },
        )?;

        Ok(self
            .stock()
            .filter(|(_, artwork)| term.matches(artwork.description()))
            .collect())
    }

    /// Returns the id of a stocked artwork with the same content as
    /// `artwork`, if there is one.
    pub fn check_duplicates(&self, artwork: &Artwork) -> Option<ArtworkId> {
        self.stock()
            .find(|(_, existing)| existing.is_duplicate_of(artwork))
            .map(|(id, _)| id)
    }

    /// Returns true if both artists have the same name.
    pub fn is_duplicate_of(&self, other: &Artist) -> bool {
        self.name == other.name
    }

    /// Fails if `artwork` would take this artist over the display quota.
    ///
    /// Only artworks arriving `InGallery` count against the quota.
    pub fn ensure_quota_for(&self, artwork: &Artwork) -> Result<(), ArtistError> {
        if artwork.is_in_gallery() && !self.has_gallery_space() {
            return Err(ArtistError::QuotaExceeded {
                max: Self::MAX_ARTWORKS_IN_GALLERY,
            });
        }
        Ok(())
    }
}

// Command methods
impl Artist {
    /// Replaces the name with the trimmed `name`.
    ///
    /// Returns false without changing anything when the text is blank.
    pub fn update_name(&mut self, name: &str) -> Result<bool, ArtistError> {
        match check_name(name) {
            NameCheck::Blank => Ok(false),
            NameCheck::TooLong { overflow } => Err(ArtistError::BadName { overflow }),
            NameCheck::Valid(name) => {
                self.name = name.to_string();
                Ok(true)
            }
        }
    }

    /// Adds `artwork` to the stock under `id`.
    pub(crate) fn add_artwork(&mut self, id: ArtworkId, artwork: Artwork) -> Result<(), ArtistError> {
        self.ensure_quota_for(&artwork)?;
        self.stock.insert(id, artwork);
        Ok(())
    }

    pub(crate) fn artwork_mut(&mut self, id: ArtworkId) -> Option<&mut Artwork> {
        self.stock.get_mut(&id)
    }
}

impl std::fmt::Display for Artist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Number of stock items: {}",
            self.name,
            self.stock.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::artwork::{ArtworkState, ArtworkType, Money};

    fn artwork(description: &str, state: ArtworkState) -> Artwork {
        Artwork::new(
            description,
            Money::from_pounds(100),
            Utc::now(),
            ArtworkType::Painting,
            state,
        )
        .unwrap()
    }

    #[test]
    fn test_new_trims_name() {
        let artist = Artist::new("  Rob Miles ").unwrap();
        assert_eq!(artist.name(), "Rob Miles");
        assert_eq!(artist.stock_count(), 0);
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(Artist::new(" ").unwrap_err(), ArtistError::BlankName);
    }

    #[test]
    fn test_update_name_too_long_reports_overflow() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        let err = artist.update_name(&"n".repeat(25)).unwrap_err();
        assert_eq!(err, ArtistError::BadName { overflow: 5 });
        assert_eq!(err.to_string(), "Name length is too long by 5 characters");
        assert_eq!(artist.name(), "Rob Miles");
    }

    #[test]
    fn test_update_name_blank_is_noop() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        assert_eq!(artist.update_name(""), Ok(false));
        assert_eq!(artist.name(), "Rob Miles");
        assert_eq!(artist.update_name("Robert Miles"), Ok(true));
        assert_eq!(artist.name(), "Robert Miles");
    }

    #[test]
    fn test_quota_applies_only_to_in_gallery_artworks() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        for i in 0..5 {
            artist
                .add_artwork(
                    ArtworkId::new(i),
                    artwork(&format!("Piece {i}"), ArtworkState::InGallery),
                )
                .unwrap();
        }
        assert_eq!(artist.artworks_in_gallery_count(), 5);
        assert!(!artist.has_gallery_space());

        let err = artist
            .add_artwork(ArtworkId::new(5), artwork("Piece 5", ArtworkState::InGallery))
            .unwrap_err();
        assert_eq!(err, ArtistError::QuotaExceeded { max: 5 });
        assert_eq!(artist.stock_count(), 5);

        artist
            .add_artwork(
                ArtworkId::new(6),
                artwork("Piece 6", ArtworkState::AwaitingGalleryEntry),
            )
            .unwrap();
        assert_eq!(artist.stock_count(), 6);
        assert_eq!(artist.artworks_in_gallery_count(), 5);
    }

    #[test]
    fn test_find_artwork_by_id() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        artist
            .add_artwork(ArtworkId::new(3), artwork("Mona Lisa", ArtworkState::InGallery))
            .unwrap();
        assert_eq!(
            artist.find_artwork(ArtworkId::new(3)).unwrap().description(),
            "Mona Lisa"
        );
        assert!(artist.find_artwork(ArtworkId::new(4)).is_none());
    }

    #[test]
    fn test_find_artworks_by_description() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        artist
            .add_artwork(ArtworkId::new(0), artwork("Mona Lisa", ArtworkState::InGallery))
            .unwrap();
        artist
            .add_artwork(
                ArtworkId::new(1),
                artwork("Lisa in Blue", ArtworkState::AwaitingGalleryEntry),
            )
            .unwrap();
        artist
            .add_artwork(ArtworkId::new(2), artwork("Haystacks", ArtworkState::InGallery))
            .unwrap();

        let found = artist.find_artworks("  LISA ").unwrap();
        let ids: Vec<_> = found.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![ArtworkId::new(0), ArtworkId::new(1)]);

        assert!(artist.find_artworks("Water Lilies").unwrap().is_empty());
    }

    #[test]
    fn test_find_artworks_rejects_bad_patterns() {
        let artist = Artist::new("Rob Miles").unwrap();
        assert_eq!(
            artist.find_artworks("   ").unwrap_err(),
            ArtistError::InvalidSearchTerm { max: 140 }
        );
        assert!(artist.find_artworks(&"x".repeat(141)).is_err());
    }

    #[test]
    fn test_check_duplicates() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        artist
            .add_artwork(ArtworkId::new(9), artwork("Mona Lisa", ArtworkState::InGallery))
            .unwrap();

        assert_eq!(
            artist.check_duplicates(&artwork("Mona Lisa", ArtworkState::InGallery)),
            Some(ArtworkId::new(9))
        );
        assert_eq!(
            artist.check_duplicates(&artwork("Mona Lisa", ArtworkState::AwaitingGalleryEntry)),
            None
        );
    }

    #[test]
    fn test_display() {
        let mut artist = Artist::new("Rob Miles").unwrap();
        artist
            .add_artwork(ArtworkId::new(0), artwork("Mona Lisa", ArtworkState::InGallery))
            .unwrap();
        assert_eq!(artist.to_string(), "Name: Rob Miles, Number of stock items: 1");
    }
}
