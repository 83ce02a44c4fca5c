//! Artwork entity implementation.

use chrono::{DateTime, Duration, Utc};
use common::ArtistId;

use super::{ArtworkError, ArtworkState, ArtworkType, Money, Transition};

/// A single consignment item.
///
/// An artwork validates its own fields and enforces its lifecycle; capacity
/// and duplicate rules live with the artist and the gallery that own it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// Short free-text description.
    description: String,

    /// Asking price.
    price: Money,

    /// Every date the artwork was placed in the gallery, oldest first.
    display_dates: Vec<DateTime<Utc>>,

    artwork_type: ArtworkType,

    state: ArtworkState,

    /// Artist whose stock holds this artwork; set when the gallery inserts it.
    owner: Option<ArtistId>,
}

impl Artwork {
    /// Longest description accepted, in characters.
    pub const MAX_DESCRIPTION_CHARS: usize = 140;

    /// Highest price accepted.
    pub const MAX_PRICE: Money = Money::from_pounds(1_000_000);

    /// How far ahead of now a display date may lie.
    pub const MAX_DISPLAY_DAYS_DIFFERENCE: i64 = 3650;

    /// Length of a display period before an artwork is due off the floor.
    pub const MAX_DISPLAY_DAYS: i64 = 14;

    /// Creates a new artwork.
    ///
    /// `display_date` is range-checked and recorded only when the artwork
    /// starts out `InGallery`.
    pub fn new(
        description: &str,
        price: Money,
        display_date: DateTime<Utc>,
        artwork_type: ArtworkType,
        state: ArtworkState,
    ) -> Result<Self, ArtworkError> {
        if !Self::date_within_range(display_date) {
            return Err(Self::bad_date(display_date));
        }

        let display_dates = if state == ArtworkState::InGallery {
            vec![display_date]
        } else {
            Vec::new()
        };

        Self::restore(description, price, display_dates, artwork_type, state)
    }

    /// Rebuilds an artwork from saved fields.
    ///
    /// Description and price are validated again; saved display dates are
    /// taken as they are.
    pub(crate) fn restore(
        description: &str,
        price: Money,
        display_dates: Vec<DateTime<Utc>>,
        artwork_type: ArtworkType,
        state: ArtworkState,
    ) -> Result<Self, ArtworkError> {
        let mut artwork = Self {
            description: String::new(),
            price: Money::zero(),
            display_dates,
            artwork_type,
            state,
            owner: None,
        };
        if !artwork.update_description(description)? {
            return Err(ArtworkError::BlankDescription);
        }
        artwork.update_price(price)?;
        Ok(artwork)
    }

    fn bad_date(date: DateTime<Utc>) -> ArtworkError {
        ArtworkError::BadDate {
            date,
            max_days: Self::MAX_DISPLAY_DAYS_DIFFERENCE,
        }
    }

    /// Returns true if `date` is no more than 3650 days after now.
    ///
    /// There is no lower bound: back-dated entries are accepted.
    pub fn date_within_range(date: DateTime<Utc>) -> bool {
        Self::date_within_range_of(date, Utc::now())
    }

    /// Same as [`Artwork::date_within_range`] against an explicit `now`.
    pub fn date_within_range_of(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        date - now <= Duration::days(Self::MAX_DISPLAY_DAYS_DIFFERENCE)
    }
}

// Query methods
impl Artwork {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns every display date, oldest first.
    pub fn display_dates(&self) -> &[DateTime<Utc>] {
        &self.display_dates
    }

    /// Returns the date of the current or latest gallery placement.
    pub fn most_recent_display_date(&self) -> Option<DateTime<Utc>> {
        self.display_dates.last().copied()
    }

    pub fn artwork_type(&self) -> ArtworkType {
        self.artwork_type
    }

    pub fn state(&self) -> ArtworkState {
        self.state
    }

    /// Returns true if the artwork is on display.
    pub fn is_in_gallery(&self) -> bool {
        self.state == ArtworkState::InGallery
    }

    /// Returns the owning artist, if the artwork has been added to a gallery.
    pub fn owner(&self) -> Option<ArtistId> {
        self.owner
    }

    /// Returns true if both artworks have the same description, price, type
    /// and state. Ids, owners and display history are not compared.
    pub fn is_duplicate_of(&self, other: &Artwork) -> bool {
        self.description == other.description
            && self.price == other.price
            && self.artwork_type == other.artwork_type
            && self.state == other.state
    }

    /// Returns true if the artwork has been on the floor for longer than
    /// its display period.
    ///
    /// Only artworks currently in the gallery can expire. Sold, returned and
    /// waiting artworks report false whatever their display dates say.
    pub fn gallery_time_expired(&self, now: DateTime<Utc>) -> bool {
        self.time_since_expired(now)
            .is_some_and(|overdue| overdue > Duration::zero())
    }

    /// How far past its display period an in-gallery artwork is.
    ///
    /// Negative while the period is still running. None if the artwork is not
    /// in the gallery.
    pub fn time_since_expired(&self, now: DateTime<Utc>) -> Option<Duration> {
        if !self.is_in_gallery() {
            return None;
        }
        let displayed = self.most_recent_display_date()?;
        Some(now - displayed - Duration::days(Self::MAX_DISPLAY_DAYS))
    }
}

// Command methods
impl Artwork {
    /// Replaces the description with the trimmed `description`.
    ///
    /// Returns false without changing anything when the text is blank.
    pub fn update_description(&mut self, description: &str) -> Result<bool, ArtworkError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_DESCRIPTION_CHARS {
            return Err(ArtworkError::DescriptionTooLong {
                overflow: length - Self::MAX_DESCRIPTION_CHARS,
            });
        }

        self.description = trimmed.to_string();
        Ok(true)
    }

    /// Sets the price; it must be above zero and at most the maximum price.
    pub fn update_price(&mut self, price: Money) -> Result<(), ArtworkError> {
        if !price.is_positive() {
            return Err(ArtworkError::PriceTooLow { price });
        }
        if price > Self::MAX_PRICE {
            return Err(ArtworkError::PriceTooHigh {
                price,
                max: Self::MAX_PRICE,
            });
        }

        self.price = price;
        Ok(())
    }

    /// Places the artwork in the gallery, recording `date` as a display date.
    pub fn add_to_gallery(&mut self, date: DateTime<Utc>) -> Result<(), ArtworkError> {
        let next = self.check(Transition::AddToGallery)?;
        if !Self::date_within_range(date) {
            return Err(Self::bad_date(date));
        }

        self.display_dates.push(date);
        self.state = next;
        Ok(())
    }

    /// Marks the artwork as sold.
    pub fn sell(&mut self) -> Result<(), ArtworkError> {
        self.state = self.check(Transition::Sell)?;
        Ok(())
    }

    /// Hands the artwork back to its artist.
    pub fn return_to_artist(&mut self) -> Result<(), ArtworkError> {
        self.state = self.check(Transition::ReturnToArtist)?;
        Ok(())
    }

    /// Puts the artwork back in the queue for gallery entry.
    pub fn send_to_waiting_list(&mut self) -> Result<(), ArtworkError> {
        self.state = self.check(Transition::SendToWaitingList)?;
        Ok(())
    }

    fn check(&self, transition: Transition) -> Result<ArtworkState, ArtworkError> {
        self.state
            .apply(transition)
            .map_err(|reason| ArtworkError::BadStateTransition {
                current_state: self.state,
                transition,
                reason,
            })
    }

    pub(crate) fn set_owner(&mut self, owner: ArtistId) {
        self.owner = Some(owner);
    }
}

impl std::fmt::Display for Artwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Description: {}, Price: {}", self.description, self.price)?;
        if self.is_in_gallery()
            && let Some(date) = self.most_recent_display_date()
        {
            write!(f, ", Display Date: {}", date.format("%Y-%m-%d %H:%M"))?;
        }
        write!(
            f,
            ", Artwork type: {}, Artwork state: {}",
            self.artwork_type, self.state
        )
    }
}
