//! Artwork entity and related types.

mod entity;
mod state;
mod value_objects;

pub use entity::Artwork;
pub use state::{ArtworkState, Transition};
pub use value_objects::{ArtworkType, Money, ParseMoneyError};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during artwork operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtworkError {
    /// Description is empty after trimming.
    #[error("Description is blank")]
    BlankDescription,

    /// Description exceeds the character limit.
    #[error("Description length is too long by {overflow} characters")]
    DescriptionTooLong { overflow: usize },

    /// Price is zero or negative.
    #[error("Price: {price}, is at or below 0")]
    PriceTooLow { price: Money },

    /// Price exceeds the maximum.
    #[error("Price: {price}, is too high. Above {max}")]
    PriceTooHigh { price: Money, max: Money },

    /// Display date is too far in the future.
    #[error("Display date {date} is more than {max_days} days in the future")]
    BadDate { date: DateTime<Utc>, max_days: i64 },

    /// The artwork's state does not allow the requested transition.
    #[error("Invalid state transition: cannot {transition} from {current_state} state ({reason})")]
    BadStateTransition {
        current_state: ArtworkState,
        transition: Transition,
        reason: &'static str,
    },

    /// Text does not name an artwork type.
    #[error("Unknown artwork type: {value:?}")]
    InvalidType { value: String },

    /// Text does not name an artwork state.
    #[error("Unknown artwork state: {value:?}")]
    InvalidState { value: String },
}

impl ArtworkError {
    /// Returns true for a rejected description (blank or too long).
    pub fn is_bad_description(&self) -> bool {
        matches!(
            self,
            ArtworkError::BlankDescription | ArtworkError::DescriptionTooLong { .. }
        )
    }

    /// Returns true for a price outside the allowed range.
    pub fn is_bad_price(&self) -> bool {
        matches!(
            self,
            ArtworkError::PriceTooLow { .. } | ArtworkError::PriceTooHigh { .. }
        )
    }
}
