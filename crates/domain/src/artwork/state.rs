//! Artwork state machine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ArtworkError;

/// The state of an artwork in its consignment lifecycle.
///
/// State transitions:
/// ```text
/// add_to_gallery        AwaitingGalleryEntry | ReturnedToArtist ──► InGallery
/// sell                  InGallery | ReturnedToArtist            ──► Sold
/// return_to_artist      InGallery | AwaitingGalleryEntry        ──► ReturnedToArtist
/// send_to_waiting_list  InGallery | ReturnedToArtist            ──► AwaitingGalleryEntry
/// ```
///
/// `Sold` is a sink: every transition out of it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ArtworkState {
    /// Consigned but not yet on the floor, or sent back to the waiting list.
    #[default]
    AwaitingGalleryEntry,

    /// On display in the gallery.
    InGallery,

    /// Sold to a customer (terminal state).
    Sold,

    /// Taken off the floor and handed back; may be displayed again.
    ReturnedToArtist,
}

/// A requested lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    AddToGallery,
    Sell,
    ReturnToArtist,
    SendToWaitingList,
}

impl Transition {
    /// The state an artwork ends up in when this transition succeeds.
    pub fn target(&self) -> ArtworkState {
        match self {
            Transition::AddToGallery => ArtworkState::InGallery,
            Transition::Sell => ArtworkState::Sold,
            Transition::ReturnToArtist => ArtworkState::ReturnedToArtist,
            Transition::SendToWaitingList => ArtworkState::AwaitingGalleryEntry,
        }
    }

    /// The transition that moves an artwork into `state`.
    pub fn into_state(state: ArtworkState) -> Self {
        match state {
            ArtworkState::InGallery => Transition::AddToGallery,
            ArtworkState::Sold => Transition::Sell,
            ArtworkState::ReturnedToArtist => Transition::ReturnToArtist,
            ArtworkState::AwaitingGalleryEntry => Transition::SendToWaitingList,
        }
    }

    /// Returns the action name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::AddToGallery => "add to gallery",
            Transition::Sell => "sell",
            Transition::ReturnToArtist => "return to artist",
            Transition::SendToWaitingList => "send to waiting list",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ArtworkState {
    /// Checks `transition` against the transition table.
    ///
    /// Returns the resulting state, or the reason the move is illegal.
    pub fn apply(self, transition: Transition) -> Result<ArtworkState, &'static str> {
        use ArtworkState::*;
        use Transition::*;

        match (self, transition) {
            (AwaitingGalleryEntry | ReturnedToArtist, AddToGallery) => Ok(InGallery),
            (InGallery, AddToGallery) => Err("artwork is already in the gallery"),
            (Sold, AddToGallery) => Err("artwork has already been sold"),

            (InGallery | ReturnedToArtist, Sell) => Ok(Sold),
            (Sold, Sell) => Err("artwork is already sold"),
            (AwaitingGalleryEntry, Sell) => Err("artwork has never been displayed, cannot sell"),

            (InGallery | AwaitingGalleryEntry, ReturnToArtist) => Ok(ReturnedToArtist),
            (ReturnedToArtist, ReturnToArtist) => Err("artwork is already returned to the artist"),
            (Sold, ReturnToArtist) => Err("artwork has already been sold"),

            (InGallery | ReturnedToArtist, SendToWaitingList) => Ok(AwaitingGalleryEntry),
            (AwaitingGalleryEntry, SendToWaitingList) => {
                Err("artwork is already awaiting gallery entry")
            }
            (Sold, SendToWaitingList) => Err("artwork has already been sold"),
        }
    }

    /// Returns true if `transition` is allowed from this state.
    pub fn can(&self, transition: Transition) -> bool {
        self.apply(transition).is_ok()
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ArtworkState::Sold)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkState::AwaitingGalleryEntry => "AwaitingGalleryEntry",
            ArtworkState::InGallery => "InGallery",
            ArtworkState::Sold => "Sold",
            ArtworkState::ReturnedToArtist => "ReturnedToArtist",
        }
    }
}

impl std::fmt::Display for ArtworkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtworkState {
    type Err = ArtworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AwaitingGalleryEntry" => Ok(ArtworkState::AwaitingGalleryEntry),
            "InGallery" => Ok(ArtworkState::InGallery),
            "Sold" => Ok(ArtworkState::Sold),
            "ReturnedToArtist" => Ok(ArtworkState::ReturnedToArtist),
            other => Err(ArtworkError::InvalidState {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [ArtworkState; 4] = [
        ArtworkState::AwaitingGalleryEntry,
        ArtworkState::InGallery,
        ArtworkState::Sold,
        ArtworkState::ReturnedToArtist,
    ];

    const ALL_TRANSITIONS: [Transition; 4] = [
        Transition::AddToGallery,
        Transition::Sell,
        Transition::ReturnToArtist,
        Transition::SendToWaitingList,
    ];

    #[test]
    fn test_default_state_is_awaiting_entry() {
        assert_eq!(ArtworkState::default(), ArtworkState::AwaitingGalleryEntry);
    }

    #[test]
    fn test_add_to_gallery_sources() {
        assert!(ArtworkState::AwaitingGalleryEntry.can(Transition::AddToGallery));
        assert!(ArtworkState::ReturnedToArtist.can(Transition::AddToGallery));
        assert!(!ArtworkState::InGallery.can(Transition::AddToGallery));
        assert!(!ArtworkState::Sold.can(Transition::AddToGallery));
    }

    #[test]
    fn test_sell_sources() {
        assert!(ArtworkState::InGallery.can(Transition::Sell));
        assert!(ArtworkState::ReturnedToArtist.can(Transition::Sell));
        assert!(!ArtworkState::AwaitingGalleryEntry.can(Transition::Sell));
        assert!(!ArtworkState::Sold.can(Transition::Sell));
    }

    #[test]
    fn test_return_to_artist_sources() {
        assert!(ArtworkState::InGallery.can(Transition::ReturnToArtist));
        assert!(ArtworkState::AwaitingGalleryEntry.can(Transition::ReturnToArtist));
        assert!(!ArtworkState::ReturnedToArtist.can(Transition::ReturnToArtist));
        assert!(!ArtworkState::Sold.can(Transition::ReturnToArtist));
    }

    #[test]
    fn test_send_to_waiting_list_sources() {
        assert!(ArtworkState::InGallery.can(Transition::SendToWaitingList));
        assert!(ArtworkState::ReturnedToArtist.can(Transition::SendToWaitingList));
        assert!(!ArtworkState::AwaitingGalleryEntry.can(Transition::SendToWaitingList));
        assert!(!ArtworkState::Sold.can(Transition::SendToWaitingList));
    }

    #[test]
    fn test_sold_is_a_sink() {
        for transition in ALL_TRANSITIONS {
            assert!(ArtworkState::Sold.apply(transition).is_err());
        }
        assert!(ArtworkState::Sold.is_terminal());
        assert!(!ArtworkState::InGallery.is_terminal());
    }

    #[test]
    fn test_successful_transition_lands_on_target() {
        for state in ALL_STATES {
            for transition in ALL_TRANSITIONS {
                if let Ok(next) = state.apply(transition) {
                    assert_eq!(next, transition.target());
                }
            }
        }
    }

    #[test]
    fn test_into_state_is_inverse_of_target() {
        for state in ALL_STATES {
            assert_eq!(Transition::into_state(state).target(), state);
        }
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(
            ArtworkState::InGallery.apply(Transition::AddToGallery),
            Err("artwork is already in the gallery")
        );
        assert_eq!(
            ArtworkState::AwaitingGalleryEntry.apply(Transition::Sell),
            Err("artwork has never been displayed, cannot sell")
        );
    }

    #[test]
    fn test_display_and_parse() {
        for state in ALL_STATES {
            assert_eq!(state.to_string().parse::<ArtworkState>().unwrap(), state);
        }
        assert!(matches!(
            "OnLoan".parse::<ArtworkState>(),
            Err(ArtworkError::InvalidState { .. })
        ));
    }
}
