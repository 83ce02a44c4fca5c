use serde::{Deserialize, Serialize};

/// Declares an integer identifier issued by the gallery's counters.
///
/// Each kind gets its own type so an artwork id can never be passed where an
/// artist id is expected.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The first id a fresh gallery hands out.
            pub const START: Self = Self(0);

            /// The highest counter value a saved gallery may carry.
            ///
            /// Keeping counters at or below this leaves room for every id
            /// that can realistically be issued after a load without `next`
            /// overflowing.
            pub const MAX: Self = Self(i64::MAX as u64);

            /// Creates an id from its raw value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Returns the id that follows this one.
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::START
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of an artist, unique within a gallery.
    ArtistId
);

define_id!(
    /// Identifier of an artwork, unique across the whole gallery.
    ArtworkId
);

define_id!(
    /// Identifier of a customer, unique within a gallery.
    CustomerId
);

define_id!(
    /// Identifier of an order, unique across the whole gallery.
    OrderId
);
