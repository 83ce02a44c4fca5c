//! Value objects for the artwork domain.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ArtworkError;

/// Money amount represented in pence to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in pence (e.g., 1000 = £10.00)
    pence: i64,
}

impl Money {
    /// Creates a new Money amount from pence.
    pub const fn from_pence(pence: i64) -> Self {
        Self { pence }
    }

    /// Creates a new Money amount from a whole number of pounds.
    pub const fn from_pounds(pounds: i64) -> Self {
        Self {
            pence: pounds * 100,
        }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { pence: 0 }
    }

    /// Returns the amount in pence.
    pub fn pence(&self) -> i64 {
        self.pence
    }

    /// Returns the pound portion (whole number).
    pub fn pounds(&self) -> i64 {
        self.pence / 100
    }

    /// Returns the pence portion (remainder after pounds).
    pub fn pence_part(&self) -> i64 {
        self.pence.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.pence > 0
    }

    /// Formats the amount as plain decimal text, e.g. `"12000.00"`.
    ///
    /// This is the form used in saved documents; [`FromStr`] accepts it back.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.pence < 0 { "-" } else { "" };
        format!("{sign}{}.{:02}", self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pence < 0 {
            write!(f, "-£{}.{:02}", self.pounds().abs(), self.pence_part())
        } else {
            write!(f, "£{}.{:02}", self.pounds(), self.pence_part())
        }
    }
}

/// Error returned when decimal text is not a valid money amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid money amount: {0:?}")]
pub struct ParseMoneyError(pub String);

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses decimal text with at most two fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoneyError(s.to_string());
        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty()
            || fraction.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let pounds: i64 = whole.parse().map_err(|_| invalid())?;
        let mut pence: i64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| invalid())?
        };
        if fraction.len() == 1 {
            pence *= 10;
        }

        let total = pounds
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .ok_or_else(invalid)?;
        Ok(Self::from_pence(if negative { -total } else { total }))
    }
}

/// The kind of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtworkType {
    Painting,
    Sculpture,
}

impl ArtworkType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkType::Painting => "Painting",
            ArtworkType::Sculpture => "Sculpture",
        }
    }
}

impl std::fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtworkType {
    type Err = ArtworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Painting" => Ok(ArtworkType::Painting),
            "Sculpture" => Ok(ArtworkType::Sculpture),
            other => Err(ArtworkError::InvalidType {
                value: other.to_string(),
            }),
        }
    }
}
