use std::str::FromStr;

use thiserror::Error;

/// Which artworks a new artwork is compared against for duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateScope {
    /// Every artwork of every artist.
    #[default]
    Gallery,
    /// Only the receiving artist's stock.
    Artist,
}

impl DuplicateScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateScope::Gallery => "gallery",
            DuplicateScope::Artist => "artist",
        }
    }
}

impl std::fmt::Display for DuplicateScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown duplicate scope: {0:?} (expected \"gallery\" or \"artist\")")]
pub struct ParseDuplicateScopeError(String);

impl FromStr for DuplicateScope {
    type Err = ParseDuplicateScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gallery" => Ok(DuplicateScope::Gallery),
            "artist" => Ok(DuplicateScope::Artist),
            _ => Err(ParseDuplicateScopeError(s.to_string())),
        }
    }
}

/// Tunable gallery rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryPolicy {
    pub duplicate_scope: DuplicateScope,
}

impl GalleryPolicy {
    pub fn new(duplicate_scope: DuplicateScope) -> Self {
        Self { duplicate_scope }
    }
}
