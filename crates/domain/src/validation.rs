//! Text checks shared by artists and customers.

/// Longest artist or customer name accepted, in characters.
pub const MAX_NAME_CHARS: usize = 20;

/// Outcome of checking a proposed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameCheck<'a> {
    /// Nothing left after trimming.
    Blank,
    /// Longer than [`MAX_NAME_CHARS`] by `overflow` characters.
    TooLong { overflow: usize },
    /// The trimmed name.
    Valid(&'a str),
}

/// Trims `name` and checks it against the name rules.
pub(crate) fn check_name(name: &str) -> NameCheck<'_> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return NameCheck::Blank;
    }
    let length = trimmed.chars().count();
    if length > MAX_NAME_CHARS {
        return NameCheck::TooLong {
            overflow: length - MAX_NAME_CHARS,
        };
    }
    NameCheck::Valid(trimmed)
}

/// A validated, case-folded substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchTerm(String);

impl SearchTerm {
    /// Trims `pattern`; None if the result is empty or longer than `max_chars`.
    pub(crate) fn parse(pattern: &str, max_chars: usize) -> Option<Self> {
        let trimmed = pattern.trim();
        let length = trimmed.chars().count();
        if length == 0 || length > max_chars {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// Case-insensitive substring match.
    pub(crate) fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}
