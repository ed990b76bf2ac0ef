//! Domain primitives for the series list.

use std::str::FromStr;

/// Unique identifier for a tracked series.
///
/// Path parameters arrive as raw strings and are only parsed when they reach the
/// persistence layer, so a malformed id surfaces as a store error rather than a
/// routing rejection.
///
/// # Examples
///
/// ```rust
/// use series_tracker::domain::SeriesId;
///
/// let id: SeriesId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert!("abc".parse::<SeriesId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeriesId(i32);

impl SeriesId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

/// Raised when a path segment is not a valid integer id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input syntax for type integer: \"{0}\"")]
pub struct InvalidSeriesId(pub String);

impl FromStr for SeriesId {
    type Err = InvalidSeriesId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| InvalidSeriesId(s.to_string()))
    }
}
