//! Star ratings for testimonials.

use serde::{Deserialize, Serialize};

/// A 1-5 star review rating.
///
/// Serialized as a bare number. Out-of-range values, whether from the star
/// picker or a decoded document, are clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl From<u8> for Rating {
    fn from(stars: u8) -> Self {
        Self::clamped(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Rating {
    /// Lowest selectable rating.
    pub const MIN: Self = Self(1);
    /// Highest selectable rating.
    pub const MAX: Self = Self(5);

    /// Create a rating, clamping into the 1-5 range.
    #[must_use]
    pub const fn clamped(stars: u8) -> Self {
        if stars < 1 {
            Self::MIN
        } else if stars > 5 {
            Self::MAX
        } else {
            Self(stars)
        }
    }

    /// Create a rating, rejecting out-of-range values.
    #[must_use]
    pub const fn new(stars: u8) -> Option<Self> {
        if stars >= 1 && stars <= 5 {
            Some(Self(stars))
        } else {
            None
        }
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    /// New testimonial forms start at five stars.
    fn default() -> Self {
        Self::MAX
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(Rating::clamped(0), Rating::MIN);
        assert_eq!(Rating::clamped(3).stars(), 3);
        assert_eq!(Rating::clamped(9), Rating::MAX);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(5), Some(Rating::MAX));
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Rating::clamped(4)).expect("serializes");
        assert_eq!(json, "4");
    }

    #[test]
    fn test_deserialize_clamps_out_of_range_documents() {
        let low: Rating = serde_json::from_str("0").expect("decodes");
        assert_eq!(low, Rating::MIN);

        let high: Rating = serde_json::from_str("200").expect("decodes");
        assert_eq!(high, Rating::MAX);

        let in_range: Rating = serde_json::from_str("3").expect("decodes");
        assert_eq!(in_range.stars(), 3);
    }

    #[test]
    fn test_default_is_five_stars() {
        assert_eq!(Rating::default(), Rating::MAX);
    }
}
