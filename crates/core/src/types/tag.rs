//! Product marketing tags.

use serde::{Deserialize, Serialize};

/// A marketing tag attached to a product.
///
/// The set is closed; tags are multi-selected on the product form. The wire
/// form is the upper-case display string, including the embedded space in
/// `BEST SELLER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductTag {
    #[serde(rename = "BEST SELLER")]
    BestSeller,
    #[serde(rename = "TRENDING")]
    Trending,
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "HOT")]
    Hot,
    #[serde(rename = "SALE")]
    Sale,
    #[serde(rename = "LIMITED")]
    Limited,
}

impl ProductTag {
    /// All tags, in the order they appear on the form.
    pub const ALL: [Self; 6] = [
        Self::BestSeller,
        Self::Trending,
        Self::New,
        Self::Hot,
        Self::Sale,
        Self::Limited,
    ];

    /// Wire/display value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BestSeller => "BEST SELLER",
            Self::Trending => "TRENDING",
            Self::New => "NEW",
            Self::Hot => "HOT",
            Self::Sale => "SALE",
            Self::Limited => "LIMITED",
        }
    }
}

impl std::fmt::Display for ProductTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEST SELLER" => Ok(Self::BestSeller),
            "TRENDING" => Ok(Self::Trending),
            "NEW" => Ok(Self::New),
            "HOT" => Ok(Self::Hot),
            "SALE" => Ok(Self::Sale),
            "LIMITED" => Ok(Self::Limited),
            _ => Err(format!("invalid product tag: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_keeps_embedded_space() {
        let json = serde_json::to_string(&ProductTag::BestSeller).expect("serializes");
        assert_eq!(json, "\"BEST SELLER\"");
    }

    #[test]
    fn test_from_str_round_trips_all() {
        for tag in ProductTag::ALL {
            let parsed: ProductTag = tag.as_str().parse().expect("parses");
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("hot".parse::<ProductTag>().is_err());
    }
}
