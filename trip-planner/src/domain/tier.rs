//! Hotel comfort tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown hotel tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hotel tier: {0:?}")]
pub struct InvalidTier(String);

/// A comfort category applied uniformly to every hotel of a trip.
///
/// Each tier scales the base nightly price of a city's default hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelTier {
    Budget,
    #[default]
    Standard,
    Luxury,
}

impl HotelTier {
    pub const ALL: [HotelTier; 3] = [HotelTier::Budget, HotelTier::Standard, HotelTier::Luxury];

    /// Factor applied to the base nightly price.
    pub fn multiplier(self) -> f64 {
        match self {
            HotelTier::Budget => 0.8,
            HotelTier::Standard => 1.0,
            HotelTier::Luxury => 1.4,
        }
    }

    /// Star rating shown to users.
    pub fn stars(self) -> &'static str {
        match self {
            HotelTier::Budget => "⭐",
            HotelTier::Standard => "⭐⭐",
            HotelTier::Luxury => "⭐⭐⭐",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HotelTier::Budget => "budget",
            HotelTier::Standard => "standard",
            HotelTier::Luxury => "luxury",
        }
    }
}

impl FromStr for HotelTier {
    type Err = InvalidTier;

    /// Accepts the tier name (any case) or its star count (`1`-`3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" | "1" => Ok(HotelTier::Budget),
            "standard" | "2" => Ok(HotelTier::Standard),
            "luxury" | "3" => Ok(HotelTier::Luxury),
            _ => Err(InvalidTier(s.to_string())),
        }
    }
}

impl fmt::Display for HotelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
