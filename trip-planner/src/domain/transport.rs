//! Transport modes and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid transport identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport id: {reason}")]
pub struct InvalidTransportId {
    reason: &'static str,
}

/// Identifier of a transport mode, e.g. `car`, `train` or `plane`.
///
/// Identifiers are 1 to 32 characters of lowercase ASCII letters, digits
/// and `-`. Surrounding whitespace and uppercase letters are rejected by
/// [`TransportId::parse`]; use [`TransportId::parse_normalized`] for user
/// input.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::TransportId;
///
/// let car = TransportId::parse("car").unwrap();
/// assert_eq!(car.as_str(), "car");
///
/// assert!(TransportId::parse("Car").is_err());
/// assert_eq!(TransportId::parse_normalized(" Car ").unwrap(), car);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransportId(String);

impl TransportId {
    const MAX_LEN: usize = 32;

    /// Parse an identifier that is already in canonical form.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportId> {
        if s.is_empty() {
            return Err(InvalidTransportId {
                reason: "must not be empty",
            });
        }
        if s.len() > Self::MAX_LEN {
            return Err(InvalidTransportId {
                reason: "must be at most 32 characters",
            });
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(InvalidTransportId {
                reason: "must be lowercase ASCII letters, digits or '-'",
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Parse an identifier from user input, trimming and lowercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidTransportId> {
        Self::parse(&s.trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TransportId {
    type Error = InvalidTransportId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TransportId> for String {
    fn from(id: TransportId) -> Self {
        id.0
    }
}

impl fmt::Debug for TransportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransportId({})", self.0)
    }
}

impl fmt::Display for TransportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A way of travelling between two cities.
///
/// Modes differ only in their data: a price per kilometre and the label
/// and icon shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportMode {
    pub id: TransportId,
    /// Display name, e.g. "Train"
    pub name: String,
    /// Price per distance unit (km)
    pub price_per_km: f64,
    /// Icon shown on the map and in the itinerary
    pub icon: String,
}

impl TransportMode {
    pub fn new(
        id: TransportId,
        name: impl Into<String>,
        price_per_km: f64,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price_per_km,
            icon: icon.into(),
        }
    }

    /// Cost of travelling `distance_km` with this mode.
    pub fn cost(&self, distance_km: f64) -> f64 {
        self.price_per_km * distance_km
    }
}
