//! Planner configuration.

use std::fmt;
use std::str::FromStr;

use crate::domain::Coordinate;

/// Distance assumed for every leg by the fixed model (km).
pub const DEFAULT_LEG_KM: f64 = 300.0;

/// Error returned when parsing an unknown distance model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance model {input:?}: expected \"haversine\" or \"fixed:<km>\"")]
pub struct InvalidDistanceModel {
    input: String,
}

/// How the length of a leg is determined.
///
/// The two models are not numerically equivalent: the fixed model charges
/// every leg the same, while haversine charges by the straight-line
/// distance between the two cities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceModel {
    /// Every leg has the same length.
    Fixed { km: f64 },
    /// Great-circle distance between the leg's endpoints.
    Haversine,
}

impl DistanceModel {
    /// Length of the leg from `from` to `to` in km.
    pub fn leg_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        match *self {
            DistanceModel::Fixed { km } => km,
            DistanceModel::Haversine => from.haversine_km(to),
        }
    }
}

impl Default for DistanceModel {
    fn default() -> Self {
        DistanceModel::Fixed {
            km: DEFAULT_LEG_KM,
        }
    }
}

impl FromStr for DistanceModel {
    type Err = InvalidDistanceModel;

    /// Parses `haversine`, `fixed` (default length) or `fixed:<km>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDistanceModel {
            input: s.to_string(),
        };
        let s_trimmed = s.trim();

        if s_trimmed.eq_ignore_ascii_case("haversine") {
            return Ok(DistanceModel::Haversine);
        }
        if s_trimmed.eq_ignore_ascii_case("fixed") {
            return Ok(DistanceModel::default());
        }

        let (kind, km) = s_trimmed.split_once(':').ok_or_else(invalid)?;
        if !kind.eq_ignore_ascii_case("fixed") {
            return Err(invalid());
        }
        let km: f64 = km.trim().parse().map_err(|_| invalid())?;
        if !km.is_finite() || km < 0.0 {
            return Err(invalid());
        }
        Ok(DistanceModel::Fixed { km })
    }
}

impl fmt::Display for DistanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceModel::Fixed { km } => write!(f, "fixed:{km}"),
            DistanceModel::Haversine => f.write_str("haversine"),
        }
    }
}

/// Configuration parameters for trip planning.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// How leg distances are computed.
    pub distance: DistanceModel,
}

impl PlannerConfig {
    /// Create a new configuration with the given distance model.
    pub fn new(distance: DistanceModel) -> Self {
        Self { distance }
    }
}
