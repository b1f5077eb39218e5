//! Trip requests as submitted by the presentation layer.

use std::collections::HashMap;

use crate::domain::{HotelTier, TransportId, TripLength};

/// How hotels are chosen for the cities of a trip.
#[derive(Debug, Clone, PartialEq)]
pub enum HotelSelection {
    /// Every city uses its default hotel, priced with the tier multiplier.
    Tier(HotelTier),
    /// Explicit hotel names keyed by city name, at their listed prices.
    /// Cities without an entry use their default hotel.
    PerCity(HashMap<String, String>),
}

impl HotelSelection {
    /// Multiplier applied to every nightly price.
    pub fn multiplier(&self) -> f64 {
        match self {
            HotelSelection::Tier(tier) => tier.multiplier(),
            HotelSelection::PerCity(_) => 1.0,
        }
    }

    /// The uniform tier, if this selection uses one.
    pub fn tier(&self) -> Option<HotelTier> {
        match self {
            HotelSelection::Tier(tier) => Some(*tier),
            HotelSelection::PerCity(_) => None,
        }
    }

    /// The explicitly chosen hotel for `city`, if any.
    pub fn choice_for(&self, city: &str) -> Option<&str> {
        match self {
            HotelSelection::Tier(_) => None,
            HotelSelection::PerCity(choices) => choices.get(city).map(String::as_str),
        }
    }
}

impl Default for HotelSelection {
    fn default() -> Self {
        HotelSelection::Tier(HotelTier::default())
    }
}

/// Everything needed to price one trip.
///
/// Identifiers are resolved against the catalogue by the planner; nothing
/// here is known to be valid until [`TripPlanner::compute`] succeeds.
///
/// [`TripPlanner::compute`]: super::TripPlanner::compute
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    /// Name of a catalogue route.
    pub route: String,
    /// One transport mode per leg, in travel order.
    pub legs: Vec<TransportId>,
    pub hotels: HotelSelection,
    pub length: TripLength,
    /// Maximum the traveller is willing to spend.
    pub budget: f64,
}

impl TripRequest {
    pub fn new(
        route: impl Into<String>,
        legs: Vec<TransportId>,
        hotels: HotelSelection,
        length: TripLength,
        budget: f64,
    ) -> Self {
        Self {
            route: route.into(),
            legs,
            hotels,
            length,
            budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_selection() {
        let selection = HotelSelection::Tier(HotelTier::Luxury);
        assert_eq!(selection.multiplier(), 1.4);
        assert_eq!(selection.tier(), Some(HotelTier::Luxury));
        assert_eq!(selection.choice_for("Sofia"), None);
    }

    #[test]
    fn per_city_selection() {
        let choices = HashMap::from([("Sofia".to_string(), "Vitosha Park Hotel".to_string())]);
        let selection = HotelSelection::PerCity(choices);
        assert_eq!(selection.multiplier(), 1.0);
        assert_eq!(selection.tier(), None);
        assert_eq!(selection.choice_for("Sofia"), Some("Vitosha Park Hotel"));
        assert_eq!(selection.choice_for("Belgrade"), None);
    }

    #[test]
    fn default_is_standard_tier() {
        assert_eq!(
            HotelSelection::default(),
            HotelSelection::Tier(HotelTier::Standard)
        );
    }
}
