//! Computed trip plans.

use crate::domain::{Coordinate, Food, HotelTier, TransportId};

/// Itemized trip cost.
///
/// Only the three components are stored; the total is always derived from
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostBreakdown {
    pub transport: f64,
    pub food: f64,
    pub hotel: f64,
}

impl CostBreakdown {
    /// Sum of transport, food and hotel costs.
    pub fn total(&self) -> f64 {
        self.transport + self.food + self.hotel
    }
}

/// The hotel a traveller stays at in one city, after tier pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHotel {
    pub name: String,
    /// Price per night actually charged.
    pub nightly_price: f64,
    /// Listed price before the tier multiplier.
    pub base_price: f64,
    pub booking_link: Option<String>,
    /// Present when the price came from a uniform tier.
    pub tier: Option<HotelTier>,
}

/// The hop that brought the traveller into a city.
#[derive(Debug, Clone, PartialEq)]
pub struct LegInfo {
    pub from: String,
    pub to: String,
    pub mode: TransportId,
    pub mode_name: String,
    pub icon: String,
    pub distance_km: f64,
    pub cost: f64,
}

/// One city of the itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryEntry {
    pub city: String,
    pub coordinate: Coordinate,
    pub sight: String,
    pub hotel: ResolvedHotel,
    pub food: Food,
    /// The leg arriving here; `None` for the starting city.
    pub arrival: Option<LegInfo>,
    /// What staying here costs for the whole trip (hotel + food).
    pub stay_cost: f64,
}

/// Per-city plan in travel order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    entries: Vec<ItineraryEntry>,
}

impl Itinerary {
    pub(crate) fn new(entries: Vec<ItineraryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ItineraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The legs between consecutive cities, in travel order.
    pub fn legs(&self) -> impl Iterator<Item = &LegInfo> {
        self.entries.iter().filter_map(|e| e.arrival.as_ref())
    }
}

/// A transport icon placed halfway along a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LegMarker {
    pub position: Coordinate,
    pub icon: String,
}

/// Geometry for drawing the route on a map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapPath {
    /// City coordinates in travel order.
    pub points: Vec<Coordinate>,
    /// One marker per leg.
    pub markers: Vec<LegMarker>,
}

/// The outcome of planning a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripResult {
    pub route: String,
    pub days: u32,
    pub budget: f64,
    pub costs: CostBreakdown,
    pub itinerary: Itinerary,
    pub path: MapPath,
}

impl TripResult {
    pub fn total_cost(&self) -> f64 {
        self.costs.total()
    }

    /// True if the trip costs no more than the budget.
    pub fn within_budget(&self) -> bool {
        self.total_cost() <= self.budget
    }

    /// Budget left after paying for the trip; negative when over budget.
    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.total_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(costs: CostBreakdown, budget: f64) -> TripResult {
        TripResult {
            route: "R".into(),
            days: 1,
            budget,
            costs,
            itinerary: Itinerary::default(),
            path: MapPath::default(),
        }
    }

    #[test]
    fn total_is_sum_of_parts() {
        let costs = CostBreakdown {
            transport: 150.0,
            food: 240.0,
            hotel: 780.0,
        };
        assert_eq!(costs.total(), 1170.0);
        assert_eq!(CostBreakdown::default().total(), 0.0);
    }

    #[test]
    fn budget_boundary_is_inclusive() {
        let costs = CostBreakdown {
            transport: 100.0,
            food: 50.0,
            hotel: 50.0,
        };
        assert!(result(costs, 200.0).within_budget());
        assert!(result(costs, 250.0).within_budget());
        assert!(!result(costs, 199.99).within_budget());
    }

    #[test]
    fn remaining_budget_can_be_negative() {
        let costs = CostBreakdown {
            transport: 100.0,
            food: 0.0,
            hotel: 0.0,
        };
        assert_eq!(result(costs, 150.0).remaining_budget(), 50.0);
        assert_eq!(result(costs, 40.0).remaining_budget(), -60.0);
    }
}
