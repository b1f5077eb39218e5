//! Data transfer objects for web requests and responses.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::limits::FormLimits;
use crate::domain::{HotelTier, TransportId, TripLength};
use crate::planner::{
    HotelSelection, ItineraryEntry, LegInfo, LegMarker, ResolvedHotel, TripRequest, TripResult,
};

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Catalogue route name
    pub route: String,

    /// Transport mode id per leg, in travel order
    pub legs: Vec<String>,

    /// Uniform hotel tier (name or star count)
    pub tier: Option<String>,

    /// Explicit hotel per city; mutually exclusive with `tier`
    pub hotels: Option<HashMap<String, String>>,

    /// Trip length in days
    pub days: Option<u32>,

    /// Check-in date, YYYY-MM-DD
    pub check_in: Option<String>,

    /// Check-out date, YYYY-MM-DD
    pub check_out: Option<String>,

    /// Budget ceiling
    pub budget: f64,
}

impl PlanTripRequest {
    /// Validate raw input and build a planner request.
    ///
    /// Only presentation-level checks happen here (ranges, formats, which
    /// fields go together). Catalogue lookups are left to the planner.
    pub fn into_trip_request(self, limits: &FormLimits) -> Result<TripRequest, String> {
        let legs = self
            .legs
            .iter()
            .map(|leg| {
                TransportId::parse_normalized(leg).map_err(|e| format!("leg {leg:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let hotels = match (self.tier, self.hotels) {
            (Some(_), Some(_)) => return Err("choose either a tier or per-city hotels".into()),
            (None, Some(choices)) => HotelSelection::PerCity(choices),
            (Some(tier), None) => {
                HotelSelection::Tier(tier.parse::<HotelTier>().map_err(|e| e.to_string())?)
            }
            (None, None) => HotelSelection::Tier(HotelTier::default()),
        };

        let length = match (self.days, self.check_in, self.check_out) {
            (Some(days), None, None) => TripLength::Days(limits.check_days(days)?),
            (None, Some(check_in), Some(check_out)) => {
                let length = TripLength::Dates {
                    check_in: parse_date(&check_in)?,
                    check_out: parse_date(&check_out)?,
                };
                // Reversed dates are the planner's to reject; only cap the length here.
                if let Ok(days) = length.days() {
                    limits.check_days(days)?;
                }
                length
            }
            _ => return Err("give either days or both check_in and check_out".into()),
        };

        let budget = limits.check_budget(self.budget)?;

        Ok(TripRequest::new(self.route, legs, hotels, length, budget))
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

/// Itemized costs.
#[derive(Debug, Serialize)]
pub struct CostResult {
    pub transport: f64,
    pub food: f64,
    pub hotel: f64,
    pub total: f64,
}

/// The hotel chosen for a city.
#[derive(Debug, Serialize)]
pub struct HotelResult {
    pub name: String,
    pub nightly_price: f64,
    pub base_price: f64,
    pub booking_link: Option<String>,
    pub tier: Option<HotelTier>,
}

/// Food in a city.
#[derive(Debug, Serialize)]
pub struct FoodResult {
    pub description: String,
    pub price_per_day: f64,
}

/// A transport leg between two cities.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub from: String,
    pub to: String,
    pub mode: String,
    pub mode_name: String,
    pub icon: String,
    pub distance_km: f64,
    pub cost: f64,
}

/// One city of the itinerary.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub city: String,
    pub coordinate: [f64; 2],
    pub sight: String,
    pub hotel: HotelResult,
    pub food: FoodResult,
    pub stay_cost: f64,
    /// Leg arriving at this city; null for the first city
    pub arrival: Option<LegResult>,
}

/// Transport icon at the middle of a leg.
#[derive(Debug, Serialize)]
pub struct MarkerResult {
    pub position: [f64; 2],
    pub icon: String,
}

/// Map geometry, coordinates as [lon, lat].
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub points: Vec<[f64; 2]>,
    pub markers: Vec<MarkerResult>,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    pub route: String,
    pub days: u32,
    pub budget: f64,
    pub costs: CostResult,
    pub within_budget: bool,
    pub remaining_budget: f64,
    pub itinerary: Vec<StopResult>,
    pub path: PathResult,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PlanTripResponse {
    /// Create from a planner result.
    pub fn from_result(result: &TripResult) -> Self {
        Self {
            route: result.route.clone(),
            days: result.days,
            budget: result.budget,
            costs: CostResult {
                transport: result.costs.transport,
                food: result.costs.food,
                hotel: result.costs.hotel,
                total: result.total_cost(),
            },
            within_budget: result.within_budget(),
            remaining_budget: result.remaining_budget(),
            itinerary: result
                .itinerary
                .entries()
                .iter()
                .map(StopResult::from_entry)
                .collect(),
            path: PathResult {
                points: result.path.points.iter().map(|p| p.as_pair()).collect(),
                markers: result
                    .path
                    .markers
                    .iter()
                    .map(MarkerResult::from_marker)
                    .collect(),
            },
        }
    }
}

impl StopResult {
    fn from_entry(entry: &ItineraryEntry) -> Self {
        Self {
            city: entry.city.clone(),
            coordinate: entry.coordinate.as_pair(),
            sight: entry.sight.clone(),
            hotel: HotelResult::from_hotel(&entry.hotel),
            food: FoodResult {
                description: entry.food.description.clone(),
                price_per_day: entry.food.price_per_day,
            },
            stay_cost: entry.stay_cost,
            arrival: entry.arrival.as_ref().map(LegResult::from_leg),
        }
    }
}

impl HotelResult {
    fn from_hotel(hotel: &ResolvedHotel) -> Self {
        Self {
            name: hotel.name.clone(),
            nightly_price: hotel.nightly_price,
            base_price: hotel.base_price,
            booking_link: hotel.booking_link.clone(),
            tier: hotel.tier,
        }
    }
}

impl LegResult {
    fn from_leg(leg: &LegInfo) -> Self {
        Self {
            from: leg.from.clone(),
            to: leg.to.clone(),
            mode: leg.mode.to_string(),
            mode_name: leg.mode_name.clone(),
            icon: leg.icon.clone(),
            distance_km: leg.distance_km,
            cost: leg.cost,
        }
    }
}

impl MarkerResult {
    fn from_marker(marker: &LegMarker) -> Self {
        Self {
            position: marker.position.as_pair(),
            icon: marker.icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> PlanTripRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn days_and_tier() {
        let req = request(
            r#"{"route": "R", "legs": ["car", " Train "], "tier": "luxury", "days": 7, "budget": 2500}"#,
        );
        let trip = req.into_trip_request(&FormLimits::default()).unwrap();
        assert_eq!(trip.route, "R");
        assert_eq!(
            trip.legs,
            vec![
                TransportId::parse("car").unwrap(),
                TransportId::parse("train").unwrap()
            ]
        );
        assert_eq!(trip.hotels, HotelSelection::Tier(HotelTier::Luxury));
        assert_eq!(trip.length, TripLength::Days(7));
        assert_eq!(trip.budget, 2500.0);
    }

    #[test]
    fn tier_defaults_to_standard() {
        let req = request(r#"{"route": "R", "legs": [], "days": 3, "budget": 500}"#);
        let trip = req.into_trip_request(&FormLimits::default()).unwrap();
        assert_eq!(trip.hotels, HotelSelection::Tier(HotelTier::Standard));
    }

    #[test]
    fn per_city_hotels() {
        let req = request(
            r#"{"route": "R", "legs": ["car"], "hotels": {"Sofia": "Vitosha Park Hotel"}, "days": 3, "budget": 500}"#,
        );
        let trip = req.into_trip_request(&FormLimits::default()).unwrap();
        assert_eq!(trip.hotels.choice_for("Sofia"), Some("Vitosha Park Hotel"));
    }

    #[test]
    fn tier_and_hotels_conflict() {
        let req = request(
            r#"{"route": "R", "legs": [], "tier": "budget", "hotels": {}, "days": 3, "budget": 500}"#,
        );
        assert!(req.into_trip_request(&FormLimits::default()).is_err());
    }

    #[test]
    fn dates() {
        let req = request(
            r#"{"route": "R", "legs": [], "check_in": "2024-06-01", "check_out": "2024-06-05", "budget": 500}"#,
        );
        let trip = req.into_trip_request(&FormLimits::default()).unwrap();
        assert_eq!(trip.length.days(), Ok(4));
    }

    #[test]
    fn reversed_dates_pass_through() {
        let req = request(
            r#"{"route": "R", "legs": [], "check_in": "2024-06-05", "check_out": "2024-06-01", "budget": 500}"#,
        );
        let trip = req.into_trip_request(&FormLimits::default()).unwrap();
        assert!(trip.length.days().is_err());
    }

    #[test]
    fn date_range_too_long() {
        let req = request(
            r#"{"route": "R", "legs": [], "check_in": "2024-06-01", "check_out": "2024-07-01", "budget": 500}"#,
        );
        assert!(req.into_trip_request(&FormLimits::default()).is_err());
    }

    #[test]
    fn bad_inputs() {
        let limits = FormLimits::default();
        let cases = [
            // neither days nor dates
            r#"{"route": "R", "legs": [], "budget": 500}"#,
            // both days and dates
            r#"{"route": "R", "legs": [], "days": 2, "check_in": "2024-06-01", "check_out": "2024-06-05", "budget": 500}"#,
            // only one date
            r#"{"route": "R", "legs": [], "check_in": "2024-06-01", "budget": 500}"#,
            // malformed date
            r#"{"route": "R", "legs": [], "check_in": "01/06/2024", "check_out": "2024-06-05", "budget": 500}"#,
            // days out of range
            r#"{"route": "R", "legs": [], "days": 0, "budget": 500}"#,
            r#"{"route": "R", "legs": [], "days": 15, "budget": 500}"#,
            // budget out of range
            r#"{"route": "R", "legs": [], "days": 2, "budget": 100}"#,
            r#"{"route": "R", "legs": [], "days": 2, "budget": 20000}"#,
            // malformed transport id
            r#"{"route": "R", "legs": ["hot air balloon"], "days": 2, "budget": 500}"#,
            // unknown tier
            r#"{"route": "R", "legs": [], "tier": "deluxe", "days": 2, "budget": 500}"#,
        ];
        for json in cases {
            assert!(
                request(json).into_trip_request(&limits).is_err(),
                "accepted {json}"
            );
        }
    }
}
