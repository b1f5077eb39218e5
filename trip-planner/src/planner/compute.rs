//! Trip cost aggregation.
//!
//! The planner resolves a [`TripRequest`] against the catalogue and prices
//! it. The computation is pure: the same request and catalogue always give
//! the same result, and nothing is cached between requests.

use tracing::{debug, trace};

use super::config::PlannerConfig;
use super::error::PlanError;
use super::request::{HotelSelection, TripRequest};
use super::result::{
    CostBreakdown, Itinerary, ItineraryEntry, LegInfo, LegMarker, MapPath, ResolvedHotel,
    TripResult,
};
use crate::catalogue::Catalogue;
use crate::domain::{City, Coordinate, HotelOption, Route, TransportMode};

/// Prices trips against a fixed catalogue.
pub struct TripPlanner<'a> {
    catalogue: &'a Catalogue,
    config: &'a PlannerConfig,
}

impl<'a> TripPlanner<'a> {
    /// Create a new planner.
    pub fn new(catalogue: &'a Catalogue, config: &'a PlannerConfig) -> Self {
        Self { catalogue, config }
    }

    /// Price a trip and lay out its itinerary and map path.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidDuration`] if the trip lasts less than a day
    /// - [`PlanError::InvalidBudget`] if the budget is negative or not finite
    /// - [`PlanError::InvalidSelection`] if the route, a transport mode or a
    ///   hotel is unknown, or the number of legs does not match the route
    pub fn compute(&self, request: &TripRequest) -> Result<TripResult, PlanError> {
        let days = request.length.days()?;
        if !request.budget.is_finite() || request.budget < 0.0 {
            return Err(PlanError::InvalidBudget(request.budget));
        }

        let route = self
            .catalogue
            .route(&request.route)
            .ok_or_else(|| PlanError::selection(format!("unknown route {:?}", request.route)))?;
        let cities = self.resolve_cities(route)?;
        let modes = self.resolve_modes(route, request)?;
        check_hotel_choices(route, &request.hotels)?;

        debug!(route = route.name(), days, "pricing trip");

        let mut costs = CostBreakdown::default();
        let mut entries = Vec::with_capacity(cities.len());
        let mut markers = Vec::with_capacity(modes.len());

        for (i, city) in cities.iter().enumerate() {
            let arrival = match i {
                0 => None,
                _ => {
                    let prev = cities[i - 1];
                    let mode = modes[i - 1];
                    let leg = self.price_leg(prev, city, mode);
                    trace!(from = %leg.from, to = %leg.to, mode = %leg.mode, cost = leg.cost, "leg");
                    costs.transport += leg.cost;
                    markers.push(LegMarker {
                        position: Coordinate::midpoint(prev.coordinate, city.coordinate),
                        icon: mode.icon.clone(),
                    });
                    Some(leg)
                }
            };

            let hotel = resolve_hotel(city, &request.hotels)?;
            let hotel_cost = hotel.nightly_price * f64::from(days);
            let food_cost = city.food.price_per_day * f64::from(days);
            costs.hotel += hotel_cost;
            costs.food += food_cost;

            entries.push(ItineraryEntry {
                city: city.name.clone(),
                coordinate: city.coordinate,
                sight: city.sight.clone(),
                hotel,
                food: city.food.clone(),
                arrival,
                stay_cost: hotel_cost + food_cost,
            });
        }

        let result = TripResult {
            route: route.name().to_string(),
            days,
            budget: request.budget,
            costs,
            itinerary: Itinerary::new(entries),
            path: MapPath {
                points: cities.iter().map(|c| c.coordinate).collect(),
                markers,
            },
        };

        debug!(
            route = route.name(),
            total = result.total_cost(),
            within_budget = result.within_budget(),
            "trip priced"
        );
        Ok(result)
    }

    fn resolve_cities(&self, route: &Route) -> Result<Vec<&'a City>, PlanError> {
        route
            .cities()
            .iter()
            .map(|name| {
                self.catalogue
                    .city(name)
                    .ok_or_else(|| PlanError::selection(format!("unknown city {name:?}")))
            })
            .collect()
    }

    fn resolve_modes(
        &self,
        route: &Route,
        request: &TripRequest,
    ) -> Result<Vec<&'a TransportMode>, PlanError> {
        if request.legs.len() != route.leg_count() {
            return Err(PlanError::selection(format!(
                "route {:?} has {} legs but {} transport modes were given",
                route.name(),
                route.leg_count(),
                request.legs.len()
            )));
        }

        route
            .legs()
            .zip(&request.legs)
            .map(|((from, to), id)| {
                self.catalogue.transport(id).ok_or_else(|| {
                    PlanError::selection(format!(
                        "unknown transport mode {id} for leg {from} → {to}"
                    ))
                })
            })
            .collect()
    }

    fn price_leg(&self, from: &City, to: &City, mode: &TransportMode) -> LegInfo {
        let distance_km = self.config.distance.leg_km(from.coordinate, to.coordinate);
        LegInfo {
            from: from.name.clone(),
            to: to.name.clone(),
            mode: mode.id.clone(),
            mode_name: mode.name.clone(),
            icon: mode.icon.clone(),
            distance_km,
            cost: mode.cost(distance_km),
        }
    }
}

/// Reject explicit hotel choices for cities the route does not visit.
fn check_hotel_choices(route: &Route, hotels: &HotelSelection) -> Result<(), PlanError> {
    if let HotelSelection::PerCity(choices) = hotels
        && let Some(city) = choices.keys().find(|city| !route.contains(city))
    {
        return Err(PlanError::selection(format!(
            "hotel chosen for {city:?}, which route {:?} does not visit",
            route.name()
        )));
    }
    Ok(())
}

fn resolve_hotel(city: &City, selection: &HotelSelection) -> Result<ResolvedHotel, PlanError> {
    let option: &HotelOption = match selection.choice_for(&city.name) {
        Some(name) => city.hotel(name).ok_or_else(|| {
            PlanError::selection(format!("{:?} does not offer hotel {name:?}", city.name))
        })?,
        None => city
            .default_hotel()
            .ok_or_else(|| PlanError::selection(format!("{:?} offers no hotels", city.name)))?,
    };

    Ok(ResolvedHotel {
        name: option.name.clone(),
        nightly_price: option.nightly_price * selection.multiplier(),
        base_price: option.nightly_price,
        booking_link: option.booking_link.clone(),
        tier: selection.tier(),
    })
}
