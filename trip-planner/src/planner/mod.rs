//! Trip planning.
//!
//! This module implements the core computation that answers: "what does
//! this route cost with these transport and hotel choices, and does it fit
//! my budget?"
//!
//! Planning is a pure function of the request, the catalogue and the
//! planner configuration. It produces an itemized cost breakdown, a
//! per-city itinerary and the geometry needed to draw the route.

mod compute;
mod config;
mod error;
mod request;
mod result;

pub use compute::TripPlanner;
pub use config::{DEFAULT_LEG_KM, DistanceModel, InvalidDistanceModel, PlannerConfig};
pub use error::PlanError;
pub use request::{HotelSelection, TripRequest};
pub use result::{
    CostBreakdown, Itinerary, ItineraryEntry, LegInfo, LegMarker, MapPath, ResolvedHotel,
    TripResult,
};
