//! Domain types for the trip planner.
//!
//! This module contains the reference data model (cities, hotels,
//! transport modes, routes) and the small value types used in requests.
//! Types with invariants enforce them at construction time, so code that
//! receives them can trust their validity.

mod city;
mod coord;
mod length;
mod route;
mod tier;
mod transport;

pub use city::{City, Food, HotelOption};
pub use coord::{Coordinate, EARTH_RADIUS_KM};
pub use length::{InvalidDuration, TripLength};
pub use route::{InvalidRoute, Route};
pub use tier::{HotelTier, InvalidTier};
pub use transport::{InvalidTransportId, TransportId, TransportMode};
