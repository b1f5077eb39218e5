//! Predefined routes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Error returned when a route's stops are not a valid itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRoute {
    #[error("route {0:?} needs at least two cities")]
    TooShort(String),

    #[error("route {route:?} visits {city:?} more than once")]
    RepeatedCity { route: String, city: String },
}

/// A named, fixed sequence of cities.
///
/// # Invariants
///
/// - At least two cities
/// - No city appears twice
///
/// Whether the cities exist is checked when the route is added to a
/// catalogue, not here.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Route;
///
/// let route = Route::new("Bulgaria → Germany", ["Sofia", "Belgrade", "Vienna", "Munich"]).unwrap();
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.leg_count(), 3);
///
/// let legs: Vec<_> = route.legs().collect();
/// assert_eq!(legs[0], ("Sofia", "Belgrade"));
///
/// assert!(Route::new("Loop", ["Sofia", "Belgrade", "Sofia"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RouteData", into = "RouteData")]
pub struct Route {
    name: String,
    cities: Vec<String>,
}

impl Route {
    pub fn new<I, S>(name: impl Into<String>, cities: I) -> Result<Self, InvalidRoute>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let cities: Vec<String> = cities.into_iter().map(Into::into).collect();

        if cities.len() < 2 {
            return Err(InvalidRoute::TooShort(name));
        }

        let mut seen = HashSet::new();
        for city in &cities {
            if !seen.insert(city.as_str()) {
                return Err(InvalidRoute::RepeatedCity {
                    route: name.clone(),
                    city: city.clone(),
                });
            }
        }

        Ok(Self { name, cities })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// City names in travel order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of cities (always at least two).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True if the route has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of legs, one fewer than the number of cities.
    pub fn leg_count(&self) -> usize {
        self.cities.len() - 1
    }

    /// Consecutive (from, to) city pairs.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.cities
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Returns true if the route passes through `city`.
    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}

/// Unvalidated serde representation of a route.
#[derive(Serialize, Deserialize)]
struct RouteData {
    name: String,
    cities: Vec<String>,
}

impl TryFrom<RouteData> for Route {
    type Error = InvalidRoute;

    fn try_from(data: RouteData) -> Result<Self, Self::Error> {
        Route::new(data.name, data.cities)
    }
}

impl From<Route> for RouteData {
    fn from(route: Route) -> Self {
        RouteData {
            name: route.name,
            cities: route.cities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_route() {
        let route = Route::new("R", ["A", "B", "C"]).unwrap();
        assert_eq!(route.name(), "R");
        assert_eq!(route.cities(), &["A", "B", "C"]);
        assert_eq!(route.len(), 3);
        assert!(!route.is_empty());
        assert_eq!(route.leg_count(), 2);
    }

    #[test]
    fn legs_are_consecutive_pairs() {
        let route = Route::new("R", ["A", "B", "C"]).unwrap();
        let legs: Vec<_> = route.legs().collect();
        assert_eq!(legs, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn reject_short_routes() {
        assert_eq!(
            Route::new("R", Vec::<String>::new()),
            Err(InvalidRoute::TooShort("R".into()))
        );
        assert_eq!(
            Route::new("R", ["A"]),
            Err(InvalidRoute::TooShort("R".into()))
        );
    }

    #[test]
    fn reject_repeated_city() {
        let err = Route::new("R", ["A", "B", "A"]).unwrap_err();
        assert_eq!(
            err,
            InvalidRoute::RepeatedCity {
                route: "R".into(),
                city: "A".into()
            }
        );
        assert_eq!(err.to_string(), "route \"R\" visits \"A\" more than once");
    }

    #[test]
    fn contains() {
        let route = Route::new("R", ["A", "B"]).unwrap();
        assert!(route.contains("A"));
        assert!(!route.contains("C"));
    }

    #[test]
    fn serde_validates() {
        let route: Route = serde_json::from_str(r#"{"name": "R", "cities": ["A", "B"]}"#).unwrap();
        assert_eq!(route.leg_count(), 1);
        assert!(serde_json::from_str::<Route>(r#"{"name": "R", "cities": ["A"]}"#).is_err());
    }
}
