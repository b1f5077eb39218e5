//! Reference data: cities, transport modes and named routes.
//!
//! A [`Catalogue`] is built once at startup and never mutated. Every
//! invariant the planner relies on (routes only reference known cities,
//! every city has a hotel, prices are non-negative) is checked by
//! [`CatalogueBuilder::build`], so lookups afterwards cannot disagree
//! with each other.

mod balkan;
mod error;
mod file;

use std::collections::HashMap;

use crate::domain::{City, Route, TransportId, TransportMode};

pub use balkan::balkan_catalogue;
pub use error::{CatalogueError, LoadError};
pub use file::CatalogueFile;

/// Immutable lookup tables for planning trips.
#[derive(Debug, Clone)]
pub struct Catalogue {
    cities: Vec<City>,
    city_index: HashMap<String, usize>,
    transports: Vec<TransportMode>,
    routes: Vec<Route>,
}

impl Catalogue {
    /// Start building a catalogue.
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::new()
    }

    /// Look up a city by name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.city_index.get(name).map(|&i| &self.cities[i])
    }

    /// Look up a transport mode by id.
    pub fn transport(&self, id: &TransportId) -> Option<&TransportMode> {
        self.transports.iter().find(|t| &t.id == id)
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == name)
    }

    /// Cities in the order they were added.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Transport modes in the order they were added.
    pub fn transports(&self) -> &[TransportMode] {
        &self.transports
    }

    /// Routes in the order they were added.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Builder for creating a validated catalogue.
///
/// Provides a fluent API; all checks happen in [`build`](Self::build).
///
/// # Example
///
/// ```
/// use trip_planner::catalogue::Catalogue;
/// use trip_planner::domain::{City, Coordinate, Food, HotelOption, Route, TransportId, TransportMode};
///
/// let city = |name: &str, lon: f64, lat: f64| City {
///     name: name.into(),
///     coordinate: Coordinate::new(lon, lat),
///     hotels: vec![HotelOption::new(format!("{name} Inn"), 50.0)],
///     food: Food::new("Local food", 20.0),
///     sight: "Old town".into(),
/// };
///
/// let catalogue = Catalogue::builder()
///     .city(city("A", 10.0, 40.0))
///     .city(city("B", 11.0, 41.0))
///     .transport(TransportMode::new(TransportId::parse("car").unwrap(), "Car", 0.25, "🚗"))
///     .route(Route::new("A → B", ["A", "B"]).unwrap())
///     .build()
///     .unwrap();
///
/// assert!(catalogue.route("A → B").is_some());
/// assert!(catalogue.city("C").is_none());
/// ```
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    cities: Vec<City>,
    transports: Vec<TransportMode>,
    routes: Vec<Route>,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city.
    pub fn city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }

    /// Add a transport mode.
    pub fn transport(mut self, mode: TransportMode) -> Self {
        self.transports.push(mode);
        self
    }

    /// Add a route.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate and build the catalogue.
    pub fn build(self) -> Result<Catalogue, CatalogueError> {
        let mut city_index = HashMap::with_capacity(self.cities.len());
        for (i, city) in self.cities.iter().enumerate() {
            validate_city(city)?;
            if city_index.insert(city.name.clone(), i).is_some() {
                return Err(CatalogueError::DuplicateCity(city.name.clone()));
            }
        }

        for (i, mode) in self.transports.iter().enumerate() {
            check_price(mode.price_per_km, || format!("transport {}", mode.id))?;
            if self.transports[..i].iter().any(|m| m.id == mode.id) {
                return Err(CatalogueError::DuplicateTransport(mode.id.clone()));
            }
        }

        if self.routes.is_empty() {
            return Err(CatalogueError::NoRoutes);
        }
        for (i, route) in self.routes.iter().enumerate() {
            if self.routes[..i].iter().any(|r| r.name() == route.name()) {
                return Err(CatalogueError::DuplicateRoute(route.name().to_string()));
            }
            if let Some(missing) = route.cities().iter().find(|c| !city_index.contains_key(*c)) {
                return Err(CatalogueError::UnknownCity {
                    route: route.name().to_string(),
                    city: missing.clone(),
                });
            }
        }

        Ok(Catalogue {
            cities: self.cities,
            city_index,
            transports: self.transports,
            routes: self.routes,
        })
    }
}

fn validate_city(city: &City) -> Result<(), CatalogueError> {
    if !city.coordinate.is_valid() {
        return Err(CatalogueError::InvalidCoordinate(city.name.clone()));
    }
    if city.hotels.is_empty() {
        return Err(CatalogueError::NoHotels(city.name.clone()));
    }
    for hotel in &city.hotels {
        check_price(hotel.nightly_price, || {
            format!("hotel {} in {}", hotel.name, city.name)
        })?;
    }
    check_price(city.food.price_per_day, || format!("food in {}", city.name))
}

fn check_price(price: f64, what: impl FnOnce() -> String) -> Result<(), CatalogueError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CatalogueError::InvalidPrice {
            what: what(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Food, HotelOption};

    fn city(name: &str) -> City {
        City {
            name: name.into(),
            coordinate: Coordinate::new(10.0, 45.0),
            hotels: vec![HotelOption::new(format!("{name} Hotel"), 60.0)],
            food: Food::new("Food", 20.0),
            sight: "Sight".into(),
        }
    }

    fn car() -> TransportMode {
        TransportMode::new(TransportId::parse("car").unwrap(), "Car", 0.25, "🚗")
    }

    fn route(name: &str, cities: &[&str]) -> Route {
        Route::new(name, cities.iter().copied()).unwrap()
    }

    fn base() -> CatalogueBuilder {
        Catalogue::builder()
            .city(city("A"))
            .city(city("B"))
            .transport(car())
    }

    #[test]
    fn build_and_lookup() {
        let catalogue = base().route(route("R", &["A", "B"])).build().unwrap();

        assert_eq!(catalogue.city("A").unwrap().name, "A");
        assert!(catalogue.city("Z").is_none());
        assert_eq!(
            catalogue
                .transport(&TransportId::parse("car").unwrap())
                .unwrap()
                .price_per_km,
            0.25
        );
        assert!(
            catalogue
                .transport(&TransportId::parse("boat").unwrap())
                .is_none()
        );
        assert_eq!(catalogue.route("R").unwrap().len(), 2);
        assert_eq!(catalogue.cities().len(), 2);
        assert_eq!(catalogue.transports().len(), 1);
        assert_eq!(catalogue.routes().len(), 1);
    }

    #[test]
    fn routes_keep_insertion_order() {
        let catalogue = base()
            .route(route("Second", &["B", "A"]))
            .route(route("First", &["A", "B"]))
            .build()
            .unwrap();
        let names: Vec<_> = catalogue.routes().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn reject_route_through_unknown_city() {
        let err = base().route(route("R", &["A", "Z"])).build().unwrap_err();
        assert_eq!(
            err,
            CatalogueError::UnknownCity {
                route: "R".into(),
                city: "Z".into()
            }
        );
    }

    #[test]
    fn reject_duplicates() {
        let err = base()
            .city(city("A"))
            .route(route("R", &["A", "B"]))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateCity("A".into()));

        let err = base()
            .transport(car())
            .route(route("R", &["A", "B"]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogueError::DuplicateTransport(TransportId::parse("car").unwrap())
        );

        let err = base()
            .route(route("R", &["A", "B"]))
            .route(route("R", &["B", "A"]))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateRoute("R".into()));
    }

    #[test]
    fn reject_city_without_hotels() {
        let mut bare = city("C");
        bare.hotels.clear();
        let err = base()
            .city(bare)
            .route(route("R", &["A", "B"]))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogueError::NoHotels("C".into()));
    }

    #[test]
    fn reject_negative_and_non_finite_prices() {
        let mut cheap = city("C");
        cheap.hotels[0].nightly_price = -1.0;
        let err = base()
            .city(cheap)
            .route(route("R", &["A", "B"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidPrice { .. }));
        assert_eq!(
            err.to_string(),
            "invalid price -1 for hotel C Hotel in C: must be finite and non-negative"
        );

        let mut hungry = city("D");
        hungry.food.price_per_day = f64::INFINITY;
        assert!(
            base()
                .city(hungry)
                .route(route("R", &["A", "B"]))
                .build()
                .is_err()
        );

        let plane = TransportMode::new(
            TransportId::parse("plane").unwrap(),
            "Plane",
            f64::NAN,
            "✈️",
        );
        assert!(
            base()
                .transport(plane)
                .route(route("R", &["A", "B"]))
                .build()
                .is_err()
        );
    }

    #[test]
    fn reject_invalid_coordinate() {
        let mut lost = city("C");
        lost.coordinate = Coordinate::new(200.0, 0.0);
        let err = base()
            .city(lost)
            .route(route("R", &["A", "B"]))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogueError::InvalidCoordinate("C".into()));
    }

    #[test]
    fn reject_empty_route_list() {
        assert_eq!(base().build().unwrap_err(), CatalogueError::NoRoutes);
    }

    #[test]
    fn zero_prices_are_allowed() {
        let mut free = city("C");
        free.hotels[0].nightly_price = 0.0;
        free.food.price_per_day = 0.0;
        assert!(
            base()
                .city(free)
                .route(route("R", &["A", "C"]))
                .build()
                .is_ok()
        );
    }
}
