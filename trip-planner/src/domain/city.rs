//! Cities and the hotels they offer.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A hotel a traveller can stay at in a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOption {
    pub name: String,
    /// Base price per night, before any tier multiplier.
    pub nightly_price: f64,
    /// Booking page, if the hotel has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,
}

impl HotelOption {
    pub fn new(name: impl Into<String>, nightly_price: f64) -> Self {
        Self {
            name: name.into(),
            nightly_price,
            booking_link: None,
        }
    }

    /// Attach a booking link.
    pub fn with_booking_link(mut self, link: impl Into<String>) -> Self {
        self.booking_link = Some(link.into());
        self
    }
}

/// A local dish and what it costs per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub description: String,
    pub price_per_day: f64,
}

impl Food {
    pub fn new(description: impl Into<String>, price_per_day: f64) -> Self {
        Self {
            description: description.into(),
            price_per_day,
        }
    }
}

/// A city that routes can pass through.
///
/// Cities are identified by name. The hotel list is ordered; the first
/// entry is the default choice when a request does not name a hotel.
/// A catalogue never contains a city without hotels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub coordinate: Coordinate,
    pub hotels: Vec<HotelOption>,
    pub food: Food,
    /// The sight recommended to visitors.
    pub sight: String,
}

impl City {
    /// The hotel used when none is named.
    pub fn default_hotel(&self) -> Option<&HotelOption> {
        self.hotels.first()
    }

    /// Find a hotel offered by this city by its exact name.
    pub fn hotel(&self, name: &str) -> Option<&HotelOption> {
        self.hotels.iter().find(|h| h.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofia() -> City {
        City {
            name: "Sofia".into(),
            coordinate: Coordinate::new(23.3219, 42.6977),
            hotels: vec![
                HotelOption::new("Hotel Sofia Center", 70.0),
                HotelOption::new("Vitosha Hostel", 35.0)
                    .with_booking_link("https://example.com/vitosha"),
            ],
            food: Food::new("Bulgarian cuisine", 20.0),
            sight: "Alexander Nevsky Cathedral".into(),
        }
    }

    #[test]
    fn default_hotel_is_first() {
        let city = sofia();
        assert_eq!(city.default_hotel().unwrap().name, "Hotel Sofia Center");
    }

    #[test]
    fn hotel_lookup_by_name() {
        let city = sofia();
        let hostel = city.hotel("Vitosha Hostel").unwrap();
        assert_eq!(hostel.nightly_price, 35.0);
        assert_eq!(
            hostel.booking_link.as_deref(),
            Some("https://example.com/vitosha")
        );
        assert!(city.hotel("vitosha hostel").is_none());
        assert!(city.hotel("Grand Budapest").is_none());
    }

    #[test]
    fn no_hotels_means_no_default() {
        let mut city = sofia();
        city.hotels.clear();
        assert!(city.default_hotel().is_none());
    }

    #[test]
    fn booking_link_is_optional_in_json() {
        let hotel: HotelOption =
            serde_json::from_str(r#"{"name": "Inn", "nightly_price": 50.0}"#).unwrap();
        assert_eq!(hotel, HotelOption::new("Inn", 50.0));

        let json = serde_json::to_string(&hotel).unwrap();
        assert!(!json.contains("booking_link"));
    }
}
