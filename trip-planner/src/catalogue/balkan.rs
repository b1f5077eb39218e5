//! Built-in catalogue: road trips from Sofia into western Europe.

use super::{Catalogue, CatalogueError};
use crate::domain::{City, Coordinate, Food, HotelOption, Route, TransportId, TransportMode};

fn booking(hotel: &str) -> String {
    format!(
        "https://www.booking.com/searchresults.html?ss={}",
        hotel.replace(' ', "+")
    )
}

fn hotel(name: &str, nightly_price: f64) -> HotelOption {
    HotelOption::new(name, nightly_price).with_booking_link(booking(name))
}

fn city(
    name: &str,
    (lon, lat): (f64, f64),
    hotels: Vec<HotelOption>,
    food: (&str, f64),
    sight: &str,
) -> City {
    City {
        name: name.to_string(),
        coordinate: Coordinate::new(lon, lat),
        hotels,
        food: Food::new(food.0, food.1),
        sight: sight.to_string(),
    }
}

fn mode(
    id: &str,
    name: &str,
    price_per_km: f64,
    icon: &str,
) -> Result<TransportMode, CatalogueError> {
    Ok(TransportMode::new(
        TransportId::parse(id)?,
        name,
        price_per_km,
        icon,
    ))
}

fn route(name: &str, cities: [&str; 4]) -> Result<Route, CatalogueError> {
    Ok(Route::new(name, cities)?)
}

/// The default catalogue: nine cities, three routes out of Sofia and
/// three transport modes.
///
/// The first hotel of every city is its standard choice; the others are
/// cheaper and pricier alternatives for per-city selection.
pub fn balkan_catalogue() -> Result<Catalogue, CatalogueError> {
    Catalogue::builder()
        .city(city(
            "Sofia",
            (23.3219, 42.6977),
            vec![
                hotel("Hotel Sofia Center", 70.0),
                hotel("Vitosha Park Hotel", 55.0),
                hotel("Grand Hotel Sofia", 120.0),
            ],
            ("Bulgarian cuisine", 20.0),
            "Alexander Nevsky Cathedral",
        ))
        .city(city(
            "Belgrade",
            (20.4489, 44.7866),
            vec![
                hotel("Belgrade Inn", 65.0),
                hotel("Savamala Rooms", 45.0),
                hotel("Square Nine", 140.0),
            ],
            ("Serbian grill", 22.0),
            "Kalemegdan Fortress",
        ))
        .city(city(
            "Vienna",
            (16.3738, 48.2082),
            vec![
                hotel("Vienna City Hotel", 90.0),
                hotel("Westbahnhof Pension", 60.0),
                hotel("Hotel Sacher", 320.0),
            ],
            ("Wiener schnitzel", 30.0),
            "Schönbrunn Palace",
        ))
        .city(city(
            "Munich",
            (11.5820, 48.1351),
            vec![
                hotel("Munich Central Hotel", 95.0),
                hotel("Isar Hostel", 50.0),
                hotel("Bayerischer Hof", 290.0),
            ],
            ("Bavarian cuisine", 28.0),
            "Marienplatz",
        ))
        .city(city(
            "Skopje",
            (21.4254, 41.9981),
            vec![
                hotel("Skopje City Hotel", 60.0),
                hotel("Old Bazaar Guesthouse", 35.0),
            ],
            ("Macedonian cuisine", 18.0),
            "Stone Bridge",
        ))
        .city(city(
            "Rome",
            (12.4964, 41.9028),
            vec![
                hotel("Rome Center Hotel", 100.0),
                hotel("Termini Rooms", 70.0),
                hotel("Hotel de Russie", 450.0),
            ],
            ("Pasta", 35.0),
            "Colosseum",
        ))
        .city(city(
            "Florence",
            (11.2558, 43.7696),
            vec![
                hotel("Florence Art Hotel", 95.0),
                hotel("Oltrarno Hostel", 55.0),
            ],
            ("Tuscan cuisine", 32.0),
            "Florence Cathedral",
        ))
        .city(city(
            "Budapest",
            (19.0402, 47.4979),
            vec![
                hotel("Budapest Hotel", 85.0),
                hotel("Danube Hostel", 40.0),
                hotel("Gresham Palace", 380.0),
            ],
            ("Goulash", 25.0),
            "Hungarian Parliament",
        ))
        .city(city(
            "Paris",
            (2.3522, 48.8566),
            vec![
                hotel("Paris Central", 110.0),
                hotel("Montmartre Budget Inn", 75.0),
                hotel("Le Meurice", 650.0),
            ],
            ("French cuisine", 40.0),
            "Eiffel Tower",
        ))
        .transport(mode("car", "Car", 0.25, "🚗")?)
        .transport(mode("train", "Train", 0.18, "🚆")?)
        .transport(mode("plane", "Plane", 0.45, "✈️")?)
        .route(route(
            "Bulgaria → Germany",
            ["Sofia", "Belgrade", "Vienna", "Munich"],
        )?)
        .route(route(
            "Bulgaria → Italy",
            ["Sofia", "Skopje", "Rome", "Florence"],
        )?)
        .route(route(
            "Bulgaria → France",
            ["Sofia", "Belgrade", "Budapest", "Paris"],
        )?)
        .build()
}
