//! JSON representation of a catalogue.
//!
//! The same document shape is read from disk at startup (when a catalogue
//! path is configured) and served by the catalogue API endpoint.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Catalogue, LoadError};
use crate::domain::{City, Route, TransportMode};

/// Serializable catalogue contents, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueFile {
    pub cities: Vec<City>,
    pub transports: Vec<TransportMode>,
    pub routes: Vec<Route>,
}

impl CatalogueFile {
    /// Validate the contents and build a catalogue.
    pub fn into_catalogue(self) -> Result<Catalogue, LoadError> {
        let builder = self
            .cities
            .into_iter()
            .fold(Catalogue::builder(), |b, city| b.city(city));
        let builder = self
            .transports
            .into_iter()
            .fold(builder, |b, mode| b.transport(mode));
        let builder = self
            .routes
            .into_iter()
            .fold(builder, |b, route| b.route(route));
        Ok(builder.build()?)
    }
}

impl From<&Catalogue> for CatalogueFile {
    fn from(catalogue: &Catalogue) -> Self {
        Self {
            cities: catalogue.cities().to_vec(),
            transports: catalogue.transports().to_vec(),
            routes: catalogue.routes().to_vec(),
        }
    }
}

impl Catalogue {
    /// Parse and validate a catalogue from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Catalogue, LoadError> {
        let file: CatalogueFile = serde_json::from_str(json)?;
        file.into_catalogue()
    }

    /// Read, parse and validate a catalogue from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Catalogue, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{CatalogueError, balkan_catalogue};
    use tempfile::tempdir;

    const SMALL: &str = r#"{
        "cities": [
            {
                "name": "A",
                "coordinate": {"lon": 10.0, "lat": 45.0},
                "hotels": [{"name": "A Inn", "nightly_price": 70.0, "booking_link": "https://example.com/a"}],
                "food": {"description": "Stew", "price_per_day": 20.0},
                "sight": "Castle"
            },
            {
                "name": "B",
                "coordinate": {"lon": 11.0, "lat": 46.0},
                "hotels": [{"name": "B Inn", "nightly_price": 65.0}],
                "food": {"description": "Pie", "price_per_day": 22.0},
                "sight": "Bridge"
            }
        ],
        "transports": [
            {"id": "car", "name": "Car", "price_per_km": 0.25, "icon": "🚗"}
        ],
        "routes": [
            {"name": "A → B", "cities": ["A", "B"]}
        ]
    }"#;

    #[test]
    fn parse_small_catalogue() {
        let catalogue = Catalogue::from_json_str(SMALL).unwrap();
        assert_eq!(catalogue.cities().len(), 2);
        let a = catalogue.city("A").unwrap();
        assert_eq!(
            a.default_hotel().unwrap().booking_link.as_deref(),
            Some("https://example.com/a")
        );
        assert_eq!(catalogue.route("A → B").unwrap().leg_count(), 1);
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = Catalogue::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn invalid_route_shape_is_json_error() {
        let json = SMALL.replace(r#"["A", "B"]"#, r#"["A"]"#);
        let err = Catalogue::from_json_str(&json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn inconsistent_contents_are_validation_errors() {
        let json = SMALL.replace(r#"["A", "B"]"#, r#"["A", "C"]"#);
        let err = Catalogue::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(CatalogueError::UnknownCity { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalogue.json");
        std::fs::write(&path, SMALL).unwrap();

        let catalogue = Catalogue::from_json_file(&path).unwrap();
        assert!(catalogue.city("B").is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = Catalogue::from_json_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn builtin_catalogue_survives_file_roundtrip() {
        let original = balkan_catalogue().unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("balkan.json");
        let json = serde_json::to_string_pretty(&CatalogueFile::from(&original)).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Catalogue::from_json_file(&path).unwrap();
        assert_eq!(loaded.cities(), original.cities());
        assert_eq!(loaded.transports(), original.transports());
        assert_eq!(loaded.routes(), original.routes());
    }
}
