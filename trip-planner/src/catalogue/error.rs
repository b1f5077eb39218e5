//! Catalogue error types.

use std::path::PathBuf;

use crate::domain::{InvalidRoute, InvalidTransportId, TransportId};

/// Reasons a set of reference data cannot form a catalogue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    #[error("city {0:?} is defined more than once")]
    DuplicateCity(String),

    #[error("transport {0} is defined more than once")]
    DuplicateTransport(TransportId),

    #[error("route {0:?} is defined more than once")]
    DuplicateRoute(String),

    #[error("city {0:?} offers no hotels")]
    NoHotels(String),

    #[error("city {0:?} has an invalid coordinate")]
    InvalidCoordinate(String),

    #[error("invalid price {price} for {what}: must be finite and non-negative")]
    InvalidPrice { what: String, price: f64 },

    #[error("route {route:?} passes through unknown city {city:?}")]
    UnknownCity { route: String, city: String },

    #[error("catalogue defines no routes")]
    NoRoutes,

    #[error(transparent)]
    InvalidRoute(#[from] InvalidRoute),

    #[error(transparent)]
    InvalidTransportId(#[from] InvalidTransportId),
}

/// Errors that can occur when loading a catalogue from a file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed catalogue document
    #[error("catalogue JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but its contents are inconsistent
    #[error(transparent)]
    Invalid(#[from] CatalogueError),
}
