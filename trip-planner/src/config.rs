//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::catalogue::{Catalogue, LoadError, balkan_catalogue};
use crate::planner::{DistanceModel, InvalidDistanceModel, PlannerConfig};

/// Listen address when `TRIP_PLANNER_ADDR` is unset.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000,
);

/// Static assets directory when `TRIP_PLANNER_STATIC_DIR` is unset.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading the server configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TRIP_PLANNER_ADDR {0:?}: expected host:port")]
    InvalidAddr(String),

    #[error("invalid TRIP_PLANNER_DISTANCE: {0}")]
    InvalidDistance(#[from] InvalidDistanceModel),
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Directory served under /static
    pub static_dir: PathBuf,

    /// JSON catalogue to load instead of the built-in data
    pub catalogue_path: Option<PathBuf>,

    /// Leg length model for the planner
    pub distance: DistanceModel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalogue_path: None,
            distance: DistanceModel::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let addr = match var("TRIP_PLANNER_ADDR") {
            Some(raw) => parse_addr(&raw)?,
            None => defaults.addr,
        };
        let distance = match var("TRIP_PLANNER_DISTANCE") {
            Some(raw) => raw.parse()?,
            None => defaults.distance,
        };

        Ok(Self {
            addr,
            static_dir: var("TRIP_PLANNER_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            catalogue_path: var("TRIP_PLANNER_CATALOGUE").map(PathBuf::from),
            distance,
        })
    }

    /// Planner settings derived from this configuration.
    pub fn planner(&self) -> PlannerConfig {
        PlannerConfig::new(self.distance)
    }

    /// Load the configured catalogue, or the built-in one when no path is set.
    pub fn catalogue(&self) -> Result<Catalogue, LoadError> {
        match &self.catalogue_path {
            Some(path) => Catalogue::from_json_file(path),
            None => Ok(balkan_catalogue()?),
        }
    }
}

fn parse_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAddr(raw.to_string()))
}
