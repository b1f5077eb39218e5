//! Application state for the web layer.

use std::sync::Arc;

use super::limits::FormLimits;
use crate::catalogue::Catalogue;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Everything here is read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    /// Reference data for all plans
    pub catalogue: Arc<Catalogue>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,

    /// Accepted ranges for form input
    pub limits: Arc<FormLimits>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalogue: Catalogue, config: PlannerConfig, limits: FormLimits) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            config: Arc::new(config),
            limits: Arc::new(limits),
        }
    }
}
