//! Planner error types.

use crate::domain::InvalidDuration;

/// Reasons a trip request cannot be priced.
///
/// A request either resolves completely or fails with one of these; the
/// planner never substitutes defaults for unknown identifiers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// A route, city, hotel or transport mode is not in the catalogue, or
    /// the selections do not fit the route
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The trip lasts less than one day
    #[error(transparent)]
    InvalidDuration(#[from] InvalidDuration),

    /// The budget is negative or not a number
    #[error("budget must be a finite, non-negative amount, got {0}")]
    InvalidBudget(f64),
}

impl PlanError {
    pub(crate) fn selection(message: impl Into<String>) -> Self {
        PlanError::InvalidSelection(message.into())
    }
}
