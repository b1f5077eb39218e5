//! Web layer for the trip planner.
//!
//! Serves the planning form, the catalogue as JSON and the trip planning
//! endpoint, which answers with JSON or an HTML fragment.

mod dto;
mod limits;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use limits::FormLimits;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
