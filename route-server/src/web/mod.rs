//! Web layer for the route finder.
//!
//! Provides JSON endpoints for managing cities and trains and for finding
//! routes between cities.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
