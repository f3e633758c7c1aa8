//! Route planner using exhaustive depth-first search.
//!
//! This module implements the core route-finding algorithm that answers:
//! "Which train routes take me from this city to that one, through these
//! cities, within this much time?"
//!
//! Every simple path between the two cities is enumerated, then filtered by
//! the required waypoints and the travel-time budget.

mod config;
mod filter;
mod itinerary;
mod paths;
mod search;

pub use config::SearchConfig;
pub use filter::RouteFilter;
pub use itinerary::{Itinerary, Plan, PlanError};
pub use paths::{SimplePaths, simple_paths};
pub use search::{Planner, Rejection, Route, RouteQuery, SearchError, SearchOutcome};
