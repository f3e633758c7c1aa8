//! Constrained route search.
//!
//! Enumerates every simple path between two cities, then keeps the ones
//! that pass through all required waypoints within the travel-time budget.
//! The outcome keeps enough intermediate results to explain an empty
//! answer.

use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::graph::Graph;

use super::config::SearchConfig;
use super::filter::RouteFilter;
use super::paths::simple_paths;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// Graph exceeds the configured size limit
    #[error("rail network has {cities} cities, more than the limit of {limit}")]
    GraphTooLarge { cities: usize, limit: usize },
}

/// Why a search produced no acceptable route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The destination cannot be reached from the source at all
    #[error("no route exists between these cities")]
    NoRoute,

    /// Routes exist, but none passes through every required city
    #[error("no route passes through all of the required cities")]
    WaypointsUnreachable,

    /// Routes through the required cities exist, but all are too slow
    #[error("every route takes longer than the requested travel time (fastest is {fastest} min)")]
    TimeExceeded { fastest: u32 },

    /// The search hit a limit before finding a qualifying route
    #[error("search stopped at its limit before any qualifying route was found")]
    Truncated,
}

/// Request for route search.
#[derive(Debug, Clone)]
pub struct RouteQuery<N> {
    /// Where the route starts.
    pub source: N,

    /// Where the route ends.
    pub destination: N,

    /// Cities every accepted route must pass through, in any order.
    pub waypoints: Vec<N>,

    /// Maximum total travel time in minutes.
    pub max_travel_time: u32,
}

impl<N> RouteQuery<N> {
    /// Create a new query with no waypoints.
    pub fn new(source: N, destination: N, max_travel_time: u32) -> Self {
        Self {
            source,
            destination,
            waypoints: Vec::new(),
            max_travel_time,
        }
    }

    /// Require the route to pass through the given cities.
    pub fn with_waypoints<I>(mut self, waypoints: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        self.waypoints.extend(waypoints);
        self
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_travel_time == 0 {
            return Err(SearchError::InvalidRequest(
                "maximum travel time must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// A simple path and its total travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N> {
    /// Cities visited, source first and destination last.
    pub nodes: Vec<N>,

    /// Sum of the fastest travel time for every hop.
    pub weight: u32,
}

impl<N> Route<N> {
    /// Number of hops (trains) along the route.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<N> {
    /// Number of simple paths enumerated.
    pub candidates: usize,

    /// Number of path extensions made by the depth-first search.
    pub explored: usize,

    /// Paths through every waypoint, regardless of travel time.
    pub through_waypoints: Vec<Route<N>>,

    /// Paths satisfying every constraint, in enumeration order.
    pub accepted: Vec<Route<N>>,

    /// Whether enumeration stopped at the candidate or exploration limit.
    pub truncated: bool,
}

impl<N> SearchOutcome<N> {
    /// Create an empty outcome.
    pub fn empty() -> Self {
        Self {
            candidates: 0,
            explored: 0,
            through_waypoints: Vec::new(),
            accepted: Vec::new(),
            truncated: false,
        }
    }

    /// Why nothing was accepted, or `None` if some route was.
    ///
    /// A truncated search with nothing accepted proves nothing about the
    /// routes it never reached, so it reports `Truncated` only.
    pub fn rejection(&self) -> Option<Rejection> {
        if !self.accepted.is_empty() {
            return None;
        }
        if self.truncated {
            return Some(Rejection::Truncated);
        }
        if self.candidates == 0 {
            return Some(Rejection::NoRoute);
        }
        match self.through_waypoints.iter().map(|r| r.weight).min() {
            None => Some(Rejection::WaypointsUnreachable),
            Some(fastest) => Some(Rejection::TimeExceeded { fastest }),
        }
    }

    /// The accepted routes, or the reason there are none.
    pub fn into_routes(self) -> Result<Vec<Route<N>>, Rejection> {
        match self.rejection() {
            Some(rejection) => Err(rejection),
            None => Ok(self.accepted),
        }
    }
}

/// Route planner over a rail graph.
pub struct Planner<'a> {
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Search for routes matching the query.
    pub fn search<N>(
        &self,
        graph: &Graph<N>,
        query: &RouteQuery<N>,
    ) -> Result<SearchOutcome<N>, SearchError>
    where
        N: Copy + Eq + Hash + std::fmt::Debug,
    {
        query.validate()?;

        if graph.node_count() > self.config.max_cities {
            return Err(SearchError::GraphTooLarge {
                cities: graph.node_count(),
                limit: self.config.max_cities,
            });
        }

        let filter = RouteFilter::new(query.waypoints.iter().copied(), query.max_travel_time);
        let mut outcome = SearchOutcome::empty();

        let mut paths = simple_paths(graph, query.source, query.destination)
            .with_step_limit(self.config.max_explored);

        for nodes in paths.by_ref() {
            if outcome.candidates >= self.config.max_candidates {
                warn!(
                    limit = self.config.max_candidates,
                    "Candidate limit reached, stopping route enumeration"
                );
                outcome.truncated = true;
                break;
            }
            outcome.candidates += 1;

            if !filter.visits_waypoints(&nodes) {
                trace!(path = ?nodes, "Route misses a waypoint");
                continue;
            }

            // Every enumerated hop has at least one edge.
            let Some(weight) = graph.path_weight(&nodes) else {
                continue;
            };

            let route = Route { nodes, weight };
            if filter.within_budget(weight) {
                outcome.accepted.push(route.clone());
            } else {
                trace!(path = ?route.nodes, weight, "Route exceeds travel time");
            }
            outcome.through_waypoints.push(route);
        }

        outcome.explored = paths.explored();
        if paths.is_truncated() {
            warn!(
                limit = self.config.max_explored,
                "Exploration limit reached, stopping route enumeration"
            );
            outcome.truncated = true;
        }

        debug!(
            candidates = outcome.candidates,
            explored = outcome.explored,
            through_waypoints = outcome.through_waypoints.len(),
            accepted = outcome.accepted.len(),
            truncated = outcome.truncated,
            "Route search complete"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
