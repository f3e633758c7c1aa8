//! Waypoint and travel-time constraints on candidate routes.

use std::collections::HashSet;
use std::hash::Hash;

use super::search::Route;

/// Accepts routes that visit every required city within a time budget.
///
/// Waypoints are an unordered set: a route qualifies as long as each one
/// appears somewhere along it, endpoints included.
#[derive(Debug, Clone)]
pub struct RouteFilter<N> {
    waypoints: HashSet<N>,
    max_weight: u32,
}

impl<N: Copy + Eq + Hash> RouteFilter<N> {
    /// Create a filter from required waypoints and a maximum total weight.
    pub fn new<I>(waypoints: I, max_weight: u32) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        Self {
            waypoints: waypoints.into_iter().collect(),
            max_weight,
        }
    }

    /// Whether every waypoint appears in the path.
    pub fn visits_waypoints(&self, path: &[N]) -> bool {
        self.waypoints.iter().all(|w| path.contains(w))
    }

    /// Whether a total weight fits the budget.
    pub fn within_budget(&self, weight: u32) -> bool {
        weight <= self.max_weight
    }

    /// Whether a route satisfies both constraints.
    pub fn accepts(&self, route: &Route<N>) -> bool {
        self.visits_waypoints(&route.nodes) && self.within_budget(route.weight)
    }

    /// Maximum total weight accepted.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }
}
