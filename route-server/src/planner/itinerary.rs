//! Resolving routes into concrete trains.
//!
//! The route search works on bare city ids. An itinerary names the train
//! taken on every hop: the fastest one serving it, which is the same choice
//! the search used when totalling travel time.

use tracing::{debug, warn};

use crate::domain::{CityId, TrainLink};
use crate::graph::Graph;

use super::search::{Planner, Rejection, Route, RouteQuery, SearchError};

/// A route with the train taken on every hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Cities visited, source first and destination last.
    pub cities: Vec<CityId>,

    /// One train per hop.
    pub trains: Vec<TrainLink>,

    /// Total travel time in minutes.
    pub total_minutes: u32,
}

impl Itinerary {
    /// Resolve a route against the train links it was searched over.
    ///
    /// Returns `None` if some hop has no serving train.
    pub fn resolve(route: &Route<CityId>, links: &[TrainLink]) -> Option<Self> {
        let trains = route
            .nodes
            .windows(2)
            .map(|hop| fastest_train(links, hop[0], hop[1]).cloned())
            .collect::<Option<Vec<_>>>()?;

        let total_minutes: u32 = trains.iter().map(|t| t.travel_time.minutes()).sum();

        Some(Self {
            cities: route.nodes.clone(),
            trains,
            total_minutes,
        })
    }

    /// Number of changes between trains.
    pub fn changes(&self) -> usize {
        self.trains.len().saturating_sub(1)
    }
}

/// Fastest train from one city to another; ties go to the first listed.
fn fastest_train(links: &[TrainLink], from: CityId, to: CityId) -> Option<&TrainLink> {
    links
        .iter()
        .filter(|l| l.from == from && l.to == to)
        .min_by_key(|l| l.travel_time)
}

/// Accepted itineraries from a search over train links.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Itineraries in enumeration order.
    pub itineraries: Vec<Itinerary>,

    /// Number of candidate routes enumerated.
    pub candidates: usize,

    /// Whether the candidate limit cut the search short.
    pub truncated: bool,
}

/// Error from planning over train links.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The search could not run
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The search ran but nothing qualified
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl Planner<'_> {
    /// Build a graph from train links and plan itineraries over it.
    ///
    /// The graph is rebuilt on every call from the links given.
    pub fn plan(&self, links: &[TrainLink], query: &RouteQuery<CityId>) -> Result<Plan, PlanError> {
        let graph = Graph::build(links.iter().map(TrainLink::edge));
        debug!(
            cities = graph.node_count(),
            trains = graph.edge_count(),
            source = %query.source,
            destination = %query.destination,
            "Planning routes"
        );

        let outcome = self.search(&graph, query)?;
        let candidates = outcome.candidates;
        let truncated = outcome.truncated;
        let routes = outcome.into_routes()?;

        let itineraries = routes
            .iter()
            .filter_map(|route| {
                let itinerary = Itinerary::resolve(route, links);
                if itinerary.is_none() {
                    warn!(path = ?route.nodes, "Route has a hop with no train");
                }
                itinerary
            })
            .collect();

        Ok(Plan {
            itineraries,
            candidates,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TravelTime;
    use crate::planner::SearchConfig;

    fn city(c: char) -> CityId {
        CityId::new(c as u32 - 'A' as u32 + 1)
    }

    fn link(name: &str, from: char, to: char, mins: u32) -> TrainLink {
        TrainLink::new(name, city(from), city(to), TravelTime::new(mins).unwrap()).unwrap()
    }

    fn sample() -> Vec<TrainLink> {
        vec![
            link("t1", 'A', 'B', 9),
            link("t2", 'B', 'D', 8),
            link("t3", 'A', 'C', 7),
            link("t4", 'C', 'B', 6),
            link("t5", 'B', 'E', 3),
            link("t6", 'B', 'A', 11),
            link("t7", 'A', 'C', 10),
            link("t8", 'E', 'D', 5),
            link("t9", 'D', 'E', 4),
        ]
    }

    fn names(itinerary: &Itinerary) -> Vec<&str> {
        itinerary.trains.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn plan_finds_all_four_routes() {
        let config = SearchConfig::default();
        let plan = Planner::new(&config)
            .plan(&sample(), &RouteQuery::new(city('A'), city('E'), 1000))
            .unwrap();

        assert_eq!(plan.itineraries.len(), 4);
        assert_eq!(plan.candidates, 4);
        assert!(!plan.truncated);
    }

    #[test]
    fn fastest_parallel_train_is_chosen() {
        let config = SearchConfig::default();
        let query = RouteQuery::new(city('A'), city('E'), 16).with_waypoints([city('C')]);
        let plan = Planner::new(&config).plan(&sample(), &query).unwrap();

        assert_eq!(plan.itineraries.len(), 1);
        let itinerary = &plan.itineraries[0];
        assert_eq!(names(itinerary), vec!["t3", "t4", "t5"]);
        assert_eq!(itinerary.total_minutes, 16);
        assert_eq!(itinerary.changes(), 2);
        assert_eq!(itinerary.cities, vec![city('A'), city('C'), city('B'), city('E')]);
    }

    #[test]
    fn totals_match_route_weights() {
        let config = SearchConfig::default();
        let links = sample();
        let graph = Graph::build(links.iter().map(TrainLink::edge));
        let outcome = Planner::new(&config)
            .search(&graph, &RouteQuery::new(city('A'), city('E'), 1000))
            .unwrap();

        for route in &outcome.accepted {
            let itinerary = Itinerary::resolve(route, &links).unwrap();
            assert_eq!(itinerary.total_minutes, route.weight);
            assert_eq!(itinerary.trains.len(), route.hops());
        }
    }

    #[test]
    fn time_exceeded_is_reported() {
        let config = SearchConfig::default();
        let query = RouteQuery::new(city('A'), city('E'), 9).with_waypoints([city('C')]);
        let err = Planner::new(&config).plan(&sample(), &query).unwrap_err();

        assert_eq!(
            err,
            PlanError::Rejected(Rejection::TimeExceeded { fastest: 16 })
        );
    }

    #[test]
    fn waypoint_unreachable_is_reported() {
        let config = SearchConfig::default();
        let query = RouteQuery::new(city('B'), city('E'), 349).with_waypoints([city('C')]);
        let err = Planner::new(&config).plan(&sample(), &query).unwrap_err();

        assert_eq!(err, PlanError::Rejected(Rejection::WaypointsUnreachable));
    }

    #[test]
    fn truncated_search_is_reported() {
        let config = SearchConfig::new(100, 2, 100_000);
        let query = RouteQuery::new(city('A'), city('E'), 100).with_waypoints([city('C')]);
        let err = Planner::new(&config).plan(&sample(), &query).unwrap_err();

        assert_eq!(err, PlanError::Rejected(Rejection::Truncated));
    }

    #[test]
    fn search_error_is_passed_through() {
        let config = SearchConfig::new(2, 10, 100_000);
        let err = Planner::new(&config)
            .plan(&sample(), &RouteQuery::new(city('A'), city('E'), 10))
            .unwrap_err();

        assert!(matches!(err, PlanError::Search(SearchError::GraphTooLarge { .. })));
    }

    #[test]
    fn resolve_missing_hop() {
        let route = Route {
            nodes: vec![city('A'), city('E')],
            weight: 1,
        };
        assert!(Itinerary::resolve(&route, &sample()).is_none());
    }

    #[test]
    fn single_city_itinerary() {
        let route = Route {
            nodes: vec![city('A')],
            weight: 0,
        };
        let itinerary = Itinerary::resolve(&route, &sample()).unwrap();
        assert!(itinerary.trains.is_empty());
        assert_eq!(itinerary.total_minutes, 0);
        assert_eq!(itinerary.changes(), 0);
    }
}
