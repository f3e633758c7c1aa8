//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{City, CityId, TrainLink};
use crate::planner::{Itinerary, RouteQuery};

use super::routes::AppError;

/// A city in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityResult {
    pub id: CityId,
    pub name: String,
}

impl From<&City> for CityResult {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
        }
    }
}

/// Request to add a city.
#[derive(Debug, Deserialize)]
pub struct CreateCityRequest {
    pub name: String,
}

/// A train link in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainResult {
    /// Train name (e.g. "t1")
    pub name: String,

    /// Departure city
    pub from_city: CityId,

    /// Arrival city
    pub to_city: CityId,

    /// Travel time in minutes
    pub travel_time: u32,
}

impl From<&TrainLink> for TrainResult {
    fn from(link: &TrainLink) -> Self {
        Self {
            name: link.name.clone(),
            from_city: link.from,
            to_city: link.to,
            travel_time: link.travel_time.minutes(),
        }
    }
}

/// Request to add a train link.
#[derive(Debug, Deserialize)]
pub struct CreateTrainRequest {
    pub name: String,
    pub from_city: CityId,
    pub to_city: CityId,
    pub travel_time: u32,
}

/// Request to find routes between two cities.
///
/// Fields are optional at the JSON level so that a missing one produces a
/// specific validation message rather than a generic parse error.
#[derive(Debug, Deserialize)]
pub struct FindRoutesRequest {
    /// Departure city
    pub from_city: Option<CityId>,

    /// Arrival city
    pub to_city: Option<CityId>,

    /// Cities the route must pass through
    #[serde(default)]
    pub cities: Vec<CityId>,

    /// Maximum total travel time in minutes
    pub travelling_time: Option<u32>,
}

impl FindRoutesRequest {
    /// Validate required fields and build a route query.
    pub fn into_query(self) -> Result<RouteQuery<CityId>, AppError> {
        let from = self.from_city.ok_or_else(|| AppError::bad_request("from_city is required"))?;
        let to = self.to_city.ok_or_else(|| AppError::bad_request("to_city is required"))?;
        let max_time = self
            .travelling_time
            .ok_or_else(|| AppError::bad_request("travelling_time is required"))?;
        if max_time == 0 {
            return Err(AppError::bad_request("travelling_time must be positive"));
        }

        Ok(RouteQuery::new(from, to, max_time).with_waypoints(self.cities))
    }
}

/// A route option.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResult {
    /// Cities in travel order
    pub cities: Vec<CityResult>,

    /// The train taken on every hop
    pub trains: Vec<TrainResult>,

    /// Total travel time in minutes
    pub total_time_mins: u32,

    /// Total travel time, human readable (e.g. "1h 05m")
    pub total_time: String,
}

impl RouteResult {
    /// Create from an itinerary, naming cities through `name_of`.
    pub fn from_itinerary(
        itinerary: &Itinerary,
        name_of: impl Fn(CityId) -> Option<String>,
    ) -> Self {
        let cities = itinerary
            .cities
            .iter()
            .map(|&id| CityResult {
                id,
                name: name_of(id).unwrap_or_else(|| id.to_string()),
            })
            .collect();

        let total = chrono::Duration::minutes(i64::from(itinerary.total_minutes));

        Self {
            cities,
            trains: itinerary.trains.iter().map(TrainResult::from).collect(),
            total_time_mins: itinerary.total_minutes,
            total_time: crate::domain::format_minutes(total),
        }
    }
}

/// Response for route search.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindRoutesResponse {
    /// Accepted routes, in search order
    pub routes: Vec<RouteResult>,

    /// Number of candidate routes examined
    pub candidates: usize,

    /// Whether the search stopped at its candidate limit
    pub truncated: bool,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable reason when no route qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
