//! HTTP route handlers.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{CityId, TrainLink, TravelTime};
use crate::network::NetworkError;
use crate::planner::{PlanError, Planner, Rejection, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", get(list_cities).post(create_city))
        .route("/trains", get(list_trains).post(create_train))
        .route("/routes/find", post(find_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all cities.
async fn list_cities(State(state): State<AppState>) -> Json<Vec<CityResult>> {
    let cities = state.network.cities().await;
    Json(cities.iter().map(CityResult::from).collect())
}

/// Add a city.
async fn create_city(
    State(state): State<AppState>,
    Json(req): Json<CreateCityRequest>,
) -> Result<(StatusCode, Json<CityResult>), AppError> {
    let city = state.network.add_city(&req.name).await?;
    info!(id = %city.id, name = %city.name, "Created city");
    Ok((StatusCode::CREATED, Json(CityResult::from(&city))))
}

/// List all train links.
async fn list_trains(State(state): State<AppState>) -> Json<Vec<TrainResult>> {
    let trains = state.network.trains().await;
    Json(trains.iter().map(TrainResult::from).collect())
}

/// Add a train link.
async fn create_train(
    State(state): State<AppState>,
    Json(req): Json<CreateTrainRequest>,
) -> Result<(StatusCode, Json<TrainResult>), AppError> {
    let travel_time = TravelTime::new(req.travel_time).map_err(NetworkError::from)?;
    let link = TrainLink::new(&req.name, req.from_city, req.to_city, travel_time)
        .map_err(NetworkError::from)?;
    let result = TrainResult::from(&link);

    state.network.add_train(link).await?;
    info!(name = %result.name, "Created train");

    Ok((StatusCode::CREATED, Json(result)))
}

/// Find routes between two cities.
async fn find_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FindRoutesResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: FindRoutesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid route request");
        AppError::bad_request(format!("Invalid JSON: {e}"))
    })?;
    let query = req.into_query()?;

    // Snapshot links and names, then search without holding the lock
    let (links, names) = state
        .network
        .read(|network| {
            let mut requested = [query.source, query.destination]
                .into_iter()
                .chain(query.waypoints.iter().copied());
            if let Some(id) = requested.find(|id| !network.contains_city(*id)) {
                return Err(AppError::bad_request(format!("unknown city {id}")));
            }

            let names: HashMap<CityId, String> = network
                .cities()
                .map(|c| (c.id, c.name.clone()))
                .collect();
            Ok((network.trains().to_vec(), names))
        })
        .await?;

    let (source, destination, waypoints) =
        (query.source, query.destination, query.waypoints.len());

    // Enumeration is CPU-bound, keep it off the async workers
    let config = state.config.clone();
    let plan = tokio::task::spawn_blocking(move || Planner::new(&config).plan(&links, &query))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Search task failed: {e}"),
        })??;

    info!(
        %source,
        %destination,
        waypoints,
        routes = plan.itineraries.len(),
        "Found routes"
    );

    let routes = plan
        .itineraries
        .iter()
        .map(|it| RouteResult::from_itinerary(it, |id| names.get(&id).cloned()))
        .collect();

    Ok(Json(FindRoutesResponse {
        routes,
        candidates: plan.candidates,
        truncated: plan.truncated,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Conflict { message: String },
    NoRoute { rejection: Rejection },
    Internal { message: String },
}

impl AppError {
    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::Domain(_) | NetworkError::UnknownCity(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            NetworkError::DuplicateCity(_)
            | NetworkError::DuplicateCityId(_)
            | NetworkError::DuplicateTrainName(_)
            | NetworkError::DuplicateLink { .. } => AppError::Conflict {
                message: e.to_string(),
            },
            NetworkError::Io { .. } | NetworkError::Json(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Rejected(rejection) => AppError::NoRoute { rejection },
            PlanError::Search(SearchError::InvalidRequest(message)) => {
                AppError::BadRequest { message }
            }
            PlanError::Search(e) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

/// Machine-readable name of a rejection.
fn rejection_reason(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::NoRoute => "no_route",
        Rejection::WaypointsUnreachable => "waypoints_unreachable",
        Rejection::TimeExceeded { .. } => "time_exceeded",
        Rejection::Truncated => "search_truncated",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, reason) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone(), None),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message.clone(), None),
            AppError::NoRoute { rejection } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.to_string(),
                Some(rejection_reason(*rejection).to_string()),
            ),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone(), None)
            }
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: message,
            reason,
        });
        (status, body).into_response()
    }
}
