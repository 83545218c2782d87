//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::domain::normalize;
use crate::planner::{CancelFlag, QueryError, RouteFinder};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", get(list_cities))
        .route("/routes", get(find_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every city in the network, sorted by name.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let mut cities: Vec<String> = state.graph.cities().map(ToString::to_string).collect();
    cities.sort();

    Json(CitiesResponse { cities })
}

/// Find routes between two cities.
///
/// The search runs on the blocking pool. If it outlives the configured
/// timeout it is cancelled and the request fails.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<FindRoutesRequest>,
) -> Result<Json<FindRoutesResponse>, AppError> {
    let max_hops = req.max_hops.unwrap_or(state.config.default_max_hops);
    let cancel = CancelFlag::new();

    let task = {
        let graph = Arc::clone(&state.graph);
        let config = Arc::clone(&state.config);
        let cancel = cancel.clone();
        let origin = req.origin.clone();
        let destination = req.destination.clone();
        tokio::task::spawn_blocking(move || {
            RouteFinder::new(&graph, &config).find_routes_with(
                &origin,
                &destination,
                max_hops,
                &cancel,
            )
        })
    };

    let result = match tokio::time::timeout(state.query_timeout, task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => {
            return Err(AppError::Internal {
                message: format!("route search failed: {e}"),
            });
        }
        Err(_) => {
            cancel.cancel();
            return Err(AppError::Unavailable {
                message: format!(
                    "route search timed out after {} ms",
                    state.query_timeout.as_millis()
                ),
            });
        }
    };

    let routes = result.routes.iter().map(RouteResult::from).collect();

    Ok(Json(FindRoutesResponse {
        origin: normalize(&req.origin),
        destination: normalize(&req.destination),
        max_hops,
        routes,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        let message = e.to_string();
        match e {
            QueryError::InvalidParameter { .. }
            | QueryError::MissingInput(_)
            | QueryError::SameCity(_) => AppError::BadRequest { message },
            QueryError::UnknownCity { .. } => AppError::NotFound { message },
            QueryError::Interrupted(_) => AppError::Unavailable { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, Link};
    use crate::network::Graph;
    use crate::planner::QueryConfig;
    use std::time::Duration;

    fn state_with(config: QueryConfig) -> AppState {
        let mut graph = Graph::new();
        for (a, b, prefix) in [("A", "B", "1"), ("B", "C", "2"), ("A", "C", "3")] {
            graph.add_edge(
                City::parse(a).unwrap(),
                City::parse(b).unwrap(),
                Link::new(prefix, "L"),
            );
        }
        AppState::new(graph, config, Duration::from_secs(5))
    }

    fn state() -> AppState {
        state_with(QueryConfig::default())
    }

    fn request(origin: &str, destination: &str, max_hops: Option<usize>) -> FindRoutesRequest {
        FindRoutesRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            max_hops,
        }
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn cities_sorted() {
        let Json(resp) = list_cities(State(state())).await;
        assert_eq!(resp.cities, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn routes_found() {
        let Json(resp) = find_routes(State(state()), Query(request("a", "c", Some(2))))
            .await
            .unwrap();

        assert_eq!(resp.origin, "A");
        assert_eq!(resp.destination, "C");
        assert_eq!(resp.max_hops, 2);
        let hops: Vec<usize> = resp.routes.iter().map(|r| r.hops).collect();
        assert_eq!(hops, vec![1, 2]);
        assert_eq!(resp.routes[0].segments[0].prefix, "3");
    }

    #[tokio::test]
    async fn default_max_hops_applies() {
        let Json(resp) = find_routes(State(state()), Query(request("A", "C", None)))
            .await
            .unwrap();
        assert_eq!(resp.max_hops, 3);
    }

    #[tokio::test]
    async fn usage_errors_are_bad_requests() {
        for req in [
            request("A", "C", Some(9)),
            request("", "C", Some(2)),
            request("A", "a", Some(2)),
        ] {
            let err = find_routes(State(state()), Query(req)).await.unwrap_err();
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn unknown_city_is_not_found() {
        let err = find_routes(State(state()), Query(request("ZZZ", "C", Some(2))))
            .await
            .unwrap_err();
        assert!(matches!(&err, AppError::NotFound { message } if message.contains("origin")));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn timeout_is_unavailable() {
        // Complete graph on twelve cities, so the search cannot finish in time
        let names: Vec<String> = (0..12).map(|i| format!("N{i}")).collect();
        let mut graph = Graph::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                graph.add_edge(
                    City::parse(a).unwrap(),
                    City::parse(b).unwrap(),
                    Link::new("1", "L"),
                );
            }
        }
        let state = AppState::new(graph, QueryConfig::default(), Duration::ZERO);

        let err = find_routes(State(state), Query(request("N0", "N11", Some(5))))
            .await
            .unwrap_err();
        assert!(matches!(&err, AppError::Unavailable { message } if message.contains("timed out")));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn exhausted_budget_is_unavailable() {
        let state = state_with(QueryConfig::new(5, 3, Some(1)));
        let err = find_routes(State(state), Query(request("A", "C", Some(2))))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
