use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::endpoint::endpoints;
use crate::handler::{self, AppState};

/// Build the axum router with all Hue endpoints.
///
/// With `playground` set, `GET /graphql` serves GraphiQL; otherwise only
/// `POST /graphql` is routed.
pub fn build_router(state: AppState, playground: bool) -> Router {
    let graphql = if playground {
        get(handler::graphiql_handler).post(handler::graphql_handler)
    } else {
        post(handler::graphql_handler)
    };

    Router::new()
        .route(endpoints::GRAPHQL, graphql)
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
