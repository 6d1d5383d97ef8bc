use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use hue_store::ColorStore;

use crate::endpoint::{endpoints, HealthResponse, InfoResponse};
use crate::graphql::HueSchema;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub schema: HueSchema,
    pub store: Arc<dyn ColorStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ColorStore>) -> Self {
        Self {
            schema: crate::graphql::build_schema(Arc::clone(&store)),
            store,
        }
    }
}

/// Execute a GraphQL request.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = ?response.errors, "graphql request failed");
    }
    Json(response)
}

/// GraphiQL playground.
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoints::GRAPHQL).finish())
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Response {
    match state.store.count() {
        Ok(total_colors) => Json(InfoResponse {
            name: "hue-server".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            total_colors,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "info: store unavailable");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
