//! GraphQL server for Hue.
//!
//! Serves the color API on a single `/graphql` endpoint over an injected
//! [`ColorStore`](hue_store::ColorStore), plus health and info routes.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod graphql;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, PORT_ENV};
pub use endpoint::{endpoints, HealthResponse, InfoResponse};
pub use error::{ServerError, ServerResult};
pub use graphql::{build_schema, HueSchema, MutationRoot, QueryRoot};
pub use handler::AppState;
pub use server::HueServer;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use hue_store::InMemoryColorStore;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app(playground: bool) -> Router {
        let store = Arc::new(InMemoryColorStore::with_default_seed().unwrap());
        router::build_router(AppState::new(store), playground)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn graphql_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = app(true)
            .oneshot(Request::builder().uri("/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let response = app(true)
            .oneshot(Request::builder().uri("/v1/info").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "hue-server");
        assert_eq!(body["total_colors"], 3);
    }

    #[tokio::test]
    async fn graphql_query_over_http() {
        let response = app(true)
            .oneshot(graphql_request(json!({ "query": "{ totalColors }" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "data": { "totalColors": 3 } }));
    }

    #[tokio::test]
    async fn graphql_mutation_with_variables_over_http() {
        let response = app(true)
            .oneshot(graphql_request(json!({
                "query": "mutation($t: String!, $c: ColorValue!) { addColor(title: $t, color: $c) { title color rating } }",
                "variables": { "t": "Red", "c": "#F00" }
            })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(
            body["data"]["addColor"],
            json!({ "title": "Red", "color": "#ff0000", "rating": 0 })
        );
    }

    #[tokio::test]
    async fn not_found_error_over_http() {
        let response = app(true)
            .oneshot(graphql_request(json!({
                "query": "mutation { removeColor(id: \"missing\") { id } }"
            })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn playground_toggle() {
        let response = app(true)
            .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(false)
            .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
