// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{execution, problems},
    state::FixtureState,
};

/// Dev-server origins allowed to call the fixture backend from a browser.
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:8080",
    "http://127.0.0.1:8080",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Assembles the fixture backend router.
///
/// * `GET /api/problems`, `GET /api/problems/{id}`, `POST /api/run-code`.
/// * Applies HTTP tracing and CORS for the local dev origins.
pub fn create_fixture_router(state: FixtureState) -> Router {
    let origins: Vec<HeaderValue> = DEV_ORIGINS
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let problem_routes = Router::new()
        .route("/", get(problems::list_problems))
        .route("/{id}", get(problems::get_problem));

    Router::new()
        .nest("/api/problems", problem_routes)
        .route("/api/run-code", post(execution::run_code))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, models::execution::RunCodeResponse};
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_fixture_router(FixtureState::new(
            fixtures::sample_problems(),
            RunCodeResponse {
                stdout: Some("hello\n".to_string()),
                ..Default::default()
            },
        ))
    }

    #[tokio::test]
    async fn test_unknown_problem_is_404_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/problems/404")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Problem not found");
    }

    #[tokio::test]
    async fn test_run_code_rejects_garbage() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/run-code")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_run_code_returns_canned_response() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/run-code")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"script":"console.log('hello')","language":"javascript","stdin":""}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: RunCodeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(value.stdout.as_deref(), Some("hello\n"));
    }
}
