// tests/api_tests.rs

use std::sync::Arc;

use axum::{Router, routing::get};
use frontend::{
    error::AppError,
    fixtures,
    models::{
        execution::{ExecutionStatus, RunCodeResponse},
        problem::SupportedLanguage,
    },
    routes,
    services::{ApiClient, HttpUserRepository, ProblemBackend, UserRepository},
    state::FixtureState,
    workflow::{
        catalog::{ProblemQuery, ProblemTab, filter_problems},
        editor::EditorState,
        execution::{ExecutionWorkflow, RUN_FAILED_MESSAGE},
        loader::{DetailState, ProblemLoader},
        output::OutputView,
    },
};

/// Serves `app` on a random local port and returns its base URL
/// (e.g. "http://127.0.0.1:12345").
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Spawns the fixture backend with the sample problems and the given canned
/// run response. Returns the API base URL.
async fn spawn_app(run_response: RunCodeResponse) -> String {
    let state = FixtureState::new(fixtures::sample_problems(), run_response);
    let app = routes::create_fixture_router(state);
    format!("{}/api", serve(app).await)
}

/// A base URL nothing listens on.
async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

#[tokio::test]
async fn unknown_path_is_404() {
    // Arrange
    let base = spawn_app(RunCodeResponse::default()).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/random_path_that_does_not_exist", base))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn list_and_get_problems() {
    // Arrange
    let api = ApiClient::new(spawn_app(RunCodeResponse::default()).await);

    // Act
    let problems = api.list_problems().await.expect("list failed");
    let two_sum = api.get_problem("1").await.expect("get failed");

    // Assert
    assert_eq!(problems.len(), 5);
    assert_eq!(two_sum.title, "Two Sum");
    assert_eq!(two_sum.category, vec!["array", "hash-table"]);
    assert!(two_sum.starter_code_for(SupportedLanguage::Rust).contains("two_sum"));
}

#[tokio::test]
async fn missing_problem_is_not_found() {
    let api = ApiClient::new(spawn_app(RunCodeResponse::default()).await);

    let result = api.get_problem("does-not-exist").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn loader_degrades_on_malformed_payload() {
    // Arrange: a backend that answers with something other than JSON problems
    let app = Router::new()
        .route("/api/problems", get(|| async { "<html>oops</html>" }))
        .route(
            "/api/problems/{id}",
            get(|| async { axum::Json(serde_json::json!({ "title": "no id" })) }),
        );
    let api = Arc::new(ApiClient::new(format!("{}/api", serve(app).await)));

    // Act
    let malformed = api.list_problems().await;
    let loader = ProblemLoader::new(api);
    let problems = loader.load_list().await;
    let detail = loader.load_detail("1").await;

    // Assert
    assert!(matches!(malformed, Err(AppError::MalformedPayload(_))));
    assert!(problems.is_empty());
    assert!(matches!(detail, Some(DetailState::NotFound)));
}

#[tokio::test]
async fn list_keeps_problems_next_to_broken_records() {
    // Arrange
    let app = Router::new().route(
        "/api/problems",
        get(|| async {
            axum::Json(serde_json::json!([
                { "_id": "1", "title": "Two Sum", "difficulty": "easy", "category": ["array"] },
                { "title": "Draft without id" },
                { "_id": "7", "title": null },
            ]))
        }),
    );
    let loader = ProblemLoader::new(Arc::new(ApiClient::new(format!(
        "{}/api",
        serve(app).await
    ))));

    // Act
    let problems = loader.load_list().await;

    // Assert
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].object_id, "1");
    assert_eq!(problems[0].title, "Two Sum");
}

#[tokio::test]
async fn problem_id_is_sent_as_one_path_segment() {
    // Arrange: only the encoded id route answers
    let app = Router::new().route(
        "/api/problems/{id}",
        get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
            axum::Json(serde_json::json!({ "_id": id, "title": "Echo" }))
        }),
    );
    let api = ApiClient::new(format!("{}/api", serve(app).await));

    // Act
    let problem = api.get_problem("a/b?c").await.expect("get failed");

    // Assert: the server saw the whole id, slash and question mark included
    assert_eq!(problem.object_id, "a/b?c");
}

#[tokio::test]
async fn loader_degrades_on_transport_failure() {
    let loader = ProblemLoader::new(Arc::new(ApiClient::new(dead_address().await)));

    assert!(loader.load_list().await.is_empty());
    assert!(matches!(loader.load_detail("1").await, Some(DetailState::NotFound)));
}

#[tokio::test]
async fn search_over_fetched_problems() {
    let loader = ProblemLoader::new(Arc::new(ApiClient::new(
        spawn_app(RunCodeResponse::default()).await,
    )));
    let problems = loader.load_list().await;
    let solved = fixtures::sample_solved_ids();

    let hits = filter_problems(&problems, &ProblemQuery::new("string", ProblemTab::All), &solved);
    let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();

    assert!(titles.contains(&"Valid Parentheses"));
    assert!(titles.contains(&"Longest Substring Without Repeating Characters"));
    assert!(!titles.contains(&"Two Sum"));
}

#[tokio::test]
async fn run_flow_end_to_end() {
    // Arrange
    let api = Arc::new(ApiClient::new(
        spawn_app(RunCodeResponse {
            stdout: Some("[0,1]\n".to_string()),
            stderr: Some("DeprecationWarning".to_string()),
            message: None,
        })
        .await,
    ));
    let loader = ProblemLoader::new(api.clone());
    let problem = loader
        .load_detail("1")
        .await
        .and_then(|state| state.problem().cloned())
        .expect("problem should load");

    let mut editor = EditorState::new(&problem, SupportedLanguage::Python);
    editor.edit("print([0, 1])");
    let workflow = ExecutionWorkflow::new(api);

    // Act
    let result = workflow.run(editor.code(), editor.language(), "").await;

    // Assert
    assert_eq!(result.output, "[0,1]\n");
    assert_eq!(result.status, ExecutionStatus::Error);
    let view = OutputView::from_result(&result);
    assert!(view.is_error);
    assert!(view.execution_time.is_some());
}

#[tokio::test]
async fn run_transport_failure_shows_fixed_message() {
    let workflow = ExecutionWorkflow::new(Arc::new(ApiClient::new(dead_address().await)));

    let result = workflow.run("print(1)", SupportedLanguage::Python, "").await;

    assert_eq!(result.status, ExecutionStatus::Error);
    assert_eq!(result.output, RUN_FAILED_MESSAGE);
}

#[tokio::test]
async fn run_non_2xx_shows_fixed_message() {
    let app = Router::new().route(
        "/api/run-code",
        axum::routing::post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "judge down") }),
    );
    let api = Arc::new(ApiClient::new(format!("{}/api", serve(app).await)));
    let workflow = ExecutionWorkflow::new(api);

    let result = workflow.submit("int main() {}", SupportedLanguage::Cpp, "").await;

    assert_eq!(result.status, ExecutionStatus::Error);
    assert_eq!(result.output, RUN_FAILED_MESSAGE);
}

#[tokio::test]
async fn http_user_repository_reads_backend() {
    let user = fixtures::sample_user();
    let submissions = fixtures::sample_submissions();
    let app = Router::new()
        .route("/api/users/me", get(move || async move { axum::Json(user) }))
        .route(
            "/api/submissions",
            get(move || async move { axum::Json(submissions) }),
        )
        .route(
            "/api/users/me/solved",
            get(|| async { axum::Json(vec!["1", "3"]) }),
        );
    let repo = HttpUserRepository::new(ApiClient::new(format!("{}/api", serve(app).await)));

    let profile = repo.fetch_user_profile().await.unwrap();
    let history = repo.fetch_submissions().await.unwrap();
    let solved = repo.fetch_solved_problem_ids().await.unwrap();

    assert_eq!(profile.display_name, "John Doe");
    assert_eq!(history.len(), 5);
    assert!(solved.contains("3"));
}
