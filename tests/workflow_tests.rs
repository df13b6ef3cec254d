// tests/workflow_tests.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use frontend::{
    error::AppError,
    fixtures,
    models::{
        execution::{ExecutionStatus, RunCodeRequest, RunCodeResponse},
        problem::{Problem, SupportedLanguage},
    },
    services::{ExecutionBackend, ProblemBackend},
    workflow::{
        execution::ExecutionWorkflow,
        loader::{DetailState, ProblemLoader},
        output::{OUTPUT_PLACEHOLDER, OutputView},
    },
};
use tokio::sync::Notify;

/// Runner that parks every request until the test releases it.
struct GatedRunner {
    entered: Notify,
    release: Notify,
    response: RunCodeResponse,
}

#[async_trait]
impl ExecutionBackend for GatedRunner {
    async fn run_code(&self, _request: &RunCodeRequest) -> Result<RunCodeResponse, AppError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.response.clone())
    }
}

/// Problem store whose responses are released per id by the test.
struct GatedProblems {
    problems: Vec<Problem>,
    gates: HashMap<String, Arc<Notify>>,
    entered: Notify,
}

#[async_trait]
impl ProblemBackend for GatedProblems {
    async fn list_problems(&self) -> Result<Vec<Problem>, AppError> {
        Ok(self.problems.clone())
    }

    async fn get_problem(&self, id: &str) -> Result<Problem, AppError> {
        if let Some(gate) = self.gates.get(id) {
            self.entered.notify_one();
            gate.notified().await;
        }
        self.problems
            .iter()
            .find(|p| p.object_id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

#[tokio::test]
async fn run_control_disabled_while_running() {
    // Arrange
    let runner = Arc::new(GatedRunner {
        entered: Notify::new(),
        release: Notify::new(),
        response: RunCodeResponse {
            stderr: Some("Traceback: ZeroDivisionError".to_string()),
            ..Default::default()
        },
    });
    let workflow = Arc::new(ExecutionWorkflow::new(runner.clone()));
    assert!(workflow.is_run_enabled());

    // Act
    let in_flight = {
        let workflow = workflow.clone();
        tokio::spawn(async move { workflow.run("1/0", SupportedLanguage::Python, "").await })
    };
    runner.entered.notified().await;

    // Assert: running, control disabled, output cleared
    assert_eq!(workflow.status(), ExecutionStatus::Running);
    assert!(!workflow.is_run_enabled());
    let view = OutputView::from_result(&workflow.result());
    assert_eq!(view.header, "Running...");
    assert_eq!(view.body, OUTPUT_PLACEHOLDER);

    runner.release.notify_one();
    let result = in_flight.await.unwrap();

    assert_eq!(result.status, ExecutionStatus::Error);
    assert_eq!(result.output, "Traceback: ZeroDivisionError");
    assert!(workflow.is_run_enabled());
}

#[tokio::test]
async fn stale_detail_response_is_discarded() {
    // Arrange: problem "1" is slow, problem "2" answers immediately
    let slow = Arc::new(Notify::new());
    let backend = Arc::new(GatedProblems {
        problems: fixtures::sample_problems(),
        gates: HashMap::from([("1".to_string(), slow.clone())]),
        entered: Notify::new(),
    });
    let loader = Arc::new(ProblemLoader::new(backend.clone()));

    // Act: navigate to 1, then to 2 before 1 resolves
    let first = {
        let loader = loader.clone();
        tokio::spawn(async move { loader.load_detail("1").await })
    };
    backend.entered.notified().await;

    let second = loader.load_detail("2").await;
    slow.notify_one();
    let first = first.await.unwrap();

    // Assert: the older request lost
    assert!(first.is_none());
    let second = second.expect("latest request must be applied");
    assert_eq!(second.problem().unwrap().title, "Valid Parentheses");
    match loader.detail() {
        DetailState::Loaded(problem) => assert_eq!(problem.object_id, "2"),
        other => panic!("unexpected state {:?}", other),
    }
}

#[tokio::test]
async fn submit_and_run_share_one_path() {
    let runner = Arc::new(GatedRunner {
        entered: Notify::new(),
        release: Notify::new(),
        response: RunCodeResponse {
            stdout: Some("true\n".to_string()),
            ..Default::default()
        },
    });
    let workflow = ExecutionWorkflow::new(runner.clone());

    runner.release.notify_one();
    let run = workflow.run("isValid('()')", SupportedLanguage::Javascript, "").await;
    runner.release.notify_one();
    let submit = workflow.submit("isValid('()')", SupportedLanguage::Javascript, "").await;

    assert_eq!(run.output, submit.output);
    assert_eq!(submit.status, ExecutionStatus::Success);
}
