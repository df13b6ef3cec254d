// src/services/api.rs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    error::AppError,
    models::{
        execution::{RunCodeRequest, RunCodeResponse},
        problem::Problem,
    },
    services::backend::{ExecutionBackend, ProblemBackend},
};

/// HTTP client for the problem/execution backend.
///
/// Plain JSON over HTTP, no auth headers, no retries, no request timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `segments` onto the base URL, percent-encoding each one so an
    /// id can never change the requested path.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs the endpoint at `segments` and decodes the body as JSON.
    ///
    /// 404 maps to `NotFound`, any other non-2xx to `Transport`, and an
    /// undecodable body to `MalformedPayload`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("{} returned 404", url)));
        }
        if !status.is_success() {
            return Err(AppError::Transport(format!("{} returned {}", url, status)));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            AppError::MalformedPayload(format!("Invalid JSON from backend at {}: {}", url, e))
        })
    }
}

/// Decodes one entry of the problem list, or logs why it was skipped.
///
/// Entries without an `_id` cannot be linked to and are dropped, as are
/// entries whose fields have the wrong type.
fn decode_listed_problem(index: usize, record: Value) -> Option<Problem> {
    let has_id = record
        .get("_id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());
    if !has_id {
        let title = record.get("title").and_then(Value::as_str).unwrap_or("");
        tracing::error!("Problem ID is undefined for: {}", title);
        return None;
    }

    match serde_json::from_value(record) {
        Ok(problem) => Some(problem),
        Err(e) => {
            tracing::error!("Skipping malformed problem at index {}: {}", index, e);
            None
        }
    }
}

#[async_trait]
impl ProblemBackend for ApiClient {
    /// A broken entry only costs that entry; the rest of the list is kept.
    async fn list_problems(&self) -> Result<Vec<Problem>, AppError> {
        let records: Vec<Value> = self.get_json(&["problems"]).await?;
        Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| decode_listed_problem(index, record))
            .collect())
    }

    async fn get_problem(&self, id: &str) -> Result<Problem, AppError> {
        if matches!(id, "" | "." | "..") {
            return Err(AppError::NotFound(format!("Invalid problem id '{}'", id)));
        }
        self.get_json(&["problems", id]).await
    }
}

#[async_trait]
impl ExecutionBackend for ApiClient {
    async fn run_code(&self, request: &RunCodeRequest) -> Result<RunCodeResponse, AppError> {
        let url = self.endpoint(&["run-code"])?;
        tracing::debug!("POST {} ({})", url, request.language);

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<RunCodeResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(
            client.endpoint(&["problems"]).unwrap().as_str(),
            "http://localhost:5000/api/problems"
        );
        assert_eq!(
            client.endpoint(&["run-code"]).unwrap().as_str(),
            "http://localhost:5000/api/run-code"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let client = ApiClient::new("http://localhost:5000/api");

        let url = client.endpoint(&["problems", "a/b?c#d"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:5000/api/problems/a%2Fb%3Fc%23d");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[tokio::test]
    async fn test_dot_ids_are_not_requested() {
        // Nothing listens here; an actual request would be a Transport error.
        let client = ApiClient::new("http://127.0.0.1:9/api");

        for id in ["", ".", ".."] {
            let result = client.get_problem(id).await;
            assert!(matches!(result, Err(AppError::NotFound(_))), "id {:?}", id);
        }
    }

    #[test]
    fn test_listed_problem_without_id_is_skipped() {
        let good = serde_json::json!({ "_id": "1", "title": "Two Sum" });
        let draft = serde_json::json!({ "title": "Draft without id" });
        let broken = serde_json::json!({ "_id": "2", "title": null });

        assert_eq!(decode_listed_problem(0, good).unwrap().title, "Two Sum");
        assert!(decode_listed_problem(1, draft).is_none());
        assert!(decode_listed_problem(2, broken).is_none());
    }
}
