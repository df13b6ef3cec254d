// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::{Config, UserDataSource},
    models::{execution::RunCodeResponse, problem::Problem},
    services::{
        api::ApiClient,
        users::{FixtureUserRepository, HttpUserRepository, UserRepository},
    },
    workflow::session::SessionStore,
};

/// Everything the front end needs, built once at startup and passed down.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: Arc<ApiClient>,
    pub users: Arc<dyn UserRepository>,
    pub session: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        let users: Arc<dyn UserRepository> = match config.user_data_source {
            UserDataSource::Fixture => Arc::new(FixtureUserRepository::default()),
            UserDataSource::Backend => Arc::new(HttpUserRepository::new(api.clone())),
        };

        Self {
            config,
            api: Arc::new(api),
            users,
            session: Arc::new(SessionStore::new()),
        }
    }
}

/// Problems served by the fixture backend.
#[derive(Clone, Debug)]
pub struct ProblemStore(pub Arc<Vec<Problem>>);

/// Response the fixture backend returns for every run request.
#[derive(Clone, Debug)]
pub struct CannedRun(pub Arc<RunCodeResponse>);

/// State of the fixture backend router.
#[derive(Clone, Debug)]
pub struct FixtureState {
    pub problems: ProblemStore,
    pub run_response: CannedRun,
}

impl FixtureState {
    pub fn new(problems: Vec<Problem>, run_response: RunCodeResponse) -> Self {
        Self {
            problems: ProblemStore(Arc::new(problems)),
            run_response: CannedRun(Arc::new(run_response)),
        }
    }
}

impl FromRef<FixtureState> for ProblemStore {
    fn from_ref(state: &FixtureState) -> Self {
        state.problems.clone()
    }
}

impl FromRef<FixtureState> for CannedRun {
    fn from_ref(state: &FixtureState) -> Self {
        state.run_response.clone()
    }
}
