// src/services/users.rs

use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    error::AppError,
    fixtures,
    models::{submission::Submission, user::User},
    services::api::ApiClient,
};

/// Source of the signed-in user's profile and history.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn fetch_user_profile(&self) -> Result<User, AppError>;

    async fn fetch_submissions(&self) -> Result<Vec<Submission>, AppError>;

    async fn fetch_solved_problem_ids(&self) -> Result<HashSet<String>, AppError>;
}

/// In-memory repository backed by fixed data.
#[derive(Debug, Clone)]
pub struct FixtureUserRepository {
    user: User,
    submissions: Vec<Submission>,
    solved: HashSet<String>,
}

impl FixtureUserRepository {
    pub fn new(user: User, submissions: Vec<Submission>, solved: HashSet<String>) -> Self {
        Self {
            user,
            submissions,
            solved,
        }
    }
}

impl Default for FixtureUserRepository {
    /// The demo profile, its five submissions and solved set `{"1"}`.
    fn default() -> Self {
        Self::new(
            fixtures::sample_user(),
            fixtures::sample_submissions(),
            fixtures::sample_solved_ids(),
        )
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn fetch_user_profile(&self) -> Result<User, AppError> {
        Ok(self.user.clone())
    }

    async fn fetch_submissions(&self) -> Result<Vec<Submission>, AppError> {
        Ok(self.submissions.clone())
    }

    async fn fetch_solved_problem_ids(&self) -> Result<HashSet<String>, AppError> {
        Ok(self.solved.clone())
    }
}

/// Repository reading `/users/me`, `/submissions` and `/users/me/solved`.
#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    api: ApiClient,
}

impl HttpUserRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn fetch_user_profile(&self) -> Result<User, AppError> {
        self.api.get_json(&["users", "me"]).await
    }

    async fn fetch_submissions(&self) -> Result<Vec<Submission>, AppError> {
        self.api.get_json(&["submissions"]).await
    }

    async fn fetch_solved_problem_ids(&self) -> Result<HashSet<String>, AppError> {
        let ids: Vec<String> = self.api.get_json(&["users", "me", "solved"]).await?;
        Ok(ids.into_iter().collect())
    }
}
