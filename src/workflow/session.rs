// src/workflow/session.rs

use std::sync::{PoisonError, RwLock};

use validator::Validate;

use crate::{
    error::AppError,
    models::user::{AuthFormData, SignupFormData, User},
    services::users::UserRepository,
};

/// Who is using the app.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// Entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Session holder injected into every view that needs auth state.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: RwLock<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_logged_in()
    }

    /// Validates the login form, then loads the profile from `users`.
    ///
    /// There is no credential check on the client; the repository decides
    /// whose profile is returned.
    pub async fn sign_in<R>(&self, form: &AuthFormData, users: &R) -> Result<User, AppError>
    where
        R: UserRepository + ?Sized,
    {
        form.validate()?;
        self.establish(users).await
    }

    /// Validates the signup form, then loads the profile from `users`.
    pub async fn sign_up<R>(&self, form: &SignupFormData, users: &R) -> Result<User, AppError>
    where
        R: UserRepository + ?Sized,
    {
        form.validate()?;
        self.establish(users).await
    }

    pub fn sign_out(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Session::Anonymous;
        tracing::info!("Signed out");
    }

    /// Links of the navigation bar for the current session.
    pub fn nav_links(&self) -> Vec<NavLink> {
        let mut links = vec![
            NavLink {
                label: "Problems",
                path: "/problems",
            },
            NavLink {
                label: "Submissions",
                path: "/submissions",
            },
        ];
        if self.is_logged_in() {
            links.push(NavLink {
                label: "Profile",
                path: "/profile",
            });
        } else {
            links.push(NavLink {
                label: "Log in",
                path: "/login",
            });
            links.push(NavLink {
                label: "Sign up",
                path: "/signup",
            });
        }
        links
    }

    async fn establish<R>(&self, users: &R) -> Result<User, AppError>
    where
        R: UserRepository + ?Sized,
    {
        let user = users.fetch_user_profile().await?;
        tracing::info!("Signed in as {}", user.username);
        *self.session.write().unwrap_or_else(PoisonError::into_inner) =
            Session::Authenticated(user.clone());
        Ok(user)
    }
}
