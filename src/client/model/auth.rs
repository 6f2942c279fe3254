use dioxus::prelude::*;

use crate::{
    client::model::error::ApiError,
    model::user::{Role, UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

/// Context wrapper around the session state signal.
///
/// Provided once at the application root; every component that needs the
/// session reads through this handle, and the guard layouts re-evaluate
/// whenever the state changes.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    #[cfg(feature = "web")]
    pub fn fetch_user(&mut self) {
        let future = use_resource(get_user);
        if let Some(result) = &*future.read_unchecked() {
            let mut ctx = self.inner.write();
            *ctx = match result {
                Ok(Some(user)) => AuthState::Authenticated(user.clone()),
                Ok(None) => AuthState::NotLoggedIn,
                Err(e) => AuthState::Error(e.clone()),
            };
        }
    }
}

#[derive(Clone)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is authenticated
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl AuthState {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Role claim of the authenticated user, if any
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }
}
