use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The request reached a guarded endpoint without an authenticated session.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// The session holds a user ID but no matching account row was found,
    /// typically because the account was removed after sign-in. Results in a
    /// 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// A role claim did not match any known role.
    ///
    /// Raised when the provider's userinfo response or a stored account row
    /// carries a role string outside the closed role set. Results in a
    /// 403 Forbidden response.
    #[error("Unrecognized role claim '{0}'")]
    InvalidRoleClaim(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code exchange with the provider failed.
    ///
    /// Results in a 500 Internal Server Error response with the provider error
    /// logged server-side.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Session and lookup failures map to 401, role failures to 403, CSRF failures
/// to 400, and provider exchange failures to 500. Client-facing messages stay
/// generic; details are logged server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth error: {}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be signed in to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) | Self::InvalidRoleClaim(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
