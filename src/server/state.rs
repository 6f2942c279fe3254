//! Application state shared across all request handlers.
//!
//! The `AppState` struct holds the shared resources every handler needs. It is
//! initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pool, `reqwest::Client` wraps an `Arc`, and the
//! OAuth2 client is designed to be cloned.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// Type alias for the OAuth2 client configured for the authentication provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// A clone of the process-wide handle owned by the connection manager;
    /// clones share the same pool.
    pub db: DatabaseConnection,

    /// HTTP client for calls to the authentication provider.
    ///
    /// Configured with redirects disabled to prevent SSRF through provider
    /// responses.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the external authentication provider.
    ///
    /// Generates login URLs and exchanges authorization codes for access
    /// tokens.
    pub oauth_client: OAuth2Client,

    /// Userinfo endpoint of the authentication provider.
    pub auth_userinfo_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        auth_userinfo_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            auth_userinfo_url,
        }
    }
}
