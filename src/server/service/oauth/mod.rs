//! OAuth2 login with the external authentication provider.
//!
//! The provider is consumed only through its standard surfaces: the authorize
//! redirect, the code-for-token exchange, and a userinfo document carrying a
//! subject, a display name, and a role claim.

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

pub struct AuthService {
    pub http_client: reqwest::Client,
    pub oauth_client: OAuth2Client,
    pub userinfo_url: String,
}

impl AuthService {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            userinfo_url,
        }
    }
}
