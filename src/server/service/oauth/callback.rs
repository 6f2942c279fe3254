use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::{
    model::user::UnknownRole,
    server::{
        error::{auth::AuthError, AppError},
        model::user::UpsertUserParam,
        service::oauth::AuthService,
    },
};

/// Claims read from the provider's userinfo endpoint.
#[derive(Deserialize)]
pub struct UserInfoClaims {
    pub sub: String,
    pub name: String,
    pub role: String,
}

impl AuthService {
    /// Completes the OAuth flow for an authorization code.
    ///
    /// Exchanges the code for an access token, fetches the provider's
    /// userinfo document, and maps its claims onto upsert parameters. The
    /// role claim is validated against the closed role set; an account whose
    /// provider role is unrecognized cannot sign in.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the provider callback
    ///
    /// # Returns
    /// - `Ok(UpsertUserParam)` - Subject, name, and validated role
    /// - `Err(AppError)` - Exchange failure, userinfo fetch failure, or an
    ///   unrecognized role claim
    pub async fn callback(&self, code: String) -> Result<UpsertUserParam, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

        let claims = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfoClaims>()
            .await?;

        user_from_claims(claims)
    }
}

/// Maps userinfo claims onto upsert parameters.
///
/// # Returns
/// - `Ok(UpsertUserParam)` - Claims carried a recognized role
/// - `Err(AppError::AuthErr(InvalidRoleClaim))` - Role claim outside the
///   closed role set
pub fn user_from_claims(claims: UserInfoClaims) -> Result<UpsertUserParam, AppError> {
    let role = claims
        .role
        .parse()
        .map_err(|err: UnknownRole| AuthError::InvalidRoleClaim(err.0))?;

    Ok(UpsertUserParam {
        subject: claims.sub,
        name: claims.name,
        role,
    })
}
