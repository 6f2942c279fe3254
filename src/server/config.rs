use crate::server::error::{config::ConfigError, AppError};

/// Application configuration loaded from the environment.
///
/// Every field is required; a missing variable is a fatal startup condition
/// because the process must not serve traffic without a database target or a
/// working authentication provider.
pub struct Config {
    pub database_url: String,

    pub auth_client_id: String,
    pub auth_client_secret: String,
    pub auth_redirect_url: String,

    pub auth_authorize_url: String,
    pub auth_token_url: String,
    pub auth_userinfo_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            auth_client_id: require_env("AUTH_CLIENT_ID")?,
            auth_client_secret: require_env("AUTH_CLIENT_SECRET")?,
            auth_redirect_url: require_env("AUTH_REDIRECT_URL")?,
            auth_authorize_url: require_env("AUTH_AUTHORIZE_URL")?,
            auth_token_url: require_env("AUTH_TOKEN_URL")?,
            auth_userinfo_url: require_env("AUTH_USERINFO_URL")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
