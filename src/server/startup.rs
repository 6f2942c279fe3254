use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    db::DATABASE,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Establishes the process-wide database handle.
///
/// Routes through the connection manager so the handle is memoized: the
/// connection is made once, migrations run as part of establishment, and any
/// later acquisition resolves to the same handle. Must complete successfully
/// before the application can serve traffic.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = DATABASE.init(&config.database_url).await?;

    Ok(db.clone())
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same SQLite database as application data. The store's
/// table is migrated here; sessions expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be applied to the API router
/// - `Err(AppError)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the HTTP client used for authentication provider requests.
///
/// Redirects are disabled so a malicious provider response cannot bounce
/// requests to internal addresses, and every request carries a timeout so a
/// stalled provider cannot hang a login indefinitely.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the external authentication provider.
///
/// # Arguments
/// - `config` - Application configuration carrying the provider endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize/token/redirect endpoints set
/// - `Err(AppError::ConfigErr)` - A configured endpoint failed URL parsing
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.auth_authorize_url.clone()).map_err(|source| {
        ConfigError::InvalidUrl {
            var: "AUTH_AUTHORIZE_URL".to_string(),
            source,
        }
    })?;
    let token_url =
        TokenUrl::new(config.auth_token_url.clone()).map_err(|source| ConfigError::InvalidUrl {
            var: "AUTH_TOKEN_URL".to_string(),
            source,
        })?;
    let redirect_url = RedirectUrl::new(config.auth_redirect_url.clone()).map_err(|source| {
        ConfigError::InvalidUrl {
            var: "AUTH_REDIRECT_URL".to_string(),
            source,
        }
    })?;

    Ok(BasicClient::new(ClientId::new(config.auth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.auth_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url))
}
