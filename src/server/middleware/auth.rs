use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Server-side counterpart of the UI access guard.
///
/// Role-scoped API endpoints call `require` before doing any work; the
/// redirect the UI performs for an unauthorized visitor maps to 401/403
/// responses here.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user whose role is in the allowed set.
    ///
    /// Membership is any-of: the caller passes the roles permitted on the
    /// endpoint and the user needs exactly one of them. The allowed set must
    /// be non-empty.
    ///
    /// # Arguments
    /// - `allowed` - Roles permitted to use the endpoint
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding an allowed role
    /// - `Err(AppError::AuthErr(_))` - No session user, user missing from the
    ///   database, unrecognized stored role, or role not in the allowed set
    pub async fn require(&self, allowed: &[Role]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !allowed.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "User with role '{}' attempted to access an endpoint restricted to {:?}",
                    user.role, allowed
                ),
            )
            .into());
        }

        Ok(user)
    }
}
