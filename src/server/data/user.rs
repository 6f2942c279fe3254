//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing account records. Conversion to
//! the domain model validates the stored role string, so these methods return
//! `AppError` rather than a bare database error: a row carrying an
//! unrecognized role is reported explicitly instead of leaking outward as an
//! unchecked string.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user keyed on the provider subject.
    ///
    /// Inserts a new account on first sign-in; on later sign-ins updates the
    /// display name and role to the provider's current claims. `created_at`
    /// is written only on insert.
    ///
    /// # Arguments
    /// - `param` - Subject, display name, and validated role claim
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated account
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            subject: ActiveValue::Set(param.subject),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Subject)
                .update_columns([entity::user::Column::Name, entity::user::Column::Role])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity).map_err(|err| AuthError::InvalidRoleClaim(err.0).into())
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found, role validated
    /// - `Ok(None)` - No account with that ID
    /// - `Err(AppError)` - Database error, or the stored role is unrecognized
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity
            .map(|entity| {
                User::from_entity(entity)
                    .map_err(|err| AuthError::InvalidRoleClaim(err.0).into())
            })
            .transpose()
    }

    /// Counts all registered accounts.
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::User::find().count(self.db).await?;

        Ok(count)
    }
}
