//! Provider profile repository for database operations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::pro::ProProfile;

/// Repository providing database operations for provider profiles.
pub struct ProRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all published profiles, ordered alphabetically by name.
    ///
    /// This is the listing served to the public landing page; unpublished
    /// profiles never appear here.
    ///
    /// # Returns
    /// - `Ok(Vec<ProProfile>)` - Published profiles (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_published(&self) -> Result<Vec<ProProfile>, DbErr> {
        let entities = entity::prelude::ProProfile::find()
            .filter(entity::pro_profile::Column::Published.eq(true))
            .order_by_asc(entity::pro_profile::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ProProfile::from_entity).collect())
    }

    /// Gets every profile regardless of published state, ordered by name.
    ///
    /// Used by the owner roster, which manages unpublished drafts too.
    pub async fn get_all(&self) -> Result<Vec<ProProfile>, DbErr> {
        let entities = entity::prelude::ProProfile::find()
            .order_by_asc(entity::pro_profile::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ProProfile::from_entity).collect())
    }

    /// Finds the profile linked to a user account.
    ///
    /// # Returns
    /// - `Ok(Some(ProProfile))` - The account has a linked profile
    /// - `Ok(None)` - No profile is linked to this account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<ProProfile>, DbErr> {
        let entity = entity::prelude::ProProfile::find()
            .filter(entity::pro_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ProProfile::from_entity))
    }

    /// Counts all profiles.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ProProfile::find().count(self.db).await
    }

    /// Counts published profiles.
    pub async fn count_published(&self) -> Result<u64, DbErr> {
        entity::prelude::ProProfile::find()
            .filter(entity::pro_profile::Column::Published.eq(true))
            .count(self.db)
            .await
    }
}
