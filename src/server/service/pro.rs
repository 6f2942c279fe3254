use sea_orm::DatabaseConnection;

use crate::server::{
    data::{pro::ProRepository, user::UserRepository},
    error::AppError,
    model::pro::{OwnerOverview, ProProfile},
};

/// Business logic for provider profiles and roster overviews.
pub struct ProService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the published profiles shown on the public landing page.
    pub async fn list_published(&self) -> Result<Vec<ProProfile>, AppError> {
        let profiles = ProRepository::new(self.db).get_published().await?;

        Ok(profiles)
    }

    /// Lists every profile, drafts included, for the owner roster.
    pub async fn list_all(&self) -> Result<Vec<ProProfile>, AppError> {
        let profiles = ProRepository::new(self.db).get_all().await?;

        Ok(profiles)
    }

    /// Looks up the profile linked to a signed-in provider account.
    pub async fn profile_for_user(&self, user_id: i32) -> Result<Option<ProProfile>, AppError> {
        let profile = ProRepository::new(self.db).find_by_user_id(user_id).await?;

        Ok(profile)
    }

    /// Collects the roster counts shown on the owner dashboard.
    pub async fn overview(&self) -> Result<OwnerOverview, AppError> {
        let pro_repo = ProRepository::new(self.db);

        Ok(OwnerOverview {
            pro_count: pro_repo.count().await?,
            published_count: pro_repo.count_published().await?,
            user_count: UserRepository::new(self.db).count().await?,
        })
    }
}
