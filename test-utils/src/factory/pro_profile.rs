//! Provider profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test provider profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pro_profile::ProProfileFactory;
///
/// let profile = ProProfileFactory::new(&db)
///     .name("Alex")
///     .specialty("Mobility")
///     .published(false)
///     .build()
///     .await?;
/// ```
pub struct ProProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    name: String,
    specialty: String,
    bio: String,
    image_url: String,
    years_experience: i32,
    published: bool,
}

impl<'a> ProProfileFactory<'a> {
    /// Creates a new ProProfileFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `None` (unclaimed profile)
    /// - name: `"Pro {id}"` where id is auto-incremented
    /// - specialty: `"Strength Training"`
    /// - bio: a short markdown snippet
    /// - image_url: a unique placeholder URL
    /// - years_experience: `5`
    /// - published: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            name: format!("Pro {}", id),
            specialty: "Strength Training".to_string(),
            bio: "Certified trainer focused on **sustainable progress**.".to_string(),
            image_url: format!("https://images.example.com/pros/{}.jpg", id),
            years_experience: 5,
            published: true,
        }
    }

    /// Links the profile to a user account.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the display name for the profile.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the specialty line.
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Sets the markdown bio.
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Sets the portrait image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the years of experience.
    pub fn years_experience(mut self, years: i32) -> Self {
        self.years_experience = years;
        self
    }

    /// Sets whether the profile appears in the public listing.
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pro_profile::Model)` - Created profile row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pro_profile::Model, DbErr> {
        entity::pro_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            specialty: ActiveValue::Set(self.specialty),
            bio: ActiveValue::Set(self.bio),
            image_url: ActiveValue::Set(self.image_url),
            years_experience: ActiveValue::Set(self.years_experience),
            published: ActiveValue::Set(self.published),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published profile with default values.
///
/// Shorthand for `ProProfileFactory::new(db).build().await`.
pub async fn create_pro_profile(
    db: &DatabaseConnection,
) -> Result<entity::pro_profile::Model, DbErr> {
    ProProfileFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_profile_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(ProProfile)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let profile = create_pro_profile(db).await?;

        assert!(profile.user_id.is_none());
        assert!(profile.published);
        assert!(!profile.name.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn creates_profile_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(ProProfile)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let profile = ProProfileFactory::new(db)
            .name("Alex")
            .specialty("Mobility")
            .years_experience(12)
            .published(false)
            .build()
            .await?;

        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.specialty, "Mobility");
        assert_eq!(profile.years_experience, 12);
        assert!(!profile.published);

        Ok(())
    }
}
