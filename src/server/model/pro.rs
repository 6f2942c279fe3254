use chrono::{DateTime, Utc};

use crate::model::pro::{OwnerOverviewDto, ProProfileDto};

/// Domain model for a service provider profile.
#[derive(Clone, Debug, PartialEq)]
pub struct ProProfile {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub image_url: String,
    pub years_experience: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl ProProfile {
    pub fn from_entity(entity: entity::pro_profile::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            specialty: entity.specialty,
            bio: entity.bio,
            image_url: entity.image_url,
            years_experience: entity.years_experience,
            published: entity.published,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProProfileDto {
        ProProfileDto {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            bio: self.bio,
            image_url: self.image_url,
            years_experience: self.years_experience,
            published: self.published,
        }
    }
}

/// Roster counts backing the owner dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerOverview {
    pub pro_count: u64,
    pub published_count: u64,
    pub user_count: u64,
}

impl OwnerOverview {
    pub fn into_dto(self) -> OwnerOverviewDto {
        OwnerOverviewDto {
            pro_count: self.pro_count,
            published_count: self.published_count,
            user_count: self.user_count,
        }
    }
}
