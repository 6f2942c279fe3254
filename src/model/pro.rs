use serde::{Deserialize, Serialize};

/// Public profile of a service provider.
///
/// `bio` is markdown source; the landing page renders it to HTML on the
/// client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProProfileDto {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub image_url: String,
    pub years_experience: i32,
    pub published: bool,
}

/// Roster counts shown on the owner dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OwnerOverviewDto {
    pub pro_count: u64,
    pub published_count: u64,
    pub user_count: u64,
}
