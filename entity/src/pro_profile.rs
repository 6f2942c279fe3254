use sea_orm::entity::prelude::*;

/// Public-facing profile of a service provider.
///
/// `user_id` links the profile to the provider's account once they have
/// signed in at least once; unclaimed profiles created by an owner have no
/// linked user yet. `bio` is authored in markdown. Only rows with
/// `published` set appear in the public listing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pro_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub specialty: String,
    pub bio: String,
    pub image_url: String,
    pub years_experience: i32,
    pub published: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
