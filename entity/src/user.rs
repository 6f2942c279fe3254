use sea_orm::entity::prelude::*;

/// Account record for an authenticated user.
///
/// `subject` is the stable identifier issued by the external authentication
/// provider. `role` holds the raw role claim string; it is validated against
/// the closed role enumeration when converted to a domain model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub subject: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
