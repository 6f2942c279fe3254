use chrono::{DateTime, Utc};

use crate::model::user::{Role, UnknownRole, UserDto};

/// Domain model for an authenticated user's account.
///
/// Unlike the entity, the role here is the validated closed enumeration; a
/// stored role string outside the known set fails conversion instead of
/// flowing through as an unchecked string.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub subject: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity row into the domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - Row carried a recognized role string
    /// - `Err(UnknownRole)` - Stored role is outside the closed role set
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, UnknownRole> {
        Ok(Self {
            id: entity.id,
            subject: entity.subject,
            name: entity.name,
            role: entity.role.parse()?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            role: self.role,
        }
    }
}

/// Parameters for inserting or updating a user on sign-in.
#[derive(Clone, Debug, PartialEq)]
pub struct UpsertUserParam {
    pub subject: String,
    pub name: String,
    pub role: Role,
}
