use serde::{Deserialize, Serialize};

/// Capability class of an authenticated user.
///
/// Roles are a closed set: a role claim that doesn't match one of these
/// variants is rejected at the boundary where it is read (the provider's
/// userinfo response or a stored account row) rather than silently failing
/// membership checks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Pro,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Pro => "pro",
        }
    }

    /// Path of the dashboard subtree this role is allowed into.
    pub const fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Owner => "/owner",
            Role::Pro => "/pro",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role claim string doesn't name a known role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl std::fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized role claim '{}'", self.0)
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "owner" => Ok(Role::Owner),
            "pro" => Ok(Role::Pro),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub role: Role,
}
