//! User domain models and parameters.
//!
//! Users authenticate by email and password. The stored password is always an
//! Argon2 PHC string and never leaves the server layer.

use uuid::Uuid;

use crate::model::user::UserDto;

/// Registered player.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub team_id: Option<Uuid>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id_user: self.id,
            email: self.email,
            user_name: self.username,
            id_team: self.team_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            team_id: entity.team_id,
        }
    }
}

/// Values for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Overwrites applied by a user update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub team_id: Option<Uuid>,
}

/// Criterion for looking up a single user.
#[derive(Debug, Clone)]
pub enum UserFilter {
    Id(Uuid),
    Email(String),
    Username(String),
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id),
            Self::Email(email) => write!(f, "email {}", email),
            Self::Username(username) => write!(f, "username {}", username),
        }
    }
}
