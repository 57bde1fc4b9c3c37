use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id_user: Uuid,
    pub email: String,
    pub user_name: String,
    pub id_team: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginUserDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Fields left empty keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub id_team: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct UserIdQuery {
    pub id_user: Uuid,
}
