use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id_team: Uuid,
    pub score: i32,
    pub name: String,
    pub color: String,
    pub id_game: Uuid,
}

/// Payload shared by team creation and full team update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamPayloadDto {
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub id_game: Uuid,
}
