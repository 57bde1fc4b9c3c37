use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BombDto {
    pub bomb_id: Uuid,
    pub lat: f64,
    pub long: f64,
    pub type_bomb: String,
    pub id_user: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBombDto {
    pub lat: f64,
    pub long: f64,
    #[serde(default)]
    pub type_bomb: String,
    #[serde(default)]
    pub id_user: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBombDto {
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub type_bomb: Option<String>,
}
