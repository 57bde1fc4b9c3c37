use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::team::TeamDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id_game: Uuid,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub size: f64,
    pub starting_date: DateTime<Utc>,
    pub ending_date: DateTime<Utc>,
    pub teams: Vec<TeamDto>,
}

/// Every field is required; missing ones are reported together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateGameDto {
    pub center_latitude: Option<f64>,
    pub center_longitude: Option<f64>,
    pub size: Option<f64>,
    pub starting_date: Option<DateTime<Utc>>,
    pub ending_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGameDto {
    pub center_latitude: Option<f64>,
    pub center_longitude: Option<f64>,
    pub size: Option<f64>,
    pub starting_date: Option<DateTime<Utc>>,
    pub ending_date: Option<DateTime<Utc>>,
}
