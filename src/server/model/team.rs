//! Team domain models and parameters.

use uuid::Uuid;

use crate::{
    model::team::{TeamDto, TeamPayloadDto},
    server::error::AppError,
};

/// Team competing in a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub color: String,
    pub score: i32,
}

impl Team {
    /// Converts the team domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id_team: self.id,
            score: self.score,
            name: self.name,
            color: self.color,
            id_game: self.game_id,
        }
    }

    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            name: entity.name,
            color: entity.color,
            score: entity.score,
        }
    }
}

/// Validated values written on team creation and on full team update.
#[derive(Debug, Clone)]
pub struct TeamParams {
    pub game_id: Uuid,
    pub name: String,
    pub color: String,
    pub score: i32,
}

impl TeamParams {
    /// Validates a team payload.
    ///
    /// # Returns
    /// - `Ok(TeamParams)` - Non-negative score, non-empty name and color, non-nil game id
    /// - `Err(AppError::BadRequest)` - First failing rule
    pub fn from_dto(dto: TeamPayloadDto) -> Result<Self, AppError> {
        if dto.score < 0 {
            return Err(AppError::BadRequest(
                "The score must not be negative".to_string(),
            ));
        }
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("The name must not be null".to_string()));
        }
        if dto.color.trim().is_empty() {
            return Err(AppError::BadRequest(
                "The color must not be null".to_string(),
            ));
        }
        if dto.id_game.is_nil() {
            return Err(AppError::BadRequest("The id_game must not be null".to_string()));
        }

        Ok(Self {
            game_id: dto.id_game,
            name: dto.name,
            color: dto.color,
            score: dto.score,
        })
    }
}
