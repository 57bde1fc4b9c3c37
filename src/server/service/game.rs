//! Game lifecycle: validated creation, partial updates and deletion.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::game::{CreateGameDto, UpdateGameDto},
    server::{
        data::game::GameRepository,
        error::AppError,
        model::game::{CreateGameParams, Game, UpdateGameParams},
    },
};

pub struct GameService<R> {
    repo: R,
}

impl<R: GameRepository> GameService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and creates a game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with no teams
    /// - `Err(AppError::BadRequest)` - Missing fields or values out of range
    pub async fn create(&self, dto: CreateGameDto) -> Result<Game, AppError> {
        let params = CreateGameParams::from_dto(dto, Utc::now())?;

        let game = self.repo.create(params).await?;

        tracing::info!("Created game {}", game.id);

        Ok(game)
    }

    /// Gets a game with its teams.
    ///
    /// # Returns
    /// - `Ok(Game)` - The game
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Game, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", id)))
    }

    pub async fn find_all(&self) -> Result<Vec<Game>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    /// Validates the supplied fields and overwrites them.
    ///
    /// # Returns
    /// - `Ok(Game)` - The updated game with its teams
    /// - `Err(AppError::BadRequest)` - Empty payload or values out of range
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn update(&self, id: Uuid, dto: UpdateGameDto) -> Result<Game, AppError> {
        let params = UpdateGameParams::from_dto(dto, Utc::now())?;

        self.repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", id)))
    }

    /// Deletes a game and its teams.
    ///
    /// # Returns
    /// - `Ok(())` - Game deleted
    /// - `Err(AppError::NotFound)` - No game with that id
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Game {} not found", id)));
        }

        tracing::info!("Deleted game {}", id);

        Ok(())
    }
}
