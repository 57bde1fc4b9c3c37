use uuid::Uuid;

use crate::{
    model::team::TeamPayloadDto,
    server::{
        data::team::TeamRepository,
        error::AppError,
        model::team::{Team, TeamParams},
    },
};

pub struct TeamService<R> {
    repo: R,
}

impl<R: TeamRepository> TeamService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and creates a team in an existing game.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::BadRequest)` - Invalid payload
    /// - `Err(AppError::NotFound)` - Referenced game doesn't exist
    pub async fn create(&self, dto: TeamPayloadDto) -> Result<Team, AppError> {
        let params = self.validate(dto).await?;

        Ok(self.repo.create(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Team>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Overwrites all fields of an existing team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(AppError::BadRequest)` - Invalid payload
    /// - `Err(AppError::NotFound)` - Team or referenced game doesn't exist
    pub async fn update(&self, id: Uuid, dto: TeamPayloadDto) -> Result<Team, AppError> {
        let params = self.validate(dto).await?;

        self.repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }

        Ok(())
    }

    async fn validate(&self, dto: TeamPayloadDto) -> Result<TeamParams, AppError> {
        let params = TeamParams::from_dto(dto)?;

        if !self.repo.game_exists(params.game_id).await? {
            return Err(AppError::NotFound(format!(
                "Game {} not found",
                params.game_id
            )));
        }

        Ok(params)
    }
}
