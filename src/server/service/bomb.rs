use uuid::Uuid;

use crate::{
    model::bomb::{CreateBombDto, UpdateBombDto},
    server::{
        data::bomb::BombRepository,
        error::AppError,
        model::bomb::{Bomb, CreateBombParams, UpdateBombParams},
    },
};

pub struct BombService<R> {
    repo: R,
}

impl<R: BombRepository> BombService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and places a bomb.
    ///
    /// # Returns
    /// - `Ok(Bomb)` - The created bomb
    /// - `Err(AppError::BadRequest)` - Invalid coordinates or empty type
    /// - `Err(AppError::NotFound)` - Referenced owner doesn't exist
    pub async fn create(&self, dto: CreateBombDto) -> Result<Bomb, AppError> {
        let params = CreateBombParams::from_dto(dto)?;

        if let Some(user_id) = params.user_id {
            if !self.repo.user_exists(user_id).await? {
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            }
        }

        Ok(self.repo.create(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Bomb>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_all_by_user_id(&self, user_id: Uuid) -> Result<Vec<Bomb>, AppError> {
        Ok(self.repo.find_all_by_user_id(user_id).await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Bomb, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bomb {} not found", id)))
    }

    /// Overwrites the supplied fields of a bomb.
    ///
    /// # Returns
    /// - `Ok(Bomb)` - The updated bomb
    /// - `Err(AppError::BadRequest)` - Empty payload or invalid values
    /// - `Err(AppError::NotFound)` - No bomb with that id
    pub async fn update(&self, id: Uuid, dto: UpdateBombDto) -> Result<Bomb, AppError> {
        let params = UpdateBombParams::from_dto(dto)?;

        self.repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bomb {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Bomb {} not found", id)));
        }

        Ok(())
    }
}
