//! Bomb domain models and parameters.

use uuid::Uuid;

use crate::{
    model::bomb::{BombDto, CreateBombDto, UpdateBombDto},
    server::{
        error::AppError,
        model::{
            game::{validate_latitude, validate_longitude},
            inventory::validate_bomb_type,
        },
    },
};

/// Bomb placed on the map, optionally owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Bomb {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub bomb_type: String,
    pub user_id: Option<Uuid>,
}

impl Bomb {
    pub fn into_dto(self) -> BombDto {
        BombDto {
            bomb_id: self.id,
            lat: self.latitude,
            long: self.longitude,
            type_bomb: self.bomb_type,
            id_user: self.user_id,
        }
    }

    pub fn from_entity(entity: entity::bomb::Model) -> Self {
        Self {
            id: entity.id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            bomb_type: entity.bomb_type,
            user_id: entity.user_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBombParams {
    pub latitude: f64,
    pub longitude: f64,
    pub bomb_type: String,
    pub user_id: Option<Uuid>,
}

impl CreateBombParams {
    /// Validates a bomb creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateBombParams)` - Coordinates in range and type tag present
    /// - `Err(AppError::BadRequest)` - Invalid coordinates or empty type
    pub fn from_dto(dto: CreateBombDto) -> Result<Self, AppError> {
        validate_latitude(dto.lat)?;
        validate_longitude(dto.long)?;
        validate_bomb_type(&dto.type_bomb)?;

        Ok(Self {
            latitude: dto.lat,
            longitude: dto.long,
            bomb_type: dto.type_bomb,
            user_id: dto.id_user,
        })
    }
}

/// Partial bomb update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBombParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bomb_type: Option<String>,
}

impl UpdateBombParams {
    pub fn from_dto(dto: UpdateBombDto) -> Result<Self, AppError> {
        if dto.lat.is_none() && dto.long.is_none() && dto.type_bomb.is_none() {
            return Err(AppError::BadRequest(
                "At least one field must be provided".to_string(),
            ));
        }
        if let Some(latitude) = dto.lat {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = dto.long {
            validate_longitude(longitude)?;
        }
        if let Some(bomb_type) = &dto.type_bomb {
            validate_bomb_type(bomb_type)?;
        }

        Ok(Self {
            latitude: dto.lat,
            longitude: dto.long,
            bomb_type: dto.type_bomb,
        })
    }
}
