//! Bomb data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::bomb::{Bomb, CreateBombParams, UpdateBombParams};

/// Persistence operations for bombs.
#[trait_variant::make(BombRepository: Send)]
pub trait LocalBombRepository {
    async fn create(&self, params: CreateBombParams) -> Result<Bomb, DbErr>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bomb>, DbErr>;

    async fn find_all(&self) -> Result<Vec<Bomb>, DbErr>;

    /// Lists the bombs owned by a user.
    async fn find_all_by_user_id(&self, user_id: Uuid) -> Result<Vec<Bomb>, DbErr>;

    /// Overwrites the supplied fields. Returns `None` if the bomb doesn't exist.
    async fn update(&self, id: Uuid, params: UpdateBombParams) -> Result<Option<Bomb>, DbErr>;

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr>;

    /// Checks whether the referenced user exists.
    async fn user_exists(&self, user_id: Uuid) -> Result<bool, DbErr>;
}

/// SeaORM implementation of [`BombRepository`].
pub struct SeaBombRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaBombRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BombRepository for SeaBombRepository<'_> {
    async fn create(&self, params: CreateBombParams) -> Result<Bomb, DbErr> {
        let now = Utc::now();

        let entity = entity::bomb::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            bomb_type: ActiveValue::Set(params.bomb_type),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Bomb::from_entity(entity))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bomb>, DbErr> {
        let entity = entity::prelude::Bomb::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Bomb::from_entity))
    }

    async fn find_all(&self) -> Result<Vec<Bomb>, DbErr> {
        let entities = entity::prelude::Bomb::find()
            .order_by_asc(entity::bomb::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bomb::from_entity).collect())
    }

    async fn find_all_by_user_id(&self, user_id: Uuid) -> Result<Vec<Bomb>, DbErr> {
        let entities = entity::prelude::Bomb::find()
            .filter(entity::bomb::Column::UserId.eq(user_id))
            .order_by_asc(entity::bomb::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bomb::from_entity).collect())
    }

    async fn update(&self, id: Uuid, params: UpdateBombParams) -> Result<Option<Bomb>, DbErr> {
        let Some(bomb) = entity::prelude::Bomb::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::bomb::ActiveModel = bomb.into();
        if let Some(latitude) = params.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }
        if let Some(bomb_type) = params.bomb_type {
            active_model.bomb_type = ActiveValue::Set(bomb_type);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Bomb::from_entity(entity)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Bomb::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(user.is_some())
    }
}
