//! Inventory data repository for database operations.
//!
//! Each row holds the amount of one bomb type owned by one user. The
//! `(user_id, bomb_type)` pair is unique in the schema.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::inventory::InventoryEntry;

/// Persistence operations for inventory entries.
#[trait_variant::make(InventoryRepository: Send)]
pub trait LocalInventoryRepository {
    /// Lists a user's entries ordered by id.
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<InventoryEntry>, DbErr>;

    /// Finds the entry of one bomb type for a user.
    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        bomb_type: &str,
    ) -> Result<Option<InventoryEntry>, DbErr>;

    /// Inserts a new entry.
    async fn create(
        &self,
        user_id: Uuid,
        bomb_type: &str,
        amount: i32,
    ) -> Result<InventoryEntry, DbErr>;

    /// Writes a new amount to an existing entry.
    async fn set_amount(&self, id: i32, amount: i32) -> Result<InventoryEntry, DbErr>;
}

/// SeaORM implementation of [`InventoryRepository`].
pub struct SeaInventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaInventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InventoryRepository for SeaInventoryRepository<'_> {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<InventoryEntry>, DbErr> {
        let entities = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::UserId.eq(user_id))
            .order_by_asc(entity::inventory::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(InventoryEntry::from_entity).collect())
    }

    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        bomb_type: &str,
    ) -> Result<Option<InventoryEntry>, DbErr> {
        let entity = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::UserId.eq(user_id))
            .filter(entity::inventory::Column::BombType.eq(bomb_type))
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryEntry::from_entity))
    }

    async fn create(
        &self,
        user_id: Uuid,
        bomb_type: &str,
        amount: i32,
    ) -> Result<InventoryEntry, DbErr> {
        let now = Utc::now();

        let entity = entity::inventory::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            bomb_type: ActiveValue::Set(bomb_type.to_string()),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(InventoryEntry::from_entity(entity))
    }

    /// Writes a new amount to an existing entry.
    ///
    /// # Arguments
    /// - `id` - Inventory entry id
    /// - `amount` - New amount, already floored by the caller
    ///
    /// # Returns
    /// - `Ok(InventoryEntry)` - The updated entry
    /// - `Err(DbErr::RecordNotUpdated)` - No entry with that id
    async fn set_amount(&self, id: i32, amount: i32) -> Result<InventoryEntry, DbErr> {
        let entity = entity::inventory::ActiveModel {
            id: ActiveValue::Unchanged(id),
            amount: ActiveValue::Set(amount),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(InventoryEntry::from_entity(entity))
    }
}
