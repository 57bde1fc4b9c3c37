//! Inventory management with floor-at-zero amount changes.

use uuid::Uuid;

use crate::server::{
    data::inventory::InventoryRepository,
    error::AppError,
    model::inventory::{validate_bomb_type, InventoryEntry, CANONICAL_BOMB_TYPES},
};

pub struct InventoryService<R> {
    repo: R,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Sets a user's stock of one bomb type, creating the entry if needed.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the entry
    /// - `bomb_type` - Bomb type tag
    /// - `amount` - Amount written to the entry
    ///
    /// # Returns
    /// - `Ok(InventoryEntry)` - The created or reset entry
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_bomb_type(
        &self,
        user_id: Uuid,
        bomb_type: &str,
        amount: i32,
    ) -> Result<InventoryEntry, AppError> {
        let entry = match self.repo.find_by_user_and_type(user_id, bomb_type).await? {
            Some(existing) => self.repo.set_amount(existing.id, amount).await?,
            None => self.repo.create(user_id, bomb_type, amount).await?,
        };

        Ok(entry)
    }

    /// Ensures the user holds exactly one zeroed entry per canonical bomb type.
    ///
    /// Existing canonical entries are reset to 0. Entries of other types are kept.
    ///
    /// # Returns
    /// - `Ok(Vec<InventoryEntry>)` - Every entry of the user after initialisation
    pub async fn init_user_inventory(&self, user_id: Uuid) -> Result<Vec<InventoryEntry>, AppError> {
        for bomb_type in CANONICAL_BOMB_TYPES {
            self.add_bomb_type(user_id, bomb_type, 0).await?;
        }

        self.find_by_user(user_id).await
    }

    /// Applies a signed change to the user's stock of one bomb type.
    ///
    /// The resulting amount never drops below 0. The entry must already exist.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the entry
    /// - `bomb_type` - Bomb type tag
    /// - `delta` - Amount to add, negative to consume
    ///
    /// # Returns
    /// - `Ok(InventoryEntry)` - The updated entry
    /// - `Err(AppError::BadRequest)` - `bomb_type` is blank
    /// - `Err(AppError::NotFound)` - The user holds no entry of that type
    pub async fn change_bombs_amount(
        &self,
        user_id: Uuid,
        bomb_type: &str,
        delta: i32,
    ) -> Result<InventoryEntry, AppError> {
        validate_bomb_type(bomb_type)?;

        let entries = self.repo.find_by_user(user_id).await?;

        let Some(entry) = entries.into_iter().find(|e| e.bomb_type == bomb_type) else {
            return Err(AppError::NotFound(format!(
                "Bomb type {} not found in inventory",
                bomb_type
            )));
        };

        let amount = entry.amount_after(delta);

        Ok(self.repo.set_amount(entry.id, amount).await?)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<InventoryEntry>, AppError> {
        Ok(self.repo.find_by_user(user_id).await?)
    }
}
