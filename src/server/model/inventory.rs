//! Inventory domain models.
//!
//! A user's inventory is a set of rows, one per bomb type, each holding a
//! non-negative amount.

use uuid::Uuid;

use crate::{
    model::inventory::{BombAmountDto, InventoryDto},
    server::error::AppError,
};

/// Bomb types every inventory is initialised with.
pub const CANONICAL_BOMB_TYPES: [&str; 3] = ["classic", "double", "giant"];

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub id: i32,
    pub user_id: Uuid,
    pub bomb_type: String,
    pub amount: i32,
}

impl InventoryEntry {
    pub fn from_entity(entity: entity::inventory::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            bomb_type: entity.bomb_type,
            amount: entity.amount,
        }
    }

    /// Amount after applying `delta`, floored at zero.
    pub fn amount_after(&self, delta: i32) -> i32 {
        self.amount.saturating_add(delta).max(0)
    }
}

/// Rejects a blank bomb type tag.
pub fn validate_bomb_type(bomb_type: &str) -> Result<(), AppError> {
    if bomb_type.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Missing required fields: type_bomb".to_string(),
        ));
    }
    Ok(())
}

/// Groups a user's inventory rows into the API shape.
///
/// # Arguments
/// - `user_id` - Owner of the entries
/// - `entries` - Inventory rows of that user
///
/// # Returns
/// - `InventoryDto` - One `{type_bomb, amount}` item per row
pub fn inventory_into_dto(user_id: Uuid, entries: Vec<InventoryEntry>) -> InventoryDto {
    InventoryDto {
        id_user: user_id,
        bombs: entries
            .into_iter()
            .map(|entry| BombAmountDto {
                type_bomb: entry.bomb_type,
                amount: entry.amount,
            })
            .collect(),
    }
}
