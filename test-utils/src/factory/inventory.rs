//! Inventory factory for creating test inventory entries.

use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an inventory entry for a user with the given bomb type and amount.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user
/// - `bomb_type` - Bomb type tag
/// - `amount` - Stored amount
///
/// # Returns
/// - `Ok(entity::inventory::Model)` - Created inventory entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_inventory_entry(
    db: &DatabaseConnection,
    user_id: Uuid,
    bomb_type: &str,
    amount: i32,
) -> Result<entity::inventory::Model, DbErr> {
    let now = Utc::now();
    entity::inventory::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        bomb_type: ActiveValue::Set(bomb_type.to_string()),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
