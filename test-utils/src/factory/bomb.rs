//! Bomb factory for creating test bomb entities.

use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bombs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bomb::BombFactory;
///
/// let bomb = BombFactory::new(&db)
///     .bomb_type("giant")
///     .user_id(Some(user.id))
///     .build()
///     .await?;
/// ```
pub struct BombFactory<'a> {
    db: &'a DatabaseConnection,
    latitude: f64,
    longitude: f64,
    bomb_type: String,
    user_id: Option<Uuid>,
}

impl<'a> BombFactory<'a> {
    /// Creates a new BombFactory with default values.
    ///
    /// Defaults:
    /// - position: `(10.0, 20.0)`
    /// - bomb_type: `"classic"`
    /// - user_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            latitude: 10.0,
            longitude: 20.0,
            bomb_type: "classic".to_string(),
            user_id: None,
        }
    }

    /// Sets the bomb position.
    pub fn position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the bomb type tag.
    pub fn bomb_type(mut self, bomb_type: impl Into<String>) -> Self {
        self.bomb_type = bomb_type.into();
        self
    }

    /// Sets the owning user.
    pub fn user_id(mut self, user_id: Option<Uuid>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builds and inserts the bomb entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bomb::Model)` - Created bomb entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bomb::Model, DbErr> {
        let now = Utc::now();
        entity::bomb::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            bomb_type: ActiveValue::Set(self.bomb_type),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unowned classic bomb.
pub async fn create_bomb(db: &DatabaseConnection) -> Result<entity::bomb::Model, DbErr> {
    BombFactory::new(db).build().await
}
