//! Game factory for creating test game entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .center(48.85, 2.35)
///     .size(500.0)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    center_latitude: f64,
    center_longitude: f64,
    size: f64,
    starting_date: DateTime<Utc>,
    ending_date: DateTime<Utc>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - center: `(10.0, 20.0)`
    /// - size: `100.0`
    /// - starting_date: now
    /// - ending_date: 3 days from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GameFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            center_latitude: 10.0,
            center_longitude: 20.0,
            size: 100.0,
            starting_date: now,
            ending_date: now + Duration::days(3),
        }
    }

    /// Sets the center coordinates of the play area.
    pub fn center(mut self, latitude: f64, longitude: f64) -> Self {
        self.center_latitude = latitude;
        self.center_longitude = longitude;
        self
    }

    /// Sets the play area size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the start and end of the game.
    pub fn window(mut self, starting_date: DateTime<Utc>, ending_date: DateTime<Utc>) -> Self {
        self.starting_date = starting_date;
        self.ending_date = ending_date;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            center_latitude: ActiveValue::Set(self.center_latitude),
            center_longitude: ActiveValue::Set(self.center_longitude),
            size: ActiveValue::Set(self.size),
            starting_date: ActiveValue::Set(self.starting_date),
            ending_date: ActiveValue::Set(self.ending_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
