//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db, game.id)
///     .name("Red")
///     .score(10)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: Uuid,
    name: String,
    color: String,
    score: i32,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - color: `"#ff0000"`
    /// - score: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_id` - Game the team plays in
    ///
    /// # Returns
    /// - `TeamFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, game_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            game_id,
            name: format!("Team {}", id),
            color: "#ff0000".to_string(),
            score: 0,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the team color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the team score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown game)
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(self.game_id),
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            score: ActiveValue::Set(self.score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the given game.
pub async fn create_team(
    db: &DatabaseConnection,
    game_id: Uuid,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, game_id).build().await
}
