//! Game data repository for database operations.
//!
//! Games are always returned with their teams loaded, so every read goes through
//! `find_with_related` to avoid one query per game.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::game::{CreateGameParams, Game, UpdateGameParams};

/// Persistence operations for games.
#[trait_variant::make(GameRepository: Send)]
pub trait LocalGameRepository {
    /// Inserts a game and returns it with an empty team list.
    async fn create(&self, params: CreateGameParams) -> Result<Game, DbErr>;

    /// Finds a game with its teams.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DbErr>;

    /// Lists all games with their teams, oldest first.
    async fn find_all(&self) -> Result<Vec<Game>, DbErr>;

    /// Overwrites the supplied fields. Returns `None` if the game doesn't exist.
    async fn update(&self, id: Uuid, params: UpdateGameParams) -> Result<Option<Game>, DbErr>;

    /// Deletes a game and, through the foreign key, its teams. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DbErr>;
}

/// SeaORM implementation of [`GameRepository`].
pub struct SeaGameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaGameRepository<'a> {
    /// Creates a new SeaGameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SeaGameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl GameRepository for SeaGameRepository<'_> {
    async fn create(&self, params: CreateGameParams) -> Result<Game, DbErr> {
        let now = Utc::now();

        let entity = entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            center_latitude: ActiveValue::Set(params.center_latitude),
            center_longitude: ActiveValue::Set(params.center_longitude),
            size: ActiveValue::Set(params.size),
            starting_date: ActiveValue::Set(params.starting_date),
            ending_date: ActiveValue::Set(params.ending_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity, Vec::new()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let teams = game.find_related(entity::prelude::Team).all(self.db).await?;

        Ok(Some(Game::from_entity(game, teams)))
    }

    async fn find_all(&self) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::CreatedAt)
            .find_with_related(entity::prelude::Team)
            .all(self.db)
            .await?;

        Ok(games
            .into_iter()
            .map(|(game, teams)| Game::from_entity(game, teams))
            .collect())
    }

    async fn update(&self, id: Uuid, params: UpdateGameParams) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = game.into();

        if let Some(latitude) = params.center_latitude {
            active_model.center_latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.center_longitude {
            active_model.center_longitude = ActiveValue::Set(longitude);
        }
        if let Some(size) = params.size {
            active_model.size = ActiveValue::Set(size);
        }
        if let Some(starting_date) = params.starting_date {
            active_model.starting_date = ActiveValue::Set(starting_date);
        }
        if let Some(ending_date) = params.ending_date {
            active_model.ending_date = ActiveValue::Set(ending_date);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let game = active_model.update(self.db).await?;
        let teams = game.find_related(entity::prelude::Team).all(self.db).await?;

        Ok(Some(Game::from_entity(game, teams)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
