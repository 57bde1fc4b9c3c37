//! Team data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::team::{Team, TeamParams};

/// Persistence operations for teams.
#[trait_variant::make(TeamRepository: Send)]
pub trait LocalTeamRepository {
    async fn create(&self, params: TeamParams) -> Result<Team, DbErr>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, DbErr>;

    async fn find_all(&self) -> Result<Vec<Team>, DbErr>;

    /// Overwrites every field of the team. Returns `None` if the team doesn't exist.
    async fn update(&self, id: Uuid, params: TeamParams) -> Result<Option<Team>, DbErr>;

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr>;

    /// Checks whether the referenced game exists.
    async fn game_exists(&self, game_id: Uuid) -> Result<bool, DbErr>;
}

/// SeaORM implementation of [`TeamRepository`].
pub struct SeaTeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaTeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TeamRepository for SeaTeamRepository<'_> {
    async fn create(&self, params: TeamParams) -> Result<Team, DbErr> {
        let now = Utc::now();

        let entity = entity::team::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(params.game_id),
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            score: ActiveValue::Set(params.score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    async fn find_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    async fn update(&self, id: Uuid, params: TeamParams) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.game_id = ActiveValue::Set(params.game_id);
        active_model.name = ActiveValue::Set(params.name);
        active_model.color = ActiveValue::Set(params.color);
        active_model.score = ActiveValue::Set(params.score);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn game_exists(&self, game_id: Uuid) -> Result<bool, DbErr> {
        let game = entity::prelude::Game::find_by_id(game_id).one(self.db).await?;

        Ok(game.is_some())
    }
}
