use crate::server::{
    data::team::{SeaTeamRepository, TeamRepository},
    model::team::TeamParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find;
mod game_exists;
mod update;

fn params(game_id: Uuid) -> TeamParams {
    TeamParams {
        game_id,
        name: "Red".to_string(),
        color: "#ff0000".to_string(),
        score: 0,
    }
}
