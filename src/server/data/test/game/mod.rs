use crate::server::{
    data::game::{GameRepository, SeaGameRepository},
    model::game::{CreateGameParams, UpdateGameParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;

fn create_params() -> CreateGameParams {
    let now = Utc::now();
    CreateGameParams {
        center_latitude: 10.0,
        center_longitude: 20.0,
        size: 100.0,
        starting_date: now,
        ending_date: now + Duration::days(3),
    }
}
