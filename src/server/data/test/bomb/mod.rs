use crate::server::{
    data::bomb::{BombRepository, SeaBombRepository},
    model::bomb::{CreateBombParams, UpdateBombParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find;
mod update;
