use crate::server::data::inventory::{InventoryRepository, SeaInventoryRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find_by_user;
mod set_amount;
