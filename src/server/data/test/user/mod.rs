use crate::server::{
    data::user::{SeaUserRepository, UserRepository},
    model::user::{CreateUserParams, UpdateUserParams, UserFilter},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by;
mod update;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}
