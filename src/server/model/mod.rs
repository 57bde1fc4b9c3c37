//! Domain models and operation parameters.
//!
//! Models in this module sit between the API DTOs (`crate::model`) and the SeaORM
//! entities. Repositories convert entities into these models at the data boundary and
//! controllers convert them into DTOs with `into_dto`. Parameter types carry payloads
//! that have already passed validation.

pub mod bomb;
pub mod game;
pub mod inventory;
pub mod team;
pub mod user;
