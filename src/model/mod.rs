//! Data transfer objects exchanged over the HTTP API.
//!
//! Field names follow the public JSON contract (`id_user`, `type_bomb`, ...) rather
//! than the storage column names.

pub mod api;
pub mod bomb;
pub mod game;
pub mod inventory;
pub mod team;
pub mod user;
