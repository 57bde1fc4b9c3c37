//! SeaORM entity models for the BombParty schema.
//!
//! Tables mirror the migrations in the `migration` crate. Every table carries
//! `created_at` / `updated_at` timestamps that the repository layer maintains.

pub mod prelude;

pub mod bomb;
pub mod game;
pub mod inventory;
pub mod team;
pub mod user;
