//! Database repository layer for all domain entities.
//!
//! Each submodule declares a repository trait (with a `Send` variant generated by
//! `trait_variant`) and a SeaORM implementation. Repositories use SeaORM entity models
//! internally and return domain models to keep the data layer separate from business
//! logic. All database queries, inserts, updates, and deletes are performed here.

pub mod bomb;
pub mod game;
pub mod inventory;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
