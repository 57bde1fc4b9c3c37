//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning request payloads into checked parameters
//! - **Business Logic**: Referential checks, inventory arithmetic, credential handling
//! - **Error Mapping**: Translating missing rows and constraint violations into `AppError`
//!
//! Services are generic over the repository traits of the data layer. Controllers
//! instantiate them with the SeaORM implementations.

pub mod auth;
pub mod bomb;
pub mod game;
pub mod inventory;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
