//! HTTP request handlers grouped by resource.
//!
//! Controllers extract the request, run the auth guard where the endpoint is
//! protected, call the matching service and convert the result into a DTO.

pub mod bomb;
pub mod game;
pub mod inventory;
pub mod team;
pub mod user;
