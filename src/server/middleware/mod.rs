//! Request guards for protected endpoints.

pub mod auth;
