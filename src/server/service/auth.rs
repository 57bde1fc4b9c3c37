//! Password hashing and bearer token primitives.
//!
//! Both submodules are pure functions over their inputs. Services call them and the
//! auth guard uses `token::parse_token` to identify the caller of protected endpoints.

pub mod password;
pub mod token;
