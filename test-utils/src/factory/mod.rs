//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let game = factory::create_game(&db).await?;
//!     let team = factory::create_team(&db, game.id).await?;
//!     let user = factory::user::UserFactory::new(&db)
//!         .team_id(Some(team.id))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `game` - Create game entities
//! - `team` - Create team entities
//! - `user` - Create user entities
//! - `bomb` - Create bomb entities
//! - `inventory` - Create inventory entries
//! - `helpers` - Unique id generation and dependency helpers

pub mod bomb;
pub mod game;
pub mod helpers;
pub mod inventory;
pub mod team;
pub mod user;

pub use bomb::create_bomb;
pub use game::create_game;
pub use inventory::create_inventory_entry;
pub use team::create_team;
pub use user::create_user;
