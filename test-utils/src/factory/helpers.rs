//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game with one team and a user belonging to that team.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, team, user))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_team(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::game::Model,
        entity::team::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::create_game(db).await?;
    let team = crate::factory::team::create_team(db, game.id).await?;
    let user = crate::factory::user::UserFactory::new(db)
        .team_id(Some(team.id))
        .build()
        .await?;

    Ok((game, team, user))
}
