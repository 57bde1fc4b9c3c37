use super::*;

/// Tests creating a new game.
///
/// Verifies that the repository persists every field and returns the game
/// with an empty team list.
///
/// Expected: Ok with game created and no teams
#[tokio::test]
async fn creates_game_without_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaGameRepository::new(db);
    let game = repo.create(create_params()).await?;

    assert_eq!(game.center_latitude, 10.0);
    assert_eq!(game.center_longitude, 20.0);
    assert_eq!(game.size, 100.0);
    assert!(game.teams.is_empty());

    let stored = entity::prelude::Game::find_by_id(game.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
