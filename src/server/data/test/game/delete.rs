use super::*;

/// Tests deleting a game cascades to its teams.
///
/// Expected: Ok(true) with game and teams removed
#[tokio::test]
async fn deletes_game_and_its_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let team = factory::create_team(db, game.id).await?;

    let repo = SeaGameRepository::new(db);
    let deleted = repo.delete(game.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Game::find_by_id(game.id).one(db).await?.is_none());
    assert!(entity::prelude::Team::find_by_id(team.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a game that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaGameRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
