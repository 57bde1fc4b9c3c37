use super::*;

/// Tests loading a game together with its teams.
///
/// Expected: Ok(Some) with both teams attached
#[tokio::test]
async fn loads_game_with_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let red = factory::team::TeamFactory::new(db, game.id).name("Red").build().await?;
    let blue = factory::team::TeamFactory::new(db, game.id).name("Blue").build().await?;

    let repo = SeaGameRepository::new(db);
    let found = repo.find_by_id(game.id).await?.unwrap();

    assert_eq!(found.id, game.id);
    assert_eq!(found.teams.len(), 2);
    assert!(found.teams.iter().any(|t| t.id == red.id));
    assert!(found.teams.iter().any(|t| t.id == blue.id));

    Ok(())
}

/// Tests loading a game that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaGameRepository::new(db);
    let found = repo.find_by_id(Uuid::new_v4()).await?;

    assert!(found.is_none());

    Ok(())
}
