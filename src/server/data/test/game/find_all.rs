use super::*;

/// Tests listing games with their own teams only.
///
/// Expected: Ok with each game carrying exactly its teams
#[tokio::test]
async fn lists_games_with_their_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    factory::create_team(db, first.id).await?;
    factory::create_team(db, first.id).await?;
    factory::create_team(db, second.id).await?;

    let repo = SeaGameRepository::new(db);
    let games = repo.find_all().await?;

    assert_eq!(games.len(), 2);
    let first_found = games.iter().find(|g| g.id == first.id).unwrap();
    let second_found = games.iter().find(|g| g.id == second.id).unwrap();
    assert_eq!(first_found.teams.len(), 2);
    assert_eq!(second_found.teams.len(), 1);

    Ok(())
}

/// Tests listing games on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaGameRepository::new(db);

    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
