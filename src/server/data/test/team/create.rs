use super::*;

/// Tests creating a team for an existing game.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = SeaTeamRepository::new(db);
    let team = repo.create(params(game.id)).await?;

    assert_eq!(team.game_id, game.id);
    assert_eq!(team.name, "Red");
    assert_eq!(team.color, "#ff0000");
    assert_eq!(team.score, 0);

    Ok(())
}

/// Tests that the foreign key rejects an unknown game.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaTeamRepository::new(db);
    let result = repo.create(params(Uuid::new_v4())).await;

    assert!(result.is_err());

    Ok(())
}
