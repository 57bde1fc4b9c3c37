use super::*;

/// Tests overwriting every field of a team.
///
/// Expected: Ok(Some) with new values, including the moved game
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let team = factory::create_team(db, game.id).await?;

    let repo = SeaTeamRepository::new(db);
    let updated = repo
        .update(
            team.id,
            TeamParams {
                game_id: other_game.id,
                name: "Blue".to_string(),
                color: "#0000ff".to_string(),
                score: 12,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, team.id);
    assert_eq!(updated.game_id, other_game.id);
    assert_eq!(updated.name, "Blue");
    assert_eq!(updated.color, "#0000ff");
    assert_eq!(updated.score, 12);

    Ok(())
}

/// Tests updating a team that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = SeaTeamRepository::new(db);

    assert!(repo.update(Uuid::new_v4(), params(game.id)).await?.is_none());

    Ok(())
}
