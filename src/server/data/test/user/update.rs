use super::*;

/// Tests that only supplied fields are overwritten.
///
/// Expected: Ok(Some) with username and team changed, email and password untouched
#[tokio::test]
async fn overwrites_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let team = factory::create_team(db, game.id).await?;
    let user = factory::create_user(db).await?;

    let repo = SeaUserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                username: Some("renamed".to_string()),
                team_id: Some(team.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password);
    assert_eq!(updated.team_id, Some(team.id));

    Ok(())
}

/// Tests updating a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaUserRepository::new(db);

    assert!(repo
        .update(Uuid::new_v4(), UpdateUserParams::default())
        .await?
        .is_none());

    Ok(())
}
