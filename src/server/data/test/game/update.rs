use super::*;

/// Tests that an update only overwrites supplied fields.
///
/// Expected: Ok(Some) with size changed and centre untouched
#[tokio::test]
async fn overwrites_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = SeaGameRepository::new(db);
    let updated = repo
        .update(
            game.id,
            UpdateGameParams {
                size: Some(500.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.size, 500.0);
    assert_eq!(updated.center_latitude, game.center_latitude);
    assert_eq!(updated.center_longitude, game.center_longitude);

    let stored = entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.size, 500.0);
    assert!(stored.updated_at >= game.updated_at);

    Ok(())
}

/// Tests updating a game that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaGameRepository::new(db);
    let result = repo
        .update(
            Uuid::new_v4(),
            UpdateGameParams {
                size: Some(500.0),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
