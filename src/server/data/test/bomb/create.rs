use super::*;

/// Tests creating an owned bomb.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_owned_bomb() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SeaBombRepository::new(db);
    let bomb = repo
        .create(CreateBombParams {
            latitude: 48.85,
            longitude: 2.35,
            bomb_type: "giant".to_string(),
            user_id: Some(user.id),
        })
        .await?;

    assert_eq!(bomb.latitude, 48.85);
    assert_eq!(bomb.longitude, 2.35);
    assert_eq!(bomb.bomb_type, "giant");
    assert_eq!(bomb.user_id, Some(user.id));

    Ok(())
}

/// Tests creating a bomb without owner.
///
/// Expected: Ok with no user
#[tokio::test]
async fn creates_unowned_bomb() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaBombRepository::new(db);
    let bomb = repo
        .create(CreateBombParams {
            latitude: 0.0,
            longitude: 0.0,
            bomb_type: "classic".to_string(),
            user_id: None,
        })
        .await?;

    assert!(bomb.user_id.is_none());

    Ok(())
}
