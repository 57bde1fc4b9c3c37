use super::*;

/// Tests a partial bomb update.
///
/// Expected: Ok(Some) with type changed and position untouched
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bomb = factory::bomb::BombFactory::new(db)
        .position(1.0, 2.0)
        .build()
        .await?;

    let repo = SeaBombRepository::new(db);
    let updated = repo
        .update(
            bomb.id,
            UpdateBombParams {
                bomb_type: Some("double".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.bomb_type, "double");
    assert_eq!(updated.latitude, 1.0);
    assert_eq!(updated.longitude, 2.0);

    assert!(repo
        .update(Uuid::new_v4(), UpdateBombParams::default())
        .await?
        .is_none());

    Ok(())
}
