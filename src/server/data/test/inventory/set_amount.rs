use super::*;

/// Tests writing a new amount.
///
/// Expected: Ok with the new amount persisted
#[tokio::test]
async fn writes_new_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let entry = factory::create_inventory_entry(db, user.id, "classic", 1).await?;

    let repo = SeaInventoryRepository::new(db);
    let updated = repo.set_amount(entry.id, 6).await?;

    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.amount, 6);
    assert_eq!(updated.bomb_type, "classic");

    let stored = repo.find_by_user_and_type(user.id, "classic").await?.unwrap();
    assert_eq!(stored.amount, 6);

    Ok(())
}

/// Tests writing to an entry that doesn't exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaInventoryRepository::new(db);

    assert!(repo.set_amount(999, 1).await.is_err());

    Ok(())
}
