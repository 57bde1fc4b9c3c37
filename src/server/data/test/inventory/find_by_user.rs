use super::*;

/// Tests listing a user's entries and looking one up by type.
///
/// Expected: Ok with only that user's entries
#[tokio::test]
async fn finds_entries_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_inventory_entry(db, user.id, "classic", 1).await?;
    factory::create_inventory_entry(db, user.id, "giant", 2).await?;
    factory::create_inventory_entry(db, other.id, "classic", 9).await?;

    let repo = SeaInventoryRepository::new(db);

    let entries = repo.find_by_user(user.id).await?;
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.user_id == user.id));

    let giant = repo.find_by_user_and_type(user.id, "giant").await?.unwrap();
    assert_eq!(giant.amount, 2);
    assert!(repo
        .find_by_user_and_type(user.id, "double")
        .await?
        .is_none());
    assert!(repo.find_by_user(Uuid::new_v4()).await?.is_empty());

    Ok(())
}
