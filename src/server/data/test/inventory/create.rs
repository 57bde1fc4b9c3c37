use super::*;

/// Tests inserting an inventory entry.
///
/// Expected: Ok with entry stored
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SeaInventoryRepository::new(db);
    let entry = repo.create(user.id, "classic", 4).await?;

    assert_eq!(entry.user_id, user.id);
    assert_eq!(entry.bomb_type, "classic");
    assert_eq!(entry.amount, 4);

    Ok(())
}
