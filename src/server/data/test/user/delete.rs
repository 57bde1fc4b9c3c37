use super::*;

/// Tests that deleting a user removes their bombs and inventory.
///
/// Expected: Ok(true) with dependent rows removed
#[tokio::test]
async fn deletes_user_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let bomb = factory::bomb::BombFactory::new(db)
        .user_id(Some(user.id))
        .build()
        .await?;
    let entry = factory::create_inventory_entry(db, user.id, "classic", 3).await?;

    let repo = SeaUserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_none());
    assert!(entity::prelude::Bomb::find_by_id(bomb.id).one(db).await?.is_none());
    assert!(entity::prelude::Inventory::find_by_id(entry.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaUserRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
