use super::*;

/// Tests filtering bombs by owner.
///
/// Expected: Ok with only the owner's bombs
#[tokio::test]
async fn finds_bombs_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::bomb::BombFactory::new(db).user_id(Some(owner.id)).build().await?;
    factory::bomb::BombFactory::new(db).user_id(Some(owner.id)).build().await?;
    factory::bomb::BombFactory::new(db).user_id(Some(other.id)).build().await?;
    factory::create_bomb(db).await?;

    let repo = SeaBombRepository::new(db);

    let owned = repo.find_all_by_user_id(owner.id).await?;
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|b| b.user_id == Some(owner.id)));

    assert_eq!(repo.find_all().await?.len(), 4);
    assert!(repo.find_all_by_user_id(Uuid::new_v4()).await?.is_empty());

    Ok(())
}

/// Tests finding a bomb by id.
///
/// Expected: Ok(Some) for a stored bomb and Ok(None) for an unknown id
#[tokio::test]
async fn finds_bomb_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bomb = factory::create_bomb(db).await?;

    let repo = SeaBombRepository::new(db);

    assert_eq!(repo.find_by_id(bomb.id).await?.unwrap().id, bomb.id);
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
