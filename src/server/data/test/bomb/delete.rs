use super::*;

/// Tests deleting a bomb.
///
/// Expected: Ok(true) for a stored bomb, then Ok(false) once it is gone
#[tokio::test]
async fn deletes_bomb() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bomb = factory::create_bomb(db).await?;

    let repo = SeaBombRepository::new(db);

    assert!(repo.delete(bomb.id).await?);
    assert!(!repo.delete(bomb.id).await?);
    assert!(repo.find_by_id(bomb.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn reports_user_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SeaBombRepository::new(db);

    assert!(repo.user_exists(user.id).await?);
    assert!(!repo.user_exists(Uuid::new_v4()).await?);

    Ok(())
}
