use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with user created without team
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaUserRepository::new(db);
    let user = repo.create(params("bomber", "bomber@example.com")).await?;

    assert_eq!(user.username, "bomber");
    assert_eq!(user.email, "bomber@example.com");
    assert_eq!(user.password_hash, "hash");
    assert!(user.team_id.is_none());

    Ok(())
}

/// Tests that a duplicate email is rejected as a unique violation.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaUserRepository::new(db);
    repo.create(params("first", "same@example.com")).await?;
    let result = repo.create(params("second", "same@example.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a duplicate username is rejected.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaUserRepository::new(db);
    repo.create(params("same", "first@example.com")).await?;
    let result = repo.create(params("same", "second@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
