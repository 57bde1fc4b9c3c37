use super::*;

/// Tests each lookup criterion.
///
/// Expected: Ok with exactly the matching user for id, email and username
#[tokio::test]
async fn finds_by_each_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("finder")
        .email("finder@example.com")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = SeaUserRepository::new(db);

    for filter in [
        UserFilter::Id(user.id),
        UserFilter::Email("finder@example.com".to_string()),
        UserFilter::Username("finder".to_string()),
    ] {
        let found = repo.find_by(filter).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, user.id);
    }

    assert!(repo
        .find_by(UserFilter::Id(Uuid::new_v4()))
        .await?
        .is_empty());

    Ok(())
}

/// Tests email lookup and full listing.
///
/// Expected: Ok with user found by email and both users listed
#[tokio::test]
async fn finds_by_email_and_lists_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = SeaUserRepository::new(db);

    let found = repo.find_by_email(&user.email).await?.unwrap();
    assert_eq!(found.id, user.id);
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert_eq!(repo.find_all().await?.len(), 2);

    Ok(())
}
