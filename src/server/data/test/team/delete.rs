use super::*;

/// Tests that deleting a team clears the team reference of its users.
///
/// Expected: Ok(true) with team removed and user kept without team
#[tokio::test]
async fn deletes_team_and_detaches_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, user) = factory::helpers::create_user_with_team(db).await?;

    let repo = SeaTeamRepository::new(db);

    assert!(repo.delete(team.id).await?);
    assert!(entity::prelude::Team::find_by_id(team.id).one(db).await?.is_none());

    let stored_user = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored_user.team_id.is_none());

    Ok(())
}

/// Tests deleting a team that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaTeamRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
