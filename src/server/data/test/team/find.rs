use super::*;

/// Tests finding a team by id and listing all teams.
///
/// Expected: Ok with the team found and listed
#[tokio::test]
async fn finds_team_by_id_and_in_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let team = factory::create_team(db, game.id).await?;
    factory::create_team(db, game.id).await?;

    let repo = SeaTeamRepository::new(db);

    let found = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(found.name, team.name);

    let all = repo.find_all().await?;
    assert_eq!(all.len(), 2);

    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
