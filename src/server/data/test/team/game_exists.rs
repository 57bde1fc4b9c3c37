use super::*;

#[tokio::test]
async fn reports_game_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = SeaTeamRepository::new(db);

    assert!(repo.game_exists(game.id).await?);
    assert!(!repo.game_exists(Uuid::new_v4()).await?);

    Ok(())
}
