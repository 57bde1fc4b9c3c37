use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_uuid(Game::Id))
                    .col(double(Game::CenterLatitude))
                    .col(double(Game::CenterLongitude))
                    .col(double(Game::Size))
                    .col(timestamp_with_time_zone(Game::StartingDate))
                    .col(timestamp_with_time_zone(Game::EndingDate))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Game::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    CenterLatitude,
    CenterLongitude,
    Size,
    StartingDate,
    EndingDate,
    CreatedAt,
    UpdatedAt,
}
