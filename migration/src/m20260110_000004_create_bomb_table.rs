use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000003_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bomb::Table)
                    .if_not_exists()
                    .col(pk_uuid(Bomb::Id))
                    .col(double(Bomb::Latitude))
                    .col(double(Bomb::Longitude))
                    .col(string(Bomb::BombType))
                    .col(uuid_null(Bomb::UserId))
                    .col(
                        timestamp_with_time_zone(Bomb::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Bomb::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bomb_user_id")
                            .from(Bomb::Table, Bomb::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bomb_user_id")
                    .table(Bomb::Table)
                    .col(Bomb::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bomb::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bomb {
    Table,
    Id,
    Latitude,
    Longitude,
    BombType,
    UserId,
    CreatedAt,
    UpdatedAt,
}
