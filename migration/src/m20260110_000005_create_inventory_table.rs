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
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventory::Id))
                    .col(uuid(Inventory::UserId))
                    .col(string(Inventory::BombType))
                    .col(integer(Inventory::Amount).default(0))
                    .col(
                        timestamp_with_time_zone(Inventory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Inventory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_user_id")
                            .from(Inventory::Table, Inventory::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (user, bomb type)
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_user_bomb_type")
                    .table(Inventory::Table)
                    .col(Inventory::UserId)
                    .col(Inventory::BombType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inventory {
    Table,
    Id,
    UserId,
    BombType,
    Amount,
    CreatedAt,
    UpdatedAt,
}
