use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260829_000001_create_user_table::User, m20260829_000002_create_hotel_table::Hotel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wish::Table)
                    .if_not_exists()
                    .col(integer(Wish::UserId))
                    .col(integer(Wish::HotelId))
                    .col(
                        timestamp(Wish::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_wish")
                            .col(Wish::UserId)
                            .col(Wish::HotelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wish_user_id")
                            .from(Wish::Table, Wish::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wish_hotel_id")
                            .from(Wish::Table, Wish::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Wish {
    Table,
    UserId,
    HotelId,
    CreatedAt,
}
