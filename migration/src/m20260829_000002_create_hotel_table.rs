use sea_orm_migration::{prelude::*, schema::*};

use super::m20260829_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(integer(Hotel::UserId))
                    .col(string(Hotel::Name))
                    .col(string(Hotel::Intro))
                    // Tag list stored as a single comma-delimited string
                    .col(text(Hotel::Info))
                    .col(string(Hotel::Postcode))
                    .col(string(Hotel::Address))
                    .col(string(Hotel::ImgPath1))
                    .col(string(Hotel::ImgPath2))
                    .col(string(Hotel::ImgPath3))
                    .col(string(Hotel::ImgPath4))
                    .col(string(Hotel::ImgPath5))
                    .col(string_null(Hotel::ImgPath6))
                    .col(string_null(Hotel::ImgPath7))
                    .col(string_null(Hotel::ImgPath8))
                    .col(string_null(Hotel::ImgPath9))
                    .col(string_null(Hotel::ContactUrl))
                    .col(
                        timestamp(Hotel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Hotel::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_user_id")
                            .from(Hotel::Table, Hotel::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    UserId,
    Name,
    Intro,
    Info,
    Postcode,
    Address,
    ImgPath1,
    ImgPath2,
    ImgPath3,
    ImgPath4,
    ImgPath5,
    ImgPath6,
    ImgPath7,
    ImgPath8,
    ImgPath9,
    ContactUrl,
    CreatedAt,
    UpdatedAt,
}
