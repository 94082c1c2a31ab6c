//! Create `accomplishment` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accomplishment::Table)
                    .if_not_exists()
                    .col(big_integer(Accomplishment::Id).primary_key())
                    .col(string_len(Accomplishment::Title, 256).not_null())
                    .col(text(Accomplishment::Description).not_null())
                    .col(string_len(Accomplishment::Category, 128).not_null())
                    .col(string_len(Accomplishment::ImageUrl, 512).not_null())
                    .col(string_len(Accomplishment::Date, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accomplishment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accomplishment {
    Table,
    Id,
    Title,
    Description,
    Category,
    ImageUrl,
    Date,
}
