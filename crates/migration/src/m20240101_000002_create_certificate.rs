//! Create `certificate` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(big_integer(Certificate::Id).primary_key())
                    .col(string_len(Certificate::Title, 256).not_null())
                    .col(text(Certificate::Description).not_null())
                    .col(string_len(Certificate::Issuer, 256).not_null())
                    .col(string_len(Certificate::Category, 128).not_null())
                    .col(string_len(Certificate::CredentialUrl, 512).not_null())
                    .col(string_len(Certificate::ImageUrl, 512).not_null())
                    .col(string_len(Certificate::Date, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Certificate::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Certificate {
    Table,
    Id,
    Title,
    Description,
    Issuer,
    Category,
    CredentialUrl,
    ImageUrl,
    Date,
}
