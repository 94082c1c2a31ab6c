//! Create `project` table.
//! Ids are assigned by the service's allocator, not the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(big_integer(Project::Id).primary_key())
                    .col(string_len(Project::Title, 256).not_null())
                    .col(text(Project::Description).not_null())
                    .col(string_len(Project::Category, 128).not_null())
                    .col(json_binary(Project::Tags).not_null())
                    .col(string_len(Project::Status, 32).not_null())
                    .col(string_len(Project::ImageUrl, 512).not_null())
                    .col(string_len(Project::DemoUrl, 512).not_null())
                    .col(string_len(Project::GithubUrl, 512).not_null())
                    .col(string_len(Project::Date, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Title,
    Description,
    Category,
    Tags,
    Status,
    ImageUrl,
    DemoUrl,
    GithubUrl,
    Date,
}
