//! Create `todo_lists` table. Ownership lives in `users_lists`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoLists::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoLists::Id))
                    .col(string_len(TodoLists::Title, 255).not_null())
                    .col(string_len(TodoLists::Description, 255).not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TodoLists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TodoLists { Table, Id, Title, Description }
