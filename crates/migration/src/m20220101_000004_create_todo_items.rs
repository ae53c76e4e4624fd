//! Create `todo_items` table. Ownership lives in `lists_items`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoItems::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoItems::Id))
                    .col(string_len(TodoItems::Title, 255).not_null())
                    .col(string_len(TodoItems::Description, 255).not_null().default(""))
                    .col(boolean(TodoItems::Done).not_null().default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TodoItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TodoItems { Table, Id, Title, Description, Done }
