//! Create `lists_items` ownership join between lists and items.
//!
//! `item_id` is unique so an item belongs to exactly one list; both FKs cascade.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListsItems::Table)
                    .if_not_exists()
                    .col(pk_auto(ListsItems::Id))
                    .col(integer(ListsItems::ListId).not_null())
                    .col(integer(ListsItems::ItemId).unique_key().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lists_items_list")
                            .from(ListsItems::Table, ListsItems::ListId)
                            .to(TodoLists::Table, TodoLists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lists_items_item")
                            .from(ListsItems::Table, ListsItems::ItemId)
                            .to(TodoItems::Table, TodoItems::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lists_items_list_id")
                    .table(ListsItems::Table)
                    .col(ListsItems::ListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ListsItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ListsItems { Table, Id, ListId, ItemId }

#[derive(DeriveIden)]
enum TodoLists { Table, Id }

#[derive(DeriveIden)]
enum TodoItems { Table, Id }
