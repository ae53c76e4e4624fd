//! Create `users_lists` ownership join.
//!
//! `list_id` is unique so a list has exactly one owner row; both FKs cascade.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsersLists::Table)
                    .if_not_exists()
                    .col(pk_auto(UsersLists::Id))
                    .col(integer(UsersLists::UserId).not_null())
                    .col(integer(UsersLists::ListId).unique_key().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_lists_user")
                            .from(UsersLists::Table, UsersLists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_lists_list")
                            .from(UsersLists::Table, UsersLists::ListId)
                            .to(TodoLists::Table, TodoLists::Id)
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
                    .name("idx_users_lists_user_id")
                    .table(UsersLists::Table)
                    .col(UsersLists::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UsersLists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UsersLists { Table, Id, UserId, ListId }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum TodoLists { Table, Id }
