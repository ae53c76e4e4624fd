//! Migrator registering table migrations in dependency order.
//! Ownership join tables come right after the resources they link.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_users;
mod m20220101_000002_create_todo_lists;
mod m20220101_000003_create_users_lists;
mod m20220101_000004_create_todo_items;
mod m20220101_000005_create_lists_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_users::Migration),
            Box::new(m20220101_000002_create_todo_lists::Migration),
            Box::new(m20220101_000003_create_users_lists::Migration),
            Box::new(m20220101_000004_create_todo_items::Migration),
            Box::new(m20220101_000005_create_lists_items::Migration),
        ]
    }
}
