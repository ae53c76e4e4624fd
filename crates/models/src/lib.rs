//! sea-orm entities for users, lists, items and the two ownership joins.

pub mod errors;
pub mod db;
pub mod user;
pub mod todo_list;
pub mod users_list;
pub mod todo_item;
pub mod lists_item;

#[cfg(test)]
mod tests;
