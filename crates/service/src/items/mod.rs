//! Items nested in lists, owned through `lists_items` and, transitively, `users_lists`.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{ItemStore, SeaOrmItemStore};
pub use service::ItemService;
