//! Collections ("lists") owned by a single user through `users_lists`.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{ListStore, SeaOrmListStore};
pub use service::CollectionService;
