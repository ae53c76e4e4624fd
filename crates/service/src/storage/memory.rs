use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::domain::{AuthUser, NewUser};
use crate::auth::repository::CredentialStore;
use crate::errors::ServiceError;
use crate::items::domain::{NewItem, TodoItem, UpdateItemInput};
use crate::items::repository::ItemStore;
use crate::lists::domain::{NewList, TodoList, UpdateListInput};
use crate::lists::repository::ListStore;
use models::user;

#[derive(Clone, Default)]
struct State {
    users: BTreeMap<i32, user::Model>,
    lists: BTreeMap<i32, TodoList>,
    items: BTreeMap<i32, TodoItem>,
    /// list_id -> user_id
    users_lists: BTreeMap<i32, i32>,
    /// item_id -> list_id
    lists_items: BTreeMap<i32, i32>,
    last_user_id: i32,
    last_list_id: i32,
    last_item_id: i32,
}

impl State {
    fn owns_list(&self, user_id: i32, list_id: i32) -> bool {
        self.users_lists.get(&list_id) == Some(&user_id)
    }

    fn owns_item(&self, user_id: i32, item_id: i32) -> bool {
        self.lists_items.get(&item_id).is_some_and(|list_id| self.owns_list(user_id, *list_id))
    }
}

/// In-process implementation of every store, with the same ownership and
/// all-or-nothing semantics as the SeaORM stores.
///
/// Multi-step writes run against a copy of the state that only replaces the
/// live state once every step succeeded. [`MemoryStore::fail_link_writes`]
/// makes the second step of a create fail, which is how tests observe rollback.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
    fail_links: AtomicBool,
}

impl MemoryStore {
    /// Make every ownership-link insert fail until reset.
    pub fn fail_link_writes(&self, fail: bool) {
        self.fail_links.store(fail, Ordering::SeqCst);
    }

    /// Stored hash for `username`, if such a user exists.
    pub async fn password_hash_of(&self, username: &str) -> Option<String> {
        let state = self.state.read().await;
        state.users.values().find(|u| u.username == username).map(|u| u.password_hash.clone())
    }

    pub async fn list_count(&self) -> usize {
        self.state.read().await.lists.len()
    }

    pub async fn item_count(&self) -> usize {
        self.state.read().await.items.len()
    }

    fn link_write(&self, what: &str) -> Result<(), ServiceError> {
        if self.fail_links.load(Ordering::SeqCst) {
            return Err(ServiceError::Transaction(format!("insert into {what} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<i32, ServiceError> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.username == new.username) {
            return Err(ServiceError::Dependency(format!("username {} already exists", new.username)));
        }
        state.last_user_id += 1;
        let id = state.last_user_id;
        state
            .users
            .insert(id, user::Model { id, name: new.name, username: new.username, password_hash: new.password_hash });
        Ok(id)
    }

    async fn get_user(&self, username: &str, password_hash: &str) -> Result<Option<AuthUser>, ServiceError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username == username && u.password_hash == password_hash)
            .map(|u| AuthUser { id: u.id, name: u.name.clone(), username: u.username.clone() }))
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn create(&self, user_id: i32, list: NewList) -> Result<i32, ServiceError> {
        let mut live = self.state.write().await;
        let mut next = live.clone();

        next.last_list_id += 1;
        let id = next.last_list_id;
        next.lists.insert(id, TodoList { id, title: list.title, description: list.description });

        self.link_write("users_lists")?;
        if !next.users.contains_key(&user_id) {
            return Err(ServiceError::Transaction(format!("user {user_id} does not exist")));
        }
        next.users_lists.insert(id, user_id);

        *live = next;
        Ok(id)
    }

    async fn get_all(&self, user_id: i32) -> Result<Vec<TodoList>, ServiceError> {
        let state = self.state.read().await;
        Ok(state.lists.values().filter(|l| state.owns_list(user_id, l.id)).cloned().collect())
    }

    async fn get_by_id(&self, user_id: i32, list_id: i32) -> Result<TodoList, ServiceError> {
        let state = self.state.read().await;
        match state.lists.get(&list_id) {
            Some(list) if state.owns_list(user_id, list_id) => Ok(list.clone()),
            _ => Err(ServiceError::not_found("list")),
        }
    }

    async fn update(&self, user_id: i32, list_id: i32, input: UpdateListInput) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        if !state.owns_list(user_id, list_id) {
            return Err(ServiceError::not_found("list"));
        }
        let list = state.lists.get_mut(&list_id).ok_or_else(|| ServiceError::not_found("list"))?;
        if let Some(title) = input.title {
            list.title = title;
        }
        if let Some(description) = input.description {
            list.description = description;
        }
        Ok(())
    }

    async fn delete(&self, user_id: i32, list_id: i32) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        if !state.owns_list(user_id, list_id) {
            return Err(ServiceError::not_found("list"));
        }
        state.lists.remove(&list_id);
        state.users_lists.remove(&list_id);
        let item_ids: Vec<i32> =
            state.lists_items.iter().filter(|(_, l)| **l == list_id).map(|(item_id, _)| *item_id).collect();
        for item_id in item_ids {
            state.lists_items.remove(&item_id);
            state.items.remove(&item_id);
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn create(&self, list_id: i32, item: NewItem) -> Result<i32, ServiceError> {
        let mut live = self.state.write().await;
        let mut next = live.clone();

        next.last_item_id += 1;
        let id = next.last_item_id;
        next.items.insert(id, TodoItem { id, title: item.title, description: item.description, done: false });

        self.link_write("lists_items")?;
        if !next.lists.contains_key(&list_id) {
            return Err(ServiceError::Transaction(format!("list {list_id} does not exist")));
        }
        next.lists_items.insert(id, list_id);

        *live = next;
        Ok(id)
    }

    async fn get_all(&self, user_id: i32, list_id: i32) -> Result<Vec<TodoItem>, ServiceError> {
        let state = self.state.read().await;
        if !state.owns_list(user_id, list_id) {
            return Ok(Vec::new());
        }
        Ok(state
            .items
            .values()
            .filter(|i| state.lists_items.get(&i.id) == Some(&list_id))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, user_id: i32, item_id: i32) -> Result<TodoItem, ServiceError> {
        let state = self.state.read().await;
        match state.items.get(&item_id) {
            Some(item) if state.owns_item(user_id, item_id) => Ok(item.clone()),
            _ => Err(ServiceError::not_found("item")),
        }
    }

    async fn update(&self, user_id: i32, item_id: i32, input: UpdateItemInput) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        if !state.owns_item(user_id, item_id) {
            return Err(ServiceError::not_found("item"));
        }
        let item = state.items.get_mut(&item_id).ok_or_else(|| ServiceError::not_found("item"))?;
        if let Some(title) = input.title {
            item.title = title;
        }
        if let Some(description) = input.description {
            item.description = description;
        }
        if let Some(done) = input.done {
            item.done = done;
        }
        Ok(())
    }

    async fn delete(&self, user_id: i32, item_id: i32) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        if !state.owns_item(user_id, item_id) {
            return Err(ServiceError::not_found("item"));
        }
        state.items.remove(&item_id);
        state.lists_items.remove(&item_id);
        Ok(())
    }
}
