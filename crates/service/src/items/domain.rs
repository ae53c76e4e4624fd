use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub type TodoItem = models::todo_item::Model;

/// Create input; new items always start not done.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewItem {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::todo_item::validate_title(&self.title)?;
        Ok(())
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateItemInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(title) = &self.title {
            models::todo_item::validate_title(title)?;
        }
        Ok(())
    }
}
