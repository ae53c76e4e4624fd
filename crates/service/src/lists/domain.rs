use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub type TodoList = models::todo_list::Model;

/// Create input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewList {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewList {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::todo_list::validate_title(&self.title)?;
        Ok(())
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateListInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateListInput {
    pub fn is_empty(&self) -> bool { self.title.is_none() && self.description.is_none() }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(title) = &self.title {
            models::todo_list::validate_title(title)?;
        }
        Ok(())
    }
}
