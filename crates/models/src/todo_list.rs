use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    UsersList,
    ListsItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::UsersList => Entity::has_many(crate::users_list::Entity).into(),
            Relation::ListsItem => Entity::has_many(crate::lists_item::Entity).into(),
        }
    }
}

impl Related<crate::users_list::Entity> for Entity {
    fn to() -> RelationDef { Relation::UsersList.def() }
}

impl Related<crate::lists_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::ListsItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> { errors::require("title", title) }
