use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ListsItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ListsItem => Entity::has_many(crate::lists_item::Entity).into(),
        }
    }
}

impl Related<crate::lists_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::ListsItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub use crate::todo_list::validate_title;
