//! Ownership row linking a list to one item. Never updated.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{todo_item, todo_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lists_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub list_id: i32,
    #[sea_orm(unique)]
    pub item_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    TodoList,
    TodoItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::TodoList => Entity::belongs_to(todo_list::Entity)
                .from(Column::ListId)
                .to(todo_list::Column::Id)
                .into(),
            Relation::TodoItem => Entity::belongs_to(todo_item::Entity)
                .from(Column::ItemId)
                .to(todo_item::Column::Id)
                .into(),
        }
    }
}

impl Related<todo_list::Entity> for Entity {
    fn to() -> RelationDef { Relation::TodoList.def() }
}

impl Related<todo_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::TodoItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}
