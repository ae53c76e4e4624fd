//! Ownership row linking a user to one list. Never updated.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{todo_list, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub list_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    TodoList,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::TodoList => Entity::belongs_to(todo_list::Entity)
                .from(Column::ListId)
                .to(todo_list::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<todo_list::Entity> for Entity {
    fn to() -> RelationDef { Relation::TodoList.def() }
}

impl ActiveModelBehavior for ActiveModel {}
