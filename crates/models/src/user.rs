use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    UsersList,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::UsersList => Entity::has_many(crate::users_list::Entity).into(),
        }
    }
}

impl Related<crate::users_list::Entity> for Entity {
    fn to() -> RelationDef { Relation::UsersList.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> { errors::require("name", name) }

pub fn validate_username(username: &str) -> Result<(), ModelError> { errors::require("username", username) }

pub fn validate_password(password: &str) -> Result<(), ModelError> { errors::require("password", password) }
