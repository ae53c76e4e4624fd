//! Ownership predicates as sub-selects over the join tables.
//!
//! Every read and write of a list or item filters its id through one of these,
//! so rows owned by another user behave exactly like missing rows.

use sea_orm::sea_query::{Query, SelectStatement};
use sea_orm::ColumnTrait;

use models::{lists_item, users_list};

/// `SELECT list_id FROM users_lists WHERE user_id = $user`
pub fn lists_owned_by(user_id: i32) -> SelectStatement {
    Query::select()
        .column(users_list::Column::ListId)
        .from(users_list::Entity)
        .and_where(users_list::Column::UserId.eq(user_id))
        .to_owned()
}

/// Item ids reachable through user -> list -> item.
pub fn items_owned_by(user_id: i32) -> SelectStatement {
    Query::select()
        .column(lists_item::Column::ItemId)
        .from(lists_item::Entity)
        .and_where(lists_item::Column::ListId.in_subquery(lists_owned_by(user_id)))
        .to_owned()
}

/// Item ids of one list, empty unless the list is owned by `user_id`.
pub fn items_in_owned_list(user_id: i32, list_id: i32) -> SelectStatement {
    Query::select()
        .column(lists_item::Column::ItemId)
        .from(lists_item::Entity)
        .and_where(lists_item::Column::ListId.eq(list_id))
        .and_where(lists_item::Column::ListId.in_subquery(lists_owned_by(user_id)))
        .to_owned()
}
