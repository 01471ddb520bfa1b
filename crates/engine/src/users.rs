//! Users table, read side.
//!
//! The engine only needs the starting balance of a forecast; credentials are
//! owned by the server. `user_id` is the username.

use sea_orm::entity::prelude::*;

use crate::MoneyCents;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password_hash: String,
    pub initial_balance_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Forecast-relevant view of a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// Balance at "now", the epoch of every projection.
    pub initial_balance: MoneyCents,
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            username: model.username,
            initial_balance: MoneyCents::new(model.initial_balance_minor),
        }
    }
}
