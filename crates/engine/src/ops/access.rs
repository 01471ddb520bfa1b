use sea_orm::{DatabaseTransaction, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, User, goals, transactions, users};

use super::Engine;

/// Generates a `require_*_owned` lookup: the row must exist **and** belong to
/// the user, otherwise it is reported as missing.
macro_rules! impl_require_owned {
    ($require_fn:ident, $entity:path, $user_col:expr, $model:ty, $err_msg:literal) => {
        pub(super) async fn $require_fn(
            &self,
            db: &DatabaseTransaction,
            user_id: &str,
            id: Uuid,
        ) -> ResultEngine<$model> {
            <$entity>::find_by_id(id.to_string())
                .filter($user_col.eq(user_id))
                .one(db)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound($err_msg.to_string()))
        }
    };
}

impl Engine {
    impl_require_owned!(
        require_transaction_owned,
        transactions::Entity,
        transactions::Column::UserId,
        transactions::Model,
        "transaction not exists"
    );

    impl_require_owned!(
        require_goal_owned,
        goals::Entity,
        goals::Column::UserId,
        goals::Model,
        "goal not exists"
    );

    pub(super) async fn require_user(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
    ) -> ResultEngine<User> {
        users::Entity::find_by_id(user_id.to_string())
            .one(db)
            .await?
            .map(User::from)
            .ok_or_else(|| EngineError::KeyNotFound("user not exists".to_string()))
    }
}
