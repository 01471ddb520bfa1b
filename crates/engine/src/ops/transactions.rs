use sea_orm::{DatabaseTransaction, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{ResultEngine, Transaction, TransactionNewCmd, transactions};

use super::{Engine, with_tx};

impl Engine {
    /// Validates and stores a transaction rule for an existing user.
    ///
    /// Rejections (`end_date < start_date`, non-positive amount, blank title)
    /// happen here, before anything reaches the forecast.
    pub async fn new_transaction(&self, cmd: TransactionNewCmd) -> ResultEngine<Transaction> {
        let tx = Transaction::new(
            cmd.user_id,
            &cmd.title,
            cmd.amount,
            cmd.is_income,
            cmd.frequency,
            cmd.start_date,
            cmd.end_date,
        )?;

        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, &tx.user_id).await?;
            transactions::ActiveModel::from(&tx).insert(&db_tx).await?;
            Ok(tx)
        })
    }

    /// All transaction rules of a user, oldest start date first.
    pub async fn transactions(&self, user_id: &str) -> ResultEngine<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            self.load_transactions(&db_tx, user_id).await
        })
    }

    /// Deletes one of the user's transactions.
    pub async fn delete_transaction(&self, user_id: &str, transaction_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = self
                .require_transaction_owned(&db_tx, user_id, transaction_id)
                .await?;
            transactions::Entity::delete_by_id(model.id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    pub(super) async fn load_transactions(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
    ) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_asc(transactions::Column::StartDate)
            .order_by_asc(transactions::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}
