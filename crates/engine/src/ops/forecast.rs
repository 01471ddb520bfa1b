use chrono::NaiveDate;
use sea_orm::TransactionTrait;

use crate::{
    Forecast, GoalAchievement, Horizon, MoneyCents, ResultEngine, Transaction, evaluate_goals,
    expand, project,
};

use super::{Engine, with_tx};

impl Engine {
    /// Running balance for the next `months_ahead` months: the epoch point
    /// plus one point per date on which at least one movement falls.
    ///
    /// `today` is the epoch: the first point carries the user's initial
    /// balance, and anything dated on or before it is assumed to be in there
    /// already. A balance leaving the `i64` range is `InvalidAmount`.
    pub async fn forecast(
        &self,
        user_id: &str,
        months_ahead: u32,
        today: NaiveDate,
    ) -> ResultEngine<Forecast> {
        let horizon = Horizon::months_ahead(today, months_ahead)?;

        let snapshot: ResultEngine<_> = with_tx!(self, |db_tx| {
            let user = self.require_user(&db_tx, user_id).await?;
            let transactions = self.load_transactions(&db_tx, user_id).await?;
            Ok((user.initial_balance, transactions))
        });
        let (initial_balance, transactions) = snapshot?;

        forecast_transactions(initial_balance, &transactions, horizon)
    }

    /// Evaluates every goal of the user, sub-goals included, against one
    /// forecast.
    pub async fn goal_achievements(
        &self,
        user_id: &str,
        months_ahead: u32,
        today: NaiveDate,
    ) -> ResultEngine<Vec<GoalAchievement>> {
        let horizon = Horizon::months_ahead(today, months_ahead)?;

        let snapshot: ResultEngine<_> = with_tx!(self, |db_tx| {
            let user = self.require_user(&db_tx, user_id).await?;
            let transactions = self.load_transactions(&db_tx, user_id).await?;
            let goals = self.load_goals(&db_tx, user_id).await?;
            Ok((user.initial_balance, transactions, goals))
        });
        let (initial_balance, transactions, goals) = snapshot?;

        let forecast = forecast_transactions(initial_balance, &transactions, horizon)?;
        Ok(evaluate_goals(&forecast, &goals))
    }
}

fn forecast_transactions(
    initial_balance: MoneyCents,
    transactions: &[Transaction],
    horizon: Horizon,
) -> ResultEngine<Forecast> {
    let movements = transactions
        .iter()
        .flat_map(|tx| expand(tx, horizon.start, horizon.end));
    project(initial_balance, movements, horizon.start, horizon.end)
}
