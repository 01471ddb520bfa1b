use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub username: String,
        pub password: String,
        /// Balance the forecast starts from. Defaults to 0.
        #[serde(default)]
        pub initial_balance_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub username: String,
        pub initial_balance_minor: i64,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Frequency {
        #[default]
        Once,
        Weekly,
        Monthly,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub title: String,
        /// Must be > 0. The direction is given by `is_income`.
        pub amount_minor: i64,
        pub is_income: bool,
        #[serde(default)]
        pub frequency: Frequency,
        pub start_date: NaiveDate,
        /// Last day (inclusive) a recurring transaction applies.
        pub end_date: Option<NaiveDate>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub title: String,
        pub amount_minor: i64,
        pub is_income: bool,
        pub frequency: Frequency,
        pub start_date: NaiveDate,
        pub end_date: Option<NaiveDate>,
    }
}

pub mod goal {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GoalNew {
        pub title: String,
        pub target_amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GoalView {
        pub id: Uuid,
        pub title: String,
        pub target_amount_minor: i64,
        pub parent_goal_id: Option<Uuid>,
        #[serde(default)]
        pub sub_goals: Vec<GoalView>,
    }

    /// Outcome of comparing a goal with the forecast.
    ///
    /// `{"status":"reached","date":"2025-03-01"}` or `{"status":"not_reached"}`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "status", rename_all = "snake_case")]
    pub enum AchievementView {
        Reached { date: NaiveDate },
        NotReached,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GoalAchievementView {
        pub goal_id: Uuid,
        pub title: String,
        pub target_amount_minor: i64,
        pub achievement: AchievementView,
        #[serde(default)]
        pub sub_goals: Vec<GoalAchievementView>,
    }
}

pub mod cashflow {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CashflowQuery {
        /// Forecast length in calendar months. The server defaults it.
        pub months_ahead: Option<u32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalancePointView {
        pub date: NaiveDate,
        pub balance_minor: i64,
    }
}
