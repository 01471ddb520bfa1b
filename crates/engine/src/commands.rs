//! Command structs for engine write operations.
//!
//! These types group parameters for store writes, keeping call sites readable
//! and avoiding long argument lists.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{Frequency, MoneyCents};

/// Create a transaction rule.
#[derive(Clone, Debug)]
pub struct TransactionNewCmd {
    pub user_id: String,
    pub title: String,
    pub amount: MoneyCents,
    pub is_income: bool,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl TransactionNewCmd {
    /// A one-off transaction on `date`.
    #[must_use]
    pub fn once(
        user_id: impl Into<String>,
        title: impl Into<String>,
        amount: MoneyCents,
        is_income: bool,
        date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            amount,
            is_income,
            frequency: Frequency::Once,
            start_date: date,
            end_date: None,
        }
    }

    /// A recurring transaction starting on `start_date`, with no end.
    #[must_use]
    pub fn recurring(
        user_id: impl Into<String>,
        title: impl Into<String>,
        amount: MoneyCents,
        is_income: bool,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            amount,
            is_income,
            frequency,
            start_date,
            end_date: None,
        }
    }

    #[must_use]
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Create a goal, or a sub-goal when `parent_goal_id` is set.
#[derive(Clone, Debug)]
pub struct GoalNewCmd {
    pub user_id: String,
    pub title: String,
    pub target_amount: MoneyCents,
    pub parent_goal_id: Option<Uuid>,
}

impl GoalNewCmd {
    #[must_use]
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, target_amount: MoneyCents) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            target_amount,
            parent_goal_id: None,
        }
    }

    #[must_use]
    pub fn sub_goal_of(mut self, parent_goal_id: Uuid) -> Self {
        self.parent_goal_id = Some(parent_goal_id);
        self
    }
}
