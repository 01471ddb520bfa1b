//! Transaction rules.
//!
//! A `Transaction` is not a single cash movement: it is a rule (amount,
//! direction, frequency, start and optional end date) that the recurrence
//! expander turns into dated movements for a forecast horizon.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, MoneyCents, ResultEngine,
    util::{normalize_required_title, parse_uuid},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Once,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl TryFrom<&str> for Frequency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "once" => Ok(Self::Once),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(EngineError::InvalidTransaction(format!(
                "invalid frequency: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    /// Always positive; the direction is given by `is_income`.
    pub amount: MoneyCents,
    pub is_income: bool,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    /// Last day (inclusive) an occurrence may fall on.
    pub end_date: Option<NaiveDate>,
}

impl Transaction {
    /// Builds a validated transaction rule with a fresh id.
    ///
    /// This is the store-write boundary: a rule accepted here is safe to
    /// expand.
    pub fn new(
        user_id: String,
        title: &str,
        amount: MoneyCents,
        is_income: bool,
        frequency: Frequency,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> ResultEngine<Self> {
        let title = normalize_required_title(title, EngineError::InvalidTransaction)?;
        if !amount.is_valid_amount() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be in 0.01..={}, got {amount}",
                MoneyCents::MAX_AMOUNT
            )));
        }
        if let Some(end) = end_date
            && end < start_date
        {
            return Err(EngineError::InvalidTransaction(format!(
                "end_date {end} is before start_date {start_date}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            amount,
            is_income,
            frequency,
            start_date,
            end_date,
        })
    }

    /// The effect of one occurrence on the balance.
    #[must_use]
    pub fn signed_amount(&self) -> MoneyCents {
        if self.is_income {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount_minor: i64,
    pub is_income: bool,
    pub frequency: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            user_id: ActiveValue::Set(tx.user_id.clone()),
            title: ActiveValue::Set(tx.title.clone()),
            amount_minor: ActiveValue::Set(tx.amount.cents()),
            is_income: ActiveValue::Set(tx.is_income),
            frequency: ActiveValue::Set(tx.frequency.as_str().to_string()),
            start_date: ActiveValue::Set(tx.start_date),
            end_date: ActiveValue::Set(tx.end_date),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "transaction")?,
            user_id: model.user_id,
            title: model.title,
            amount: MoneyCents::new(model.amount_minor),
            is_income: model.is_income,
            frequency: Frequency::try_from(model.frequency.as_str())?,
            start_date: model.start_date,
            end_date: model.end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn signed_amount_follows_direction() {
        let income = Transaction::new(
            "alice".to_string(),
            "Salary",
            MoneyCents::new(500),
            true,
            Frequency::Monthly,
            date(2025, 1, 1),
            None,
        )
        .unwrap();
        assert_eq!(income.signed_amount(), MoneyCents::new(500));

        let expense = Transaction {
            is_income: false,
            ..income
        };
        assert_eq!(expense.signed_amount(), MoneyCents::new(-500));
    }

    #[test]
    fn rejects_end_before_start() {
        let err = Transaction::new(
            "alice".to_string(),
            "Rent",
            MoneyCents::new(100),
            false,
            Frequency::Weekly,
            date(2025, 2, 1),
            Some(date(2025, 1, 31)),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTransaction(_)));
    }

    #[test]
    fn rejects_non_positive_amount_and_blank_title() {
        let zero = Transaction::new(
            "alice".to_string(),
            "Gift",
            MoneyCents::ZERO,
            true,
            Frequency::Once,
            date(2025, 1, 1),
            None,
        );
        assert!(matches!(zero, Err(EngineError::InvalidAmount(_))));

        let blank = Transaction::new(
            "alice".to_string(),
            "   ",
            MoneyCents::new(1),
            true,
            Frequency::Once,
            date(2025, 1, 1),
            None,
        );
        assert!(matches!(blank, Err(EngineError::InvalidTransaction(_))));
    }

    #[test]
    fn rejects_amounts_above_the_bound() {
        let huge = Transaction::new(
            "alice".to_string(),
            "Lottery",
            MoneyCents::new(i64::MAX / 4),
            true,
            Frequency::Weekly,
            date(2025, 1, 2),
            None,
        );
        assert!(matches!(huge, Err(EngineError::InvalidAmount(_))));

        let largest = Transaction::new(
            "alice".to_string(),
            "Lottery",
            MoneyCents::MAX_AMOUNT,
            true,
            Frequency::Weekly,
            date(2025, 1, 2),
            None,
        );
        assert!(largest.is_ok());
    }

    #[test]
    fn frequency_round_trips_through_storage_strings() {
        for freq in [Frequency::Once, Frequency::Weekly, Frequency::Monthly] {
            assert_eq!(Frequency::try_from(freq.as_str()).unwrap(), freq);
        }
        assert!(Frequency::try_from("yearly").is_err());
    }
}
