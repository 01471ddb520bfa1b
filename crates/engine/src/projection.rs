//! Balance projection: expanded movements → running-balance series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Achievement, EngineError, MoneyCents, ResultEngine, first_achievement};

/// One occurrence of one transaction's effect on the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashMovement {
    pub date: NaiveDate,
    pub signed_amount: MoneyCents,
}

/// Cumulative balance at the end of `date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: MoneyCents,
}

/// A projected balance series.
///
/// Invariants (upheld by [`project`], the only constructor):
/// - never empty; the first point is `(horizon_start, initial_balance)`;
/// - dates are strictly increasing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forecast {
    points: Vec<BalancePoint>,
}

impl Forecast {
    #[must_use]
    pub fn points(&self) -> &[BalancePoint] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<BalancePoint> {
        self.points
    }

    /// Balance after the last movement of the horizon.
    #[must_use]
    pub fn final_balance(&self) -> MoneyCents {
        self.points.last().map_or(MoneyCents::ZERO, |point| point.balance)
    }

    /// See [`first_achievement`].
    #[must_use]
    pub fn first_achievement(&self, target_amount: MoneyCents) -> Achievement {
        first_achievement(self, target_amount)
    }
}

/// Merges the movements of every transaction into one running-balance
/// series over `[horizon_start, horizon_end]`.
///
/// - The series starts with `(horizon_start, initial_balance)`.
/// - `initial_balance` is the balance *at* `horizon_start`, so movements dated
///   on or before that day are already part of it and are not applied again.
///   Movements after `horizon_end` are ignored.
/// - Movements sharing a date are summed into a single point, even when they
///   cancel out.
///
/// The per-date sums live in an ordered map, so the output depends only on
/// the input multiset, never on its order.
///
/// A balance outside the `i64` range is reported as `InvalidAmount` instead
/// of wrapping.
pub fn project<I>(
    initial_balance: MoneyCents,
    movements: I,
    horizon_start: NaiveDate,
    horizon_end: NaiveDate,
) -> ResultEngine<Forecast>
where
    I: IntoIterator<Item = CashMovement>,
{
    let mut by_date: BTreeMap<NaiveDate, MoneyCents> = BTreeMap::new();
    for movement in movements {
        if movement.date <= horizon_start || movement.date > horizon_end {
            continue;
        }
        let sum = by_date.entry(movement.date).or_default();
        *sum = sum
            .checked_add(movement.signed_amount)
            .ok_or_else(|| overflow(movement.date))?;
    }

    let mut points = Vec::with_capacity(by_date.len() + 1);
    points.push(BalancePoint {
        date: horizon_start,
        balance: initial_balance,
    });

    let mut balance = initial_balance;
    for (date, delta) in by_date {
        balance = balance.checked_add(delta).ok_or_else(|| overflow(date))?;
        points.push(BalancePoint { date, balance });
    }

    Ok(Forecast { points })
}

fn overflow(date: NaiveDate) -> EngineError {
    EngineError::InvalidAmount(format!("projected balance out of range on {date}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frequency, Transaction, expand};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn movement(d: NaiveDate, cents: i64) -> CashMovement {
        CashMovement {
            date: d,
            signed_amount: MoneyCents::new(cents),
        }
    }

    fn balances(forecast: &Forecast) -> Vec<(NaiveDate, i64)> {
        forecast
            .points()
            .iter()
            .map(|p| (p.date, p.balance.cents()))
            .collect()
    }

    #[test]
    fn monthly_income_over_three_months() {
        let start = date(2025, 1, 1);
        let end = date(2025, 4, 1);
        let salary = Transaction::new(
            "alice".to_string(),
            "Salary",
            MoneyCents::new(50_000),
            true,
            Frequency::Monthly,
            start,
            None,
        )
        .unwrap();

        let forecast =
            project(MoneyCents::new(100_000), expand(&salary, start, end), start, end).unwrap();

        assert_eq!(
            balances(&forecast),
            vec![
                (date(2025, 1, 1), 100_000),
                (date(2025, 2, 1), 150_000),
                (date(2025, 3, 1), 200_000),
                (date(2025, 4, 1), 250_000),
            ]
        );
        assert_eq!(forecast.final_balance(), MoneyCents::new(250_000));
    }

    #[test]
    fn same_day_movements_are_summed() {
        let start = date(2025, 1, 1);
        let forecast = project(
            MoneyCents::new(1_000),
            vec![
                movement(date(2025, 1, 5), 300),
                movement(date(2025, 1, 3), -200),
                movement(date(2025, 1, 5), -100),
                movement(date(2025, 1, 9), 50),
                movement(date(2025, 1, 9), -50),
            ],
            start,
            date(2025, 1, 31),
        )
        .unwrap();
        assert_eq!(
            balances(&forecast),
            vec![
                (date(2025, 1, 1), 1_000),
                (date(2025, 1, 3), 800),
                (date(2025, 1, 5), 1_000),
                (date(2025, 1, 9), 1_000),
            ]
        );
    }

    #[test]
    fn empty_input_yields_only_the_epoch_point() {
        let forecast = project(
            MoneyCents::new(-500),
            Vec::new(),
            date(2025, 6, 1),
            date(2025, 12, 1),
        )
        .unwrap();
        assert_eq!(balances(&forecast), vec![(date(2025, 6, 1), -500)]);
        assert_eq!(forecast.final_balance(), MoneyCents::new(-500));
    }

    #[test]
    fn out_of_window_movements_are_dropped() {
        let start = date(2025, 1, 10);
        let end = date(2025, 1, 20);
        let forecast = project(
            MoneyCents::ZERO,
            vec![
                movement(date(2025, 1, 1), 1),
                movement(start, 10),
                movement(date(2025, 1, 15), 100),
                movement(end, 1_000),
                movement(date(2025, 1, 21), 10_000),
            ],
            start,
            end,
        )
        .unwrap();
        assert_eq!(
            balances(&forecast),
            vec![(start, 0), (date(2025, 1, 15), 100), (end, 1_100)]
        );
    }

    #[test]
    fn output_is_independent_of_input_order() {
        let start = date(2025, 1, 1);
        let end = date(2025, 3, 1);
        let mut movements = vec![
            movement(date(2025, 2, 1), 500),
            movement(date(2025, 1, 15), -20),
            movement(date(2025, 2, 1), -70),
            movement(date(2025, 1, 2), 1),
        ];
        let first = project(MoneyCents::new(10), movements.clone(), start, end).unwrap();
        movements.reverse();
        let second = project(MoneyCents::new(10), movements, start, end).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn dates_are_strictly_increasing() {
        let start = date(2025, 1, 1);
        let end = date(2026, 1, 1);
        let rules = [
            (Frequency::Weekly, false, 2_000, date(2024, 12, 30)),
            (Frequency::Monthly, true, 300_000, date(2024, 10, 31)),
            (Frequency::Once, false, 90_000, date(2025, 7, 4)),
            (Frequency::Monthly, false, 120_000, date(2025, 1, 1)),
        ];
        let movements: Vec<CashMovement> = rules
            .iter()
            .map(|&(frequency, is_income, amount, first)| {
                Transaction::new(
                    "alice".to_string(),
                    "rule",
                    MoneyCents::new(amount),
                    is_income,
                    frequency,
                    first,
                    None,
                )
                .unwrap()
            })
            .flat_map(|tx| expand(&tx, start, end).collect::<Vec<_>>())
            .collect();

        let forecast = project(MoneyCents::new(5_000), movements, start, end).unwrap();
        assert_eq!(forecast.points()[0].date, start);
        assert!(
            forecast
                .points()
                .windows(2)
                .all(|pair| pair[0].date < pair[1].date)
        );
    }

    #[test]
    fn largest_amounts_over_a_long_horizon_stay_in_range() {
        let start = date(2025, 1, 1);
        let end = date(2125, 1, 1);
        let jackpot = Transaction::new(
            "alice".to_string(),
            "Jackpot",
            MoneyCents::MAX_AMOUNT,
            true,
            Frequency::Weekly,
            date(2025, 1, 2),
            None,
        )
        .unwrap();

        let forecast = project(MoneyCents::ZERO, expand(&jackpot, start, end), start, end).unwrap();
        let occurrences = i64::try_from(forecast.points().len() - 1).unwrap();
        assert!(occurrences > 5_000);
        assert_eq!(
            forecast.final_balance(),
            MoneyCents::new(MoneyCents::MAX_AMOUNT.cents() * occurrences)
        );
    }

    #[test]
    fn overflowing_balance_is_an_error_not_a_panic() {
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);
        let huge = i64::MAX / 4;

        let result = project(
            MoneyCents::ZERO,
            (0..10).map(|week| movement(date(2025, 1, 2) + chrono::Days::new(7 * week), huge)),
            start,
            end,
        );
        assert!(matches!(result, Err(EngineError::InvalidAmount(_))));

        let from_max = project(
            MoneyCents::new(i64::MAX),
            vec![movement(date(2025, 2, 1), 1)],
            start,
            end,
        );
        assert!(matches!(from_max, Err(EngineError::InvalidAmount(_))));

        let negative = project(
            MoneyCents::new(i64::MIN + 1),
            vec![movement(date(2025, 2, 1), -1), movement(date(2025, 2, 1), -1)],
            start,
            end,
        );
        assert!(matches!(negative, Err(EngineError::InvalidAmount(_))));
    }
}
