//! Goal evaluation over an already computed [`Forecast`].
//!
//! Everything here is pure: the forecast is only borrowed, so the same series
//! can be checked against any number of targets without recomputing it.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::{Forecast, Goal, MoneyCents};

/// Outcome of looking for a target balance in a forecast.
///
/// `NotReached` is a regular answer ("not within this horizon"), not a
/// failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Achievement {
    Reached { date: NaiveDate },
    NotReached,
}

/// Earliest date whose projected balance is at least `target_amount`.
///
/// A goal already met by the initial balance is reached on the horizon start.
#[must_use]
pub fn first_achievement(forecast: &Forecast, target_amount: MoneyCents) -> Achievement {
    forecast
        .points()
        .iter()
        .find(|point| point.balance >= target_amount)
        .map_or(Achievement::NotReached, |point| Achievement::Reached {
            date: point.date,
        })
}

/// Evaluation of one goal, with its sub-goals evaluated independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoalAchievement {
    pub goal_id: Uuid,
    pub title: String,
    pub target_amount: MoneyCents,
    pub achievement: Achievement,
    pub sub_goals: Vec<GoalAchievement>,
}

/// Evaluates every goal of a (nested) goal list against `forecast`.
///
/// Sub-goal targets do not roll up into the parent: each goal is compared to
/// the balance series on its own.
#[must_use]
pub fn evaluate_goals(forecast: &Forecast, goals: &[Goal]) -> Vec<GoalAchievement> {
    goals
        .iter()
        .map(|goal| GoalAchievement {
            goal_id: goal.id,
            title: goal.title.clone(),
            target_amount: goal.target_amount,
            achievement: first_achievement(forecast, goal.target_amount),
            sub_goals: evaluate_goals(forecast, &goal.sub_goals),
        })
        .collect()
}
