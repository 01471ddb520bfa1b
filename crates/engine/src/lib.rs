//! Cashflow forecasting engine.
//!
//! The crate has two layers:
//!
//! - a pure core ([`expand`], [`project`], [`first_achievement`],
//!   [`evaluate_goals`]) that turns transaction rules into a running-balance
//!   [`Forecast`] and answers "when is this target first reached?";
//! - an [`Engine`] that owns the database connection, validates writes to the
//!   transaction/goal store and runs the forecast for a user from a consistent
//!   snapshot.
pub use calendar::{Horizon, add_months_clamped};
pub use commands::{GoalNewCmd, TransactionNewCmd};
pub use error::EngineError;
pub use goal_evaluation::{Achievement, GoalAchievement, evaluate_goals, first_achievement};
pub use goals::Goal;
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder};
pub use projection::{BalancePoint, CashMovement, Forecast, project};
pub use recurrence::{Occurrences, expand};
pub use transactions::{Frequency, Transaction};
pub use users::User;

mod calendar;
mod commands;
mod error;
mod goal_evaluation;
mod goals;
mod money;
mod ops;
mod projection;
mod recurrence;
mod transactions;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
