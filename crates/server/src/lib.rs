use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod cashflow;
mod goals;
mod server;
mod transactions;
mod user;

pub mod types {
    pub mod cashflow {
        pub use api_types::cashflow::{BalancePointView, CashflowQuery};
    }

    pub mod user {
        pub use api_types::user::{UserNew, UserView};
    }

    pub mod transaction {
        pub use api_types::transaction::{Frequency, TransactionNew, TransactionView};
    }

    pub mod goal {
        pub use api_types::goal::{AchievementView, GoalAchievementView, GoalNew, GoalView};
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Unauthorized,
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidTransaction(_)
        | EngineError::InvalidGoal(_)
        | EngineError::InvalidHorizon(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<sea_orm::DbErr> for ServerError {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Engine(EngineError::Database(value))
    }
}
