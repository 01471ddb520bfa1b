//! Cashflow forecast endpoint

use api_types::cashflow::{BalancePointView, CashflowQuery};
use axum::{
    Extension, Json,
    extract::{Query, State},
};
use chrono::{Local, NaiveDate};

use crate::{ServerError, server::ServerState, user};

pub(crate) const DEFAULT_MONTHS_AHEAD: u32 = 6;

/// The forecast epoch: the server's local calendar date.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Running balance from today to `months_ahead` months later: today's point
/// plus one point per date with at least one movement.
pub async fn get(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<CashflowQuery>,
) -> Result<Json<Vec<BalancePointView>>, ServerError> {
    let months_ahead = query.months_ahead.unwrap_or(DEFAULT_MONTHS_AHEAD);
    let forecast = state
        .engine
        .forecast(&user.username, months_ahead, today())
        .await?;

    tracing::debug!(
        username = %user.username,
        months_ahead,
        points = forecast.points().len(),
        final_balance = %forecast.final_balance(),
        "cashflow forecast computed"
    );

    Ok(Json(
        forecast
            .into_points()
            .into_iter()
            .map(|point| BalancePointView {
                date: point.date,
                balance_minor: point.balance.cents(),
            })
            .collect(),
    ))
}
