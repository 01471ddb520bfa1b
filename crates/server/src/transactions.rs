//! Transaction rule endpoints

use api_types::transaction::{Frequency as FrequencyView, TransactionNew, TransactionView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{Frequency, MoneyCents, Transaction, TransactionNewCmd};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, user};

fn frequency_from_view(frequency: FrequencyView) -> Frequency {
    match frequency {
        FrequencyView::Once => Frequency::Once,
        FrequencyView::Weekly => Frequency::Weekly,
        FrequencyView::Monthly => Frequency::Monthly,
    }
}

fn frequency_to_view(frequency: Frequency) -> FrequencyView {
    match frequency {
        Frequency::Once => FrequencyView::Once,
        Frequency::Weekly => FrequencyView::Weekly,
        Frequency::Monthly => FrequencyView::Monthly,
    }
}

fn view(tx: Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        title: tx.title,
        amount_minor: tx.amount.cents(),
        is_income: tx.is_income,
        frequency: frequency_to_view(tx.frequency),
        start_date: tx.start_date,
        end_date: tx.end_date,
    }
}

/// List the caller's transactions
pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let transactions = state.engine.transactions(&user.username).await?;
    Ok(Json(transactions.into_iter().map(view).collect()))
}

/// Create a one-off or recurring transaction
pub async fn transaction_new(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let cmd = TransactionNewCmd {
        user_id: user.username,
        title: payload.title,
        amount: MoneyCents::new(payload.amount_minor),
        is_income: payload.is_income,
        frequency: frequency_from_view(payload.frequency),
        start_date: payload.start_date,
        end_date: payload.end_date,
    };
    let tx = state.engine.new_transaction(cmd).await?;
    Ok((StatusCode::CREATED, Json(view(tx))))
}

/// Delete one of the caller's transactions
pub async fn remove(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_transaction(&user.username, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
