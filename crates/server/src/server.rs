use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use sea_orm::{DatabaseConnection, EntityTrait};

use std::sync::Arc;

use crate::{ServerError, cashflow, goals, transactions, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub db: DatabaseConnection,
}

/// Resolve `Authorization: Basic` to a verified user and expose it to the
/// handlers as `Extension<user::Model>`.
async fn auth(
    auth_header: Option<TypedHeader<Authorization<Basic>>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(TypedHeader(auth_header)) = auth_header else {
        return Err(ServerError::Unauthorized);
    };
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(ServerError::Unauthorized);
    }

    let user = user::Entity::find_by_id(auth_header.username().to_string())
        .one(&state.db)
        .await?
        .filter(|user| user::verify_password(auth_header.password(), &user.password_hash))
        .ok_or(ServerError::Unauthorized)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Build the API router. Everything but `/register` sits behind Basic auth.
pub fn router(state: ServerState) -> Router {
    let authenticated = Router::new()
        .route("/me", get(user::me))
        .route("/cashflow", get(cashflow::get))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::transaction_new),
        )
        .route("/transactions/{id}", delete(transactions::remove))
        .route("/goals", get(goals::list).post(goals::goal_new))
        .route("/goals/{id}/subgoals", post(goals::sub_goal_new))
        .route("/goals/achievements", get(goals::achievements))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route("/register", post(user::register))
        .merge(authenticated)
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        db,
    };

    axum::serve(listener, router(state)).await
}
