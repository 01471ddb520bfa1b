//! The module contains the users table as seen by the server: credentials,
//! registration and the authenticated caller.

use api_types::user::{UserNew, UserView};
use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use axum::{Extension, Json, extract::State, http::StatusCode};
use engine::EngineError;
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{ServerError, server::ServerState};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password_hash: String,
    pub initial_balance_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Model> for UserView {
    fn from(model: &Model) -> Self {
        Self {
            username: model.username.clone(),
            initial_balance_minor: model.initial_balance_minor,
        }
    }
}

fn hash_password(password: &str) -> Result<String, ServerError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("failed to hash password: {err}");
            ServerError::Generic("failed to hash password".to_string())
        })
}

/// Checks `password` against a stored PHC hash string. A malformed hash never
/// matches.
pub(crate) fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Create a user with its starting balance
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserNew>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(ServerError::Generic("username required".to_string()));
    }
    if payload.password.is_empty() {
        return Err(ServerError::Generic("password required".to_string()));
    }

    if Entity::find_by_id(username.to_string())
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(EngineError::ExistingKey(format!("user {username} already exists")).into());
    }

    let user = ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password_hash: ActiveValue::Set(hash_password(&payload.password)?),
        initial_balance_minor: ActiveValue::Set(payload.initial_balance_minor),
    }
    .insert(&state.db)
    .await?;

    tracing::info!(username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// Return the authenticated user
pub async fn me(Extension(user): Extension<Model>) -> Json<UserView> {
    Json(UserView::from(&user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("hunter2", "hunter2"));
        assert!(!verify_password("", ""));
    }
}
