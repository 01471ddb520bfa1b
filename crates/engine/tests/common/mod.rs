use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::Engine;
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    insert_user(&db, "alice", 1000).await;
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

pub async fn insert_user(db: &DatabaseConnection, username: &str, initial_balance_minor: i64) {
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (username, password_hash, initial_balance_minor) VALUES (?, ?, ?)",
        vec![
            username.into(),
            "not-a-real-hash".into(),
            initial_balance_minor.into(),
        ],
    ))
    .await
    .unwrap();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
