mod common;

use common::{date, engine_with_db, insert_user};
use engine::{
    Achievement, EngineError, Frequency, GoalNewCmd, MoneyCents, TransactionNewCmd,
};

fn balances(forecast: &engine::Forecast) -> Vec<(chrono::NaiveDate, i64)> {
    forecast
        .points()
        .iter()
        .map(|point| (point.date, point.balance.cents()))
        .collect()
}

#[tokio::test]
async fn monthly_income_grows_balance_each_month() {
    let (engine, _db) = engine_with_db().await;
    engine
        .new_transaction(TransactionNewCmd::recurring(
            "alice",
            "Salary",
            MoneyCents::new(500),
            true,
            Frequency::Monthly,
            date(2025, 1, 1),
        ))
        .await
        .unwrap();

    let forecast = engine.forecast("alice", 3, date(2025, 1, 1)).await.unwrap();

    assert_eq!(
        balances(&forecast),
        vec![
            (date(2025, 1, 1), 1000),
            (date(2025, 2, 1), 1500),
            (date(2025, 3, 1), 2000),
            (date(2025, 4, 1), 2500),
        ]
    );
}

#[tokio::test]
async fn bounded_weekly_expense_applies_three_times() {
    let (engine, _db) = engine_with_db().await;
    engine
        .new_transaction(
            TransactionNewCmd::recurring(
                "alice",
                "Groceries",
                MoneyCents::new(100),
                false,
                Frequency::Weekly,
                date(2025, 1, 6),
            )
            .until(date(2025, 1, 20)),
        )
        .await
        .unwrap();

    let forecast = engine.forecast("alice", 1, date(2025, 1, 1)).await.unwrap();

    assert_eq!(
        balances(&forecast),
        vec![
            (date(2025, 1, 1), 1000),
            (date(2025, 1, 6), 900),
            (date(2025, 1, 13), 800),
            (date(2025, 1, 20), 700),
        ]
    );
}

#[tokio::test]
async fn forecast_without_transactions_is_a_single_point() {
    let (engine, _db) = engine_with_db().await;

    let forecast = engine.forecast("alice", 6, date(2025, 5, 15)).await.unwrap();

    assert_eq!(balances(&forecast), vec![(date(2025, 5, 15), 1000)]);
}

#[tokio::test]
async fn forecast_is_per_user() {
    let (engine, db) = engine_with_db().await;
    insert_user(&db, "bob", 42).await;
    engine
        .new_transaction(TransactionNewCmd::once(
            "alice",
            "Bonus",
            MoneyCents::new(250),
            true,
            date(2025, 2, 10),
        ))
        .await
        .unwrap();

    let bob = engine.forecast("bob", 2, date(2025, 1, 1)).await.unwrap();
    assert_eq!(balances(&bob), vec![(date(2025, 1, 1), 42)]);

    let alice = engine.forecast("alice", 2, date(2025, 1, 1)).await.unwrap();
    assert_eq!(alice.final_balance(), MoneyCents::new(1250));
}

#[tokio::test]
async fn forecast_rejects_unknown_user_and_empty_horizon() {
    let (engine, _db) = engine_with_db().await;

    assert!(matches!(
        engine.forecast("ghost", 3, date(2025, 1, 1)).await,
        Err(EngineError::KeyNotFound(_))
    ));
    assert!(matches!(
        engine.forecast("alice", 0, date(2025, 1, 1)).await,
        Err(EngineError::InvalidHorizon(_))
    ));
}

#[tokio::test]
async fn goal_achievements_evaluate_goals_and_sub_goals_independently() {
    let (engine, _db) = engine_with_db().await;
    engine
        .new_transaction(TransactionNewCmd::recurring(
            "alice",
            "Salary",
            MoneyCents::new(500),
            true,
            Frequency::Monthly,
            date(2025, 1, 1),
        ))
        .await
        .unwrap();

    let big = engine
        .new_goal(GoalNewCmd::new("alice", "Big", MoneyCents::new(5000)))
        .await
        .unwrap();
    engine
        .new_goal(GoalNewCmd::new("alice", "Small", MoneyCents::new(1800)).sub_goal_of(big.id))
        .await
        .unwrap();
    engine
        .new_goal(GoalNewCmd::new("alice", "Already", MoneyCents::new(900)))
        .await
        .unwrap();

    let achievements = engine
        .goal_achievements("alice", 3, date(2025, 1, 1))
        .await
        .unwrap();

    assert_eq!(achievements.len(), 2);
    let already = &achievements[0];
    assert_eq!(already.title, "Already");
    assert_eq!(
        already.achievement,
        Achievement::Reached {
            date: date(2025, 1, 1)
        }
    );

    let big = &achievements[1];
    assert_eq!(big.achievement, Achievement::NotReached);
    assert_eq!(big.sub_goals.len(), 1);
    assert_eq!(
        big.sub_goals[0].achievement,
        Achievement::Reached {
            date: date(2025, 3, 1)
        }
    );
}

#[tokio::test]
async fn balance_leaving_i64_range_is_invalid_amount() {
    let (engine, db) = engine_with_db().await;
    insert_user(&db, "rich", i64::MAX - 10).await;
    engine
        .new_transaction(TransactionNewCmd::recurring(
            "rich",
            "Interest",
            MoneyCents::new(100),
            true,
            Frequency::Weekly,
            date(2025, 1, 2),
        ))
        .await
        .unwrap();
    engine
        .new_goal(GoalNewCmd::new("rich", "More", MoneyCents::new(10)))
        .await
        .unwrap();

    assert!(matches!(
        engine.forecast("rich", 6, date(2025, 1, 1)).await,
        Err(EngineError::InvalidAmount(_))
    ));
    assert!(matches!(
        engine.goal_achievements("rich", 6, date(2025, 1, 1)).await,
        Err(EngineError::InvalidAmount(_))
    ));
}
