//! Goal endpoints

use api_types::{
    cashflow::CashflowQuery,
    goal::{AchievementView, GoalAchievementView, GoalNew, GoalView},
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{Achievement, Goal, GoalAchievement, GoalNewCmd, MoneyCents};
use uuid::Uuid;

use crate::{ServerError, cashflow, server::ServerState, user};

fn view(goal: Goal) -> GoalView {
    GoalView {
        id: goal.id,
        title: goal.title,
        target_amount_minor: goal.target_amount.cents(),
        parent_goal_id: goal.parent_goal_id,
        sub_goals: goal.sub_goals.into_iter().map(view).collect(),
    }
}

fn achievement_view(achievement: GoalAchievement) -> GoalAchievementView {
    GoalAchievementView {
        goal_id: achievement.goal_id,
        title: achievement.title,
        target_amount_minor: achievement.target_amount.cents(),
        achievement: match achievement.achievement {
            Achievement::Reached { date } => AchievementView::Reached { date },
            Achievement::NotReached => AchievementView::NotReached,
        },
        sub_goals: achievement
            .sub_goals
            .into_iter()
            .map(achievement_view)
            .collect(),
    }
}

/// List the caller's goals, sub-goals nested
pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<GoalView>>, ServerError> {
    let goals = state.engine.goals(&user.username).await?;
    Ok(Json(goals.into_iter().map(view).collect()))
}

/// Create a top-level goal
pub async fn goal_new(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<GoalNew>,
) -> Result<(StatusCode, Json<GoalView>), ServerError> {
    let cmd = GoalNewCmd::new(
        user.username,
        payload.title,
        MoneyCents::new(payload.target_amount_minor),
    );
    let goal = state.engine.new_goal(cmd).await?;
    Ok((StatusCode::CREATED, Json(view(goal))))
}

/// Create a sub-goal under the goal `id`
pub async fn sub_goal_new(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GoalNew>,
) -> Result<(StatusCode, Json<GoalView>), ServerError> {
    let cmd = GoalNewCmd::new(
        user.username,
        payload.title,
        MoneyCents::new(payload.target_amount_minor),
    )
    .sub_goal_of(id);
    let goal = state.engine.new_goal(cmd).await?;
    Ok((StatusCode::CREATED, Json(view(goal))))
}

/// Evaluate every goal against the caller's forecast
pub async fn achievements(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Query(query): Query<CashflowQuery>,
) -> Result<Json<Vec<GoalAchievementView>>, ServerError> {
    let months_ahead = query.months_ahead.unwrap_or(cashflow::DEFAULT_MONTHS_AHEAD);
    let achievements = state
        .engine
        .goal_achievements(&user.username, months_ahead, cashflow::today())
        .await?;
    Ok(Json(achievements.into_iter().map(achievement_view).collect()))
}
