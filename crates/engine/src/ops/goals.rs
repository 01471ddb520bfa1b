use sea_orm::{DatabaseTransaction, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{EngineError, Goal, GoalNewCmd, ResultEngine, goals};

use super::{Engine, with_tx};

impl Engine {
    /// Stores a goal, or a sub-goal when `parent_goal_id` is set.
    ///
    /// The parent must belong to the same user and must itself be top-level:
    /// goals nest one level deep only.
    pub async fn new_goal(&self, cmd: GoalNewCmd) -> ResultEngine<Goal> {
        let goal = Goal::new(cmd.user_id, &cmd.title, cmd.target_amount, cmd.parent_goal_id)?;

        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, &goal.user_id).await?;
            if let Some(parent_id) = goal.parent_goal_id {
                let parent = self
                    .require_goal_owned(&db_tx, &goal.user_id, parent_id)
                    .await?;
                if parent.parent_goal_id.is_some() {
                    return Err(EngineError::InvalidGoal(
                        "a sub-goal cannot have sub-goals".to_string(),
                    ));
                }
            }
            goals::ActiveModel::from(&goal).insert(&db_tx).await?;
            Ok(goal)
        })
    }

    /// Top-level goals of a user with their sub-goals nested.
    pub async fn goals(&self, user_id: &str) -> ResultEngine<Vec<Goal>> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            self.load_goals(&db_tx, user_id).await
        })
    }

    pub(super) async fn load_goals(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
    ) -> ResultEngine<Vec<Goal>> {
        let flat = goals::Entity::find()
            .filter(goals::Column::UserId.eq(user_id))
            .order_by_asc(goals::Column::Title)
            .order_by_asc(goals::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(Goal::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        Ok(Goal::nest(flat))
    }
}
