//! Savings goals.
//!
//! Goals form a one-level tree: a top-level goal may group sub-goals, but a
//! sub-goal never has children of its own. Targets are independent: reaching
//! every sub-goal says nothing about the parent and vice versa.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, MoneyCents, ResultEngine,
    util::{normalize_required_title, parse_uuid},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub target_amount: MoneyCents,
    pub parent_goal_id: Option<Uuid>,
    /// Filled only on top-level goals returned by [`Goal::nest`].
    pub sub_goals: Vec<Goal>,
}

impl Goal {
    pub fn new(
        user_id: String,
        title: &str,
        target_amount: MoneyCents,
        parent_goal_id: Option<Uuid>,
    ) -> ResultEngine<Self> {
        let title = normalize_required_title(title, EngineError::InvalidGoal)?;
        if !target_amount.is_valid_amount() {
            return Err(EngineError::InvalidAmount(format!(
                "target_amount must be in 0.01..={}, got {target_amount}",
                MoneyCents::MAX_AMOUNT
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            target_amount,
            parent_goal_id,
            sub_goals: Vec::new(),
        })
    }

    #[must_use]
    pub fn is_sub_goal(&self) -> bool {
        self.parent_goal_id.is_some()
    }

    /// Assembles a flat goal list into top-level goals with their sub-goals.
    ///
    /// Input order is preserved at both levels. A sub-goal whose parent is
    /// missing from the list is kept as a top-level goal rather than dropped.
    #[must_use]
    pub fn nest(flat: Vec<Goal>) -> Vec<Goal> {
        let (mut roots, children): (Vec<Goal>, Vec<Goal>) = flat
            .into_iter()
            .partition(|goal| goal.parent_goal_id.is_none());

        for child in children {
            let parent = child
                .parent_goal_id
                .and_then(|parent_id| roots.iter_mut().find(|root| root.id == parent_id));
            match parent {
                Some(parent) => parent.sub_goals.push(child),
                None => roots.push(child),
            }
        }
        roots
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target_amount_minor: i64,
    pub parent_goal_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Goal> for ActiveModel {
    fn from(goal: &Goal) -> Self {
        Self {
            id: ActiveValue::Set(goal.id.to_string()),
            user_id: ActiveValue::Set(goal.user_id.clone()),
            title: ActiveValue::Set(goal.title.clone()),
            target_amount_minor: ActiveValue::Set(goal.target_amount.cents()),
            parent_goal_id: ActiveValue::Set(goal.parent_goal_id.map(|id| id.to_string())),
        }
    }
}

impl TryFrom<Model> for Goal {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "goal")?,
            user_id: model.user_id,
            title: model.title,
            target_amount: MoneyCents::new(model.target_amount_minor),
            parent_goal_id: model
                .parent_goal_id
                .as_deref()
                .map(|id| parse_uuid(id, "goal"))
                .transpose()?,
            sub_goals: Vec::new(),
        })
    }
}
