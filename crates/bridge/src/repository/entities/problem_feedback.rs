//! Problem feedback entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use domain::NewFeedback;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problem_feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub problem_id: i64,
    pub solver_id: Uuid,
    pub feedback: String,
    pub answer: Option<String>,
    pub correct: Option<bool>,
    pub difficulty: Option<i32>,
    pub quality: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<NewFeedback> for ActiveModel {
    fn from(feedback: NewFeedback) -> Self {
        ActiveModel {
            id: NotSet,
            problem_id: Set(feedback.problem_id),
            solver_id: Set(feedback.solver_id),
            feedback: Set(feedback.feedback),
            answer: Set(feedback.answer),
            correct: Set(feedback.correct),
            difficulty: Set(feedback.difficulty),
            quality: Set(feedback.quality),
        }
    }
}
