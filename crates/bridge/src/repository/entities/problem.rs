//! Problem database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Problem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Forum thread the problem is discussed in
    pub discord_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Problem {
    fn from(model: Model) -> Self {
        Problem {
            id: model.id,
            discord_id: model.discord_id,
            title: model.title,
        }
    }
}
