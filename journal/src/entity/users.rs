//! `SeaORM` Entity, @generated manually
//!
//! Owned by the account side of the application. Only the columns the
//! journal needs are mapped here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trades::Entity")]
    Trades,
    #[sea_orm(has_many = "super::daily_plans::Entity")]
    DailyPlans,
}

impl Related<super::trades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trades.def()
    }
}

impl Related<super::daily_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyPlans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
