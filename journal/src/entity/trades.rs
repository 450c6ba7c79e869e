//! `SeaORM` Entity, @generated manually
//!
//! One journaled trade: execution details, market context, outcome and the
//! trader's state of mind. No cross-field checks are made here (an exit before
//! the entry, or a `Win` with a negative P&L, is stored as given).

use std::fmt;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

pub use super::sea_orm_active_enums::{EmotionalState, PlanAdherence, TradeOutcome};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub asset_id: Option<i32>,
    #[sea_orm(indexed)]
    pub symbol: String,
    #[sea_orm(indexed)]
    pub setup_type: Option<String>, // MMXM / ICT setup category
    #[sea_orm(column_type = "Double", nullable)]
    pub entry_price: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub exit_price: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub position_size: Option<f64>,
    pub entry_time: Option<DateTimeUtc>,
    pub exit_time: Option<DateTimeUtc>,
    pub market_condition: Option<String>, // "trending", "ranging", "volatile"
    pub trade_direction: Option<String>,  // "long" or "short"
    pub trade_timeframe: Option<String>,  // "5m", "1h", "daily", ...
    #[sea_orm(column_type = "Double", nullable)]
    pub planned_risk_reward: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub actual_risk_reward: Option<f64>,
    #[sea_orm(indexed)]
    pub outcome: Option<TradeOutcome>,
    #[sea_orm(column_type = "Double", nullable, indexed)]
    pub profit_loss: Option<f64>,
    pub emotional_state: Option<EmotionalState>,
    pub plan_adherence: Option<PlanAdherence>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub screenshots: StringList, // screenshot paths
    #[sea_orm(column_type = "Json")]
    pub tags: StringList,
    pub related_plan_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

/// Ordered list of strings persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::AssetId",
        to = "super::assets::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Assets,
    #[sea_orm(
        belongs_to = "super::daily_plans::Entity",
        from = "Column::RelatedPlanId",
        to = "super::daily_plans::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    DailyPlans,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assets.def()
    }
}

impl Related<super::daily_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyPlans.def()
    }
}

impl ActiveModel {
    /// A new journal entry with only the required columns filled in.
    pub fn new_entry(user_id: i32, symbol: impl Into<String>) -> Self {
        Self {
            user_id: ActiveValue::Set(user_id),
            symbol: ActiveValue::Set(symbol.into()),
            screenshots: ActiveValue::Set(StringList::default()),
            tags: ActiveValue::Set(StringList::default()),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Timestamps are owned by the persistence layer: `created_at` is written
    /// once on insert, `updated_at` stays NULL until the first update.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert {
            self.created_at = ActiveValue::Set(now);
            self.updated_at = ActiveValue::Set(None);
            if self.screenshots.is_not_set() {
                self.screenshots = ActiveValue::Set(StringList::default());
            }
            if self.tags.is_not_set() {
                self.tags = ActiveValue::Set(StringList::default());
            }
        } else {
            self.created_at = ActiveValue::NotSet;
            self.updated_at = ActiveValue::Set(Some(now));
        }
        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Trade(id={}, symbol={}, outcome=", self.id, self.symbol)?;
        match self.outcome {
            Some(outcome) => write!(f, "{outcome}")?,
            None => f.write_str("None")?,
        }
        f.write_str(")>")
    }
}
