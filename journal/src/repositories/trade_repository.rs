use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::entity::trades::{self, TradeOutcome};
use crate::error::Error;

pub struct TradeRepository {
    db: Arc<DatabaseConnection>,
}

impl TradeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts a trade. `created_at` is assigned here and `updated_at` starts out NULL.
    pub async fn create(&self, active_model: trades::ActiveModel) -> Result<trades::Model> {
        let trade = active_model.insert(self.db.as_ref()).await?;
        info!(trade_id = trade.id, user_id = trade.user_id, "Journaled {}", trade);
        Ok(trade)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<trades::Model>> {
        debug!(trade_id = id, "Loading trade");
        let trade = trades::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(trade)
    }

    /// All trades of a user, most recent entry first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<trades::Model>> {
        debug!(user_id, "Listing trades");
        let trades = trades::Entity::find()
            .filter(trades::Column::UserId.eq(user_id))
            .order_by_desc(trades::Column::EntryTime)
            .order_by_desc(trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    pub async fn find_by_symbol(&self, user_id: i32, symbol: &str) -> Result<Vec<trades::Model>> {
        debug!(user_id, symbol, "Finding trades by symbol");
        let trades = trades::Entity::find()
            .filter(trades::Column::UserId.eq(user_id))
            .filter(trades::Column::Symbol.eq(symbol))
            .order_by_desc(trades::Column::EntryTime)
            .order_by_desc(trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    pub async fn find_by_setup_type(
        &self,
        user_id: i32,
        setup_type: &str,
    ) -> Result<Vec<trades::Model>> {
        debug!(user_id, setup_type, "Finding trades by setup type");
        let trades = trades::Entity::find()
            .filter(trades::Column::UserId.eq(user_id))
            .filter(trades::Column::SetupType.eq(setup_type))
            .order_by_desc(trades::Column::EntryTime)
            .order_by_desc(trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    pub async fn find_by_outcome(
        &self,
        user_id: i32,
        outcome: TradeOutcome,
    ) -> Result<Vec<trades::Model>> {
        debug!(user_id, %outcome, "Finding trades by outcome");
        let trades = trades::Entity::find()
            .filter(trades::Column::UserId.eq(user_id))
            .filter(trades::Column::Outcome.eq(outcome))
            .order_by_desc(trades::Column::EntryTime)
            .order_by_desc(trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    /// Trades whose `profit_loss` lies within `[min, max]`, smallest first.
    /// Trades without a recorded P&L never match.
    pub async fn find_by_profit_range(
        &self,
        user_id: i32,
        min: f64,
        max: f64,
    ) -> Result<Vec<trades::Model>> {
        debug!(user_id, min, max, "Finding trades by profit range");
        let trades = trades::Entity::find()
            .filter(trades::Column::UserId.eq(user_id))
            .filter(trades::Column::ProfitLoss.between(min, max))
            .order_by_asc(trades::Column::ProfitLoss)
            .order_by_asc(trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    pub async fn list_for_plan(&self, plan_id: i32) -> Result<Vec<trades::Model>> {
        debug!(plan_id, "Listing trades for daily plan");
        let trades = trades::Entity::find()
            .filter(trades::Column::RelatedPlanId.eq(plan_id))
            .order_by_asc(trades::Column::EntryTime)
            .order_by_asc(trades::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(trades)
    }

    /// Persists the set fields of an existing trade and refreshes `updated_at`.
    pub async fn update(&self, active_model: trades::ActiveModel) -> Result<trades::Model> {
        let id = match &active_model.id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
            ActiveValue::NotSet => anyhow::bail!("cannot update a trade without an id"),
        };
        match active_model.update(self.db.as_ref()).await {
            Ok(trade) => {
                info!(trade_id = trade.id, "Updated {}", trade);
                Ok(trade)
            }
            Err(DbErr::RecordNotUpdated) => Err(Error::TradeNotFound(id).into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `true` if a trade was removed.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = trades::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        info!(trade_id = id, deleted = result.rows_affected > 0, "Deleted trade");
        Ok(result.rows_affected > 0)
    }

    pub async fn count_for_user(&self, user_id: i32) -> Result<u64> {
        let count = trades::Entity::find()
            .filter(trades::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
