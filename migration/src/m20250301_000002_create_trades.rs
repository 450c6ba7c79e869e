use sea_orm_migration::prelude::*;

const OUTCOMES: [&str; 3] = ["Win", "Loss", "Breakeven"];
const EMOTIONAL_STATES: [&str; 9] = [
    "Calm",
    "Excited",
    "Fearful",
    "Greedy",
    "Anxious",
    "Confident",
    "Frustrated",
    "Neutral",
    "Other",
];
const PLAN_ADHERENCE: [&str; 4] = ["Followed", "Partial", "Deviated", "No Plan"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trades::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Trades::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Trades::UserId).integer().not_null())
                    .col(ColumnDef::new(Trades::AssetId).integer().null())
                    // Trade details
                    .col(ColumnDef::new(Trades::Symbol).string().not_null())
                    .col(ColumnDef::new(Trades::SetupType).string().null())
                    .col(ColumnDef::new(Trades::EntryPrice).double().null())
                    .col(ColumnDef::new(Trades::ExitPrice).double().null())
                    .col(ColumnDef::new(Trades::PositionSize).double().null())
                    .col(ColumnDef::new(Trades::EntryTime).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Trades::ExitTime).timestamp_with_time_zone().null())
                    // Market context
                    .col(ColumnDef::new(Trades::MarketCondition).string().null()) // trending, ranging, volatile
                    .col(ColumnDef::new(Trades::TradeDirection).string().null()) // long, short
                    .col(ColumnDef::new(Trades::TradeTimeframe).string().null()) // 5m, 15m, 1h, 4h, daily
                    .col(ColumnDef::new(Trades::PlannedRiskReward).double().null())
                    .col(ColumnDef::new(Trades::ActualRiskReward).double().null())
                    // Outcome
                    .col(
                        ColumnDef::new(Trades::Outcome)
                            .string()
                            .null()
                            .check(Expr::col(Trades::Outcome).is_in(OUTCOMES)),
                    )
                    .col(ColumnDef::new(Trades::ProfitLoss).double().null())
                    // Psychology
                    .col(
                        ColumnDef::new(Trades::EmotionalState)
                            .string()
                            .null()
                            .check(Expr::col(Trades::EmotionalState).is_in(EMOTIONAL_STATES)),
                    )
                    .col(
                        ColumnDef::new(Trades::PlanAdherence)
                            .string()
                            .null()
                            .check(Expr::col(Trades::PlanAdherence).is_in(PLAN_ADHERENCE)),
                    )
                    // Notes and media
                    .col(ColumnDef::new(Trades::Notes).text().null())
                    .col(ColumnDef::new(Trades::Screenshots).json().not_null())
                    .col(ColumnDef::new(Trades::Tags).json().not_null())
                    .col(ColumnDef::new(Trades::RelatedPlanId).integer().null())
                    .col(ColumnDef::new(Trades::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Trades::UpdatedAt).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trades_user")
                            .from(Trades::Table, Trades::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trades_asset")
                            .from(Trades::Table, Trades::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trades_daily_plan")
                            .from(Trades::Table, Trades::RelatedPlanId)
                            .to(DailyPlans::Table, DailyPlans::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_trades_user_id", Trades::UserId),
            ("idx_trades_symbol", Trades::Symbol),
            ("idx_trades_setup_type", Trades::SetupType),
            ("idx_trades_outcome", Trades::Outcome),
            ("idx_trades_profit_loss", Trades::ProfitLoss),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Trades::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trades::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Trades {
    Table,
    Id,
    UserId,
    AssetId,
    Symbol,
    SetupType,
    EntryPrice,
    ExitPrice,
    PositionSize,
    EntryTime,
    ExitTime,
    MarketCondition,
    TradeDirection,
    TradeTimeframe,
    PlannedRiskReward,
    ActualRiskReward,
    Outcome,
    ProfitLoss,
    EmotionalState,
    PlanAdherence,
    Notes,
    Screenshots,
    Tags,
    RelatedPlanId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum DailyPlans {
    Table,
    Id,
}
