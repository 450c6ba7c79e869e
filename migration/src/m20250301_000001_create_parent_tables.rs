use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Parent tables referenced by trades. Only the columns the journal reads.
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assets::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Assets::Symbol).string().not_null())
                    .col(ColumnDef::new(Assets::Name).string().null())
                    .col(ColumnDef::new(Assets::AssetClass).string().null()) // forex, crypto, index, ...
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DailyPlans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DailyPlans::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(DailyPlans::UserId).integer().not_null())
                    .col(ColumnDef::new(DailyPlans::PlanDate).date().not_null())
                    .col(ColumnDef::new(DailyPlans::Notes).text().null())
                    .col(ColumnDef::new(DailyPlans::CreatedAt).timestamp_with_time_zone().null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_plans_user")
                            .from(DailyPlans::Table, DailyPlans::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyPlans::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    Symbol,
    Name,
    AssetClass,
}

#[derive(DeriveIden)]
enum DailyPlans {
    Table,
    Id,
    UserId,
    PlanDate,
    Notes,
    CreatedAt,
}
