//! `SeaORM` entities for the trading journal.

pub mod prelude;

pub mod assets;
pub mod daily_plans;
pub mod sea_orm_active_enums;
pub mod trades;
pub mod users;
