pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod repositories;

pub use config::Config;
pub use database::get_db_connection;
pub use entity::trades::{EmotionalState, PlanAdherence, StringList, TradeOutcome};
pub use error::Error;
pub use repositories::TradeRepository;
