pub use super::assets::Entity as Assets;
pub use super::daily_plans::Entity as DailyPlans;
pub use super::trades::Entity as Trades;
pub use super::users::Entity as Users;
