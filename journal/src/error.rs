use thiserror::Error;

/// Failures raised by the journal itself. Storage errors are passed through
/// as [`sea_orm::DbErr`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("trade {0} not found")]
    TradeNotFound(i32),
}
