/// Configuration problems detected before any connection is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),

    #[error("DB_PORT is not a valid port: {value:?}")]
    Port { value: String },

    #[error("unknown table {name:?} (known tables: {known})")]
    UnknownTable { name: String, known: String },

    #[error("row limit must be positive; pass --full to extract every row")]
    ZeroLimit,
}
