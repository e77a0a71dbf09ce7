use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BetteryError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Why a power-status query produced no reading.
///
/// The estimator treats every variant the same way (the "unavailable" line);
/// the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The platform facility refused or failed the query.
    #[error("power status unavailable: {0}")]
    Unavailable(String),

    /// The machine reports no battery at all (desktop, VM).
    #[error("no battery present")]
    NoBattery,

    /// A field came back in a shape we cannot interpret.
    #[error("malformed {field}: {value:?}")]
    Malformed { field: &'static str, value: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BetteryError> = std::result::Result<T, E>;
