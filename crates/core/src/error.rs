use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// The visualization core itself never fails; only the ambient layers
/// (configuration, telemetry transport, file I/O) produce errors.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("config error: {0}")]
    Config(String),

    #[error("feed error: {0}")]
    Feed(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = PulseError> = std::result::Result<T, E>;
