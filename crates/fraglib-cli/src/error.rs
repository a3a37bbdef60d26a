use fraglib::core::pool::PoolError;
use fraglib::engine::error::EngineError;
use fraglib::engine::generator::scheme::SchemeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{count} fragment(s) failed conformity checking")]
    ConformityFailures { count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
