//! Error type shared by every stage of config generation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Every required variable the source could not provide, in template order.
    #[error(
        "required environment variable(s) not set or not valid Unicode: {}",
        .0.join(", ")
    )]
    MissingVariables(Vec<String>),

    #[error("invalid template at byte {offset}: {reason}")]
    InvalidTemplate { offset: usize, reason: String },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load generator settings: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
