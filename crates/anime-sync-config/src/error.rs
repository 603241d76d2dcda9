use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration failures. All of these are fatal before any
/// network work begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: set {0}")]
    MissingCredential(&'static str),

    #[error("seed file not found or unreadable: {path}")]
    MissingSeedFile { path: PathBuf },

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
