use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog has no artist for the given name or identifier.
    #[error("Artist '{0}' not found in catalog")]
    ArtistNotFound(String),

    /// The catalog could not be reached or kept failing after retries.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

/// Startup configuration problems: seed list, genre allow-list, CLI values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path:?}: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} contains no entries")]
    Empty { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
