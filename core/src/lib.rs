pub mod catalog;
pub mod construction;
pub mod credits;
pub mod dedup;
pub mod error;
pub mod graph;
pub mod inclusion;
pub mod input;
pub mod string_normalization;

// Re-export commonly used items
pub use catalog::{AlbumSummary, ArtistProfile, CatalogClient, Credit, Track};
pub use construction::{
    ConstructionReport, GraphBuilder, SeedOutcome, SeedReport, SeedSummary,
    accumulate_collaborations,
};
pub use credits::featured_credits;
pub use dedup::dedup_albums;
pub use error::{CatalogError, ConfigError};
pub use graph::{CollaborationGraph, Edge};
pub use inclusion::{DEFAULT_MIN_POPULARITY, InclusionConfig, InclusionFilter};
pub use input::{load_genre_allow_list, load_seed_artists};
