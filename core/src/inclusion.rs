use crate::catalog::{ArtistProfile, CatalogClient, Credit};
use crate::error::CatalogError;
use rustc_hash::FxHashSet;
use tracing::debug;

pub const DEFAULT_MIN_POPULARITY: u32 = 85;

/// Configuration for the collaborator inclusion filter
#[derive(Debug, Clone)]
pub struct InclusionConfig {
    /// Only admit collaborators with popularity >= threshold (0-100)
    pub min_popularity: u32,
    /// Admit only collaborators sharing at least one of these genres
    pub genres: FxHashSet<String>,
}

impl InclusionConfig {
    pub fn new<I, S>(min_popularity: u32, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            min_popularity,
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for InclusionConfig {
    fn default() -> Self {
        Self {
            min_popularity: DEFAULT_MIN_POPULARITY,
            genres: FxHashSet::default(),
        }
    }
}

/// Popularity-and-genre gate applied to every featured collaborator.
#[derive(Debug, Clone)]
pub struct InclusionFilter {
    config: InclusionConfig,
}

impl InclusionFilter {
    pub fn new(config: InclusionConfig) -> Self {
        Self { config }
    }

    /// Both conditions must hold: popular enough and not genre-disjoint.
    pub fn admits(&self, profile: &ArtistProfile) -> bool {
        profile.popularity >= self.config.min_popularity && self.shares_genre(&profile.genres)
    }

    fn shares_genre(&self, genres: &[String]) -> bool {
        genres.iter().any(|genre| self.config.genres.contains(genre))
    }

    /// Looks the candidate up in the catalog and applies [`admits`](Self::admits).
    ///
    /// Every call is a fresh lookup. A candidate unknown to the catalog is
    /// rejected; only an unavailable catalog is reported as an error.
    pub fn evaluate<C>(&self, catalog: &C, candidate: &Credit) -> Result<bool, CatalogError>
    where
        C: CatalogClient + ?Sized,
    {
        match catalog.get_artist(&candidate.id) {
            Ok(profile) => {
                let admitted = self.admits(&profile);
                debug!(
                    candidate = %candidate.name,
                    popularity = profile.popularity,
                    admitted,
                    "Evaluated collaborator"
                );
                Ok(admitted)
            }
            Err(CatalogError::ArtistNotFound(_)) => {
                debug!(candidate = %candidate.name, "Collaborator missing from catalog, rejecting");
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }
}
