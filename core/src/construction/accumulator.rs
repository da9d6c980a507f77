use super::GraphBuilder;
use crate::catalog::{AlbumId, CatalogClient, Credit};
use crate::dedup::dedup_albums;
use crate::error::CatalogError;
use crate::graph::CollaborationGraph;
use crate::string_normalization::same_artist_name;
use tracing::debug;

/// What processing one seed contributed to the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub albums_listed: usize,
    pub albums_kept: usize,
    pub credits_examined: usize,
    pub self_credits: usize,
    pub credits_admitted: usize,
    pub edges_created: usize,
}

impl<C: CatalogClient> GraphBuilder<C> {
    /// Adds `seed` and every qualifying featured collaborator of its albums.
    ///
    /// All catalog calls happen before the graph is touched, so an error leaves
    /// at most the seed node behind, never a partial set of edges.
    pub fn add_artist(
        &self,
        graph: &mut CollaborationGraph,
        seed: &str,
    ) -> Result<SeedSummary, CatalogError> {
        graph.add_node(seed);

        let artist_id = self.catalog.resolve_artist_id(seed)?;
        let albums = self.catalog.list_albums(&artist_id)?;
        let album_ids = dedup_albums(&albums);

        let mut summary = SeedSummary {
            albums_listed: albums.len(),
            albums_kept: album_ids.len(),
            ..Default::default()
        };
        debug!(
            seed,
            albums_listed = summary.albums_listed,
            albums_kept = summary.albums_kept,
            "Deduplicated discography"
        );

        let credits = self.collect_featured_credits(&album_ids)?;
        summary.credits_examined = credits.len();

        let collaborators = self.admit_collaborators(seed, credits, &mut summary)?;
        summary.edges_created = accumulate_collaborations(graph, seed, &collaborators);

        Ok(summary)
    }

    fn collect_featured_credits(&self, album_ids: &[AlbumId]) -> Result<Vec<Credit>, CatalogError> {
        let mut credits = Vec::new();

        for album_id in album_ids {
            credits.extend(self.catalog.list_featured_credits(album_id)?);
        }

        Ok(credits)
    }

    /// Self-credits are dropped before the filter so they never cost a lookup.
    fn admit_collaborators(
        &self,
        seed: &str,
        credits: Vec<Credit>,
        summary: &mut SeedSummary,
    ) -> Result<Vec<String>, CatalogError> {
        let mut admitted = Vec::new();

        for credit in credits {
            if same_artist_name(&credit.name, seed) {
                summary.self_credits += 1;
                continue;
            }

            if self.filter.evaluate(&self.catalog, &credit)? {
                admitted.push(credit.name);
            }
        }

        summary.credits_admitted = admitted.len();
        Ok(admitted)
    }
}

/// Adds one unit of weight per collaborator occurrence, returning the number
/// of edges that did not exist before.
pub fn accumulate_collaborations(
    graph: &mut CollaborationGraph,
    seed: &str,
    collaborators: &[String],
) -> usize {
    graph.add_node(seed);

    collaborators
        .iter()
        .filter(|collaborator| !same_artist_name(collaborator, seed))
        .filter_map(|collaborator| graph.add_collaboration(seed, collaborator))
        .filter(|&weight| weight == 1)
        .count()
}
