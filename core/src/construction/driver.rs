use super::GraphBuilder;
use super::accumulator::SeedSummary;
use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::graph::CollaborationGraph;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Processed(SeedSummary),
    /// The catalog does not know the seed; it was skipped.
    NotFound,
    /// The catalog became unavailable; construction stopped here.
    Failed(CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub seed: String,
    pub outcome: SeedOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ConstructionReport {
    pub seeds: Vec<SeedReport>,
    pub aborted: bool,
    /// Seeds never attempted because construction stopped early.
    pub unprocessed: usize,
    pub duration_ms: u64,
}

impl ConstructionReport {
    pub fn processed_count(&self) -> usize {
        self.seeds
            .iter()
            .filter(|report| matches!(report.outcome, SeedOutcome::Processed(_)))
            .count()
    }

    pub fn skipped_seeds(&self) -> impl Iterator<Item = &str> {
        self.seeds
            .iter()
            .filter(|report| report.outcome == SeedOutcome::NotFound)
            .map(|report| report.seed.as_str())
    }

    pub fn failure(&self) -> Option<&SeedReport> {
        self.seeds
            .iter()
            .find(|report| matches!(report.outcome, SeedOutcome::Failed(_)))
    }
}

impl<C: CatalogClient> GraphBuilder<C> {
    /// Processes every seed in order, once per occurrence in `seeds`.
    pub fn construct_graph<S: AsRef<str>>(
        &self,
        graph: &mut CollaborationGraph,
        seeds: &[S],
    ) -> ConstructionReport {
        self.construct_graph_with(graph, seeds, |_, _| {})
    }

    /// Like [`construct_graph`](Self::construct_graph), calling `on_seed` with
    /// the position and report of each seed as soon as it finishes.
    pub fn construct_graph_with<S, F>(
        &self,
        graph: &mut CollaborationGraph,
        seeds: &[S],
        mut on_seed: F,
    ) -> ConstructionReport
    where
        S: AsRef<str>,
        F: FnMut(usize, &SeedReport),
    {
        let start_time = Instant::now();
        let mut report = ConstructionReport::default();

        for (position, seed) in seeds.iter().enumerate() {
            let seed = seed.as_ref();
            let outcome = self.process_seed(graph, seed);
            let fatal = matches!(outcome, SeedOutcome::Failed(_));

            let seed_report = SeedReport {
                seed: seed.to_string(),
                outcome,
            };
            on_seed(position, &seed_report);
            report.seeds.push(seed_report);

            if fatal {
                report.aborted = true;
                report.unprocessed = seeds.len() - position - 1;
                break;
            }
        }

        report.duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            processed = report.processed_count(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            aborted = report.aborted,
            duration_ms = report.duration_ms,
            "Graph construction finished"
        );
        report
    }

    fn process_seed(&self, graph: &mut CollaborationGraph, seed: &str) -> SeedOutcome {
        match self.add_artist(graph, seed) {
            Ok(summary) => {
                info!(
                    seed,
                    albums = summary.albums_kept,
                    admitted = summary.credits_admitted,
                    new_edges = summary.edges_created,
                    "Processed seed artist"
                );
                SeedOutcome::Processed(summary)
            }
            Err(CatalogError::ArtistNotFound(missing)) => {
                warn!(seed, missing = %missing, "Seed artist not found in catalog, skipping");
                SeedOutcome::NotFound
            }
            Err(failure) => {
                error!(seed, error = %failure, "Catalog unavailable, stopping construction");
                SeedOutcome::Failed(failure)
            }
        }
    }
}
