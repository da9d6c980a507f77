mod accumulator;
mod driver;

pub use accumulator::{SeedSummary, accumulate_collaborations};
pub use driver::{ConstructionReport, SeedOutcome, SeedReport};

use crate::catalog::CatalogClient;
use crate::inclusion::{InclusionConfig, InclusionFilter};

/// Builds a [`CollaborationGraph`](crate::CollaborationGraph) one seed artist at a time.
///
/// The graph is owned by the caller and passed in by `&mut`, so several
/// builders (or runs) never share hidden state.
pub struct GraphBuilder<C> {
    catalog: C,
    filter: InclusionFilter,
}

impl<C: CatalogClient> GraphBuilder<C> {
    pub fn new(catalog: C, config: InclusionConfig) -> Self {
        Self {
            catalog,
            filter: InclusionFilter::new(config),
        }
    }
}
