use crate::args::Args;
use crate::retry::RetryPolicy;
use crate::spotify::{SpotifyClient, SpotifyConfig};
use collabgraph_core::{
    CollaborationGraph, ConfigError, ConstructionReport, GraphBuilder, InclusionConfig,
    SeedReport, load_genre_allow_list, load_seed_artists,
};
use std::error::Error;

pub struct CollabGraphApp {
    pub seeds: Vec<String>,
    pub inclusion: InclusionConfig,
    pub spotify: SpotifyConfig,
}

impl CollabGraphApp {
    /// Loads the seed list and genre allow-list; any problem here is fatal.
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let seeds = load_seed_artists(&args.seeds)?;
        let genres = load_genre_allow_list(&args.genres)?;

        if args.token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "SPOTIFY_ACCESS_TOKEN is empty".to_string(),
            ));
        }

        if args.include_groups.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "--include-groups needs at least one album group".to_string(),
            ));
        }

        let spotify = SpotifyConfig {
            api_base: args.api_base.clone(),
            access_token: args.token.trim().to_string(),
            include_groups: args.include_groups.trim().to_string(),
            retry: RetryPolicy::new(args.max_retries),
        };

        Ok(Self {
            seeds,
            inclusion: InclusionConfig::new(args.min_popularity, genres),
            spotify,
        })
    }

    pub fn run<F>(&self, on_seed: F) -> Result<(CollaborationGraph, ConstructionReport), Box<dyn Error>>
    where
        F: FnMut(usize, &SeedReport),
    {
        let client = SpotifyClient::new(self.spotify.clone())?;
        let builder = GraphBuilder::new(client, self.inclusion.clone());

        let mut graph = CollaborationGraph::new();
        let report = builder.construct_graph_with(&mut graph, self.seeds.as_slice(), on_seed);

        Ok((graph, report))
    }
}
