use crate::spotify::DEFAULT_API_BASE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "collabgraph")]
#[command(about = "Build a weighted collaboration graph between music artists from Spotify track credits")]
pub struct Args {
    /// File with one seed artist name per line
    #[arg(short = 's', long, value_name = "FILE")]
    pub seeds: PathBuf,

    /// File with one allowed genre tag per line
    #[arg(short = 'g', long, value_name = "FILE")]
    pub genres: PathBuf,

    /// Only admit collaborators with popularity >= threshold (0-100)
    #[arg(
        short = 'p',
        long,
        value_name = "SCORE",
        default_value = "85",
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub min_popularity: u32,

    /// Album groups to scan (album, single, appears_on, compilation)
    #[arg(long, value_name = "GROUPS", default_value = "album")]
    pub include_groups: String,

    /// Retries for rate-limited or failing catalog requests
    #[arg(long, value_name = "COUNT", default_value = "4")]
    pub max_retries: u32,

    /// Spotify Web API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Spotify access token
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Number of heaviest collaborations to list
    #[arg(short = 't', long, value_name = "COUNT", default_value = "20")]
    pub top: usize,

    /// Print the graph as JSON instead of the summary
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode - no progress bar or run info
    #[arg(short, long)]
    pub quiet: bool,
}
