pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod retry;
pub mod spotify;
pub mod utils;

// Re-export commonly used items
pub use app::CollabGraphApp;
pub use args::Args;
pub use spotify::{SpotifyClient, SpotifyConfig};
pub use utils::format_number;
