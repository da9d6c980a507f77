use crate::catalog::{Credit, Track};

/// Flattens the featured credits (every position after the primary artist)
/// of all tracks, keeping duplicates and encounter order.
pub fn featured_credits(tracks: &[Track]) -> Vec<Credit> {
    tracks
        .iter()
        .flat_map(|track| track.credits.iter().skip(1))
        .cloned()
        .collect()
}
