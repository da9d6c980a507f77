use crate::catalog::{AlbumId, AlbumSummary};
use crate::string_normalization::title_key;
use rustc_hash::FxHashSet;

/// Keeps the first album for every lower-cased title, in catalog order.
///
/// Regional re-releases and case variants of the same title collapse onto the
/// first identifier the catalog returned; no re-sorting happens.
pub fn dedup_albums(albums: &[AlbumSummary]) -> Vec<AlbumId> {
    let mut seen_titles = FxHashSet::default();

    albums
        .iter()
        .filter(|album| seen_titles.insert(title_key(&album.title)))
        .map(|album| album.id.clone())
        .collect()
}
