use crate::credits::featured_credits;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

pub type ArtistId = String;
pub type AlbumId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub title: String,
}

/// One credited artist on a track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credit {
    pub id: ArtistId,
    pub name: String,
}

/// A track with its credits in catalog order; position 0 is the primary artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub credits: Vec<Credit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: ArtistId,
    pub name: String,
    pub popularity: u32,
    pub genres: Vec<String>,
}

/// Read access to a music catalog.
///
/// Implementations are expected to hide pagination and transient-failure
/// retries: `list_albums` returns every album in catalog order, and a
/// [`CatalogError::CatalogUnavailable`] means retrying is pointless.
pub trait CatalogClient {
    /// Resolves a display name to the identifier of the first search hit.
    fn resolve_artist_id(&self, name: &str) -> Result<ArtistId, CatalogError>;

    fn list_albums(&self, artist_id: &str) -> Result<Vec<AlbumSummary>, CatalogError>;

    fn list_album_tracks(&self, album_id: &str) -> Result<Vec<Track>, CatalogError>;

    /// Current popularity and genres of an artist.
    fn get_artist(&self, artist_id: &str) -> Result<ArtistProfile, CatalogError>;

    /// Featured (non-primary) credits across every track of an album.
    fn list_featured_credits(&self, album_id: &str) -> Result<Vec<Credit>, CatalogError> {
        let tracks = self.list_album_tracks(album_id)?;
        Ok(featured_credits(&tracks))
    }
}

impl<C: CatalogClient + ?Sized> CatalogClient for &C {
    fn resolve_artist_id(&self, name: &str) -> Result<ArtistId, CatalogError> {
        (**self).resolve_artist_id(name)
    }

    fn list_albums(&self, artist_id: &str) -> Result<Vec<AlbumSummary>, CatalogError> {
        (**self).list_albums(artist_id)
    }

    fn list_album_tracks(&self, album_id: &str) -> Result<Vec<Track>, CatalogError> {
        (**self).list_album_tracks(album_id)
    }

    fn get_artist(&self, artist_id: &str) -> Result<ArtistProfile, CatalogError> {
        (**self).get_artist(artist_id)
    }

    fn list_featured_credits(&self, album_id: &str) -> Result<Vec<Credit>, CatalogError> {
        (**self).list_featured_credits(album_id)
    }
}
