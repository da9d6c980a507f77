use crate::retry::{Attempt, RetryPolicy, retry_with_backoff};
use collabgraph_core::{AlbumSummary, ArtistProfile, CatalogClient, CatalogError, Credit, Track};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::RETRY_AFTER;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";

/// Largest page size the Web API accepts for album and track listings
const PAGE_LIMIT: u32 = 50;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("collabgraph/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub artists: Paging<SpotifyArtist>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedArtist {
    /// Local files carry credits without a catalog id
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedTrack {
    pub name: String,
    pub artists: Vec<SimplifiedArtist>,
}

#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub api_base: String,
    pub access_token: String,
    /// Comma-separated album groups passed as `include_groups`
    pub include_groups: String,
    pub retry: RetryPolicy,
}

/// Blocking Spotify Web API catalog.
pub struct SpotifyClient {
    http: Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                CatalogError::CatalogUnavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(mut config: SpotifyConfig, http: Client) -> Self {
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Self { http, config }
    }

    /// GETs `url` with retries. `Ok(None)` means the resource does not exist.
    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, CatalogError> {
        retry_with_backoff(url, &self.config.retry, || {
            let response = match self
                .http
                .get(url)
                .bearer_auth(&self.config.access_token)
                .send()
            {
                Ok(response) => response,
                Err(e) => {
                    return Attempt::Retry {
                        reason: e.to_string(),
                        wait: None,
                    };
                }
            };

            classify_response(url, response)
        })
    }

    /// Follows `next` links until the last page, keeping catalog order.
    fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        first_page_url: String,
    ) -> Result<Option<Vec<T>>, CatalogError> {
        let mut items = Vec::new();
        let mut next_url = Some(first_page_url);
        let mut pages = 0;

        while let Some(url) = next_url {
            let page: Paging<T> = match self.fetch(&url)? {
                Some(page) => page,
                None if pages == 0 => return Ok(None),
                None => {
                    warn!(url = %url, "Pagination link vanished, keeping earlier pages");
                    break;
                }
            };

            pages += 1;
            items.extend(page.items);
            next_url = page.next;
        }

        debug!(pages, items = items.len(), "Fetched paginated listing");
        Ok(Some(items))
    }

    fn search_url(&self, name: &str) -> String {
        format!(
            "{}/search?q={}&type=artist&limit=1",
            self.config.api_base,
            urlencoding::encode(&format!("artist:{}", name))
        )
    }

    fn albums_url(&self, artist_id: &str) -> String {
        format!(
            "{}/artists/{}/albums?include_groups={}&limit={}",
            self.config.api_base,
            urlencoding::encode(artist_id),
            urlencoding::encode(&self.config.include_groups),
            PAGE_LIMIT
        )
    }

    fn tracks_url(&self, album_id: &str) -> String {
        format!(
            "{}/albums/{}/tracks?limit={}",
            self.config.api_base,
            urlencoding::encode(album_id),
            PAGE_LIMIT
        )
    }

    fn artist_url(&self, artist_id: &str) -> String {
        format!(
            "{}/artists/{}",
            self.config.api_base,
            urlencoding::encode(artist_id)
        )
    }
}

fn classify_response<T: DeserializeOwned>(url: &str, response: Response) -> Attempt<Option<T>> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Attempt::Done(None);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Attempt::Retry {
            reason: "rate limited".to_string(),
            wait: retry_after(&response),
        };
    }

    if status.is_server_error() {
        return Attempt::Retry {
            reason: format!("HTTP {}", status),
            wait: None,
        };
    }

    if !status.is_success() {
        return Attempt::Fail(CatalogError::CatalogUnavailable(format!(
            "HTTP {} from {}",
            status, url
        )));
    }

    match response.json::<T>() {
        Ok(body) => Attempt::Done(Some(body)),
        Err(e) => Attempt::Fail(CatalogError::CatalogUnavailable(format!(
            "Failed to decode response from {}: {}",
            url, e
        ))),
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

impl CatalogClient for SpotifyClient {
    fn resolve_artist_id(&self, name: &str) -> Result<String, CatalogError> {
        let response: Option<SearchResponse> = self.fetch(&self.search_url(name))?;

        // First hit wins, as the search ranking is trusted
        response
            .and_then(|search| search.artists.items.into_iter().next())
            .map(|artist| {
                debug!(query = name, matched = %artist.name, id = %artist.id, "Resolved artist");
                artist.id
            })
            .ok_or_else(|| CatalogError::ArtistNotFound(name.to_string()))
    }

    fn list_albums(&self, artist_id: &str) -> Result<Vec<AlbumSummary>, CatalogError> {
        let albums: Vec<SimplifiedAlbum> = self
            .fetch_all_pages(self.albums_url(artist_id))?
            .ok_or_else(|| CatalogError::ArtistNotFound(artist_id.to_string()))?;

        Ok(albums.into_iter().map(convert_album).collect())
    }

    fn list_album_tracks(&self, album_id: &str) -> Result<Vec<Track>, CatalogError> {
        match self.fetch_all_pages::<SimplifiedTrack>(self.tracks_url(album_id))? {
            Some(tracks) => Ok(tracks.into_iter().map(convert_track).collect()),
            None => {
                warn!(album_id, "Album listed but not found, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn get_artist(&self, artist_id: &str) -> Result<ArtistProfile, CatalogError> {
        if artist_id.is_empty() {
            return Err(CatalogError::ArtistNotFound(artist_id.to_string()));
        }

        let artist: SpotifyArtist = self
            .fetch(&self.artist_url(artist_id))?
            .ok_or_else(|| CatalogError::ArtistNotFound(artist_id.to_string()))?;

        Ok(convert_artist(artist))
    }
}

pub fn convert_album(album: SimplifiedAlbum) -> AlbumSummary {
    AlbumSummary {
        id: album.id,
        title: album.name,
    }
}

pub fn convert_track(track: SimplifiedTrack) -> Track {
    Track {
        name: track.name,
        credits: track
            .artists
            .into_iter()
            .map(|artist| Credit {
                id: artist.id.unwrap_or_default(),
                name: artist.name,
            })
            .collect(),
    }
}

pub fn convert_artist(artist: SpotifyArtist) -> ArtistProfile {
    ArtistProfile {
        id: artist.id,
        name: artist.name,
        popularity: artist.popularity,
        genres: artist.genres,
    }
}
