use super::server::{StubResponse, StubServer};
use collabgraph::retry::RetryPolicy;
use collabgraph::{SpotifyClient, SpotifyConfig};
use collabgraph_core::{CatalogClient, CatalogError, CollaborationGraph, GraphBuilder, InclusionConfig};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

fn client_for(server: &StubServer, max_retries: u32) -> SpotifyClient {
    let config = SpotifyConfig {
        api_base: format!("{}/", server.base_url),
        access_token: "test-token".to_string(),
        include_groups: "album".to_string(),
        retry: RetryPolicy {
            max_retries,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(5),
            max_retry_after: Duration::from_secs(1),
        },
    };
    let http = Client::builder().no_proxy().build().unwrap();
    SpotifyClient::with_http_client(config, http)
}

fn search_body(hits: &[(&str, &str)]) -> String {
    let items: Vec<String> = hits
        .iter()
        .map(|(id, name)| format!(r#"{{"id":"{}","name":"{}","popularity":80,"genres":["trap"]}}"#, id, name))
        .collect();
    format!(r#"{{"artists":{{"items":[{}],"next":null}}}}"#, items.join(","))
}

#[test]
fn test_resolve_artist_id_uses_first_search_hit() {
    let server = StubServer::start(|_| {
        vec![StubResponse::json(&search_body(&[("id-1", "21 Savage"), ("id-2", "21 Savage Tribute")]))]
    });
    let client = client_for(&server, 0);

    assert_eq!(client.resolve_artist_id("21 Savage"), Ok("id-1".to_string()));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/search?q=artist%3A21%20Savage&type=artist&limit=1");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer test-token"));
}

#[test]
fn test_resolve_artist_id_without_hits() {
    let server = StubServer::start(|_| vec![StubResponse::json(&search_body(&[]))]);
    let client = client_for(&server, 0);

    assert_eq!(
        client.resolve_artist_id("Nobody"),
        Err(CatalogError::ArtistNotFound("Nobody".to_string()))
    );
}

#[test]
fn test_list_albums_follows_pagination() {
    let server = StubServer::start(|base| {
        vec![
            StubResponse::json(&format!(
                r#"{{"items":[{{"id":"a1","name":"Culture"}},{{"id":"a2","name":"Culture II"}}],"next":"{}/page-2"}}"#,
                base
            )),
            StubResponse::json(r#"{"items":[{"id":"a3","name":"CULTURE"}],"next":null}"#),
        ]
    });
    let client = client_for(&server, 0);

    let albums = client.list_albums("migos").unwrap();

    let ids: Vec<&str> = albums.iter().map(|album| album.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
    assert_eq!(albums[2].title, "CULTURE");

    let requests = server.requests();
    assert_eq!(requests[0].path, "/artists/migos/albums?include_groups=album&limit=50");
    assert_eq!(requests[1].path, "/page-2");
}

#[test]
fn test_list_album_tracks_keeps_credit_order() {
    let server = StubServer::start(|_| {
        vec![StubResponse::json(
            r#"{"items":[
                {"name":"Bad and Boujee","artists":[{"id":"m","name":"Migos"},{"id":"l","name":"Lil Uzi Vert"}]},
                {"name":"Local Demo","artists":[{"id":"m","name":"Migos"},{"id":null,"name":"Studio Friend"}]}
            ],"next":null}"#,
        )]
    });
    let client = client_for(&server, 0);

    let tracks = client.list_album_tracks("culture").unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].credits[0].name, "Migos");
    assert_eq!(tracks[0].credits[1].id, "l");
    assert_eq!(tracks[1].credits[1].id, "");
}

#[test]
fn test_list_featured_credits_drops_primary_artist() {
    let server = StubServer::start(|_| {
        vec![StubResponse::json(
            r#"{"items":[{"name":"T","artists":[{"id":"m","name":"Migos"},{"id":"d","name":"Drake"}]}],"next":null}"#,
        )]
    });
    let client = client_for(&server, 0);

    let credits = client.list_featured_credits("album").unwrap();

    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].name, "Drake");
}

#[test]
fn test_get_artist_not_found_is_not_retried() {
    let server = StubServer::start(|_| vec![StubResponse::status(404, r#"{"error":{"status":404}}"#)]);
    let client = client_for(&server, 3);

    assert_eq!(
        client.get_artist("gone"),
        Err(CatalogError::ArtistNotFound("gone".to_string()))
    );
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_get_artist_without_id_skips_request() {
    let server = StubServer::start(|_| Vec::new());
    let client = client_for(&server, 0);

    assert!(matches!(client.get_artist(""), Err(CatalogError::ArtistNotFound(_))));
    assert!(server.requests().is_empty());
}

#[test]
fn test_rate_limit_is_retried() {
    let server = StubServer::start(|_| {
        vec![
            StubResponse::status(429, "{}").header("Retry-After", "0"),
            StubResponse::json(r#"{"id":"o","name":"Offset","popularity":84,"genres":["trap","atl hip hop"]}"#),
        ]
    });
    let client = client_for(&server, 2);

    let profile = client.get_artist("o").unwrap();

    assert_eq!(profile.popularity, 84);
    assert_eq!(profile.genres, vec!["trap", "atl hip hop"]);
    assert_eq!(server.requests().len(), 2);
}

#[test]
fn test_long_retry_after_fails_without_waiting() {
    let server = StubServer::start(|_| {
        vec![
            StubResponse::status(429, "{}").header("Retry-After", "3"),
            StubResponse::json(r#"{"id":"o","name":"Offset","popularity":84,"genres":["trap"]}"#),
        ]
    });
    let client = client_for(&server, 2);
    let started = Instant::now();

    let result = client.get_artist("o");

    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(matches!(result, Err(CatalogError::CatalogUnavailable(_))));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_server_errors_exhaust_retries() {
    let server = StubServer::start(|_| {
        (0..3).map(|_| StubResponse::status(503, "{}")).collect()
    });
    let client = client_for(&server, 2);

    let result = client.get_artist("o");

    assert!(matches!(result, Err(CatalogError::CatalogUnavailable(_))));
    assert_eq!(server.requests().len(), 3);
}

#[test]
fn test_unauthorized_fails_without_retry() {
    let server = StubServer::start(|_| vec![StubResponse::status(401, r#"{"error":{"status":401}}"#)]);
    let client = client_for(&server, 3);

    let result = client.resolve_artist_id("Migos");

    assert!(matches!(result, Err(CatalogError::CatalogUnavailable(_))));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_builder_over_spotify_client() {
    let server = StubServer::start(|_| {
        vec![
            StubResponse::json(&search_body(&[("a", "Quavo")])),
            StubResponse::json(r#"{"items":[{"id":"alb","name":"Quavo Huncho"}],"next":null}"#),
            StubResponse::json(
                r#"{"items":[{"name":"T","artists":[{"id":"a","name":"Quavo"},{"id":"t","name":"Travis Scott"}]}],"next":null}"#,
            ),
            StubResponse::json(r#"{"id":"t","name":"Travis Scott","popularity":92,"genres":["rap","trap"]}"#),
        ]
    });
    let builder = GraphBuilder::new(client_for(&server, 0), InclusionConfig::new(85, ["trap"]));
    let mut graph = CollaborationGraph::new();

    let report = builder.construct_graph(&mut graph, &["Quavo"]);

    assert_eq!(report.processed_count(), 1);
    assert_eq!(graph.weight("Quavo", "Travis Scott"), Some(1));
}
