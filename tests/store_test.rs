use std::fs;

use lidarrify::store::{MatchStore, StoreError};
use lidarrify::types::{FoundEntry, Track};
use tempfile::TempDir;

fn entry(id: &str) -> FoundEntry {
    FoundEntry {
        musicbrainz_id: id.to_string(),
    }
}

fn track(artist: &str, title: &str, album: Option<&str>) -> Track {
    Track {
        artist: artist.to_string(),
        title: title.to_string(),
        album: album.map(str::to_string),
    }
}

fn store_in(dir: &TempDir) -> MatchStore {
    MatchStore::new(
        dir.path().join("found.json"),
        dir.path().join("not-found.json"),
    )
}

#[tokio::test]
async fn test_persist_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let found = vec![entry("mbid-1"), entry("mbid-2")];
    let misses = vec![
        track("The Beatles", "Come Together", Some("Abbey Road")),
        track("Someone", "Untagged", None),
    ];
    store.persist(&found, &misses).await.unwrap();

    assert_eq!(store.load_found().await.unwrap(), found);
    let loaded: Vec<Track> = store.load_not_found().await.unwrap();
    assert_eq!(loaded, misses);
}

#[tokio::test]
async fn test_missing_found_file_is_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.load_found().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_not_found_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let result = store.load_not_found::<Track>().await;
    assert!(matches!(result, Err(StoreError::IoError(_))));
}

#[tokio::test]
async fn test_malformed_files_are_errors() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(dir.path().join("found.json"), "not json at all").unwrap();
    fs::write(dir.path().join("not-found.json"), "{\"truncated\":").unwrap();

    assert!(matches!(
        store.load_found().await,
        Err(StoreError::SerdeError(_))
    ));
    assert!(matches!(
        store.load_not_found::<Track>().await,
        Err(StoreError::SerdeError(_))
    ));
}

#[tokio::test]
async fn test_persist_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = MatchStore::new(
        dir.path().join("nested/out/found.json"),
        dir.path().join("nested/out/not-found.json"),
    );

    store
        .persist(&[entry("mbid-1")], &Vec::<Track>::new())
        .await
        .unwrap();

    assert!(dir.path().join("nested/out/found.json").is_file());
}

#[tokio::test]
async fn test_non_ascii_text_is_written_unescaped() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let misses = vec![track("Björk", "Jóga", Some("Homogenic"))];
    store.persist(&[], &misses).await.unwrap();

    let raw = fs::read_to_string(dir.path().join("not-found.json")).unwrap();
    assert!(raw.contains("Björk"));
    assert!(!raw.contains("\\u"));

    let reloaded: Vec<Track> = store.load_not_found().await.unwrap();
    assert_eq!(reloaded, misses);
}
