use std::{collections::HashSet, path::Path};

use plist::Value;

use crate::types::{AlbumEntry, Track};

#[derive(Debug)]
pub enum LibraryError {
    PlistError(plist::Error),
    FormatError(String),
}

impl From<plist::Error> for LibraryError {
    fn from(err: plist::Error) -> Self {
        LibraryError::PlistError(err)
    }
}

/// Reads the `Tracks` dictionary of an Apple Music library export and
/// returns one record per entry that carries both an artist and a title.
/// Entries missing either field are dropped without an error; the album
/// field stays optional.
pub fn read_tracks(path: &Path) -> Result<Vec<Track>, LibraryError> {
    let mut tracks = Vec::new();
    for entry in track_entries(path)? {
        let artist = string_field(&entry, "Artist");
        let title = string_field(&entry, "Name");
        let album = string_field(&entry, "Album");
        if let (Some(artist), Some(title)) = (artist, title) {
            tracks.push(Track {
                artist,
                title,
                album,
            });
        }
    }
    Ok(tracks)
}

/// Reads the export and returns the distinct (artist, album) pairs in file
/// order, first occurrence kept. Entries missing either field are dropped.
pub fn read_albums(path: &Path) -> Result<Vec<AlbumEntry>, LibraryError> {
    let mut seen = HashSet::new();
    let mut albums = Vec::new();
    for entry in track_entries(path)? {
        let artist = string_field(&entry, "Artist");
        let album = string_field(&entry, "Album");
        if let (Some(artist), Some(album)) = (artist, album) {
            if seen.insert((artist.clone(), album.clone())) {
                albums.push(AlbumEntry { artist, album });
            }
        }
    }
    Ok(albums)
}

// Track entries keyed by internal id, in file order (plist dictionaries
// preserve key order). An export without a Tracks dictionary yields zero
// entries rather than an error.
fn track_entries(path: &Path) -> Result<Vec<plist::Dictionary>, LibraryError> {
    let root = Value::from_file(path)?;
    let root = root.as_dictionary().ok_or_else(|| {
        LibraryError::FormatError("library export root is not a dictionary".to_string())
    })?;

    let entries = match root.get("Tracks").and_then(Value::as_dictionary) {
        Some(tracks) => tracks
            .values()
            .filter_map(|v| v.as_dictionary().cloned())
            .collect(),
        None => Vec::new(),
    };
    Ok(entries)
}

fn string_field(entry: &plist::Dictionary, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_string).map(str::to_string)
}
