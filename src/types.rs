use serde::{Deserialize, Serialize};

/// One track entry extracted from the library export. This is also the
/// shape persisted to the not-found file, so the original (unnormalized)
/// values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub artist: String,
    pub title: String,
    #[serde(default)]
    pub album: Option<String>,
}

/// One distinct (artist, album) pair extracted from the library export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumEntry {
    pub artist: String,
    pub album: String,
}

/// A matched identifier in the Lidarr import shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundEntry {
    #[serde(rename = "MusicBrainzId")]
    pub musicbrainz_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordingSearchResponse {
    #[serde(default)]
    pub recordings: Vec<RecordingMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordingMatch {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseGroupSearchResponse {
    #[serde(rename = "release-groups", default)]
    pub release_groups: Vec<ReleaseGroupMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseGroupMatch {
    pub id: String,
}

impl Track {
    /// Key used in progress lines and lookup warnings.
    pub fn display_key(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

impl AlbumEntry {
    pub fn display_key(&self) -> String {
        format!("{} - {}", self.artist, self.album)
    }
}
