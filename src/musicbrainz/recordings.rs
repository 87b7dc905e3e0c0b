use reqwest::{Client, header};

use crate::{config, types::RecordingSearchResponse, utils};

use super::REQUEST_TIMEOUT;

/// Builds the lucene query for a recording lookup: exact-phrase clauses for
/// title and artist, plus a release clause when an album is known. Title
/// and album are normalized for search; the artist is taken verbatim.
pub fn recording_query(artist: &str, title: &str, album: Option<&str>) -> String {
    let mut query = format!(
        r#"recording:"{title}" AND artist:"{artist}""#,
        title = utils::clean_name_for_search(title),
        artist = artist
    );
    if let Some(album) = album {
        query.push_str(&format!(
            r#" AND release:"{album}""#,
            album = utils::clean_name_for_search(album)
        ));
    }
    query
}

/// Looks up the MusicBrainz recording MBID for one track.
///
/// Issues a single search request and returns the first result's id, or
/// `None` when the service reports no recordings. Transport failures,
/// timeouts and error statuses are propagated for the caller to handle.
pub async fn search_recording(
    artist: &str,
    title: &str,
    album: Option<&str>,
) -> Result<Option<String>, reqwest::Error> {
    let query = recording_query(artist, title, album);
    let api_url = format!(
        "{uri}/recording/?query={query}&fmt=json&limit=1",
        uri = config::musicbrainz_apiurl(),
        query = urlencoding::encode(&query)
    );

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&api_url)
        .header(header::USER_AGENT, config::musicbrainz_useragent())
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<RecordingSearchResponse>().await?;
    Ok(json.recordings.into_iter().next().map(|r| r.id))
}
