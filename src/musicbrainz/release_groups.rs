use reqwest::{Client, header};

use crate::{config, types::ReleaseGroupSearchResponse, utils};

use super::REQUEST_TIMEOUT;

/// Builds the lucene query for a release-group lookup. The album name is
/// normalized for search; the artist is taken verbatim.
pub fn release_group_query(artist: &str, album: &str) -> String {
    format!(
        r#"releasegroup:"{album}" AND artist:"{artist}""#,
        album = utils::clean_name_for_search(album),
        artist = artist
    )
}

/// Looks up the MusicBrainz release-group MBID for one album.
///
/// Same contract as recording search: one request, first result wins,
/// `None` when nothing matches, errors propagated.
pub async fn search_release_group(
    artist: &str,
    album: &str,
) -> Result<Option<String>, reqwest::Error> {
    let query = release_group_query(artist, album);
    let api_url = format!(
        "{uri}/release-group/?query={query}&fmt=json&limit=1",
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

    let json = response.json::<ReleaseGroupSearchResponse>().await?;
    Ok(json.release_groups.into_iter().next().map(|rg| rg.id))
}
