use std::time::Duration;

use tokio::time::sleep;

use crate::{
    info, musicbrainz,
    types::{AlbumEntry, FoundEntry, Track},
    warning,
};

/// Mandatory pause after every lookup. MusicBrainz throttles anonymous
/// clients to one request per second; skipping this risks the caller
/// being blocked by the service.
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(1);

/// A record that can be matched against the remote service: a progress key
/// plus a single-lookup operation.
#[allow(async_fn_in_trait)]
pub trait MatchSource {
    /// Key shown in progress lines and lookup warnings.
    fn search_key(&self) -> String;

    /// Performs one remote lookup and returns the matched identifier,
    /// `Ok(None)` when the service has no result.
    async fn lookup(&self) -> Result<Option<String>, reqwest::Error>;
}

impl MatchSource for Track {
    fn search_key(&self) -> String {
        self.display_key()
    }

    async fn lookup(&self) -> Result<Option<String>, reqwest::Error> {
        musicbrainz::search_recording(&self.artist, &self.title, self.album.as_deref()).await
    }
}

impl MatchSource for AlbumEntry {
    fn search_key(&self) -> String {
        self.display_key()
    }

    async fn lookup(&self) -> Result<Option<String>, reqwest::Error> {
        musicbrainz::search_release_group(&self.artist, &self.album).await
    }
}

/// Matches an ordered batch of records, one remote lookup per record,
/// strictly sequentially and in input order.
///
/// Returns the partition (found, not-found): every input record lands in
/// exactly one of the two, found entries in match order and misses in input
/// order. A lookup error is reported as a warning and counts as a miss,
/// so the record stays eligible for a later recheck run. Each lookup is
/// followed by [`RATE_LIMIT_DELAY`].
pub async fn process_batch<R: MatchSource>(records: Vec<R>) -> (Vec<FoundEntry>, Vec<R>) {
    let total = records.len();
    let mut found: Vec<FoundEntry> = Vec::new();
    let mut misses: Vec<R> = Vec::new();

    for (idx, record) in records.into_iter().enumerate() {
        let outcome = match record.lookup().await {
            Ok(outcome) => outcome,
            Err(e) => {
                warning!("Lookup failed for '{}': {}", record.search_key(), e);
                None
            }
        };

        match outcome {
            Some(id) => {
                info!(
                    "[{idx}/{total}] {key} => MBID: {id}",
                    idx = idx + 1,
                    total = total,
                    key = record.search_key(),
                    id = id
                );
                found.push(FoundEntry { musicbrainz_id: id });
            }
            None => {
                info!(
                    "[{idx}/{total}] {key} => NOT FOUND",
                    idx = idx + 1,
                    total = total,
                    key = record.search_key()
                );
                misses.push(record);
            }
        }

        sleep(RATE_LIMIT_DELAY).await;
    }

    (found, misses)
}

/// Re-attempts previously unmatched records and merges the outcome with the
/// already-found entries.
///
/// New matches are appended after the prior found entries; records that
/// still miss are returned for the rewritten not-found file. The totals are
/// conserved: no record is duplicated or dropped, found never shrinks and
/// the miss set never grows.
pub async fn recheck_batch<R: MatchSource>(
    prior_found: Vec<FoundEntry>,
    misses: Vec<R>,
) -> (Vec<FoundEntry>, Vec<R>) {
    let (new_found, still_missing) = process_batch(misses).await;

    let mut found = prior_found;
    found.extend(new_found);
    (found, still_missing)
}
