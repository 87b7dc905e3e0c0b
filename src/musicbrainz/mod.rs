//! # MusicBrainz Module
//!
//! Client for the MusicBrainz search web service. One submodule per entity
//! kind: `recordings` resolves individual tracks, `release_groups` resolves
//! albums. Both issue a single anonymous GET per lookup with an identifying
//! User-Agent, a fixed request timeout and `limit=1`, and return the first
//! result's identifier, or `None` when the service finds nothing.
//!
//! Lookup failures are returned as `reqwest::Error` and left to the caller;
//! the batch processor demotes them to not-found instead of aborting, so a
//! flaky network costs a recheck later rather than the whole run.
//!
//! Query strings are built by plain functions ([`recording_query`],
//! [`release_group_query`]) that quote each clause for exact-phrase
//! matching and normalize title/album text first; they are separate from
//! the HTTP plumbing so the query shape is testable offline.

use std::time::Duration;

mod recordings;
mod release_groups;

pub use recordings::recording_query;
pub use recordings::search_recording;
pub use release_groups::release_group_query;
pub use release_groups::search_release_group;

/// Fixed bound for one lookup request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
