//! # CLI Module
//!
//! User-facing command implementations for the matcher. One module per
//! subcommand: [`tracks`] matches individual tracks against MusicBrainz
//! recordings, [`albums`] matches distinct (artist, album) pairs against
//! release groups. Both follow the same two-phase shape:
//!
//! ```text
//! first run:    library export ──parse──▶ batch match ──▶ found / not-found files
//! recheck run:  not-found file ──load───▶ batch match ──▶ merged found / shrunk not-found
//! ```
//!
//! The CLI layer owns all user interaction: spinner feedback while the
//! export is parsed, per-record progress lines during matching, and the
//! fatal-error policy. Recoverable problems (a failed lookup) are handled
//! inside the processor; everything that must stop the run (unreadable
//! export, missing or malformed not-found file on recheck, unwritable
//! output) exits through the `error!` macro before any file is touched.
//!
//! Path handling is owned by [`crate::store::MatchStore`]; record
//! extraction by [`crate::library`]; matching order, progress lines and the
//! rate-limit delay by [`crate::processor`].

mod albums;
mod tracks;

pub use albums::albums;
pub use tracks::tracks;
