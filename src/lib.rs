//! Apple Music → MusicBrainz matcher library
//!
//! This library backs the `lidarrify` binary, which converts an Apple Music
//! library export (`Library.xml`) into MusicBrainz identifiers that Lidarr
//! can import. Tracks and albums are matched one by one against the public
//! MusicBrainz search API; matched identifiers and unmatched source records
//! are written to two disjoint JSON files, and a recheck mode re-attempts
//! only the previously unmatched records.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `library` - Apple Music property-list export reader
//! - `musicbrainz` - MusicBrainz search API client
//! - `processor` - Sequential batch matching and recheck merging
//! - `store` - Found / not-found JSON persistence
//! - `types` - Data structures and type definitions
//! - `utils` - Search-name normalization helpers

pub mod cli;
pub mod config;
pub mod library;
pub mod musicbrainz;
pub mod processor;
pub mod store;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates, including the per-record match progress lines.
///
/// # Example
///
/// ```
/// info!("Extracted {} tracks.", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Exported {} identifiers", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as an unreadable library export or a missing not-found file on a
/// recheck run. Nothing is written to the output files after this fires.
///
/// # Example
///
/// ```
/// error!("Cannot load not-found file. Err: {:?}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator for
/// recoverable issues, most prominently a failed remote lookup, which
/// demotes the record to the not-found set instead of aborting the run.
///
/// # Example
///
/// ```
/// warning!("Lookup failed for '{}': {}", key, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
