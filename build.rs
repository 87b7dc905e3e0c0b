//! Build script for the Apple Music → MusicBrainz matcher CLI.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the user's local data directory so that a ready-to-edit example sits next
//! to the `.env` file the application actually loads.
//!
//! # File Operations
//!
//! ## Source Location
//! The script looks for `.env.example` in the crate root directory (where
//! Cargo.toml resides).
//!
//! ## Destination Location
//! Templates are copied to the platform-specific local data directory:
//! - Linux: `~/.local/share/lidarrify/.env.example`
//! - macOS: `~/Library/Application Support/lidarrify/.env.example`
//! - Windows: `%LOCALAPPDATA%/lidarrify/.env.example`
//!
//! # Error Handling Strategy
//!
//! - **Missing template**: issues a cargo warning but continues the build
//! - **Directory creation / copy failures**: returned as errors (critical)

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("lidarrify");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
