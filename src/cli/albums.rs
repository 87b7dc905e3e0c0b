use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info, library, processor, store::MatchStore, success, types::AlbumEntry, warning,
};

pub async fn albums(source: Option<PathBuf>, recheck: bool, store: MatchStore) {
    if recheck {
        if source.is_some() {
            warning!("--source is ignored during a recheck run.");
        }
        recheck_albums(store).await;
        return;
    }

    let source = match source {
        Some(path) => path,
        None => {
            error!("A library export path is required unless --recheck is set.");
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Parsing library export...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let records = match library::read_albums(&source) {
        Ok(records) => records,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot read library export. Err: {:?}", e);
        }
    };
    pb.finish_and_clear();

    info!(
        "Extracted {} distinct albums from {}.",
        records.len(),
        source.display()
    );

    let (found, misses) = processor::process_batch(records).await;

    match store.persist(&found, &misses).await {
        Ok(_) => {
            success!(
                "Exported {} matched identifiers to {}.",
                found.len(),
                store.found_path().display()
            );
            success!(
                "Exported {} unmatched albums to {}.",
                misses.len(),
                store.not_found_path().display()
            );
        }
        Err(e) => {
            error!("Cannot write output files. Err: {:?}", e);
        }
    }
}

async fn recheck_albums(store: MatchStore) {
    let misses: Vec<AlbumEntry> = match store.load_not_found().await {
        Ok(misses) => misses,
        Err(e) => {
            error!("Cannot load not-found file for recheck. Err: {:?}", e);
        }
    };

    let prior_found = match store.load_found().await {
        Ok(found) => found,
        Err(e) => {
            error!("Cannot load found file for recheck. Err: {:?}", e);
        }
    };

    if misses.is_empty() {
        success!("Nothing to recheck.");
        return;
    }

    info!("Rechecking {} unmatched albums.", misses.len());

    let (found, still_missing) = processor::recheck_batch(prior_found, misses).await;

    match store.persist(&found, &still_missing).await {
        Ok(_) => {
            success!(
                "Found file now holds {} identifiers ({}).",
                found.len(),
                store.found_path().display()
            );
            success!(
                "{} albums remain unmatched ({}).",
                still_missing.len(),
                store.not_found_path().display()
            );
        }
        Err(e) => {
            error!("Cannot write output files. Err: {:?}", e);
        }
    }
}
