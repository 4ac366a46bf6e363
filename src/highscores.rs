//! High score persistence
//!
//! A single integer in a plain-text file. Reads are fail-soft: a missing
//! or corrupt file yields 0 and never surfaces an error to the player.

use std::path::Path;

/// Default high score file name, next to the executable's working directory
pub const HIGHSCORE_FILE: &str = "parkour_highscore.txt";

/// Read the stored high score; any read or parse failure yields 0
pub fn load(path: &Path) -> u64 {
    match std::fs::read_to_string(path) {
        Ok(text) => match text.trim().parse() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("corrupt high score file {}, using 0", path.display());
                0
            }
        },
        Err(_) => 0,
    }
}

/// Write the high score; failures are logged, not propagated
pub fn save(path: &Path, score: u64) {
    if let Err(err) = std::fs::write(path, score.to_string()) {
        log::warn!("failed to write high score {}: {err}", path.display());
    }
}

/// Store `score` if it beats the current record. Returns whether it did.
pub fn record(path: &Path, score: u64) -> bool {
    let best = load(path);
    if score > best {
        save(path, score);
        log::info!("new high score: {score} (was {best})");
        true
    } else {
        false
    }
}
