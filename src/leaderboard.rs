//! Leaderboard module - local top-10 score list
//!
//! Entries live in a flat JSON array at the platform data directory, sorted
//! descending by score and capped at 10. Loading fails open: a missing or
//! malformed file is an empty list. Saving is atomic (write to a temp file,
//! then rename) and best-effort: when storage is unavailable the in-memory
//! list stays correct and the session is simply non-persistent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::types::LEADERBOARD_CAP;

/// Name used when the player submits a blank name.
pub const DEFAULT_NAME: &str = "Anonymous";

/// One ranked score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
    pub recorded_at: DateTime<Utc>,
}

/// Ordered top-10 list with JSON persistence.
#[derive(Debug)]
pub struct Leaderboard {
    path: Option<PathBuf>,
    entries: Vec<RankingEntry>,
}

impl Leaderboard {
    /// Open the leaderboard at the platform data directory.
    ///
    /// Never fails: if the data directory cannot be resolved the board runs
    /// in memory only, and an unreadable or corrupt file loads as empty.
    pub fn open_default() -> Self {
        match default_path() {
            Ok(path) => Self::open(path),
            Err(_) => Self {
                path: None,
                entries: Vec::new(),
            },
        }
    }

    /// Open a leaderboard backed by the given file.
    pub fn open(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self {
            path: Some(path),
            entries,
        }
    }

    /// An in-memory board that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Vec::new(),
        }
    }

    /// Ranked entries, highest score first.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Record a score under the given name and persist the list.
    ///
    /// A blank name becomes [`DEFAULT_NAME`]. The entry is appended, the
    /// list re-sorted descending by score and truncated to 10. Returns the
    /// entry's rank (0-based) if it made the cut.
    pub fn record(&mut self, name: &str, score: u32) -> Option<usize> {
        let name = name.trim();
        let name = if name.is_empty() { DEFAULT_NAME } else { name };

        let entry = RankingEntry {
            name: name.to_string(),
            score,
            recorded_at: Utc::now(),
        };

        self.entries.push(entry);
        // Stable sort keeps earlier submissions ahead on ties.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAP);

        // Storage failures leave the session non-persistent, not broken.
        if let Some(path) = &self.path {
            let _ = save_atomic(path, &self.entries);
        }

        self.entries
            .iter()
            .position(|e| e.score == score && e.name == name)
    }
}

fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "blockfall", "Blockfall")
        .context("could not resolve project directories")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok();
    Ok(dir.join("rankings.json"))
}

fn load_entries(path: &Path) -> Vec<RankingEntry> {
    if let Ok(s) = fs::read_to_string(path) {
        if let Ok(mut entries) = serde_json::from_str::<Vec<RankingEntry>>(&s) {
            entries.sort_by(|a, b| b.score.cmp(&a.score));
            entries.truncate(LEADERBOARD_CAP);
            return entries;
        }
    }
    Vec::new()
}

fn save_atomic(path: &Path, entries: &[RankingEntry]) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(entries)?;
    fs::write(&tmp, data)?;
    atomic_rename(&tmp, path)?;
    Ok(())
}

fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    // Best-effort atomic replace on same filesystem.
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)?;
    Ok(())
}
