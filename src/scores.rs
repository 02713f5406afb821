//! Match history log
//!
//! One record per terminated session, appended in order. The file is only
//! opened when a session ends or the results screen wants to read it.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// A single finished match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub left_name: String,
    pub left_score: u32,
    /// Opponent name, or a label like "Computer"
    pub right_name: String,
    pub right_score: u32,
    /// Unix timestamp (ms) when the session ended
    pub played_at_ms: u64,
}

impl MatchRecord {
    /// One-line rendering for the results screen
    pub fn summary(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.left_name, self.left_score, self.right_score, self.right_name
        )
    }
}

/// Match history, newest record last
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreLog {
    pub entries: Vec<MatchRecord>,
}

impl ScoreLog {
    /// Load the history from `path`; an absent or unreadable file is an
    /// empty history, not an error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<ScoreLog>(&json) {
                Ok(log) => log,
                Err(err) => {
                    log::warn!("Score log {} is corrupt ({err}); starting empty", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one record to the log at `path`: load, push, save. Called
    /// once per terminating session.
    pub fn append(path: &Path, record: MatchRecord) -> io::Result<()> {
        let mut log = Self::load(path);
        log.entries.push(record);
        log.save(path)?;
        log::info!("Recorded match result ({} entries)", log.entries.len());
        Ok(())
    }
}

/// Milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Coarse relative age for the results screen
pub fn format_age(now_ms: u64, then_ms: u64) -> String {
    let secs = now_ms.saturating_sub(then_ms) / 1000;
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if days >= 1 {
        if days == 1 { "yesterday".to_owned() } else { format!("{days} days ago") }
    } else if hours >= 1 {
        if hours == 1 { "1 hour ago".to_owned() } else { format!("{hours} hours ago") }
    } else if mins >= 1 {
        if mins == 1 { "1 min ago".to_owned() } else { format!("{mins} mins ago") }
    } else {
        "just now".to_owned()
    }
}
