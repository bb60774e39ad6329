//! High score leaderboard
//!
//! Keeps the best 10 finished runs, best first. Runs with the same score are
//! ranked by how long they actually lasted, then by age. Saved through
//! `persistence`; whatever order a file holds, a loaded board is re-ranked.

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistenceError};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Whole seconds scored
    pub score: u64,
    /// Exact running time of the run
    pub survived_secs: f64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

impl HighScoreEntry {
    /// `Less` when `self` places ahead of `other`. Age is not considered.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.survived_secs.total_cmp(&self.survived_secs))
    }

    fn is_valid(&self) -> bool {
        self.score > 0 && self.survived_secs.is_finite() && self.survived_secs >= 0.0
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run would make the board
    pub fn qualifies(&self, score: u64, survived_secs: f64) -> bool {
        self.potential_rank(score, survived_secs).is_some()
    }

    /// Rank a run would achieve (1-indexed), None if it wouldn't make the board.
    /// A run tying an existing entry places behind it.
    pub fn potential_rank(&self, score: u64, survived_secs: f64) -> Option<usize> {
        let candidate = HighScoreEntry {
            score,
            survived_secs,
            timestamp: 0.0,
        };
        if !candidate.is_valid() {
            return None;
        }
        let index = self.insert_index(&candidate);
        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    /// Record a finished run. Returns the rank achieved.
    pub fn add_score(&mut self, score: u64, survived_secs: f64, timestamp: f64) -> Option<usize> {
        let rank = self.potential_rank(score, survived_secs)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score,
                survived_secs,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Entries at or ahead of `candidate` stay in front of it
    fn insert_index(&self, candidate: &HighScoreEntry) -> usize {
        self.entries
            .partition_point(|e| e.rank_cmp(candidate) != Ordering::Greater)
    }

    /// Drop unusable entries, re-rank and trim to the board size
    fn normalize(&mut self) {
        let before = self.entries.len();
        self.entries.retain(HighScoreEntry::is_valid);
        if self.entries.len() < before {
            log::warn!("Dropped {} invalid high score entries", before - self.entries.len());
        }
        self.entries.sort_by(|a, b| {
            a.rank_cmp(b)
                .then_with(|| a.timestamp.total_cmp(&b.timestamp))
        });
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Load a leaderboard file; a missing file is an empty board
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() && !persistence::envelope::backup_path(path).exists() {
            log::info!("No high scores at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let mut scores: HighScores = persistence::load_json(path)?;
        scores.normalize();
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save_json(path, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
