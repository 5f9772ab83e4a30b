//! Run statistics and the high-score board
//!
//! Persisted across runs. Only the simulation step mutates the per-run
//! counters, through its defined scoring and life-loss events; restart
//! resets the run while the board survives.

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_LIVES;
use crate::persistence::Storage;

/// Maximum number of historical high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Score, lives, wave and the historical board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub score: u64,
    pub lives: u8,
    pub wave: u32,
    /// Running best, updated live as the score climbs
    pub high_score: u64,
    /// Finished-run scores, sorted descending
    pub high_scores: Vec<u64>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            wave: 1,
            high_score: 0,
            high_scores: Vec::new(),
        }
    }
}

impl Stats {
    /// Storage key for the persisted blob
    const STORAGE_KEY: &'static str = "nova_raid_stats";

    /// Reset the per-run counters; the board and running best survive
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.wave = 1;
    }

    /// Whether a score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.high_scores.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.high_scores.last().is_none_or(|&lowest| score > lowest)
    }

    /// Record the finished run's score into the board (sorted descending,
    /// trimmed to the top ten)
    pub fn record_run(&mut self) {
        let score = self.score;
        if !self.qualifies(score) {
            return;
        }
        let pos = self
            .high_scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.high_scores.len());
        self.high_scores.insert(pos, score);
        self.high_scores.truncate(MAX_HIGH_SCORES);
        self.high_score = self.high_score.max(score);
    }

    pub fn top_score(&self) -> Option<u64> {
        self.high_scores.first().copied()
    }

    /// Load stats from storage, falling back to defaults on a missing or
    /// unreadable blob
    pub fn load<S: Storage>(storage: &S) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Stats>(&json) {
                Ok(stats) => {
                    log::info!("loaded stats ({} high scores)", stats.high_scores.len());
                    return stats;
                }
                Err(err) => log::warn!("stats blob unreadable ({err}), starting fresh"),
            }
        }
        log::info!("no stats found, starting fresh");
        Self::default()
    }

    /// Save stats to storage
    pub fn save<S: Storage>(&self, storage: &S) {
        match serde_json::to_string(self) {
            Ok(json) => storage.set(Self::STORAGE_KEY, &json),
            Err(err) => log::warn!("failed to serialize stats: {err}"),
        }
    }
}
