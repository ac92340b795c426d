//! Best score per difficulty, kept in memory for the lifetime of the process.
//!
//! The table starts from fixed placeholder values and is raised by finished
//! sessions. Nothing is written to disk.

use std::collections::HashMap;

use crate::core::constants::PLACEHOLDER_BEST_SCORES;
use crate::snake::types::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScores {
    best: HashMap<Difficulty, u32>,
}

impl Default for BestScores {
    fn default() -> Self {
        let best = PLACEHOLDER_BEST_SCORES
            .iter()
            .filter_map(|&(label, score)| Difficulty::parse(label).map(|d| (d, score)))
            .collect();
        Self { best }
    }
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.best.get(&difficulty).copied().unwrap_or(0)
    }

    /// Record a finished score. Returns true if it beat the previous best.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let entry = self.best.entry(difficulty).or_insert(0);
        if score > *entry {
            log::info!("New best for {}: {} (was {})", difficulty, score, *entry);
            *entry = score;
            true
        } else {
            false
        }
    }

    /// Rows in menu order.
    pub fn rows(&self) -> Vec<(Difficulty, u32)> {
        Difficulty::ALL.iter().map(|&d| (d, self.get(d))).collect()
    }
}
