//! Experience threshold table
//!
//! Built from a comma-separated list such as `"0,100,250,500"`. Entry `i`
//! is the cumulative experience needed to leave level `i`. The leading
//! entry belongs to level 0 and is never read, so `k` entries give `k - 1`
//! playable levels; the last entry is the experience cap at max level.

use plague_core::parse_int;
use serde::{Deserialize, Serialize};

/// Cumulative experience per level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTable {
    entries: Vec<i32>,
}

impl ThresholdTable {
    /// Parse a statistics list. Fragments are trimmed; non-numeric ones
    /// read as 0. An empty list gives an empty table.
    pub fn parse(list: &str) -> Self {
        if list.trim().is_empty() {
            return Self::default();
        }

        let entries = list
            .split(',')
            .map(|fragment| {
                let value = parse_int(fragment.trim());
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
            })
            .collect();
        Self { entries }
    }

    /// Highest reachable level (0 when leveling is off)
    pub fn max_level(&self) -> i32 {
        self.entries.len().saturating_sub(1) as i32
    }

    /// No playable levels
    pub fn is_empty(&self) -> bool {
        self.max_level() == 0
    }

    /// Experience needed to leave `level`; at max level, the experience cap
    pub fn threshold(&self, level: i32) -> Option<i32> {
        if level < 1 || level > self.max_level() {
            return None;
        }
        self.entries.get(level as usize).copied()
    }

    /// Experience cap at max level
    pub fn top(&self) -> Option<i32> {
        self.threshold(self.max_level())
    }
}
