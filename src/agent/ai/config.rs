//! Search configuration.
//!
//! The depth schedule and time limit are tuning knobs, not rules: they trade
//! search quality for speed and can be changed freely.

/// Maps the number of moves played so far to a search depth.
///
/// Early on the board is wide open and every position has thousands of
/// moves, so only a shallow search is affordable. As spears fill the board
/// the branching factor shrinks and deeper searches become tractable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthSchedule {
    /// Move counts at which the depth grows by one, ascending
    pub thresholds: [usize; 4],
    /// Depth used before the first threshold
    pub base_depth: u8,
}

impl Default for DepthSchedule {
    fn default() -> Self {
        Self {
            thresholds: [50, 100, 150, 200],
            base_depth: 1,
        }
    }
}

impl DepthSchedule {
    /// Search depth for a position in which `num_moves` moves have been made
    pub fn max_depth(&self, num_moves: usize) -> u8 {
        let passed = self.thresholds.iter().filter(|&&t| num_moves >= t).count();
        self.base_depth + passed as u8
    }
}

/// Configuration for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub schedule: DepthSchedule,
    /// Search exactly this many plies, ignoring the schedule
    pub fixed_depth: Option<u8>,
    /// Stop expanding new candidates once this many milliseconds have passed
    pub time_limit_ms: Option<u64>,
}

impl SearchConfig {
    pub fn fixed_depth(depth: u8) -> Self {
        Self {
            fixed_depth: Some(depth),
            ..Self::default()
        }
    }

    pub fn with_time_limit(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = Some(time_limit_ms);
        self
    }

    /// Depth to search for a position with `num_moves` moves played.
    /// Never less than one.
    pub fn depth_for(&self, num_moves: usize) -> u8 {
        self.fixed_depth
            .unwrap_or_else(|| self.schedule.max_depth(num_moves))
            .max(1)
    }
}
