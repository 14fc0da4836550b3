// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the Amazons AI: a depth-limited minimax search with
// alpha-beta pruning over lazily generated moves, a depth schedule driven by
// the number of moves played, and a mobility evaluator at the leaves.
//
// Key features:
// - Deterministic (same position and config always gives same move)
// - Make/undo on a single scratch board, no per-node copies
// - Optional time limit

mod ai_player;
mod config;
mod evaluation;
mod search;

#[cfg(test)]
mod tests;

pub use ai_player::AiPlayer;
pub use config::{DepthSchedule, SearchConfig};
pub use evaluation::{mobility, static_score, Evaluator, MobilityEvaluator, INFINITY, WINNING_VALUE};
pub use search::{search, SearchResult};
