// AI Player implementation using alpha-beta search

use super::config::SearchConfig;
use super::evaluation::{Evaluator, MobilityEvaluator};
use super::search::{search, SearchResult};
use crate::agent::player::Player;
use crate::game_repr::{Board, Move};

/// AI Player that picks moves with a depth-limited alpha-beta search
pub struct AiPlayer<E: Evaluator = MobilityEvaluator> {
    config: SearchConfig,
    evaluator: E,
    /// Display name for this AI
    name: String,
    /// Outcome of the most recent search
    last_search: Option<SearchResult>,
}

impl AiPlayer<MobilityEvaluator> {
    /// AI with the default depth schedule and the mobility evaluator
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), MobilityEvaluator)
    }
}

impl Default for AiPlayer<MobilityEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> AiPlayer<E> {
    /// Create a new AI player
    ///
    /// # Arguments
    ///
    /// * `config` - Depth schedule / fixed depth and optional time limit
    /// * `evaluator` - Static evaluation used at the leaves
    pub fn with_config(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            name: "AI (alpha-beta)".to_string(),
            last_search: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The move chosen by the last search, if any
    pub fn last_found_move(&self) -> Option<Move> {
        self.last_search.as_ref().and_then(|r| r.best_move)
    }

    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl<E: Evaluator> Player for AiPlayer<E> {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        let result = search(board, &self.config, &self.evaluator);
        let best = result.best_move;
        self.last_search = Some(result);
        best
    }

    fn name(&self) -> &str {
        &self.name
    }
}
