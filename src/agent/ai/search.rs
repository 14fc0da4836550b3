// Minimax search with alpha-beta pruning
//
// White maximizes, Black minimizes. The whole search runs on one scratch
// board: every node makes a candidate move, recurses, and undoes it before
// trying the next one, so the board is back in its original state whenever
// a call returns.
//
// Moves are pulled one at a time from a MoveCursor; the full move list of a
// node (often thousands of moves) is never built.

use std::time::Instant;

use super::config::SearchConfig;
use super::evaluation::{static_score, Evaluator, INFINITY};
use crate::game_repr::{Board, Color, Move, MoveCursor};

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score of the best move from White's point of view
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
    /// False if the time limit cut the search short
    pub completed: bool,
}

/// Per-search bookkeeping shared by every node
struct SearchContext<'e, E: ?Sized> {
    evaluator: &'e E,
    deadline: Option<(Instant, u64)>,
    nodes: u64,
    timed_out: bool,
}

impl<E: ?Sized> SearchContext<'_, E> {
    fn out_of_time(&mut self) -> bool {
        if let Some((start, limit_ms)) = self.deadline {
            if start.elapsed().as_millis() as u64 >= limit_ms {
                self.timed_out = true;
            }
        }
        self.timed_out
    }
}

/// Search `board` for the side to move and return the best move found.
///
/// The depth comes from `config` (by default a function of how many moves
/// have been played). `board` itself is not touched; the search works on a
/// copy. `best_move` is None only when the side to move has already lost.
pub fn search<E: Evaluator + ?Sized>(
    board: &Board,
    config: &SearchConfig,
    evaluator: &E,
) -> SearchResult {
    let start_time = Instant::now();
    let depth = config.depth_for(board.num_moves());

    let mut scratch = board.clone();
    let mut ctx = SearchContext {
        evaluator,
        deadline: config.time_limit_ms.map(|ms| (start_time, ms)),
        nodes: 0,
        timed_out: false,
    };

    let (score, best_move) = if scratch.winner().is_some() {
        (static_score(&scratch, evaluator), None)
    } else {
        let side = scratch.turn();
        find_move(&mut scratch, depth, side, -INFINITY, INFINITY, &mut ctx)
    };
    debug_assert!(scratch == *board, "search did not restore the board");

    let result = SearchResult {
        best_move,
        score,
        depth,
        nodes_searched: ctx.nodes,
        time_ms: start_time.elapsed().as_millis() as u64,
        completed: !ctx.timed_out,
    };
    if ctx.timed_out {
        log::debug!("search stopped by time limit after {} nodes", ctx.nodes);
    }
    print_search_info(&result);
    result
}

/// Score of `board` searched `depth` plies deep with `side` to move.
///
/// A leaf (depth 0 or a decided position) gets its static score.
fn alpha_beta<E: Evaluator + ?Sized>(
    board: &mut Board,
    depth: u8,
    side: Color,
    alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_, E>,
) -> i32 {
    if depth == 0 || board.winner().is_some() {
        return static_score(board, ctx.evaluator);
    }
    find_move(board, depth, side, alpha, beta, ctx).0
}

/// Try every move of `side` and return the best score together with the
/// move that reached it.
///
/// Among equally good moves the one enumerated last wins. Remaining
/// siblings are skipped as soon as `beta <= alpha`.
fn find_move<E: Evaluator + ?Sized>(
    board: &mut Board,
    depth: u8,
    side: Color,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_, E>,
) -> (i32, Option<Move>) {
    debug_assert_eq!(side, board.turn());
    let maximizing = side == Color::White;

    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;
    let mut moves = MoveCursor::new(side);

    while let Some(mv) = moves.next(board) {
        // always finish at least one candidate so the score is meaningful
        if best_move.is_some() && ctx.out_of_time() {
            break;
        }

        board.make_move(mv);
        ctx.nodes += 1;
        let response = alpha_beta(board, depth - 1, side.opposite(), alpha, beta, ctx);
        board.undo();

        // a cut-short subtree only counts when nothing else has been scored
        if ctx.timed_out && best_move.is_some() {
            break;
        }

        if maximizing {
            if response >= best_score {
                best_score = response;
                best_move = Some(mv);
                alpha = alpha.max(response);
                if beta <= alpha {
                    break;
                }
            }
        } else if response <= best_score {
            best_score = response;
            best_move = Some(mv);
            beta = beta.min(response);
            if beta <= alpha {
                break;
            }
        }
    }

    (best_score, best_move)
}

/// Log search information for a completed search
fn print_search_info(result: &SearchResult) {
    let nps = if result.time_ms > 0 {
        (result.nodes_searched as f64 / result.time_ms as f64 * 1000.0) as u64
    } else {
        result.nodes_searched
    };

    log::info!(
        "info depth {} score {} nodes {} time {} nps {} pv {}",
        result.depth,
        result.score,
        result.nodes_searched,
        result.time_ms,
        nps,
        result
            .best_move
            .map(|mv| mv.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
}
