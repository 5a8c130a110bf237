//! Depth-bounded minimax over pseudo-legal moves.
//!
//! Leaves are scored by material from the point of view of the side to
//! play at the root. Since move generation ignores check, the search can
//! walk into lines where a king is taken; kings are worth nothing, so such
//! lines are not preferred or avoided.
//!
//! Root moves are spread over worker threads. Each worker builds its own
//! positions from the shared root; only the running best is shared.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use parking_lot::Mutex;

use super::{Color, Move, MoveError, Position, SearchError};

/// Outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, `None` when the side to play has no moves
    pub best_move: Option<Move>,
    /// Material score after the best line, from the root side's view
    pub score: i32,
    /// Positions visited
    pub nodes: u64,
}

/// Search `depth` plies using every available core.
///
/// # Errors
///
/// [`SearchError::InvalidDepth`] if `depth` is 0.
pub fn best_move(position: &Position, depth: u32) -> Result<SearchResult, SearchError> {
    let threads = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    best_move_with_threads(position, depth, threads)
}

/// Search `depth` plies with at most `threads` workers.
///
/// The result does not depend on the thread count: among equally scored
/// root moves the one generated first wins.
pub fn best_move_with_threads(
    position: &Position,
    depth: u32,
    threads: usize,
) -> Result<SearchResult, SearchError> {
    if depth < 1 {
        return Err(SearchError::InvalidDepth { depth });
    }

    let root = position.side_to_play();
    let moves = position.legal_moves();

    #[cfg(feature = "logging")]
    log::debug!(
        "search depth {} for {} over {} root moves",
        depth,
        root,
        moves.len()
    );

    if moves.is_empty() {
        return Ok(SearchResult {
            best_move: None,
            score: leaf_score(position, root),
            nodes: 1,
        });
    }

    let workers = threads.clamp(1, moves.len());
    let best: Mutex<Option<(usize, i32)>> = Mutex::new(None);
    let failure: Mutex<Option<MoveError>> = Mutex::new(None);
    let nodes = AtomicU64::new(1);

    thread::scope(|scope| {
        for worker in 0..workers {
            let (moves, best, failure, nodes) = (&moves, &best, &failure, &nodes);
            scope.spawn(move || {
                let mut local_nodes = 0;
                for (index, mv) in moves.iter().enumerate().skip(worker).step_by(workers) {
                    let outcome = position
                        .apply(*mv)
                        .and_then(|child| minimax(&child, depth - 1, root, &mut local_nodes));
                    match outcome {
                        Ok(score) => {
                            let mut guard = best.lock();
                            let better = match *guard {
                                None => true,
                                Some((best_index, best_score)) => {
                                    score > best_score
                                        || (score == best_score && index < best_index)
                                }
                            };
                            if better {
                                *guard = Some((index, score));
                            }
                        }
                        Err(err) => {
                            failure.lock().get_or_insert(err);
                        }
                    }
                }
                nodes.fetch_add(local_nodes, Ordering::Relaxed);
            });
        }
    });

    if let Some(err) = failure.into_inner() {
        return Err(err.into());
    }

    let nodes = nodes.into_inner();
    let result = match best.into_inner() {
        Some((index, score)) => SearchResult {
            best_move: moves.get(index).copied(),
            score,
            nodes,
        },
        None => SearchResult {
            best_move: None,
            score: leaf_score(position, root),
            nodes,
        },
    };

    #[cfg(feature = "logging")]
    log::debug!(
        "search done: best {:?} score {} nodes {}",
        result.best_move.map(|mv| mv.to_string()),
        result.score,
        result.nodes
    );

    Ok(result)
}

fn leaf_score(position: &Position, root: Color) -> i32 {
    position.material_score() * root.sign()
}

fn minimax(
    position: &Position,
    depth: u32,
    root: Color,
    nodes: &mut u64,
) -> Result<i32, MoveError> {
    *nodes += 1;
    if depth == 0 {
        return Ok(leaf_score(position, root));
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        return Ok(leaf_score(position, root));
    }

    let maximizing = position.side_to_play() == root;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let score = minimax(&position.apply(mv)?, depth - 1, root, nodes)?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    Ok(best)
}
