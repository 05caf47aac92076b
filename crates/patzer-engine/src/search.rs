//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes the material score and Black minimizes it. The search
//! mutates a single [`Position`] in place: every explored move is applied
//! before recursing and undone on every exit path, including pruning
//! cutoffs. Pruning only skips siblings that cannot change the result;
//! the backed-up value is identical to unpruned minimax. There is no move
//! ordering, transposition table, or iterative deepening, and a node with
//! no pseudo-legal moves falls back to the static evaluation without
//! distinguishing checkmate-like from stalemate-like positions.

use crate::movegen::generate_moves;
use crate::{evaluate, Position};
use patzer_core::{Color, Move};
use thiserror::Error;

/// Errors that can occur when searching.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no pseudo-legal moves at the root. Callers
    /// must treat this as the end of the game, not as a move.
    #[error("{0} has no pseudo-legal moves")]
    NoMoveAvailable(Color),
}

/// The outcome of a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found for the side to move.
    pub best_move: Move,
    /// The move's backed-up material score (positive favors White).
    pub score: i32,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Searches `depth` plies ahead and returns the best move for the side
/// to move.
///
/// Each root move is explored with a fresh full window, and the first
/// move encountered wins ties. The position is returned exactly as it
/// was given: the search undoes everything it applies. A `depth` of 0 is
/// treated as 1 - the root's children are still evaluated.
///
/// Given an identical position and depth, the result is deterministic.
pub fn find_best_move(position: &mut Position, depth: u8) -> Result<SearchResult, SearchError> {
    let side = position.side_to_move();
    let moves = generate_moves(position, side);

    if moves.is_empty() {
        return Err(SearchError::NoMoveAvailable(side));
    }

    let mut nodes = 0u64;
    let mut best_move = moves[0];
    let mut best_score = match side {
        Color::White => i32::MIN,
        Color::Black => i32::MAX,
    };

    for &m in &moves {
        let score = position.with_move(m, |position| {
            minimax(
                position,
                depth.saturating_sub(1),
                i32::MIN,
                i32::MAX,
                &mut nodes,
            )
        });

        let improved = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improved {
            best_score = score;
            best_move = m;
        }
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        nodes,
    })
}

/// Recursive minimax with alpha-beta bounds.
///
/// `alpha` is the best value the maximizer can already guarantee and
/// `beta` the minimizer's counterpart; once `beta <= alpha` the
/// remaining siblings at this node cannot matter and are skipped.
fn minimax(position: &mut Position, depth: u8, mut alpha: i32, mut beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(position);
    }

    let side = position.side_to_move();
    let moves = generate_moves(position, side);

    // No moves left for this side: fall back to the static evaluation,
    // exactly as at depth 0.
    if moves.is_empty() {
        return evaluate(position);
    }

    match side {
        Color::White => {
            let mut max_eval = i32::MIN;
            for &m in &moves {
                let eval = position
                    .with_move(m, |position| minimax(position, depth - 1, alpha, beta, nodes));
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        }
        Color::Black => {
            let mut min_eval = i32::MAX;
            for &m in &moves {
                let eval = position
                    .with_move(m, |position| minimax(position, depth - 1, alpha, beta, nodes));
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patzer_core::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    /// Exhaustive minimax without pruning, as a reference for value
    /// equivalence.
    fn plain_minimax(position: &mut Position, depth: u8) -> i32 {
        if depth == 0 {
            return evaluate(position);
        }
        let side = position.side_to_move();
        let moves = generate_moves(position, side);
        if moves.is_empty() {
            return evaluate(position);
        }

        let mut best = match side {
            Color::White => i32::MIN,
            Color::Black => i32::MAX,
        };
        for &m in &moves {
            let value = position.with_move(m, |p| plain_minimax(p, depth - 1));
            best = match side {
                Color::White => best.max(value),
                Color::Black => best.min(value),
            };
        }
        best
    }

    #[test]
    fn depth_one_from_start_is_an_opening_move() {
        let mut position = Position::startpos();
        let result = find_best_move(&mut position, 1).unwrap();

        // One of the 20 standard opening moves, none of which captures.
        let opening_moves = generate_moves(&position, Color::White);
        assert!(opening_moves.as_slice().contains(&result.best_move));
        assert_eq!(result.score, 0);
        // Every root child was evaluated exactly once.
        assert_eq!(result.nodes, 20);
    }

    #[test]
    fn search_leaves_position_untouched() {
        let mut position = Position::startpos();
        let before = position.clone();
        find_best_move(&mut position, 3).unwrap();
        assert_eq!(position, before);
    }

    #[test]
    fn search_is_deterministic() {
        let mut position = Position::startpos();
        let first = find_best_move(&mut position, 2).unwrap();
        let second = find_best_move(&mut position, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_move_available_for_bare_side() {
        // Black is to move but has no pieces at all.
        let mut position = Position::from_layout("8/8/8/8/8/8/8/4K3 b").unwrap();
        let before = position.clone();
        assert_eq!(
            find_best_move(&mut position, 3),
            Err(SearchError::NoMoveAvailable(Color::Black))
        );
        assert_eq!(position, before);
    }

    #[test]
    fn depth_one_takes_the_hanging_queen() {
        // White rook on a1, black queen on a8 with an open file between.
        let mut position = Position::from_layout("q7/8/8/8/8/8/8/R3K3 w").unwrap();
        let result = find_best_move(&mut position, 1).unwrap();
        assert_eq!(result.best_move.from, sq("a1"));
        assert_eq!(result.best_move.to, sq("a8"));
    }

    #[test]
    fn deeper_search_declines_a_defended_pawn() {
        // The black pawn on d5 is defended by the pawn on e6. A depth-1
        // search grabs it; at depth 2 the recapture is seen and the rook
        // stays out of trouble.
        let layout = "k7/8/4p3/3p4/8/3R4/8/7K w";

        let mut position = Position::from_layout(layout).unwrap();
        let shallow = find_best_move(&mut position, 1).unwrap();
        assert_eq!(shallow.best_move.to, sq("d5"));
        assert_eq!(shallow.score, 400);

        let deep = find_best_move(&mut position, 2).unwrap();
        assert_ne!(deep.best_move.to, sq("d5"));
        assert_eq!(deep.score, 300);
    }

    #[test]
    fn pruned_value_matches_unpruned_minimax() {
        let mut position = Position::startpos();
        let result = find_best_move(&mut position, 2).unwrap();
        assert_eq!(result.score, plain_minimax(&mut position, 2));

        let mut position = Position::from_layout("k7/8/4p3/3p4/8/3R4/8/7K w").unwrap();
        let result = find_best_move(&mut position, 3).unwrap();
        assert_eq!(result.score, plain_minimax(&mut position, 3));
    }

    #[test]
    fn pruning_never_expands_more_than_full_minimax() {
        fn count_full_tree(position: &mut Position, depth: u8, nodes: &mut u64) {
            *nodes += 1;
            if depth == 0 {
                return;
            }
            let side = position.side_to_move();
            for &m in &generate_moves(position, side) {
                position.with_move(m, |p| count_full_tree(p, depth - 1, nodes));
            }
        }

        let mut position = Position::startpos();
        let result = find_best_move(&mut position, 3).unwrap();

        let mut full = 0;
        for &m in &generate_moves(&position, position.side_to_move()) {
            position.with_move(m, |p| count_full_tree(p, 2, &mut full));
        }
        assert!(result.nodes <= full);
    }

    #[test]
    fn depth_zero_still_produces_a_move() {
        let mut position = Position::startpos();
        let result = find_best_move(&mut position, 0).unwrap();
        let opening_moves = generate_moves(&position, Color::White);
        assert!(opening_moves.as_slice().contains(&result.best_move));
    }
}
