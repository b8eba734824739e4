use super::board::Board;
use super::types::{Outcome, Side};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

const MAX_SENTINEL: i32 = LOSS_SCORE - 1;
const MIN_SENTINEL: i32 = WIN_SCORE + 1;

/// Minimax value of a position together with the move that reaches it.
///
/// `score` is always relative to the side the top-level search maximizes
/// for. `best_move` is `None` only for terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Full-depth minimax without pruning. Candidates are tried in ascending
/// position order and ties keep the lowest position.
#[derive(Debug)]
pub struct Minimax {
    maximizing_side: Side,
    nodes_visited: u64,
}

impl Minimax {
    pub fn new(maximizing_side: Side) -> Self {
        Self {
            maximizing_side,
            nodes_visited: 0,
        }
    }

    pub fn maximizing_side(&self) -> Side {
        self.maximizing_side
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Searches a private copy of `board`, so the caller's board is never
    /// touched.
    pub fn search(&mut self, board: &Board, maximizing: bool) -> SearchResult {
        let mut scratch = *board;
        self.minimax(&mut scratch, maximizing)
    }

    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> SearchResult {
        self.nodes_visited += 1;

        match board.outcome() {
            Outcome::Draw => return SearchResult::terminal(DRAW_SCORE),
            Outcome::Won(winner) if winner == self.maximizing_side => {
                return SearchResult::terminal(WIN_SCORE);
            }
            Outcome::Won(_) => return SearchResult::terminal(LOSS_SCORE),
            Outcome::InProgress => {}
        }

        let mover = if maximizing {
            self.maximizing_side
        } else {
            self.maximizing_side.opponent()
        };

        let mut best = SearchResult {
            score: if maximizing { MAX_SENTINEL } else { MIN_SENTINEL },
            best_move: None,
        };

        for position in board.available_moves() {
            let Some(mut trial) = board.tentative_move(position, mover) else {
                continue;
            };
            let score = self.minimax(&mut trial, !maximizing).score;
            drop(trial);

            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult {
                    score,
                    best_move: Some(position),
                };
            }
        }

        // A board with no empty cell is a draw or a win, handled above.
        debug_assert!(best.best_move.is_some(), "non-terminal board without moves");
        best
    }
}

/// Picks the optimal move for whoever moves next on `board`.
///
/// `maximizing` selects which side that is: `maximizing_side` itself when
/// true, its opponent when false. The board is left unchanged.
pub fn best_move(board: &Board, maximizing_side: Side, maximizing: bool) -> SearchResult {
    Minimax::new(maximizing_side).search(board, maximizing)
}
