mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, TentativeMove};
pub use bot_controller::{DRAW_SCORE, LOSS_SCORE, Minimax, SearchResult, WIN_SCORE, best_move};
pub use game_state::{GameError, MoveResult, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, BoardError, CELL_COUNT, Cell, FirstPlayerMode, Matchup, Outcome, PlayerKind, Side,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
