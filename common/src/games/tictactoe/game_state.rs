use std::fmt;

use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::Minimax;
use super::types::{BoardError, FirstPlayerMode, Matchup, Outcome, PlayerKind, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The target cell was already taken; nothing changed.
    Rejected,
    Applied {
        position: usize,
        side: Side,
        outcome: Outcome,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    GameOver,
    NotHumanTurn,
    NotEngineTurn,
    Board(BoardError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotHumanTurn => write!(f, "It is not a human player's turn"),
            GameError::NotEngineTurn => write!(f, "It is not the engine's turn"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        GameError::Board(e)
    }
}

/// One round of play: the board, whose turn it is, and who controls each side.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    matchup: Matchup,
    first_player_mode: FirstPlayerMode,
    first_kind: PlayerKind,
    second_kind: PlayerKind,
    current_side: Side,
    status: Outcome,
    last_move: Option<usize>,
    engine_score: Option<i32>,
}

impl TicTacToeGameState {
    pub fn new(matchup: Matchup, first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let (first_kind, second_kind) = assign_kinds(matchup, first_player_mode, rng);

        log!(
            "New round: Side 1 is {:?}, Side 2 is {:?}",
            first_kind,
            second_kind
        );

        Self {
            board: Board::new(),
            matchup,
            first_player_mode,
            first_kind,
            second_kind,
            current_side: Side::First,
            status: Outcome::InProgress,
            last_move: None,
            engine_score: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn current_kind(&self) -> PlayerKind {
        self.kind_of(self.current_side)
    }

    pub fn kind_of(&self, side: Side) -> PlayerKind {
        match side {
            Side::First => self.first_kind,
            Side::Second => self.second_kind,
        }
    }

    pub fn matchup(&self) -> Matchup {
        self.matchup
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Score of the engine's most recent search, from the engine side's view.
    pub fn engine_score(&self) -> Option<i32> {
        self.engine_score
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn place_mark(&mut self, position: usize) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_kind() != PlayerKind::Human {
            return Err(GameError::NotHumanTurn);
        }
        self.apply(position)
    }

    pub fn play_engine_turn(&mut self) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_kind() != PlayerKind::Engine {
            return Err(GameError::NotEngineTurn);
        }

        let mut engine = Minimax::new(self.current_side);
        let result = engine.search(&self.board, true);
        self.engine_score = Some(result.score);

        log!(
            "Engine ({}) searched {} positions, score {}, move {:?}",
            engine.maximizing_side(),
            engine.nodes_visited(),
            result.score,
            result.best_move
        );

        match result.best_move {
            Some(position) => self.apply(position),
            None => Err(GameError::GameOver),
        }
    }

    /// Starts a new round with the same matchup and first player mode.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.matchup, self.first_player_mode, rng);
    }

    fn apply(&mut self, position: usize) -> Result<MoveResult, GameError> {
        let side = self.current_side;
        if !self.board.make_move(position, side)? {
            return Ok(MoveResult::Rejected);
        }

        self.last_move = Some(position);
        self.status = self.board.outcome();
        log!("{} ({:?}) took position {}", side, self.kind_of(side), position);

        if self.status.is_terminal() {
            log!("Round over: {:?}", self.status);
        } else {
            self.current_side = side.opponent();
        }

        Ok(MoveResult::Applied {
            position,
            side,
            outcome: self.status,
        })
    }
}

fn assign_kinds(
    matchup: Matchup,
    first_player_mode: FirstPlayerMode,
    rng: &mut SessionRng,
) -> (PlayerKind, PlayerKind) {
    match matchup {
        Matchup::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
        Matchup::EngineVsEngine => (PlayerKind::Engine, PlayerKind::Engine),
        Matchup::HumanVsEngine => {
            let human_first = match first_player_mode {
                FirstPlayerMode::Human => true,
                FirstPlayerMode::Engine => false,
                FirstPlayerMode::Random => rng.random_bool(),
            };
            if human_first {
                (PlayerKind::Human, PlayerKind::Engine)
            } else {
                (PlayerKind::Engine, PlayerKind::Human)
            }
        }
    }
}
