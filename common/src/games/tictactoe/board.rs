use std::ops::{Deref, DerefMut};

use super::types::{BoardError, CELL_COUNT, Cell, Outcome, Side};
use super::win_detector::{check_win, check_win_with_line};

/// 3x3 grid addressed by row-major positions 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(position)
            .copied()
            .ok_or(BoardError::InvalidPosition { position })
    }

    /// Places `side` at `position`. An occupied cell is left untouched and
    /// reported as `Ok(false)`.
    pub fn make_move(&mut self, position: usize, side: Side) -> Result<bool, BoardError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(BoardError::InvalidPosition { position })?;

        if !cell.is_empty() {
            return Ok(false);
        }

        *cell = Cell::Occupied(side);
        Ok(true)
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(side) = check_win(&self.cells) {
            return Outcome::Won(side);
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        check_win_with_line(&self.cells).map(|(_, line)| line)
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Occupies an empty cell until the returned guard is dropped.
    ///
    /// Returns `None` when the cell is taken or out of range.
    pub fn tentative_move(&mut self, position: usize, side: Side) -> Option<TentativeMove<'_>> {
        match self.make_move(position, side) {
            Ok(true) => Some(TentativeMove {
                board: self,
                position,
            }),
            _ => None,
        }
    }
}

impl TryFrom<[u8; CELL_COUNT]> for Board {
    type Error = BoardError;

    fn try_from(digits: [u8; CELL_COUNT]) -> Result<Self, Self::Error> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, digit) in cells.iter_mut().zip(digits) {
            *cell = Cell::try_from(digit)?;
        }
        Ok(Self { cells })
    }
}

/// A hypothetical move on a borrowed board. Dropping it empties the cell
/// again, so the board is restored on every exit path.
pub struct TentativeMove<'a> {
    board: &'a mut Board,
    position: usize,
}

impl Deref for TentativeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TentativeMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TentativeMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position] = Cell::Empty;
    }
}
