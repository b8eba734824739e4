use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    BoardError, GameError, MoveResult, PlayerKind, TicTacToeGameState,
};
use tictactoe_common::log;

use crate::config::DisplayConfig;
use crate::ui::{describe_result, describe_score, render_board, symbol_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnEnd {
    Continue,
    Quit,
}

enum HumanInput {
    Position(usize),
    Quit,
    Unrecognized,
}

/// Drives rounds on a line-based terminal until the player quits or declines
/// another round.
pub struct TicTacToeRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> TicTacToeRunner<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            input,
            output,
            display,
        }
    }

    pub fn run(
        &mut self,
        state: &mut TicTacToeGameState,
        rng: &mut SessionRng,
    ) -> Result<(), Box<dyn Error>> {
        let mut rounds = 0u32;
        loop {
            rounds += 1;
            if self.play_round(state)? == RoundEnd::Quit {
                break;
            }
            if !self.ask_play_again()? {
                break;
            }
            state.reset(rng);
        }
        log!("Session finished after {} round(s)", rounds);
        Ok(())
    }

    fn play_round(&mut self, state: &mut TicTacToeGameState) -> Result<RoundEnd, Box<dyn Error>> {
        writeln!(self.output, "{}\n", render_board(state, &self.display))?;

        while !state.is_over() {
            match state.current_kind() {
                PlayerKind::Engine => self.engine_turn(state)?,
                PlayerKind::Human => {
                    if self.human_turn(state)? == TurnEnd::Quit {
                        return Ok(RoundEnd::Quit);
                    }
                }
            }
        }

        writeln!(self.output, "{}", describe_result(state, &self.display))?;
        Ok(RoundEnd::Finished)
    }

    fn engine_turn(&mut self, state: &mut TicTacToeGameState) -> Result<(), Box<dyn Error>> {
        let side = state.current_side();
        if let MoveResult::Applied { position, .. } = state.play_engine_turn()? {
            writeln!(
                self.output,
                "Engine ({}) takes {}",
                symbol_for(side, &self.display),
                position + 1
            )?;
            if self.display.show_engine_score
                && let Some(score) = state.engine_score()
            {
                writeln!(self.output, "({}: {})", describe_score(score), score)?;
            }
            writeln!(self.output, "{}\n", render_board(state, &self.display))?;
        }
        Ok(())
    }

    fn human_turn(&mut self, state: &mut TicTacToeGameState) -> Result<TurnEnd, Box<dyn Error>> {
        let side = state.current_side();
        write!(
            self.output,
            "{} ({}), choose a cell 1-9 (q to quit): ",
            side,
            symbol_for(side, &self.display)
        )?;
        self.output.flush()?;

        let position = match self.read_human_input()? {
            HumanInput::Quit => return Ok(TurnEnd::Quit),
            HumanInput::Unrecognized => {
                writeln!(self.output, "Please enter a number from 1 to 9.")?;
                return Ok(TurnEnd::Continue);
            }
            HumanInput::Position(position) => position,
        };

        match state.place_mark(position) {
            Ok(MoveResult::Applied { .. }) => {
                writeln!(self.output, "{}\n", render_board(state, &self.display))?;
            }
            Ok(MoveResult::Rejected) => {
                writeln!(self.output, "That cell is already taken.")?;
            }
            Err(GameError::Board(BoardError::InvalidPosition { .. })) => {
                writeln!(self.output, "Invalid position, the board has cells 1 to 9.")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(TurnEnd::Continue)
    }

    fn read_human_input(&mut self) -> Result<HumanInput, Box<dyn Error>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(HumanInput::Quit);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(HumanInput::Quit);
        }
        match trimmed.parse::<usize>() {
            Ok(number) if number >= 1 => Ok(HumanInput::Position(number - 1)),
            _ => Ok(HumanInput::Unrecognized),
        }
    }

    fn ask_play_again(&mut self) -> Result<bool, Box<dyn Error>> {
        write!(self.output, "Play again? [y/n]: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(matches!(line.trim(), "y" | "Y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{FirstPlayerMode, Matchup, Outcome, Side};

    fn run_session(
        matchup: Matchup,
        first_player: FirstPlayerMode,
        input: &str,
        display: DisplayConfig,
    ) -> (TicTacToeGameState, String) {
        let mut rng = SessionRng::new(11);
        let mut state = TicTacToeGameState::new(matchup, first_player, &mut rng);
        let mut output = Vec::new();
        TicTacToeRunner::new(Cursor::new(input.to_string()), &mut output, display)
            .run(&mut state, &mut rng)
            .unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_engine_vs_engine_ends_in_draw() {
        let (state, output) = run_session(
            Matchup::EngineVsEngine,
            FirstPlayerMode::Random,
            "n\n",
            DisplayConfig::default(),
        );
        assert_eq!(state.status(), Outcome::Draw);
        assert!(output.contains("Engine (O) takes 1"));
        assert!(output.contains("Draw"));
        assert!(output.ends_with("Play again? [y/n]: "));
    }

    #[test]
    fn test_taken_cell_is_reported_and_turn_kept() {
        let (state, output) = run_session(
            Matchup::HumanVsEngine,
            FirstPlayerMode::Human,
            "1\n1\n5\nq\n",
            DisplayConfig::default(),
        );
        assert!(output.contains("Engine (X) takes 5"));
        assert!(output.contains("That cell is already taken."));
        assert_eq!(state.board().available_moves().len(), 7);
        assert_eq!(state.current_side(), Side::First);
    }

    #[test]
    fn test_bad_input_is_reported() {
        let (state, output) = run_session(
            Matchup::HumanVsHuman,
            FirstPlayerMode::Human,
            "abc\n0\n12\nq\n",
            DisplayConfig::default(),
        );
        assert_eq!(output.matches("Please enter a number from 1 to 9.").count(), 2);
        assert!(output.contains("Invalid position"));
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_human_vs_human_win_and_replay() {
        let (state, output) = run_session(
            Matchup::HumanVsHuman,
            FirstPlayerMode::Human,
            "1\n4\n2\n5\n3\ny\nq\n",
            DisplayConfig::default(),
        );
        assert!(output.contains("Side 1 (O) wins"));
        assert!(output.contains("Play again?"));
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_engine_score_is_shown_when_enabled() {
        let display = DisplayConfig {
            show_engine_score: true,
            ..DisplayConfig::default()
        };
        let (_, output) = run_session(Matchup::HumanVsEngine, FirstPlayerMode::Engine, "q\n", display);
        assert!(output.contains("Engine (O) takes 1"));
        assert!(output.contains("(engine expects a draw: 0)"));
        assert!(output.contains("Side 2 (X), choose a cell"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (state, _) = run_session(
            Matchup::HumanVsEngine,
            FirstPlayerMode::Human,
            "",
            DisplayConfig::default(),
        );
        assert!(!state.is_over());
    }
}
