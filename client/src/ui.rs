use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Matchup, Outcome, PlayerKind, Side, TicTacToeGameState,
};

use crate::config::DisplayConfig;

/// The side that moves first always gets `first_symbol`, whoever controls it.
pub fn symbol_for(side: Side, display: &DisplayConfig) -> char {
    match side {
        Side::First => display.first_symbol,
        Side::Second => display.second_symbol,
    }
}

/// Empty cells show the number the player types to claim them.
pub fn render_board(state: &TicTacToeGameState, display: &DisplayConfig) -> String {
    let cells = state.board().cells();
    let winning_line = state.board().winning_line();
    let separator = format!("\n{}\n", vec!["---"; BOARD_SIZE].join("+"));

    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let position = row * BOARD_SIZE + col;
                    let glyph = match cells[position].side() {
                        None => char::from(b'1' + position as u8),
                        Some(side) => symbol_for(side, display),
                    };
                    let highlighted = winning_line.is_some_and(|line| line.contains(&position));
                    if highlighted {
                        format!("[{}]", glyph)
                    } else {
                        format!(" {} ", glyph)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

pub fn describe_result(state: &TicTacToeGameState, display: &DisplayConfig) -> String {
    match state.status() {
        Outcome::InProgress => "Game in progress".to_string(),
        Outcome::Draw => "Draw".to_string(),
        Outcome::Won(side) => match state.matchup() {
            Matchup::HumanVsEngine => match state.kind_of(side) {
                PlayerKind::Human => "You win".to_string(),
                PlayerKind::Engine => "Opponent wins".to_string(),
            },
            _ => format!("{} ({}) wins", side, symbol_for(side, display)),
        },
    }
}

pub fn describe_score(score: i32) -> &'static str {
    match score {
        1 => "engine expects to win",
        0 => "engine expects a draw",
        _ => "engine expects to lose",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::FirstPlayerMode;

    fn create_state(matchup: Matchup) -> TicTacToeGameState {
        let mut rng = SessionRng::new(3);
        TicTacToeGameState::new(matchup, FirstPlayerMode::Human, &mut rng)
    }

    #[test]
    fn test_render_empty_board_shows_numbers() {
        let state = create_state(Matchup::HumanVsHuman);
        let rendered = render_board(&state, &DisplayConfig::default());
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_first_mover_gets_first_symbol() {
        let mut state = create_state(Matchup::HumanVsEngine);
        state.place_mark(0).unwrap();
        state.play_engine_turn().unwrap();
        let rendered = render_board(&state, &DisplayConfig::default());
        assert_eq!(
            rendered,
            " O | 2 | 3 \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 "
        );

        let mut rng = SessionRng::new(3);
        let mut engine_first =
            TicTacToeGameState::new(Matchup::HumanVsEngine, FirstPlayerMode::Engine, &mut rng);
        engine_first.play_engine_turn().unwrap();
        let rendered = render_board(&engine_first, &DisplayConfig::default());
        assert!(rendered.starts_with(" O | 2 "));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut state = create_state(Matchup::HumanVsHuman);
        for position in [0, 3, 1, 4, 2] {
            state.place_mark(position).unwrap();
        }
        let display = DisplayConfig::default();
        let rendered = render_board(&state, &display);
        assert!(rendered.starts_with("[O]|[O]|[O]"));
        assert_eq!(describe_result(&state, &display), "Side 1 (O) wins");
    }

    #[test]
    fn test_human_vs_engine_result_text() {
        let mut state = create_state(Matchup::HumanVsEngine);
        let display = DisplayConfig::default();
        assert_eq!(describe_result(&state, &display), "Game in progress");
        // Human plays the lowest free cell each turn, the engine punishes it.
        while !state.is_over() {
            match state.current_kind() {
                PlayerKind::Human => {
                    let position = state.board().available_moves()[0];
                    state.place_mark(position).unwrap();
                }
                PlayerKind::Engine => {
                    state.play_engine_turn().unwrap();
                }
            }
        }
        let text = describe_result(&state, &display);
        assert!(text == "Opponent wins" || text == "Draw");
    }
}
