mod tictactoe_runner;

pub use tictactoe_runner::TicTacToeRunner;
