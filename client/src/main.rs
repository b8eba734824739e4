mod config;
mod offline;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstPlayerMode, Matchup, TicTacToeGameState};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE_NAME, Config, get_config_manager};
use offline::TicTacToeRunner;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Engine,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Engine => FirstPlayerMode::Engine,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    HumanVsEngine,
    HumanVsHuman,
    EngineVsEngine,
}

impl From<ModeArg> for Matchup {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::HumanVsEngine => Matchup::HumanVsEngine,
            ModeArg::HumanVsHuman => Matchup::HumanVsHuman,
            ModeArg::EngineVsEngine => Matchup::EngineVsEngine,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a perfect-play engine")]
struct Args {
    /// Path of the YAML config file
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for the random first-player draw
    #[arg(long)]
    seed: Option<u64>,

    /// Print the engine's minimax score after each engine move
    #[arg(long)]
    show_score: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write log lines to stderr
    #[arg(long)]
    verbose: bool,

    /// Store the effective settings back into the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(first_player) = self.first_player {
            config.game.first_player = first_player.into();
        }
        if let Some(mode) = self.mode {
            config.game.mode = mode.into();
        }
        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
        if self.show_score {
            config.display.show_engine_score = true;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);
    let config = args.apply_to(config_manager.get_config()?);
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config.display());
    }

    let mut rng = match config.game.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {:?} with first player {:?}, seed {}",
        config.game.mode,
        config.game.first_player,
        rng.seed()
    );

    let mut state = TicTacToeGameState::new(config.game.mode, config.game.first_player, &mut rng);

    let stdin = io::stdin();
    let mut runner = TicTacToeRunner::new(stdin.lock(), io::stdout(), config.display);
    runner.run(&mut state, &mut rng)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--first-player",
            "engine",
            "--mode",
            "engine-vs-engine",
            "--seed",
            "17",
            "--show-score",
        ]);
        let config = args.apply_to(Config::default());
        assert_eq!(config.game.first_player, FirstPlayerMode::Engine);
        assert_eq!(config.game.mode, Matchup::EngineVsEngine);
        assert_eq!(config.game.seed, Some(17));
        assert!(config.display.show_engine_score);
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["tictactoe_client"]);
        let config = Config::default();
        assert_eq!(args.apply_to(config.clone()), config);
    }
}
