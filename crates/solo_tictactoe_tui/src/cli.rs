//! Command-line interface.

use clap::{Parser, Subcommand};
use solo_tictactoe::{ConfigError, SoloConfig};
use std::path::PathBuf;
use tracing::instrument;

/// Solo Tic-Tac-Toe - play against the computer in your terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against the computer with saved statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(long, global = true, default_value = "solo_tictactoe.toml")]
    pub config: PathBuf,

    /// Statistics file, overriding the configuration
    #[arg(long, global = true)]
    pub stats_path: Option<PathBuf>,

    /// Seed for the opponent's random moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Play,

    /// Print the saved statistics
    Stats,

    /// Zero the saved statistics
    ResetStats,
}

impl Cli {
    /// Loads the configuration file and applies command-line overrides.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn load_config(&self) -> Result<SoloConfig, ConfigError> {
        let mut config = SoloConfig::load_or_default(&self.config)?;
        if let Some(path) = &self.stats_path {
            config = config.with_stats_path(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_opponent_seed(seed);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("Parse failed");
        assert_eq!(cli.command.unwrap_or_default(), Command::Play);
        assert_eq!(cli.config, PathBuf::from("solo_tictactoe.toml"));
    }

    #[test]
    fn test_subcommands_and_global_flags() {
        let cli = Cli::try_parse_from(["tictactoe", "reset-stats", "--stats-path", "s.json"])
            .expect("Parse failed");
        assert_eq!(cli.command, Some(Command::ResetStats));
        assert_eq!(cli.stats_path.as_deref(), Some(Path::new("s.json")));

        let cli = Cli::try_parse_from(["tictactoe", "--seed", "5", "stats"]).expect("Parse failed");
        assert_eq!(cli.command, Some(Command::Stats));
        assert_eq!(cli.seed, Some(5));
    }

    #[test]
    fn test_overrides_apply_without_config_file() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "/nonexistent/solo.toml",
            "--stats-path",
            "mine.json",
            "--seed",
            "8",
        ])
        .expect("Parse failed");
        let config = cli.load_config().expect("Config failed");
        assert_eq!(config.stats_path(), Path::new("mine.json"));
        assert_eq!(*config.opponent_seed(), Some(8));
    }
}
