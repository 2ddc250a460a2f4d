//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the settings file (missing file means defaults)
        #[arg(short, long, default_value = "rewind.toml")]
        config: std::path::PathBuf,
    },

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Comma-separated cell indices 0-8, row-major
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Step to show after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(short, long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The requested command, `play` with the default config when omitted.
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            config: "rewind.toml".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_plays() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                config: "rewind.toml".into()
            }
        );
    }

    #[test]
    fn test_replay_parses_move_list() {
        let cli =
            Cli::try_parse_from(["rewind", "replay", "0,4,1", "--jump", "1", "--json"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec![0, 4, 1],
                jump: Some(1),
                descending: false,
                json: true,
            }
        );
    }

    #[test]
    fn test_replay_rejects_non_numeric_moves() {
        assert!(Cli::try_parse_from(["rewind", "replay", "0,x"]).is_err());
    }
}
