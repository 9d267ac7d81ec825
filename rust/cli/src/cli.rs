//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Texas Hold'em table engine")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one round and show every seat's hole cards and the board
    Deal {
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate 5 to 7 cards, e.g. `holdem eval As Ks Qs Js Ts`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play rounds at the table, either seat 0 from stdin or AI only
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// AI strategy for the automated seats
        #[arg(long)]
        ai: Option<String>,
    },
    /// Run AI-only rounds and optionally log them as JSONL
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub const NAMES: [&'static str; 5] = ["deal", "eval", "play", "sim", "cfg"];
}

/// Who controls seat 0 in the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Seat 0 reads actions from stdin
    Human,
    /// Every seat is automated
    Ai,
}

impl Vs {
    /// Returns the string representation of the opponent type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use holdem_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["holdem", "deal"],
            vec!["holdem", "eval", "As", "Ks", "Qs", "Js", "Ts"],
            vec!["holdem", "play", "--vs", "ai"],
            vec!["holdem", "sim", "--rounds", "1"],
            vec!["holdem", "cfg"],
        ];
        for args in commands {
            assert!(HoldemCli::try_parse_from(&args).is_ok(), "Failed to parse: {:?}", args);
        }
    }

    #[test]
    fn play_defaults_to_human() {
        let cli = HoldemCli::try_parse_from(["holdem", "play"]).unwrap();
        match cli.cmd {
            Commands::Play { vs, rounds, .. } => {
                assert_eq!(vs, Vs::Human);
                assert_eq!(rounds, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn sim_requires_rounds_and_eval_requires_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "sim"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "eval"]).is_err());
    }
}
