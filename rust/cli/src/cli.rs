//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Four-seat Texas Hold'em against three computer opponents"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play from seat 0 against three bots (reads actions from stdin)
    Play {
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run bot-only hands and optionally write JSONL hand history
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Rank 2 to 7 cards, e.g. `holdem eval As Ks Qs Js Ts`
    Eval {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Deal one hand, check it down and show the result
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration with value sources
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_subcommands_parse() {
        let commands = vec![
            vec!["holdem", "cfg"],
            vec!["holdem", "play", "--hands", "3", "--seed", "1"],
            vec!["holdem", "sim", "--hands", "10", "--output", "out.jsonl"],
            vec!["holdem", "eval", "As", "Ks"],
            vec!["holdem", "deal", "--seed", "9"],
        ];
        for args in commands {
            assert!(HoldemCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
    }

    #[test]
    fn sim_requires_hands() {
        assert!(HoldemCli::try_parse_from(["holdem", "sim"]).is_err());
    }

    #[test]
    fn eval_requires_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "eval"]).is_err());
    }
}
