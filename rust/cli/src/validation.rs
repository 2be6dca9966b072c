//! Parsing of interactive actions and card lists typed by the user.

use std::collections::HashSet;

use holdem_engine::cards::{Card, parse_cards};
use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    Invalid(String),
}

/// Parses a prompt line, case-insensitively.
///
/// - `f` / `fold`
/// - `c` / `check`
/// - `call`
/// - `r N` / `raise N` raises the total bet to `N`
/// - `q` / `quit`
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("Raise 40"), ParseResult::Action(PlayerAction::Raise(40)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("shove"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires a target amount (e.g., 'raise 40')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(target) if target > 0 => ParseResult::Action(PlayerAction::Raise(target)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid raise amount '{}'", amount)),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, q",
            verb
        )),
    }
}

/// Parses 2-7 distinct cards given as separate or space-joined arguments.
pub fn parse_card_list(args: &[String]) -> Result<Vec<Card>, String> {
    let joined = args.join(" ");
    let cards = parse_cards(&joined).map_err(|e| e.to_string())?;
    if !(2..=7).contains(&cards.len()) {
        return Err(format!("expected 2 to 7 cards, got {}", cards.len()));
    }
    let mut seen = HashSet::new();
    for card in &cards {
        if !seen.insert(*card) {
            return Err(format!("duplicate card {}", card));
        }
    }
    Ok(cards)
}
