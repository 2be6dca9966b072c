//! Card, board and action formatting for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to handle
//! Unicode and as `h d c s` otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::hand::HandResult;
use holdem_engine::player::PlayerAction;

/// Windows consoles only render suit symbols inside modern terminals.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    match (supports_unicode(), suit) {
        (true, Suit::Hearts) => "♥",
        (true, Suit::Diamonds) => "♦",
        (true, Suit::Clubs) => "♣",
        (true, Suit::Spades) => "♠",
        (false, Suit::Hearts) => "h",
        (false, Suit::Diamonds) => "d",
        (false, Suit::Clubs) => "c",
        (false, Suit::Spades) => "s",
    }
}

/// `"A♠"` or `"As"`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Bracketed, space-separated cards; `"[]"` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_hole(hole: Option<[Card; 2]>) -> String {
    match hole {
        Some(cards) => format!("{} {}", format_card(&cards[0]), format_card(&cards[1])),
        None => "--".to_string(),
    }
}

/// Action as typed at the prompt: `"fold"`, `"raise to 40"`, ...
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(target) => format!("raise to {}", target),
    }
}

/// Category followed by its decisive ranks, e.g. `"Full House (K, 9)"`.
pub fn format_hand(result: &HandResult) -> String {
    let ranks: Vec<String> = result
        .ranks()
        .into_iter()
        .filter_map(holdem_engine::cards::Rank::from_u8)
        .map(|r| r.symbol().to_string())
        .collect();
    format!("{} ({})", result.category, ranks.join(", "))
}
