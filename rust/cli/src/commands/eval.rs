//! `eval`: ranks a set of cards and shows how a bot would score them.

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::ui;
use crate::validation::parse_card_list;
use holdem_ai::strategy::hand_strength;
use holdem_engine::hand::evaluate_cards;
use std::io::Write;

/// The first two cards are treated as hole cards for the strength score.
pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = match parse_card_list(cards) {
        Ok(cards) => cards,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let result = evaluate_cards(&cards);
    let strength = hand_strength(&[cards[0], cards[1]], &cards[2..]);

    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Hand: {}", format_hand(&result))?;
    writeln!(out, "Strength: {:.2}", strength)?;
    Ok(())
}
