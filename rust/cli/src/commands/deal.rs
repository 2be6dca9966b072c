//! `deal`: deals one hand, checks it down and shows every seat's cards.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_hand, format_hole};
use holdem_engine::game::Game;
use holdem_engine::logger::TableEvent;
use holdem_engine::player::PlayerAction;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut game = Game::new(cfg.table(), seed);
    game.new_hand()?;
    while let Some(seat) = game.current_actor() {
        game.submit_action(seat, PlayerAction::Check)?;
    }

    writeln!(out, "Seed: {}", seed)?;
    for player in game.players() {
        writeln!(out, "Hole {}: {}", player.name(), format_hole(player.hand()))?;
    }
    writeln!(out, "Board: {}", format_board(game.community()))?;
    if let Some(showdown) = game.last_showdown() {
        for (seat, result) in &showdown.hands {
            writeln!(out, "{}: {}", game.player(*seat).name(), format_hand(result))?;
        }
    }
    for event in game.drain_events() {
        if matches!(event, TableEvent::Won { .. } | TableEvent::SplitPot { .. }) {
            writeln!(out, "{}", event)?;
        }
    }
    Ok(())
}
