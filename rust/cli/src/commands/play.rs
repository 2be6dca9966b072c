//! # Play Command
//!
//! Interactive Hold'em from seat 0 against the three table bots.
//!
//! Each hand prints the hole cards, every table event as it happens, and a
//! status line before the prompt. Illegal or unparseable input re-prompts;
//! `q` or end of input leaves the session.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_hand, format_hole};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::session::Session;
use holdem_engine::game::{Game, HUMAN_SEAT};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter action (fold/check/call/raise <to>/q): ";

/// Plays up to `hands` hands (default 1), stopping early on quit or game over.
pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = hands.unwrap_or(1);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(out, "play: hands={} seed={}", hands, seed)?;
    let mut session = Session::new(cfg.table(), seed);

    let mut played = 0u32;
    for i in 1..=hands {
        if session.game().is_game_over() {
            break;
        }
        writeln!(out, "Hand {}", i)?;
        session.start_hand()?;
        writeln!(
            out,
            "Your cards: {}",
            format_hole(session.game().player(HUMAN_SEAT).hand())
        )?;

        if !play_hand(&mut session, out, err, stdin)? {
            writeln!(out, "Quit.")?;
            break;
        }
        played += 1;
    }

    writeln!(out, "Hands played: {}", played)?;
    for player in session.game().players() {
        writeln!(out, "{}: ${}", player.name(), player.chips())?;
    }
    Ok(())
}

/// Returns `false` when the user quit mid-hand.
fn play_hand(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        session.run_ai_turns()?;
        print_events(session.game_mut(), out)?;
        if !session.game().is_hand_in_progress() {
            break;
        }

        print_status(session.game(), out)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Ok(false);
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => match session.submit_human(action) {
                Ok(()) => {}
                Err(e) if e.is_illegal_action() => ui::write_error(err, &e.to_string())?,
                Err(e) => return Err(e.into()),
            },
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    if let Some(showdown) = session.game().last_showdown() {
        for (seat, result) in &showdown.hands {
            let player = session.game().player(*seat);
            writeln!(
                out,
                "{} shows {}: {}",
                player.name(),
                format_hole(player.hand()),
                format_hand(result)
            )?;
        }
    }
    Ok(true)
}

fn print_events(game: &mut Game, out: &mut dyn Write) -> Result<(), CliError> {
    for event in game.drain_events() {
        writeln!(out, "{}", event)?;
    }
    Ok(())
}

fn print_status(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let in_front: u32 = game.players().iter().map(|p| p.bet()).sum();
    writeln!(
        out,
        "Board: {} | Pot: ${} | To call: ${} | Your chips: ${}",
        format_board(game.community()),
        game.pot() + in_front,
        game.to_call(HUMAN_SEAT),
        game.player(HUMAN_SEAT).chips()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(hands: Option<u32>, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.to_string());
        let res = handle_play_command(hands, Some(42), &mut out, &mut err, &mut stdin);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn zero_hands_is_rejected() {
        let (res, _, err) = play(Some(0), "");
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(err.contains("hands must be >= 1"));
    }

    #[test]
    fn quit_at_first_prompt() {
        let (res, out, _) = play(Some(3), "q\n");
        assert!(res.is_ok());
        assert!(out.contains("Your cards: "));
        assert!(out.contains("Quit."));
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    fn calling_every_street_finishes_the_hand() {
        let (res, out, _) = play(Some(1), &"call\n".repeat(200));
        assert!(res.is_ok(), "{:?}", res.err());
        assert!(out.contains("Hands played: 1"), "{}", out);
        assert!(out.contains(" won $") || out.contains("Split pot!"), "{}", out);
    }

    #[test]
    fn bad_input_reprompts() {
        let (res, out, err) = play(Some(1), "dance\nraise 0\nq\n");
        assert!(res.is_ok());
        assert!(err.contains("Error: Unrecognized action 'dance'"), "{}", err);
        assert!(err.contains("Error: Raise amount must be positive"), "{}", err);
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn illegal_raise_is_reported_and_state_kept() {
        // A raise far beyond the stack is rejected by the engine, then we quit
        let (res, _, err) = play(Some(1), "raise 999999\nq\n");
        assert!(res.is_ok());
        assert!(err.contains("Error: Illegal action: Insufficient chips"), "{}", err);
    }

    #[test]
    fn end_of_input_quits() {
        let (res, out, _) = play(Some(2), "");
        assert!(res.is_ok());
        assert!(out.contains("Quit."));
    }
}
