//! `sim`: bot-only hands, optionally recorded as JSONL hand history.
//!
//! Every seat is a bot. The run stops after `hands` hands or as soon as the
//! table can no longer deal (seat 0 busted or a single funded seat).

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use holdem_ai::session::Session;
use holdem_engine::game::MAX_PLAYERS;
use holdem_engine::logger::HandLogger;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn handle_sim_command(
    hands: u64,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match output.as_deref() {
        Some(p) => {
            let path = Path::new(p);
            if let Err(msg) = ensure_parent_dir(path) {
                ui::write_error(err, &msg)?;
                return Err(CliError::InvalidInput(msg));
            }
            Some(HandLogger::create(path)?)
        }
        None => None,
    };

    let mut session = Session::all_bots(cfg.table(), seed);
    let mut played = 0u64;
    while played < hands && !session.game().is_game_over() {
        session.start_hand()?;
        session.run_ai_turns()?;
        // nothing here consumes the event feed
        session.game_mut().drain_events();
        played += 1;

        if let Some(logger) = logger.as_mut() {
            let mut record = session.game().hand_record().clone();
            record.hand_id = logger.next_id();
            logger.write(&record)?;
        }
    }
    info!(played, seed, "simulation finished");

    writeln!(out, "Simulated: {} hands (seed {})", played, seed)?;
    if played < hands {
        ui::display_warning(
            err,
            &format!("game over after {} of {} hands", played, hands),
        )?;
    }
    for seat in 0..MAX_PLAYERS {
        let player = session.game().player(seat);
        let (dealt, won) = session.bot(seat).map(|b| b.record()).unwrap_or((0, 0));
        let name = session.bot(seat).map(|b| b.name()).unwrap_or("-");
        writeln!(
            out,
            "Seat {} {} ({}): ${} won {}/{}",
            seat,
            player.name(),
            name,
            player.chips(),
            won,
            dealt
        )?;
    }
    writeln!(out, "Total chips: {}", session.game().total_chips())?;
    if let Some(p) = output {
        writeln!(out, "Hand history: {}", p)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(hands: u64, output: Option<String>) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_sim_command(hands, Some(11), output, &mut out, &mut err);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn zero_hands_is_rejected() {
        let (res, _) = sim(0, None);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn chips_are_conserved() {
        let (res, out) = sim(25, None);
        assert!(res.is_ok());
        let total = 4 * config::Config::default().starting_chips;
        assert!(out.contains(&format!("Total chips: {}", total)), "{}", out);
    }

    #[test]
    fn writes_one_record_per_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/hands.jsonl");
        let (res, out) = sim(5, Some(path.to_string_lossy().into_owned()));
        assert!(res.is_ok());

        let played: usize = out
            .lines()
            .find_map(|l| l.strip_prefix("Simulated: "))
            .and_then(|l| l.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), played);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v["hand_id"].as_str().is_some_and(|id| !id.is_empty()));
            assert!(v["showdown"]["winners"].is_array());
        }
    }
}
