//! # holdem-ai: Computer Opponents for Four-Seat Hold'em
//!
//! Heuristic opponents for the three computer seats of a `holdem-engine`
//! table, plus a session driver that runs their turns.
//!
//! ## Core Components
//!
//! - [`Bot`] - Trait defining the interface for seat decision-making
//! - [`strategy`] - Hand strength, pot odds, position, bluffing and raise sizing
//! - [`opponent`] - Per-seat aggression estimates
//! - [`heuristic`] - The default [`Bot`] built on [`strategy`]
//! - [`session`] - Owns a game and its bots, pumping AI turns
//! - [`create_bot`] - Factory function for creating bots by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::session::Session;
//! use holdem_engine::game::TableConfig;
//!
//! let mut session = Session::new(TableConfig::default(), 42);
//! session.start_hand().expect("deal");
//! session.run_ai_turns().expect("ai turns");
//!
//! // Either the human seat is up or the hand already ended
//! assert!(session.is_human_turn() || !session.game().is_hand_in_progress());
//! ```
//!
//! ## Bot Types
//!
//! - `"conservative"` - Tight, rarely bluffs
//! - `"aggressive"` - Loose, position-aware, bluffs more
//! - `"random"` - Balanced with random jitter on every decision

use holdem_engine::game::Game;
use holdem_engine::player::PlayerAction;
use rand::RngCore;

pub mod heuristic;
pub mod opponent;
pub mod session;
pub mod strategy;

/// Interface for anything that can play a seat.
///
/// Randomness is always drawn from the supplied source so a seeded session
/// replays identically.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::Bot;
/// use holdem_engine::game::Game;
/// use holdem_engine::player::PlayerAction;
/// use rand::RngCore;
///
/// struct CallingStation;
///
/// impl Bot for CallingStation {
///     fn decide(&mut self, game: &Game, seat: usize, _rng: &mut dyn RngCore) -> PlayerAction {
///         if game.to_call(seat) == 0 {
///             PlayerAction::Check
///         } else {
///             PlayerAction::Call
///         }
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait Bot: Send {
    /// Chooses the next action for `seat`, which must be the current actor.
    fn decide(&mut self, game: &Game, seat: usize, rng: &mut dyn RngCore) -> PlayerAction;

    /// Sees an action applied at the table, including its own.
    fn observe(&mut self, _seat: usize, _action: PlayerAction) {}

    /// Called once per dealt hand after the showdown.
    fn hand_finished(&mut self, _won: bool) {}

    /// `(hands_played, hands_won)` as tracked by `hand_finished`.
    fn record(&self) -> (u32, u32) {
        (0, 0)
    }

    fn name(&self) -> &str;
}

/// Creates a bot by type name; `None` for an unknown name.
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_bot;
///
/// let bot = create_bot("aggressive").expect("known bot");
/// assert_eq!(bot.name(), "AggressiveBot");
/// assert!(create_bot("telepathic").is_none());
/// ```
pub fn create_bot(kind: &str) -> Option<Box<dyn Bot>> {
    use strategy::AiPlayer;
    let player = match kind.to_ascii_lowercase().as_str() {
        "conservative" => AiPlayer::conservative(),
        "aggressive" => AiPlayer::aggressive(),
        "random" => AiPlayer::random(),
        _ => return None,
    };
    Some(Box::new(heuristic::HeuristicBot::new(player)))
}

/// The default bot for a computer seat (1 conservative, 2 aggressive, 3 random).
pub fn bot_for_seat(seat: usize) -> Box<dyn Bot> {
    Box::new(heuristic::HeuristicBot::new(strategy::AiPlayer::for_seat(seat)))
}
