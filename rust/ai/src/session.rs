//! Drives a [`Game`] with bots in the computer seats.

use holdem_engine::errors::{GameError, IllegalAction};
use holdem_engine::game::{Game, HUMAN_SEAT, MAX_PLAYERS, TableConfig};
use holdem_engine::player::PlayerAction;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

use crate::{Bot, bot_for_seat};

// Bot decisions draw from a separate ChaCha stream so they never disturb the shuffle.
const AI_STREAM: u64 = 1;

/// A game plus one optional bot per seat. Seats without a bot wait for
/// [`Session::submit_human`].
pub struct Session {
    game: Game,
    bots: [Option<Box<dyn Bot>>; MAX_PLAYERS],
    rng: ChaCha20Rng,
    fallbacks: usize,
}

impl Session {
    /// Human in seat 0, default bots in seats 1-3.
    pub fn new(config: TableConfig, seed: u64) -> Self {
        let bots = std::array::from_fn(|seat| (seat != HUMAN_SEAT).then(|| bot_for_seat(seat)));
        Self::with_bots(Game::new(config, seed), bots, seed)
    }

    /// Bots in every seat, for simulations.
    pub fn all_bots(config: TableConfig, seed: u64) -> Self {
        let bots = std::array::from_fn(|seat| Some(bot_for_seat(seat)));
        Self::with_bots(Game::new(config, seed), bots, seed)
    }

    pub fn with_bots(game: Game, bots: [Option<Box<dyn Bot>>; MAX_PLAYERS], seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(AI_STREAM);
        Self {
            game,
            bots,
            rng,
            fallbacks: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Setup hook for arranging stacks or rigging the next deck.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn bot(&self, seat: usize) -> Option<&dyn Bot> {
        self.bots.get(seat)?.as_deref()
    }

    /// Bot actions the table rejected and replaced with a check or fold.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    pub fn start_hand(&mut self) -> Result<(), GameError> {
        self.game.new_hand()
    }

    /// A seat without a bot is due to act.
    pub fn is_human_turn(&self) -> bool {
        self.game
            .current_actor()
            .is_some_and(|seat| self.bots[seat].is_none())
    }

    /// Plays bot turns until a human seat must act or the hand ends.
    /// Returns the number of bot actions applied.
    pub fn run_ai_turns(&mut self) -> Result<usize, GameError> {
        let mut taken = 0;
        while let Some(seat) = self.game.current_actor() {
            let Some(bot) = self.bots[seat].as_mut() else {
                break;
            };
            let action = bot.decide(&self.game, seat, &mut self.rng);
            match self.apply(seat, action) {
                Ok(()) => {}
                Err(e) if e.is_illegal_action() => {
                    let fallback = if self.game.to_call(seat) == 0 {
                        PlayerAction::Check
                    } else {
                        PlayerAction::Fold
                    };
                    warn!(seat, ?action, ?fallback, error = %e, "bot chose an illegal action");
                    self.fallbacks += 1;
                    self.apply(seat, fallback)?;
                }
                Err(e) => return Err(e),
            }
            taken += 1;
        }
        Ok(taken)
    }

    /// Forwards the human seat's action.
    pub fn submit_human(&mut self, action: PlayerAction) -> Result<(), GameError> {
        let seat = self.game.current_actor().unwrap_or(HUMAN_SEAT);
        if self.bots[seat].is_some() {
            return Err(IllegalAction::NotPlayersTurn {
                expected: seat,
                actual: HUMAN_SEAT,
            }
            .into());
        }
        self.apply(seat, action)
    }

    fn apply(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        self.game.submit_action(seat, action)?;
        for bot in self.bots.iter_mut().flatten() {
            bot.observe(seat, action);
        }
        if !self.game.is_hand_in_progress() {
            let winners = self
                .game
                .last_showdown()
                .map(|s| s.winners.clone())
                .unwrap_or_default();
            for (i, slot) in self.bots.iter_mut().enumerate() {
                // seats that sat the hand out were never dealt in
                if let Some(bot) = slot.as_mut().filter(|_| self.game.player(i).hand().is_some()) {
                    bot.hand_finished(winners.contains(&i));
                }
            }
            debug!(?winners, hand = self.game.hands_played(), "hand finished");
        }
        Ok(())
    }
}
