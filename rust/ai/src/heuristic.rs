//! The default computer opponent: an [`AiPlayer`] driven by [`ai_decide`].

use holdem_engine::game::Game;
use holdem_engine::player::PlayerAction;
use rand::RngCore;

use crate::Bot;
use crate::strategy::{AiPlayer, Personality, ai_decide};

/// Heuristic bot wrapping one seat's tuning and opponent model.
///
/// # Example
///
/// ```rust
/// use holdem_ai::Bot;
/// use holdem_ai::heuristic::HeuristicBot;
/// use holdem_ai::strategy::AiPlayer;
/// use holdem_engine::game::{Game, TableConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut game = Game::new(TableConfig::default(), 42);
/// game.new_hand().expect("deal");
///
/// let seat = game.current_actor().expect("seat to act");
/// let mut bot = HeuristicBot::new(AiPlayer::for_seat(seat));
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let action = bot.decide(&game, seat, &mut rng);
/// assert!(game.clone().submit_action(seat, action).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicBot {
    player: AiPlayer,
    name: String,
}

impl HeuristicBot {
    pub fn new(player: AiPlayer) -> Self {
        let name = match player.personality {
            Personality::Conservative => "ConservativeBot",
            Personality::Aggressive => "AggressiveBot",
            Personality::Random => "RandomBot",
        };
        Self {
            player,
            name: name.to_string(),
        }
    }

    pub fn player(&self) -> &AiPlayer {
        &self.player
    }
}

impl Bot for HeuristicBot {
    fn decide(&mut self, game: &Game, seat: usize, rng: &mut dyn RngCore) -> PlayerAction {
        ai_decide(game, seat, &self.player, rng)
    }

    fn observe(&mut self, seat: usize, action: PlayerAction) {
        self.player.opponents.observe(seat, action);
    }

    fn hand_finished(&mut self, won: bool) {
        self.player.record_hand(won);
    }

    fn record(&self) -> (u32, u32) {
        (self.player.hands_played, self.player.hands_won)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_follows_personality() {
        assert_eq!(HeuristicBot::new(AiPlayer::conservative()).name(), "ConservativeBot");
        assert_eq!(HeuristicBot::new(AiPlayer::aggressive()).name(), "AggressiveBot");
        assert_eq!(HeuristicBot::new(AiPlayer::random()).name(), "RandomBot");
    }

    #[test]
    fn observe_feeds_the_opponent_model() {
        let mut bot = HeuristicBot::new(AiPlayer::conservative());
        bot.observe(2, PlayerAction::Raise(50));
        assert!(bot.player().opponents.aggression(2) > 0.5);
    }

    #[test]
    fn finished_hands_are_counted() {
        let mut bot = HeuristicBot::new(AiPlayer::random());
        bot.hand_finished(true);
        bot.hand_finished(false);
        assert_eq!(bot.record(), (2, 1));
    }
}
