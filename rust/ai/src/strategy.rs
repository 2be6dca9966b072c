//! Heuristic decision engine for the computer seats.
//!
//! A decision starts from a category-based hand strength and shifts it by
//! personality, position, phase, stack depth and the opponent model. Every
//! random draw (bluffs, jitter) comes from a caller-supplied source so a
//! seeded run replays exactly.

use holdem_engine::cards::Card;
use holdem_engine::game::{Game, Phase, MAX_PLAYERS};
use holdem_engine::hand::{evaluate_hand, Category};
use holdem_engine::player::PlayerAction;
use rand::Rng;
use tracing::debug;

use crate::opponent::OpponentModel;

/// Playing style of a computer seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    Conservative,
    Aggressive,
    Random,
}

impl Personality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Conservative => "conservative",
            Personality::Aggressive => "aggressive",
            Personality::Random => "random",
        }
    }
}

/// Tuning and memory of one computer seat.
#[derive(Debug, Clone, PartialEq)]
pub struct AiPlayer {
    pub personality: Personality,
    pub aggression: f32,
    pub bluff_frequency: f32,
    pub risk_tolerance: f32,
    /// Weight of the position bias, 0 ignores position entirely
    pub position_awareness: f32,
    pub opponents: OpponentModel,
    pub hands_played: u32,
    pub hands_won: u32,
}

impl AiPlayer {
    pub fn new(
        personality: Personality,
        aggression: f32,
        bluff_frequency: f32,
        risk_tolerance: f32,
        position_awareness: f32,
    ) -> Self {
        Self {
            personality,
            aggression,
            bluff_frequency,
            risk_tolerance,
            position_awareness,
            opponents: OpponentModel::new(),
            hands_played: 0,
            hands_won: 0,
        }
    }

    pub fn conservative() -> Self {
        Self::new(Personality::Conservative, 0.3, 0.1, 0.3, 0.5)
    }

    pub fn aggressive() -> Self {
        Self::new(Personality::Aggressive, 0.7, 0.3, 0.7, 1.0)
    }

    pub fn random() -> Self {
        Self::new(Personality::Random, 0.5, 0.2, 0.5, 0.5)
    }

    /// Default line-up: seat 1 conservative, seat 2 aggressive, others random.
    pub fn for_seat(seat: usize) -> Self {
        match seat {
            1 => Self::conservative(),
            2 => Self::aggressive(),
            _ => Self::random(),
        }
    }

    pub fn record_hand(&mut self, won: bool) {
        self.hands_played += 1;
        if won {
            self.hands_won += 1;
        }
    }
}

/// What the engine wants to do before a raise is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fold,
    Check,
    Call,
    Raise,
}

/// Maps the hand category to a score in `[0, 1]`.
///
/// High-card and pair hands get +0.05 for a Jack-or-better decisive rank and
/// another +0.05 when it is an Ace.
///
/// ```
/// use holdem_ai::strategy::hand_strength;
/// use holdem_engine::cards::parse_cards;
///
/// let hole = parse_cards("As Ad").unwrap();
/// let s = hand_strength(&[hole[0], hole[1]], &[]);
/// assert!((s - 0.3).abs() < 1e-6);
/// ```
pub fn hand_strength(hole: &[Card; 2], community: &[Card]) -> f32 {
    let result = evaluate_hand(hole, community);
    let base = match result.category {
        Category::HighCard => 0.1,
        Category::OnePair => 0.2,
        Category::TwoPair => 0.4,
        Category::ThreeOfAKind => 0.5,
        Category::Straight => 0.6,
        Category::Flush => 0.7,
        Category::FullHouse => 0.8,
        Category::FourOfAKind => 0.9,
        Category::StraightFlush | Category::RoyalFlush => 1.0,
    };
    let mut bonus = 0.0;
    if result.category <= Category::OnePair {
        let high = result.decisive_rank();
        if high >= 11 {
            bonus += 0.05;
        }
        if high == 14 {
            bonus += 0.05;
        }
    }
    base + bonus
}

/// Strength of the seat's own hand; zero when it holds no cards.
fn seat_strength(game: &Game, seat: usize) -> f32 {
    game.player(seat)
        .hand()
        .map(|hole| hand_strength(&hole, game.community()))
        .unwrap_or(0.0)
}

/// `call / (pot + call)`, or 0 when nothing is owed.
pub fn pot_odds(game: &Game, seat: usize) -> f32 {
    let call = game.to_call(seat);
    if call == 0 {
        return 0.0;
    }
    call as f32 / (game.pot() + call) as f32
}

/// Seat quality by offset from the button: first to act is worst, the button best.
pub fn position_value(game: &Game, seat: usize) -> f32 {
    let offset = (seat + MAX_PLAYERS - game.dealer() % MAX_PLAYERS) % MAX_PLAYERS;
    match offset {
        1 => 0.1,
        2 => 0.2,
        3 => 0.6,
        0 => 1.0,
        _ => 0.5,
    }
}

/// Rolls against the seat's bluff frequency, adjusted for pot size, crowd and style.
pub fn should_bluff<R: Rng + ?Sized>(ai: &AiPlayer, game: &Game, rng: &mut R) -> bool {
    let mut chance = ai.bluff_frequency;
    if game.pot() < game.config().starting_chips / 4 {
        chance *= 1.5;
    }
    if game.active_players() > 2 {
        chance *= 0.5;
    }
    if ai.personality == Personality::Aggressive {
        chance *= 1.3;
    }
    rng.random::<f32>() < chance
}

fn threshold<R: Rng + ?Sized>(
    game: &Game,
    seat: usize,
    ai: &AiPlayer,
    strength: f32,
    rng: &mut R,
) -> f32 {
    let mut t = strength;

    t += match ai.personality {
        Personality::Conservative => -0.1,
        Personality::Aggressive => 0.1,
        Personality::Random => rng.random_range(-10i32..=10) as f32 * 0.01,
    };

    t += (position_value(game, seat) - 0.5) * 0.2 * ai.position_awareness;

    t += match game.phase() {
        Phase::PreFlop | Phase::Turn => -0.05,
        Phase::River if strength > 0.6 => 0.1,
        Phase::River => -0.05,
        Phase::Flop | Phase::Showdown => 0.0,
    };

    let start = game.config().starting_chips;
    let chips = game.player(seat).chips();
    if chips < start / 2 {
        t += 0.1;
    } else if chips > start.saturating_mul(2) {
        t += 0.05;
    }

    if let Some(raiser) = game.last_raiser().filter(|&r| r != seat) {
        if ai.opponents.aggression(raiser) > 0.7 && ai.risk_tolerance < 0.4 {
            t -= 0.1;
        }
    }
    t
}

/// Chooses fold/check/call/raise for `seat`. Seats that cannot act get `Check`.
pub fn decide_action<R: Rng + ?Sized>(
    game: &Game,
    seat: usize,
    ai: &AiPlayer,
    rng: &mut R,
) -> Decision {
    let player = game.player(seat);
    if player.is_folded() || player.is_all_in() {
        return Decision::Check;
    }

    let strength = seat_strength(game, seat);
    let odds = pot_odds(game, seat);
    let t = threshold(game, seat, ai, strength, rng);
    let call = game.to_call(seat);

    let decision = if call == 0 {
        if strength > 0.6 || should_bluff(ai, game, rng) {
            Decision::Raise
        } else {
            Decision::Check
        }
    } else if call >= player.chips() {
        // Calling puts the whole stack in
        if strength > 0.7 - ai.risk_tolerance * 0.2 {
            Decision::Call
        } else {
            Decision::Fold
        }
    } else if t > 0.7 || (strength > 0.4 && should_bluff(ai, game, rng)) {
        Decision::Raise
    } else if t > 0.3 || (odds < 0.3 && strength > 0.2) {
        Decision::Call
    } else {
        Decision::Fold
    };

    debug!(
        seat,
        personality = ai.personality.as_str(),
        strength,
        threshold = t,
        pot_odds = odds,
        ?decision,
        "ai decision"
    );
    decision
}

/// Chips to put in on a raise, on top of what the seat has already bet.
///
/// Sized as a fraction of the pot, floored at the minimum legal raise and
/// capped at the stack (which makes the raise all-in).
pub fn decide_raise_amount<R: Rng + ?Sized>(
    game: &Game,
    seat: usize,
    ai: &AiPlayer,
    rng: &mut R,
) -> u32 {
    let player = game.player(seat);
    let strength = seat_strength(game, seat);

    let mut factor: f32 = if strength > 0.8 {
        1.0
    } else if strength > 0.6 {
        0.75
    } else if strength < 0.4 {
        0.3
    } else {
        0.5
    };
    factor *= match ai.personality {
        Personality::Conservative => 0.8,
        Personality::Aggressive => 1.3,
        Personality::Random => 0.7 + rng.random_range(0u8..6) as f32 * 0.1,
    };

    let minimum = game.min_raise_target().saturating_sub(player.bet());
    let amount = ((game.pot() as f32 * factor) as u32)
        .max(minimum)
        .min(player.chips());
    amount.max(1)
}

/// Full decision for `seat` as an action the game accepts.
///
/// A raise becomes `Raise(bet + amount)`; if that does not exceed the table
/// bet it is downgraded to a call.
pub fn ai_decide<R: Rng + ?Sized>(
    game: &Game,
    seat: usize,
    ai: &AiPlayer,
    rng: &mut R,
) -> PlayerAction {
    match decide_action(game, seat, ai, rng) {
        Decision::Fold => PlayerAction::Fold,
        Decision::Check => PlayerAction::Check,
        Decision::Call => PlayerAction::Call,
        Decision::Raise => {
            let bet = game.player(seat).bet();
            let target = bet + decide_raise_amount(game, seat, ai, rng);
            if target <= game.current_bet() {
                PlayerAction::Call
            } else {
                PlayerAction::Raise(target)
            }
        }
    }
}
