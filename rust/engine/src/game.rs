use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{GameError, IllegalAction};
use crate::hand::{evaluate_hand, HandResult};
use crate::logger::{ActionRecord, HandRecord, ShowdownInfo, TableEvent};
use crate::player::{Player, PlayerAction, STARTING_CHIPS};
use crate::rules::{validate_action, BetContext, ValidatedAction};

/// Seats at the table. Dealer and position arithmetic is modulo this count.
pub const MAX_PLAYERS: usize = 4;
/// The seat driven by the human front end.
pub const HUMAN_SEAT: usize = 0;
pub const COMMUNITY_SIZE: usize = 5;
/// Largest stack for which the whole table's chips still fit in a `u32`.
pub const MAX_STARTING_CHIPS: u32 = u32::MAX / MAX_PLAYERS as u32;

/// Betting phase of the current hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, no community cards
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands compared and pot awarded; also the resting state between hands
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PreFlop => "Pre-flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// Table-wide settings shared by every hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub starting_chips: u32,
    /// Smallest raise increment when the table bet is below it
    pub min_raise: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            min_raise: 10,
        }
    }
}

/// Outcome of a showdown, kept until the next hand starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Winning seats in clockwise order starting left of the dealer
    pub winners: Vec<usize>,
    pub pot: u32,
    /// Even share paid to every winner
    pub share: u32,
    /// Odd chips paid one each to the first winners in `winners`
    pub remainder: u32,
    /// Evaluated hands of every contender (empty when the pot was uncontested)
    pub hands: Vec<(usize, HandResult)>,
}

/// The betting state machine: owns the table, the deck and the shuffle source.
///
/// A new game rests in [`Phase::Showdown`]; call [`Game::new_hand`] to deal.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::{Game, Phase, TableConfig};
/// use holdem_engine::player::PlayerAction;
///
/// let mut game = Game::new(TableConfig::default(), 42);
/// game.new_hand().expect("deal");
/// assert_eq!(game.phase(), Phase::PreFlop);
///
/// // Nobody bets: four checks close the round and deal the flop
/// for _ in 0..4 {
///     let seat = game.current_actor().unwrap();
///     game.submit_action(seat, PlayerAction::Check).unwrap();
/// }
/// assert_eq!(game.phase(), Phase::Flop);
/// assert_eq!(game.community().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: TableConfig,
    players: [Player; MAX_PLAYERS],
    community: Vec<Card>,
    deck: Deck,
    rng: ChaCha20Rng,
    seed: Option<u64>,
    phase: Phase,
    pot: u32,
    current_bet: u32,
    dealer: usize,
    current: usize,
    active_players: usize,
    game_over: bool,
    last_raiser: Option<usize>,
    hands_played: u32,
    events: Vec<TableEvent>,
    record: HandRecord,
    last_showdown: Option<ShowdownResult>,
    rigged: Option<Deck>,
}

impl Game {
    pub fn new(config: TableConfig, seed: u64) -> Self {
        let mut game = Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed));
        game.seed = Some(seed);
        game.record.seed = Some(seed);
        game
    }

    /// Builds a table that shuffles from an injected source.
    ///
    /// Stacks above [`MAX_STARTING_CHIPS`] are capped so pot and chip totals
    /// cannot overflow.
    pub fn with_rng(mut config: TableConfig, rng: ChaCha20Rng) -> Self {
        if config.starting_chips > MAX_STARTING_CHIPS {
            warn!(
                requested = config.starting_chips,
                cap = MAX_STARTING_CHIPS,
                "starting stack capped"
            );
            config.starting_chips = MAX_STARTING_CHIPS;
        }
        let players = std::array::from_fn(|seat| {
            let name = if seat == HUMAN_SEAT {
                "You".to_string()
            } else {
                format!("AI{}", seat)
            };
            Player::new(seat, name, config.starting_chips)
        });
        Self {
            config,
            players,
            community: Vec::with_capacity(COMMUNITY_SIZE),
            deck: Deck::new(),
            rng,
            seed: None,
            phase: Phase::Showdown,
            pot: 0,
            current_bet: 0,
            dealer: 0,
            current: 0,
            active_players: 0,
            game_over: false,
            last_raiser: None,
            hands_played: 0,
            events: Vec::new(),
            record: empty_record(None, 0),
            last_showdown: None,
            rigged: None,
        }
    }

    /// Uses `deck` as-is for the next hand instead of shuffling.
    pub fn rig_next_deck(&mut self, deck: Deck) {
        self.rigged = Some(deck);
    }

    // ---- read-only snapshot ----

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player; MAX_PLAYERS] {
        &self.players
    }
    /// Setup hook for arranging stacks between hands.
    pub fn players_mut(&mut self) -> &mut [Player; MAX_PLAYERS] {
        &mut self.players
    }
    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn community_count(&self) -> usize {
        self.community.len()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn active_players(&self) -> usize {
        self.active_players
    }
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }
    /// Seat that raised most recently in the current hand.
    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }
    pub fn last_showdown(&self) -> Option<&ShowdownResult> {
        self.last_showdown.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seat expected to act, or `None` between hands.
    pub fn current_actor(&self) -> Option<usize> {
        (self.phase != Phase::Showdown).then_some(self.current)
    }

    pub fn is_hand_in_progress(&self) -> bool {
        self.phase != Phase::Showdown
    }

    /// Chips the seat must add to match the table bet.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.current_bet.saturating_sub(self.players[seat].bet())
    }

    /// Smallest total bet a raise may target.
    pub fn min_raise_target(&self) -> u32 {
        self.current_bet
            .saturating_add(self.current_bet.max(self.config.min_raise))
    }

    /// `pot + Σ chips + Σ bets`; constant within a hand.
    pub fn total_chips(&self) -> u32 {
        self.pot
            + self
                .players
                .iter()
                .map(|p| p.chips() + p.bet())
                .sum::<u32>()
    }

    /// Takes the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// History of the hand in progress (or the one just finished).
    pub fn hand_record(&self) -> &HandRecord {
        &self.record
    }

    // ---- hand lifecycle ----

    /// Resets per-hand state, moves the button, shuffles and deals hole cards.
    pub fn new_hand(&mut self) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.community.clear();
        self.phase = Phase::PreFlop;
        self.pot = 0;
        self.current_bet = 0;
        self.last_raiser = None;
        self.last_showdown = None;
        self.active_players = self.players.iter().filter(|p| !p.is_folded()).count();
        self.dealer = (self.dealer + 1) % MAX_PLAYERS;
        self.hands_played += 1;
        self.record = empty_record(self.seed, self.dealer);

        match self.rigged.take() {
            Some(deck) => self.deck = deck,
            None => {
                self.deck.reset();
                self.deck.shuffle(&mut self.rng);
            }
        }

        // One card per seat per pass, seats sitting out are skipped
        let mut holes = [[None; 2]; MAX_PLAYERS];
        for pass in 0..2 {
            for (seat, hole) in holes.iter_mut().enumerate() {
                if !self.players[seat].is_folded() {
                    hole[pass] = Some(self.deck.deal_next()?);
                }
            }
        }
        for (p, hole) in self.players.iter_mut().zip(holes) {
            p.set_hole(hole);
        }

        self.current = self
            .next_actor_after(self.dealer)
            .unwrap_or((self.dealer + 1) % MAX_PLAYERS);
        info!(
            hand = self.hands_played,
            dealer = self.dealer,
            first_actor = self.current,
            active = self.active_players,
            "new hand dealt"
        );
        Ok(())
    }

    /// Validates and applies an action for `seat`, then advances turn and phase.
    /// A rejected action leaves the state unchanged.
    pub fn submit_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let validated = self.validate(seat, action)?;
        // a call with nothing owed is recorded as the check it is
        let action = match validated {
            ValidatedAction::Check => PlayerAction::Check,
            _ => action,
        };

        let phase = self.phase;
        let player = &mut self.players[seat];
        let amount = match validated {
            ValidatedAction::Fold => {
                player.fold();
                self.active_players -= 1;
                0
            }
            ValidatedAction::Check => 0,
            ValidatedAction::Call(owed) => player.commit(owed),
            ValidatedAction::Raise { target, delta } => {
                player.commit(delta);
                self.current_bet = target;
                self.last_raiser = Some(seat);
                target
            }
        };
        player.record(action);
        let all_in = player.is_all_in();
        let name = player.name().to_string();

        if matches!(validated, ValidatedAction::Raise { .. }) {
            // Everyone else must respond to the new bet
            for (i, p) in self.players.iter_mut().enumerate() {
                if i != seat && p.can_act() {
                    p.clear_acted();
                }
            }
        }

        debug!(seat, ?action, amount, all_in, ?phase, "action applied");
        self.record.actions.push(ActionRecord {
            seat,
            phase,
            action,
        });
        self.events.push(TableEvent::Acted {
            seat,
            name,
            action,
            amount,
            all_in,
        });

        self.advance(seat)
    }

    fn validate(&self, seat: usize, action: PlayerAction) -> Result<ValidatedAction, IllegalAction> {
        if self.phase == Phase::Showdown {
            return Err(IllegalAction::HandNotInProgress);
        }
        let player = self
            .players
            .get(seat)
            .ok_or(IllegalAction::NotPlayersTurn {
                expected: self.current,
                actual: seat,
            })?;
        if player.is_folded() {
            return Err(IllegalAction::SeatFolded(seat));
        }
        if player.is_all_in() {
            return Err(IllegalAction::SeatAllIn(seat));
        }
        if seat != self.current {
            return Err(IllegalAction::NotPlayersTurn {
                expected: self.current,
                actual: seat,
            });
        }
        validate_action(&self.bet_context(seat), action)
    }

    /// Stack and bet figures the rules need for `seat`.
    pub fn bet_context(&self, seat: usize) -> BetContext {
        let p = &self.players[seat];
        BetContext {
            stack: p.chips(),
            committed: p.bet(),
            current_bet: self.current_bet,
            min_target: self.min_raise_target(),
        }
    }

    fn advance(&mut self, last_seat: usize) -> Result<(), GameError> {
        if self.active_players <= 1 {
            self.sweep_bets();
            return self.showdown();
        }
        if !self.is_round_complete() {
            if let Some(next) = self.next_actor_after(last_seat) {
                self.current = next;
                trace!(next, "turn passes");
                return Ok(());
            }
        }
        self.sweep_bets();
        if self.players.iter().filter(|p| p.can_act()).count() < 2 {
            return self.run_out_board();
        }
        self.advance_phase()
    }

    /// Every seat still able to bet has acted since the last raise and matched the
    /// highest bet among non-folded seats.
    pub fn is_round_complete(&self) -> bool {
        let max_bet = self
            .players
            .iter()
            .filter(|p| !p.is_folded())
            .map(Player::bet)
            .max()
            .unwrap_or(0);
        self.players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.has_acted() && p.bet() == max_bet)
    }

    fn sweep_bets(&mut self) {
        for p in &mut self.players {
            self.pot += p.take_bet();
            p.reset_for_round();
        }
        self.current_bet = 0;
    }

    fn advance_phase(&mut self) -> Result<(), GameError> {
        let (next, count) = match self.phase {
            Phase::PreFlop => (Phase::Flop, 3),
            Phase::Flop => (Phase::Turn, 1),
            Phase::Turn => (Phase::River, 1),
            Phase::River | Phase::Showdown => return self.showdown(),
        };
        self.deal_community(next, count)?;
        self.current = self
            .next_actor_after(self.dealer)
            .ok_or(GameError::DegenerateShowdown)?;
        debug!(phase = ?self.phase, first_actor = self.current, pot = self.pot, "phase advanced");
        Ok(())
    }

    /// Deals the remaining streets without betting once nobody can respond.
    fn run_out_board(&mut self) -> Result<(), GameError> {
        while self.community.len() < COMMUNITY_SIZE {
            let (next, count) = match self.phase {
                Phase::PreFlop => (Phase::Flop, 3),
                Phase::Flop => (Phase::Turn, 1),
                _ => (Phase::River, 1),
            };
            self.deal_community(next, count)?;
        }
        debug!("board run out, no further betting possible");
        self.showdown()
    }

    fn deal_community(&mut self, phase: Phase, count: usize) -> Result<(), GameError> {
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            dealt.push(self.deck.deal_next()?);
        }
        trace!(?phase, cards = ?dealt, "community dealt");
        self.community.extend_from_slice(&dealt);
        self.record.board = self.community.clone();
        self.phase = phase;
        self.events.push(TableEvent::Dealt {
            phase,
            cards: dealt,
        });
        Ok(())
    }

    /// Compares all non-folded hands and splits the pot among the best.
    fn showdown(&mut self) -> Result<(), GameError> {
        self.phase = Phase::Showdown;
        let contenders: Vec<usize> = self
            .seats_from(self.dealer + 1)
            .filter(|&s| !self.players[s].is_folded())
            .collect();
        if contenders.is_empty() {
            warn!("showdown reached with no contenders");
            return Err(GameError::DegenerateShowdown);
        }

        let mut hands = Vec::new();
        let winners = if contenders.len() == 1 {
            contenders.clone()
        } else {
            for &s in &contenders {
                let hole = self.players[s]
                    .hand()
                    .ok_or(GameError::DegenerateShowdown)?;
                hands.push((s, evaluate_hand(&hole, &self.community)));
            }
            let best = hands
                .iter()
                .map(|(_, h)| *h)
                .max()
                .ok_or(GameError::DegenerateShowdown)?;
            hands
                .iter()
                .filter(|(_, h)| *h == best)
                .map(|(s, _)| *s)
                .collect()
        };

        let pot = std::mem::take(&mut self.pot);
        let n = winners.len() as u32;
        let share = pot / n;
        let remainder = pot % n;
        for (i, &s) in winners.iter().enumerate() {
            let bonus = u32::from((i as u32) < remainder);
            self.players[s].add_chips(share + bonus);
        }

        if let [winner] = winners[..] {
            let category = hands.iter().find(|(s, _)| *s == winner).map(|(_, h)| h.category);
            self.events.push(TableEvent::Won {
                seat: winner,
                name: self.players[winner].name().to_string(),
                amount: pot,
                category,
            });
        } else {
            self.events.push(TableEvent::SplitPot {
                winners: winners.clone(),
                share,
            });
        }
        info!(?winners, pot, share, remainder, "showdown resolved");

        self.record.showdown = Some(ShowdownInfo {
            winners: winners.clone(),
            pot,
            notes: match (winners.len(), hands.is_empty()) {
                (_, true) => Some("uncontested".to_string()),
                (1, false) => None,
                _ => Some("split pot".to_string()),
            },
        });
        self.last_showdown = Some(ShowdownResult {
            winners,
            pot,
            share,
            remainder,
            hands,
        });

        let funded = self.players.iter().filter(|p| p.chips() > 0).count();
        if self.players[HUMAN_SEAT].chips() == 0 || funded < 2 {
            self.game_over = true;
            self.events.push(TableEvent::GameOver);
            info!(hands = self.hands_played, "game over");
        }
        Ok(())
    }

    /// All seats clockwise starting at `start` (mod table size).
    fn seats_from(&self, start: usize) -> impl Iterator<Item = usize> {
        (0..MAX_PLAYERS).map(move |i| (start + i) % MAX_PLAYERS)
    }

    /// First seat clockwise after `seat` that can still bet.
    fn next_actor_after(&self, seat: usize) -> Option<usize> {
        self.seats_from(seat + 1).find(|&s| self.players[s].can_act())
    }
}

fn empty_record(seed: Option<u64>, dealer: usize) -> HandRecord {
    HandRecord {
        hand_id: String::new(),
        seed,
        dealer,
        actions: Vec::new(),
        board: Vec::new(),
        ts: None,
        showdown: None,
    }
}
