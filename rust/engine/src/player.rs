use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if no bet to call)
    Check,
    /// Call the current bet, or go all-in if the stack is short
    Call,
    /// Raise the seat's total bet for this round to the given amount
    Raise(u32),
}

impl PlayerAction {
    pub fn verb(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "folded",
            PlayerAction::Check => "checked",
            PlayerAction::Call => "called",
            PlayerAction::Raise(_) => "raised",
        }
    }
}

/// Default starting stack size for each player in chips
pub const STARTING_CHIPS: u32 = 1_000;

/// A seat at the table. Chips carry across hands; everything else resets per hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    seat: usize,
    name: String,
    hole: [Option<Card>; 2],
    chips: u32,
    bet: u32,
    folded: bool,
    all_in: bool,
    // acted since the last raise in the current round
    acted: bool,
    last_action: Option<PlayerAction>,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, chips: u32) -> Self {
        Self {
            seat,
            name: name.into(),
            hole: [None, None],
            chips,
            bet: 0,
            folded: false,
            all_in: false,
            acted: false,
            last_action: None,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }
    pub fn last_action(&self) -> Option<PlayerAction> {
        self.last_action
    }

    /// Still eligible to bet this hand.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, once dealt.
    pub fn hand(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub(crate) fn set_hole(&mut self, hole: [Option<Card>; 2]) {
        self.hole = hole;
    }

    /// Clears per-hand state. A seat with no chips sits the hand out as folded.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = [None, None];
        self.bet = 0;
        self.folded = self.chips == 0;
        self.all_in = false;
        self.acted = false;
        self.last_action = None;
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.bet = 0;
        self.acted = false;
    }

    /// Moves up to `amount` chips from the stack into the current bet.
    /// Returns the amount actually committed; marks all-in when the stack empties.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        if amount == 0 {
            return 0;
        }
        let moved = amount.min(self.chips);
        self.chips -= moved;
        self.bet += moved;
        if self.chips == 0 {
            self.all_in = true;
        }
        moved
    }

    pub(crate) fn take_bet(&mut self) -> u32 {
        std::mem::take(&mut self.bet)
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn record(&mut self, action: PlayerAction) {
        self.acted = true;
        self.last_action = Some(action);
    }

    pub(crate) fn clear_acted(&mut self) {
        self.acted = false;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Test and setup hook for arranging specific stacks.
    pub fn set_chips(&mut self, chips: u32) {
        self.chips = chips;
    }
}
