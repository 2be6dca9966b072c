//! Rolling aggression estimates for the other seats at the table.

use holdem_engine::game::MAX_PLAYERS;
use holdem_engine::player::PlayerAction;

/// Starting estimate for every seat.
pub const NEUTRAL_AGGRESSION: f32 = 0.5;
pub const MIN_AGGRESSION: f32 = 0.1;
pub const MAX_AGGRESSION: f32 = 0.9;

/// One aggression scalar per seat, kept in `[0.1, 0.9]`.
///
/// Each observed action pulls the estimate toward an action-specific target:
///
/// ```
/// use holdem_ai::opponent::OpponentModel;
/// use holdem_engine::player::PlayerAction;
///
/// let mut model = OpponentModel::new();
/// model.observe(2, PlayerAction::Raise(40));
/// assert!((model.aggression(2) - 0.56).abs() < 1e-6);
/// model.observe(2, PlayerAction::Check);
/// assert!((model.aggression(2) - 0.56).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentModel {
    aggression: [f32; MAX_PLAYERS],
}

impl Default for OpponentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentModel {
    pub fn new() -> Self {
        Self {
            aggression: [NEUTRAL_AGGRESSION; MAX_PLAYERS],
        }
    }

    /// Current estimate for `seat`; out-of-range seats read as neutral.
    pub fn aggression(&self, seat: usize) -> f32 {
        self.aggression
            .get(seat)
            .copied()
            .unwrap_or(NEUTRAL_AGGRESSION)
    }

    pub fn estimates(&self) -> &[f32; MAX_PLAYERS] {
        &self.aggression
    }

    /// Folds decay the estimate, calls drift toward 0.4, raises toward 0.8.
    pub fn observe(&mut self, seat: usize, action: PlayerAction) {
        let Some(slot) = self.aggression.get_mut(seat) else {
            return;
        };
        let old = *slot;
        let updated = match action {
            PlayerAction::Fold => old * 0.95,
            PlayerAction::Check => return,
            PlayerAction::Call => old * 0.9 + 0.4 * 0.1,
            PlayerAction::Raise(_) => old * 0.8 + 0.8 * 0.2,
        };
        *slot = updated.clamp(MIN_AGGRESSION, MAX_AGGRESSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_neutral() {
        let model = OpponentModel::new();
        assert!(model.estimates().iter().all(|&a| a == NEUTRAL_AGGRESSION));
    }

    #[test]
    fn repeated_folds_bottom_out_at_the_floor() {
        let mut model = OpponentModel::new();
        for _ in 0..200 {
            model.observe(1, PlayerAction::Fold);
        }
        assert_eq!(model.aggression(1), MIN_AGGRESSION);
    }

    #[test]
    fn repeated_raises_approach_but_never_exceed_the_target() {
        let mut model = OpponentModel::new();
        for _ in 0..200 {
            model.observe(3, PlayerAction::Raise(100));
        }
        let a = model.aggression(3);
        assert!(a <= MAX_AGGRESSION);
        assert!((a - 0.8).abs() < 1e-3);
    }

    #[test]
    fn call_blends_toward_point_four() {
        let mut model = OpponentModel::new();
        model.observe(0, PlayerAction::Call);
        assert!((model.aggression(0) - 0.49).abs() < 1e-6);
    }

    #[test]
    fn unknown_seat_is_ignored() {
        let mut model = OpponentModel::new();
        model.observe(9, PlayerAction::Raise(10));
        assert_eq!(model, OpponentModel::new());
        assert_eq!(model.aggression(9), NEUTRAL_AGGRESSION);
    }
}
