use crate::errors::IllegalAction;
use crate::player::PlayerAction as A;

/// An action checked against the seat's stack and the table bet, with the
/// chip movement it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved from the stack; less than owed when the call is all-in
    Call(u32),
    /// New total bet and the chips it moves from the stack
    Raise { target: u32, delta: u32 },
}

/// Betting context for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Chips behind
    pub stack: u32,
    /// Chips already committed this round
    pub committed: u32,
    /// Highest bet on the table this round
    pub current_bet: u32,
    /// Smallest legal raise target
    pub min_target: u32,
}

impl BetContext {
    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.committed)
    }
}

/// Validates a player action according to betting rules and stack size.
///
/// # Errors
///
/// - [`IllegalAction::CheckFacingBet`] - check while a bet is owed
/// - [`IllegalAction::RaiseTooSmall`] - raise target not above the table bet, or
///   below the minimum without being all-in
/// - [`IllegalAction::InsufficientChips`] - raise target beyond the stack
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, BetContext, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let ctx = BetContext { stack: 1000, committed: 0, current_bet: 50, min_target: 100 };
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(50)));
/// assert_eq!(
///     validate_action(&ctx, PlayerAction::Raise(100)),
///     Ok(ValidatedAction::Raise { target: 100, delta: 100 })
/// );
/// assert!(validate_action(&ctx, PlayerAction::Check).is_err());
/// ```
pub fn validate_action(ctx: &BetContext, action: A) -> Result<ValidatedAction, IllegalAction> {
    let to_call = ctx.to_call();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(IllegalAction::CheckFacingBet { to_call })
            }
        }
        // Nothing owed: calling is checking
        A::Call if to_call == 0 => Ok(ValidatedAction::Check),
        A::Call => Ok(ValidatedAction::Call(to_call.min(ctx.stack))),
        A::Raise(target) => {
            let minimum = ctx.min_target;
            if target <= ctx.current_bet {
                return Err(IllegalAction::RaiseTooSmall { target, minimum });
            }
            let delta = target.saturating_sub(ctx.committed);
            if delta > ctx.stack {
                return Err(IllegalAction::InsufficientChips {
                    needed: delta,
                    available: ctx.stack,
                });
            }
            // A short raise is allowed only as an all-in
            if target < minimum && delta != ctx.stack {
                return Err(IllegalAction::RaiseTooSmall { target, minimum });
            }
            Ok(ValidatedAction::Raise { target, delta })
        }
    }
}
