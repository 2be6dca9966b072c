use thiserror::Error;

/// Reasons an action submission is rejected. The game state is left untouched.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum IllegalAction {
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Seat {0} has already folded")]
    SeatFolded(usize),
    #[error("Seat {0} is all-in and cannot act")]
    SeatAllIn(usize),
    #[error("Cannot check while facing a bet of {to_call}")]
    CheckFacingBet { to_call: u32 },
    #[error("Invalid raise target: {target}, minimum: {minimum}")]
    RaiseTooSmall { target: u32, minimum: u32 },
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("No betting round in progress")]
    HandNotInProgress,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Showdown produced no eligible winner")]
    DegenerateShowdown,
    #[error("Game is over")]
    GameOver,
}

impl GameError {
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, GameError::IllegalAction(_))
    }
}
