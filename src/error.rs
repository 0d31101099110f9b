//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for this phase.
    #[error("invalid game state for this phase")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur while running a hand on the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading a decision or writing narration failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The deal was driven in the wrong order.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was driven in the wrong order.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn or showdown was driven in the wrong order.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
