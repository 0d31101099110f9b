//! A console blackjack game: one hand against the house dealer.
//!
//! The crate provides a [`Game`] engine that walks one hand through the
//! deal, the player's hit/stand loop, the dealer's fixed drawing rule
//! (draw below 17, stand at 17 or higher), and the showdown. The
//! [`console`] module narrates the hand over any `BufRead`/`Write` pair;
//! the binary wires it to stdin and stdout.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use twentyone::{Game, console};
//!
//! let mut game = Game::new(42);
//! let stdin = io::stdin();
//! let result = console::play_hand(&mut game, &mut stdin.lock(), &mut io::stdout());
//! let _ = result;
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, ConsoleError, DealError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand};
pub use result::{Outcome, RoundResult};
