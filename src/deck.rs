//! A shuffled deck of 52 cards.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered deck of cards. The top of the deck is the end of the sequence,
/// so drawing pops the last card.
///
/// A single hand can never exhaust 52 cards, so an empty deck is reachable
/// only through [`Deck::from_cards`]; [`Deck::draw`] still reports depletion
/// as `None` rather than leaving it undefined.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards remaining, draw order back to front.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with the given seed.
    ///
    /// The same seed always produces the same order.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck with an explicit card order.
    ///
    /// The last element of `cards` is drawn first. Useful for stacking known
    /// draws in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
