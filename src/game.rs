//! Game engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError, ShowdownError};
use crate::hand::{DealerHand, Hand};
use crate::result::{Outcome, RoundResult};

/// The dealer draws while below this value and stands at or above it,
/// regardless of whether the hand is soft.
const DEALER_STAND: u8 = 17;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The hand has ended and the result can be read.
    Resolved,
}

/// A single-hand blackjack game engine.
///
/// The game owns the deck and both hands and walks through one hand:
/// deal, player turn, dealer turn, showdown. It is single-use; play a new
/// hand by constructing a new game.
#[derive(Debug)]
pub struct Game {
    /// Cards remaining in the deck.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Current game state.
    state: GameState,
}

impl Game {
    /// Creates a new game with a fresh deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Game;
    ///
    /// let mut game = Game::new(42);
    /// game.deal().expect("a fresh deck has enough cards");
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::shuffled(seed))
    }

    /// Creates a new game over an explicit deck.
    ///
    /// Lets tests stack the deck so every draw is known in advance.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: GameState::Dealing,
        }
    }

    /// Deals two cards each, alternating player, dealer, player, dealer,
    /// then hands the turn to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards were already dealt or the deck holds
    /// fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
            self.player.add_card(card);
            let card = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card. If the card busts the hand, the game resolves
    /// immediately and the dealer never plays out their hand. A hand sitting
    /// at exactly 21 may keep hitting.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.state = GameState::Resolved;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// The dealer's turn still runs before the outcome is decided.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher, soft or not. Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < DEALER_STAND {
            let card = self.deck.draw().ok_or(ShowdownError::NoCards)?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.state = GameState::Resolved;
        Ok(drawn_cards)
    }

    /// Compares the final hands and reports the outcome.
    ///
    /// Precedence, first match wins: player bust loses; dealer bust wins;
    /// higher value wins; equal values push.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has not resolved yet.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let player_bust = self.player.is_bust();
        let dealer_bust = self.dealer.is_bust();

        let outcome = if player_bust {
            Outcome::Lose
        } else if dealer_bust {
            Outcome::Win
        } else if player_value > dealer_value {
            Outcome::Win
        } else if player_value < dealer_value {
            Outcome::Lose
        } else {
            Outcome::Push
        };

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
