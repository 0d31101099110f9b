//! Console front-end: prompts, narration, and input parsing.

use std::io::{self, BufRead, Write};

use crate::card::{Card, Suit};
use crate::error::ConsoleError;
use crate::game::{Game, GameState};
use crate::hand;
use crate::result::{Outcome, RoundResult};

/// Plays one full hand, reading decisions from `input` and narrating every
/// event to `output`.
///
/// The player is prompted for `y` (hit) or `n` (stand), case-insensitively;
/// any other token repeats the prompt. If the player busts, the hand ends
/// immediately and the dealer's cards are never revealed.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if `input` closes
/// before the hand finishes.
pub fn play_hand<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> Result<RoundResult, ConsoleError> {
    writeln!(output, "Blackjack begins.")?;
    game.deal()?;

    for card in game.player_hand().cards() {
        writeln!(output, "You drew the {}.", format_card(card))?;
    }
    if let Some(card) = game.dealer_hand().up_card() {
        writeln!(
            output,
            "The dealer's first card is the {}.",
            format_card(card)
        )?;
    }
    writeln!(output, "The dealer's second card is face down.")?;

    while game.state() == GameState::PlayerTurn {
        write!(
            output,
            "Your total is {}. Draw another card? (y/n) ",
            game.player_hand().value()
        )?;
        output.flush()?;

        match read_decision(input)?.as_str() {
            "y" => {
                let card = game.hit()?;
                writeln!(output, "You drew the {}.", format_card(&card))?;
            }
            "n" => game.stand()?,
            // Anything else repeats the prompt.
            _ => {}
        }
    }

    if game.state() == GameState::DealerTurn {
        let drawn = game.dealer_play()?;
        let dealer = game.dealer_hand();

        if let Some(card) = dealer.hole_card() {
            writeln!(
                output,
                "The dealer's face-down card was the {}.",
                format_card(card)
            )?;
        }
        writeln!(
            output,
            "The dealer's total is {}.",
            hand::points(&dealer.cards()[..2])
        )?;

        for (count, card) in drawn.iter().enumerate() {
            writeln!(output, "The dealer drew the {}.", format_card(card))?;
            writeln!(
                output,
                "The dealer's total is {}.",
                hand::points(&dealer.cards()[..3 + count])
            )?;
        }
    }

    let result = game.showdown()?;

    if result.player_bust {
        writeln!(output, "Your total is {}.", result.player_value)?;
        writeln!(output, "Bust. You lose...")?;
        return Ok(result);
    }

    if result.dealer_bust {
        writeln!(
            output,
            "The dealer's total is {}. You win!",
            result.dealer_value
        )?;
    } else {
        match result.outcome {
            Outcome::Win => {
                writeln!(output, "Your total is {}.", result.player_value)?;
                writeln!(
                    output,
                    "The dealer's total is {}. You win!",
                    result.dealer_value
                )?;
            }
            Outcome::Lose => {
                writeln!(output, "Your total is {}.", result.player_value)?;
                writeln!(
                    output,
                    "The dealer's total is {}. You lose...",
                    result.dealer_value
                )?;
            }
            Outcome::Push => writeln!(output, "It's a push.")?,
        }
    }
    writeln!(output, "The hand is over.")?;

    Ok(result)
}

/// Reads one decision line, trimmed and lowercased.
fn read_decision<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the hand finished",
        ));
    }
    Ok(line.trim().to_lowercase())
}

fn format_card(card: &Card) -> String {
    let rank = match card.rank {
        1 => "Ace".to_string(),
        11 => "Jack".to_string(),
        12 => "Queen".to_string(),
        13 => "King".to_string(),
        _ => card.rank.to_string(),
    };

    let suit = match card.suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    };

    format!("{rank} of {suit}")
}
