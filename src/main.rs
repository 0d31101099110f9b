//! Console blackjack: one hand against the house dealer.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Game, console};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Err(err) = console::play_hand(&mut game, &mut input, &mut output) {
        eprintln!("{err}");
    }
}
