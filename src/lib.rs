//! A concentration (memory) card-matching game engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that runs the whole rule set: deck
//! construction for each [`Theme`], card reveals, pair scoring with a bonus
//! for the final pairs, turn passing, and the ranking at game over. Rendering
//! is left to the caller, which reads [`Snapshot`]s and reacts to
//! [`GameEvent`]s.
//!
//! # Example
//!
//! ```
//! use concentration::{Game, GameOptions, GameState, Player, RevealOutcome, Theme};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_game(vec![Player::new("Aiko"), Player::new("Ben")], Theme::Standard)?;
//!
//! let first = game.deck()[0];
//! let partner = game
//!     .deck()
//!     .iter()
//!     .copied()
//!     .find(|card| card.pairs_with(&first))
//!     .expect("every card has a partner");
//!
//! game.reveal_card(first.id);
//! let outcome = game.reveal_card(partner.id);
//! assert_eq!(outcome, RevealOutcome::Matched { player_index: 0, points: 1 });
//! assert_eq!(game.pairs_remaining(), 25);
//! assert_eq!(game.state(), GameState::InProgress);
//! # Ok::<(), concentration::StartError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{
    Card, CardId, DECK_SIZE, Face, MatchKey, PAIR_COUNT, Suit, SuitColor, Theme, build_deck,
};
pub use error::StartError;
pub use event::{GameEvent, GameObserver};
pub use game::{
    Game, GameState, MAX_PLAYERS, MIN_PLAYERS, RevealOutcome, RevealRejection, Snapshot,
};
pub use options::GameOptions;
pub use player::Player;
pub use result::{Medal, Outcome, Placement, Standings};
