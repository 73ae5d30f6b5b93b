//! Notifications emitted by the game for presentation layers.
//!
//! The game never touches a rendering surface. Every command pushes
//! [`GameEvent`]s into a buffer which the caller drains after the command
//! returns, either as values ([`Game::drain_events`]) or through a
//! [`GameObserver`] ([`Game::dispatch_events`]).
//!
//! [`Game::drain_events`]: crate::Game::drain_events
//! [`Game::dispatch_events`]: crate::Game::dispatch_events

use alloc::vec::Vec;

use crate::card::{CardId, Theme};
use crate::result::Standings;

/// Something that happened during a command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A new round began with a freshly shuffled deck.
    Started {
        /// Theme of the deck.
        theme: Theme,
        /// Roster size.
        players: usize,
    },
    /// The board was reshuffled mid-game.
    Shuffled,
    /// A card was turned face up.
    Revealed {
        /// The revealed card.
        card: CardId,
    },
    /// Two revealed cards formed a pair and were scored.
    ///
    /// The cards are already removed in the game state. Any delay before they
    /// disappear on screen is up to the presentation layer.
    MatchResolved {
        /// The matched cards.
        cards: [CardId; 2],
        /// Points awarded.
        points: u32,
        /// Seat index of the scoring player.
        player_index: usize,
    },
    /// Two revealed cards did not match and wait to be hidden.
    Mismatch {
        /// The mismatched cards.
        cards: [CardId; 2],
    },
    /// The turn passed to another player.
    TurnAdvanced {
        /// Seat index of the player now to move.
        player_index: usize,
    },
    /// The last pair was found.
    GameOver {
        /// Final ranking.
        standings: Standings,
    },
    /// Revealed cards could not be found on the board and were discarded.
    ConsistencyReset {
        /// The ids that were revealed at the time.
        cards: Vec<CardId>,
    },
}

impl GameEvent {
    /// Calls the observer hook matching this event.
    pub fn dispatch<O: GameObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            Self::Started { theme, players } => observer.on_started(*theme, *players),
            Self::Shuffled => observer.on_shuffled(),
            Self::Revealed { card } => observer.on_reveal(*card),
            Self::MatchResolved {
                cards,
                points,
                player_index,
            } => observer.on_match_resolved(*cards, *points, *player_index),
            Self::Mismatch { cards } => observer.on_mismatch(*cards),
            Self::TurnAdvanced { player_index } => observer.on_turn_advanced(*player_index),
            Self::GameOver { standings } => observer.on_game_over(standings),
            Self::ConsistencyReset { cards } => observer.on_consistency_reset(cards),
        }
    }
}

/// Receives game notifications. Every hook defaults to doing nothing.
pub trait GameObserver {
    /// A new round began.
    fn on_started(&mut self, _theme: Theme, _players: usize) {}

    /// The board was reshuffled.
    fn on_shuffled(&mut self) {}

    /// A card was turned face up.
    fn on_reveal(&mut self, _card: CardId) {}

    /// A pair was scored.
    fn on_match_resolved(&mut self, _cards: [CardId; 2], _points: u32, _player_index: usize) {}

    /// Two cards did not match.
    fn on_mismatch(&mut self, _cards: [CardId; 2]) {}

    /// The turn passed to `player_index`.
    fn on_turn_advanced(&mut self, _player_index: usize) {}

    /// The game ended.
    fn on_game_over(&mut self, _standings: &Standings) {}

    /// Transient state was reset after an internal inconsistency.
    fn on_consistency_reset(&mut self, _cards: &[CardId]) {}
}
