//! Game state types.

use alloc::vec::Vec;

use crate::card::{Card, CardId, Theme};
use crate::player::Player;
use crate::result::Standings;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Waiting for a roster at setup.
    #[default]
    NotStarted,
    /// Cards can be revealed.
    InProgress,
    /// All pairs were found.
    GameOver,
}

/// Why a reveal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealRejection {
    /// No game is in progress.
    NotStarted,
    /// A mismatched pair is waiting to be hidden.
    InputLocked,
    /// The card was already matched.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyRevealed,
    /// Two cards are already face up.
    TwoRevealed,
}

/// Result of [`Game::reveal_card`](super::Game::reveal_card).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The command was ignored and nothing changed.
    Rejected(RevealRejection),
    /// The first card of the turn is face up.
    FirstCard,
    /// The second card completed a pair.
    Matched {
        /// Seat index of the scoring player.
        player_index: usize,
        /// Points awarded.
        points: u32,
    },
    /// The second card did not match. Input stays locked until
    /// [`Game::hide_mismatch`](super::Game::hide_mismatch).
    Mismatched,
    /// A revealed card was not on the board. Revealed cards were discarded
    /// and input unlocked.
    Reset,
}

impl RevealOutcome {
    /// Returns whether the reveal changed the game.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Read-only copy of everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Current phase.
    pub state: GameState,
    /// Theme of the deck on the board.
    pub theme: Theme,
    /// Cards in board order, matched ones included.
    pub cards: Vec<Card>,
    /// Matched card ids in ascending order.
    pub matched: Vec<CardId>,
    /// Face-up unmatched cards in reveal order.
    pub revealed: Vec<CardId>,
    /// Roster with scores.
    pub players: Vec<Player>,
    /// Seat index of the player to move.
    pub current_player: usize,
    /// Whether reveals and shuffles are blocked.
    pub input_locked: bool,
    /// Pairs still on the board.
    pub pairs_remaining: u8,
    /// Whether a round is being played.
    pub started: bool,
    /// Final ranking once the game is over.
    pub standings: Option<Standings>,
}

impl Snapshot {
    /// Returns whether a card should be drawn face up.
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.revealed.contains(&id) || self.matched.binary_search(&id).is_ok()
    }

    /// Returns whether a card has been matched.
    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.binary_search(&id).is_ok()
    }
}
