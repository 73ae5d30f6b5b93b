//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, CardId, PAIR_COUNT, Theme, build_deck};
use crate::error::StartError;
use crate::event::{GameEvent, GameObserver};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::Standings;

mod scoring;
pub mod state;
mod turn;

pub use state::{GameState, RevealOutcome, RevealRejection, Snapshot};

/// Smallest roster a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Largest roster a game can start with.
pub const MAX_PLAYERS: usize = 10;

/// A concentration game engine that manages the board, the roster, and turns.
///
/// The game owns the deck, the players, the turn pointer, and the scores.
/// Commands take `&mut self` and either complete immediately or are ignored.
/// Notifications accumulate until drained with [`Game::drain_events`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Scoring options.
    pub options: GameOptions,
    /// Cards in board order.
    deck: Vec<Card>,
    /// Theme of the active deck.
    theme: Theme,
    /// Current game state.
    state: GameState,
    /// Seated players.
    players: Vec<Player>,
    /// Ids of cards already paired.
    matched: HashSet<CardId>,
    /// Face-up unmatched cards, at most two.
    revealed: Vec<CardId>,
    /// Seat index of the player to move.
    current_player: usize,
    /// Blocks reveals and shuffles while a mismatch is pending.
    input_locked: bool,
    /// Pairs still on the board.
    pairs_remaining: u8,
    /// Final ranking, set at game over.
    standings: Option<Standings>,
    /// Notifications not yet drained.
    events: Vec<GameEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts in [`GameState::NotStarted`] with an empty board.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Vec::new(),
            theme: Theme::default(),
            state: GameState::NotStarted,
            players: Vec::new(),
            matched: HashSet::new(),
            revealed: Vec::new(),
            current_player: 0,
            input_locked: false,
            pairs_remaining: PAIR_COUNT,
            standings: None,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates and shuffles a deck of the given theme.
    fn create_deck(theme: Theme, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = build_deck(theme);
        cards.shuffle(rng);
        cards
    }

    /// Puts a fresh shuffled deck on the board and clears per-round state.
    fn reset_round(&mut self) {
        self.deck = Self::create_deck(self.theme, &mut self.rng);
        self.matched.clear();
        self.revealed.clear();
        self.current_player = 0;
        self.input_locked = false;
        self.pairs_remaining = PAIR_COUNT;
        self.standings = None;
        for player in &mut self.players {
            player.reset_score();
        }
    }

    fn begin_round(&mut self) {
        self.state = GameState::InProgress;
        tracing::info!(
            theme = ?self.theme,
            players = self.players.len(),
            "round started"
        );
        self.emit(GameEvent::Started {
            theme: self.theme,
            players: self.players.len(),
        });
    }

    const fn validate_roster(len: usize) -> Result<(), StartError> {
        if len < MIN_PLAYERS {
            return Err(StartError::TooFewPlayers {
                min: MIN_PLAYERS,
                got: len,
            });
        }
        if len > MAX_PLAYERS {
            return Err(StartError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: len,
            });
        }
        Ok(())
    }

    /// Starts a new game with the given roster and theme.
    ///
    /// Any game in progress is discarded. Scores start at zero, blank names
    /// become `Player N`, and the first seat moves first.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster has fewer than [`MIN_PLAYERS`] or more
    /// than [`MAX_PLAYERS`] players. The game is left unchanged.
    pub fn start_game(&mut self, roster: Vec<Player>, theme: Theme) -> Result<(), StartError> {
        Self::validate_roster(roster.len())?;

        self.players = roster;
        for (seat, player) in self.players.iter_mut().enumerate() {
            player.fill_default_name(seat);
        }
        self.theme = theme;
        self.reset_round();
        self.begin_round();
        Ok(())
    }

    /// Restarts with a freshly shuffled deck of the active theme.
    ///
    /// With `keep_roster`, names and colours stay, scores return to zero,
    /// and play resumes at once. Otherwise the roster is cleared and the game
    /// waits in [`GameState::NotStarted`] for [`Game::start_game`].
    pub fn restart(&mut self, keep_roster: bool) {
        if !keep_roster {
            self.players.clear();
        }
        self.reset_round();

        if Self::validate_roster(self.players.len()).is_ok() {
            self.begin_round();
        } else {
            self.state = GameState::NotStarted;
            tracing::info!(keep_roster, "returned to setup");
        }
    }

    /// Discards the game and the roster ("new game").
    pub fn return_to_setup(&mut self) {
        self.restart(false);
    }

    /// Reshuffles the cards on the board.
    ///
    /// Matched cards keep their ids and stay matched. Returns `false` and does
    /// nothing unless the game is in progress, no card is face up, and input
    /// is unlocked.
    pub fn shuffle(&mut self) -> bool {
        if !self.can_shuffle() {
            tracing::debug!(
                state = ?self.state,
                revealed = self.revealed.len(),
                locked = self.input_locked,
                "shuffle rejected"
            );
            return false;
        }

        self.deck.shuffle(&mut self.rng);

        tracing::debug!("board shuffled");
        self.emit(GameEvent::Shuffled);
        true
    }

    /// Returns whether [`Game::shuffle`] would be accepted.
    #[must_use]
    pub fn can_shuffle(&self) -> bool {
        self.state == GameState::InProgress && self.revealed.is_empty() && !self.input_locked
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self.state, GameState::InProgress)
    }

    /// Returns whether reveals and shuffles are blocked.
    #[must_use]
    pub const fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Returns the number of pairs still on the board.
    #[must_use]
    pub const fn pairs_remaining(&self) -> u8 {
        self.pairs_remaining
    }

    /// Returns the seat index of the player to move.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the roster.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the theme of the active deck.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the cards in board order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|card| card.id == id)
    }

    /// Returns the face-up unmatched cards in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    /// Returns whether a card has been matched.
    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    /// Returns the number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Returns the final ranking once the game is over.
    #[must_use]
    pub const fn standings(&self) -> Option<&Standings> {
        self.standings.as_ref()
    }

    /// Returns an owned copy of everything needed to draw the game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut matched: Vec<CardId> = self.matched.iter().copied().collect();
        matched.sort_unstable();

        Snapshot {
            state: self.state,
            theme: self.theme,
            cards: self.deck.clone(),
            matched,
            revealed: self.revealed.clone(),
            players: self.players.clone(),
            current_player: self.current_player,
            input_locked: self.input_locked,
            pairs_remaining: self.pairs_remaining,
            started: self.is_started(),
            standings: self.standings.clone(),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Takes every notification emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Drains pending notifications into an observer, oldest first.
    pub fn dispatch_events<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.drain_events() {
            event.dispatch(observer);
        }
    }
}
