use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::event::GameEvent;

use super::{Game, GameState, RevealOutcome, RevealRejection};

impl Game {
    fn check_reveal(&self, id: CardId) -> Result<(), RevealRejection> {
        if self.state != GameState::InProgress {
            return Err(RevealRejection::NotStarted);
        }

        if self.input_locked {
            return Err(RevealRejection::InputLocked);
        }

        if self.matched.contains(&id) {
            return Err(RevealRejection::AlreadyMatched);
        }

        if self.revealed.contains(&id) {
            return Err(RevealRejection::AlreadyRevealed);
        }

        if self.revealed.len() >= 2 {
            return Err(RevealRejection::TwoRevealed);
        }

        Ok(())
    }

    /// Turns a card face up.
    ///
    /// The reveal is ignored if no game is in progress, input is locked, the
    /// card is matched or already face up, or two cards are already face up.
    /// The second card of a turn is resolved immediately: a pair is scored and
    /// the same player continues, a mismatch locks input until
    /// [`Game::hide_mismatch`].
    pub fn reveal_card(&mut self, id: CardId) -> RevealOutcome {
        if let Err(reason) = self.check_reveal(id) {
            tracing::debug!(card = id.raw(), ?reason, "reveal rejected");
            return RevealOutcome::Rejected(reason);
        }

        self.revealed.push(id);
        tracing::debug!(card = id.raw(), player = self.current_player, "card revealed");
        self.emit(GameEvent::Revealed { card: id });

        if self.revealed.len() < 2 {
            return RevealOutcome::FirstCard;
        }

        self.input_locked = true;
        self.resolve_turn()
    }

    fn revealed_pair(&self) -> Option<(Card, Card)> {
        let [first, second] = self.revealed[..] else {
            return None;
        };
        Some((*self.card(first)?, *self.card(second)?))
    }

    /// Resolves the two face-up cards.
    fn resolve_turn(&mut self) -> RevealOutcome {
        let Some((first, second)) = self.revealed_pair() else {
            let cards: Vec<CardId> = core::mem::take(&mut self.revealed);
            self.input_locked = false;
            tracing::warn!(?cards, "revealed cards are not on the board, discarding them");
            self.emit(GameEvent::ConsistencyReset { cards });
            return RevealOutcome::Reset;
        };

        let cards = [first.id, second.id];

        if first.pairs_with(&second) {
            let (player_index, points) = self.score_pair(cards);
            RevealOutcome::Matched {
                player_index,
                points,
            }
        } else {
            tracing::debug!(?cards, player = self.current_player, "mismatch");
            self.emit(GameEvent::Mismatch { cards });
            RevealOutcome::Mismatched
        }
    }

    /// Returns whether exactly two cards are face up and they form a pair.
    #[must_use]
    pub fn is_revealed_match(&self) -> bool {
        self.revealed_pair()
            .is_some_and(|(first, second)| first.pairs_with(&second))
    }

    /// Returns whether [`Game::hide_mismatch`] would be accepted.
    #[must_use]
    pub fn can_hide(&self) -> bool {
        self.state == GameState::InProgress
            && self.revealed.len() == 2
            && !self.is_revealed_match()
    }

    /// Turns a mismatched pair face down and passes the turn to the next seat.
    ///
    /// Returns `false` and does nothing unless exactly two cards are face up
    /// and they do not match.
    pub fn hide_mismatch(&mut self) -> bool {
        if !self.can_hide() {
            tracing::debug!(revealed = self.revealed.len(), "hide rejected");
            return false;
        }

        self.revealed.clear();
        self.current_player = (self.current_player + 1) % self.players.len();
        self.input_locked = false;

        tracing::debug!(player = self.current_player, "turn advanced");
        self.emit(GameEvent::TurnAdvanced {
            player_index: self.current_player,
        });
        true
    }
}
