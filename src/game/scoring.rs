use crate::card::CardId;
use crate::event::GameEvent;
use crate::result::Standings;

use super::{Game, GameState};

impl Game {
    /// Returns the points the next pair would score.
    ///
    /// The bonus is decided by the pairs remaining before the pair is removed.
    #[must_use]
    pub const fn points_for_next_pair(&self) -> u32 {
        self.options.points_for_pair(self.pairs_remaining)
    }

    /// Scores a matched pair for the current player.
    ///
    /// The player keeps the turn. Finding the last pair ends the game.
    pub(super) fn score_pair(&mut self, cards: [CardId; 2]) -> (usize, u32) {
        let player_index = self.current_player;
        let points = self.points_for_next_pair();

        if let Some(player) = self.players.get_mut(player_index) {
            player.add_points(points);
        }

        self.matched.extend(cards);
        self.pairs_remaining = self.pairs_remaining.saturating_sub(1);
        self.revealed.clear();
        self.input_locked = false;

        tracing::debug!(
            ?cards,
            player = player_index,
            points,
            pairs_remaining = self.pairs_remaining,
            "pair matched"
        );
        self.emit(GameEvent::MatchResolved {
            cards,
            points,
            player_index,
        });

        if self.pairs_remaining == 0 {
            self.end_game();
        }

        (player_index, points)
    }

    /// Ranks the players and stops the game.
    fn end_game(&mut self) {
        let standings = Standings::from_players(&self.players);
        self.state = GameState::GameOver;

        tracing::info!(
            winners = ?standings.winners(),
            draw = standings.is_draw(),
            "game over"
        );
        self.standings = Some(standings.clone());
        self.emit(GameEvent::GameOver { standings });
    }
}
