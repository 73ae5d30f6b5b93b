//! Final standings computed at game over.

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::Player;

/// Medal tier for the top three ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Medal {
    /// First place.
    Gold,
    /// Second place.
    Silver,
    /// Third place.
    Bronze,
}

impl Medal {
    const fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Seat index of the player in the roster.
    pub player_index: usize,
    /// The player's name at game over.
    pub name: String,
    /// Final score.
    pub score: u32,
    /// Competition rank: tied scores share a rank and the next rank skips.
    pub rank: usize,
    /// Medal for ranks 1 to 3.
    pub medal: Option<Medal>,
}

/// How the game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A single player holds the top score.
    Winner(usize),
    /// Two or more players share the top score, listed in seat order.
    Draw(Vec<usize>),
}

/// Ranking of all players at game over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standings {
    /// Players sorted by descending score, ties in seat order.
    pub placements: Vec<Placement>,
    /// Winner or draw.
    pub outcome: Outcome,
}

impl Standings {
    /// Ranks a roster by score.
    #[must_use]
    pub fn from_players(players: &[Player]) -> Self {
        let mut order: Vec<usize> = (0..players.len()).collect();
        // Stable, so ties keep seat order.
        order.sort_by(|&a, &b| players[b].score().cmp(&players[a].score()));

        let mut placements: Vec<Placement> = Vec::with_capacity(order.len());
        for (position, &player_index) in order.iter().enumerate() {
            let player = &players[player_index];
            let rank = match placements.last() {
                Some(prev) if prev.score == player.score() => prev.rank,
                _ => position + 1,
            };
            placements.push(Placement {
                player_index,
                name: player.name.clone(),
                score: player.score(),
                rank,
                medal: Medal::for_rank(rank),
            });
        }

        let mut top: Vec<usize> = placements
            .iter()
            .take_while(|p| p.rank == 1)
            .map(|p| p.player_index)
            .collect();
        top.sort_unstable();

        let outcome = if top.len() == 1 {
            Outcome::Winner(top[0])
        } else {
            Outcome::Draw(top)
        };

        Self {
            placements,
            outcome,
        }
    }

    /// Returns the seat indices of every player tied at the top score.
    #[must_use]
    pub fn winners(&self) -> &[usize] {
        match &self.outcome {
            Outcome::Winner(index) => core::slice::from_ref(index),
            Outcome::Draw(indices) => indices,
        }
    }

    /// Returns whether the top score is shared.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self.outcome, Outcome::Draw(_))
    }

    /// Returns the placements that earned a medal.
    pub fn medalists(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| p.medal.is_some())
    }

    /// Returns the placements below the medal tiers.
    pub fn others(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| p.medal.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(scores: &[u32]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(seat, &score)| {
                let mut player = Player::new(alloc::format!("p{seat}"));
                player.add_points(score);
                player
            })
            .collect()
    }

    #[test]
    fn single_winner() {
        let standings = Standings::from_players(&roster(&[10, 21]));
        assert_eq!(standings.outcome, Outcome::Winner(1));
        assert!(!standings.is_draw());
        assert_eq!(standings.placements[0].name, "p1");
        assert_eq!(standings.placements[1].rank, 2);
    }

    #[test]
    fn draw_lists_tied_seats_in_order() {
        let standings = Standings::from_players(&roster(&[5, 13, 13]));
        assert_eq!(standings.outcome, Outcome::Draw(vec![1, 2]));
        assert_eq!(standings.winners(), &[1, 2]);
    }

    #[test]
    fn competition_ranks_and_medals() {
        let standings = Standings::from_players(&roster(&[8, 12, 8, 3, 0]));
        let ranks: Vec<(usize, usize, Option<Medal>)> = standings
            .placements
            .iter()
            .map(|p| (p.player_index, p.rank, p.medal))
            .collect();

        assert_eq!(
            ranks,
            vec![
                (1, 1, Some(Medal::Gold)),
                (0, 2, Some(Medal::Silver)),
                (2, 2, Some(Medal::Silver)),
                (3, 4, None),
                (4, 5, None),
            ]
        );
        assert_eq!(standings.medalists().count(), 3);
        assert_eq!(standings.others().count(), 2);
    }

    #[test]
    fn all_zero_is_a_draw() {
        let standings = Standings::from_players(&roster(&[0, 0]));
        assert!(standings.is_draw());
        assert!(standings.placements.iter().all(|p| p.rank == 1));
    }
}
