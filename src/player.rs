//! Player representation.

use alloc::format;
use alloc::string::String;

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Display colour as `0xRRGGBB`. Never read by the rules.
    pub color: u32,
    /// Points scored this round.
    score: u32,
}

impl Player {
    /// Creates a player with a zero score and a black display colour.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: 0,
            score: 0,
        }
    }

    /// Sets the display colour.
    #[must_use]
    pub const fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    pub(crate) const fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) const fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Replaces a blank name with `Player N`, where `N` is the 1-based seat.
    pub(crate) fn fill_default_name(&mut self, seat: usize) {
        if self.name.trim().is_empty() {
            self.name = format!("Player {}", seat + 1);
        }
    }
}
