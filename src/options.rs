//! Game configuration options.

/// Scoring options for a concentration game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use concentration::GameOptions;
///
/// let options = GameOptions::default()
///     .with_pair_points(10)
///     .with_bonus_pair_points(30)
///     .with_bonus_pairs(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Points for an ordinary pair.
    pub pair_points: u32,
    /// Points for a pair found while the bonus is active.
    pub bonus_pair_points: u32,
    /// The bonus applies when at most this many pairs remain before the match.
    pub bonus_pairs: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            pair_points: 1,
            bonus_pair_points: 2,
            bonus_pairs: 5,
        }
    }
}

impl GameOptions {
    /// Sets the points for an ordinary pair.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_pair_points(3);
    /// assert_eq!(options.pair_points, 3);
    /// ```
    #[must_use]
    pub const fn with_pair_points(mut self, points: u32) -> Self {
        self.pair_points = points;
        self
    }

    /// Sets the points for a bonus pair.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_bonus_pair_points(5);
    /// assert_eq!(options.bonus_pair_points, 5);
    /// ```
    #[must_use]
    pub const fn with_bonus_pair_points(mut self, points: u32) -> Self {
        self.bonus_pair_points = points;
        self
    }

    /// Sets how many of the final pairs score the bonus.
    ///
    /// Zero disables the bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_bonus_pairs(0);
    /// assert_eq!(options.points_for_pair(1), 1);
    /// ```
    #[must_use]
    pub const fn with_bonus_pairs(mut self, pairs: u8) -> Self {
        self.bonus_pairs = pairs;
        self
    }

    /// Returns the points for a match made while `pairs_remaining` pairs are
    /// still on the board, counted before the match is removed.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default();
    /// assert_eq!(options.points_for_pair(6), 1);
    /// assert_eq!(options.points_for_pair(5), 2);
    /// ```
    #[must_use]
    pub const fn points_for_pair(&self, pairs_remaining: u8) -> u32 {
        if pairs_remaining <= self.bonus_pairs {
            self.bonus_pair_points
        } else {
            self.pair_points
        }
    }
}
