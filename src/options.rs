//! Game configuration options.

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_points(61)
///     .with_deal_limit(200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Points a player must reach to win (traditionally 121).
    pub winning_points: u32,
    /// Maximum number of deals before the game is declared misconfigured.
    pub deal_limit: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_points: 121,
            deal_limit: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_points(61);
    /// assert_eq!(options.winning_points, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_points(mut self, points: u32) -> Self {
        self.winning_points = points;
        self
    }

    /// Sets the maximum number of deals.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_limit(200);
    /// assert_eq!(options.deal_limit, 200);
    /// ```
    #[must_use]
    pub const fn with_deal_limit(mut self, deals: u32) -> Self {
        self.deal_limit = deals;
        self
    }
}
