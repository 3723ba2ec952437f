//! Game configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjmatch::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stand_value(17)
///     .with_fresh_deck_each_round(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer keeps drawing while their score is below this value.
    pub dealer_stand_value: u8,
    /// Whether every round starts from a full 52-card deck.
    ///
    /// When disabled, one deck lasts the whole session and each round only
    /// reshuffles what is left of it.
    pub fresh_deck_each_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stand_value: 17,
            fresh_deck_each_round: true,
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand_value(18);
    /// assert_eq!(options.dealer_stand_value, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand_value(mut self, value: u8) -> Self {
        self.dealer_stand_value = value;
        self
    }

    /// Sets whether each round gets a full deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjmatch::GameOptions;
    ///
    /// let options = GameOptions::default().with_fresh_deck_each_round(false);
    /// assert_eq!(options.fresh_deck_each_round, false);
    /// ```
    #[must_use]
    pub const fn with_fresh_deck_each_round(mut self, fresh: bool) -> Self {
        self.fresh_deck_each_round = fresh;
        self
    }
}
