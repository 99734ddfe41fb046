quantity!(
    /// US dollars.
    Cost, suffix: "USD", precision: 2
);

impl Cost {
    /// Round the cost to whole cents, the way the portal bills it.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}
