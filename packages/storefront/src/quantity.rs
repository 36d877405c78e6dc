/// Number of tokens the user asks to mint. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantity(u32);

impl Default for Quantity {
    fn default() -> Self {
        Quantity(1)
    }
}

impl Quantity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Clamps into `[1, max]`. With nothing left to mint (`max == 0`) the value stays 1.
    pub fn clamp(self, max: u64) -> Self {
        let max = max.min(u32::MAX as u64) as u32;
        Quantity(self.0.min(max).max(1))
    }

    pub fn increment(self, max: u64) -> Self {
        Quantity(self.0.saturating_add(1)).clamp(max)
    }

    pub fn decrement(self, max: u64) -> Self {
        Quantity(self.0.saturating_sub(1)).clamp(max)
    }

    /// Mirrors the enabled state of the `+` button
    pub fn can_increment(self, max: u64, sold_out: bool) -> bool {
        !sold_out && u64::from(self.0) < max
    }

    /// Mirrors the enabled state of the `-` button
    pub fn can_decrement(self, sold_out: bool) -> bool {
        !sold_out && self.0 > 1
    }
}
