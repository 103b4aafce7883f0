use crate::transfer::gamma_srgb;
use std::ops::Index;

/// Number of entries, one per 8-bit level.
pub const TABLE_LEN: usize = 256;

/// Lookup table mapping each 8-bit input level to its corrected level.
///
/// Entry `i` holds the output for input level `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTable([u8; TABLE_LEN]);

impl GammaTable {
    /// Build the sRGB table by applying [`gamma_srgb`] to levels `0..=255` in order.
    #[must_use]
    #[profiling::function]
    pub fn srgb() -> Self {
        Self(std::array::from_fn(|idx| {
            // idx < TABLE_LEN, so it always fits in a level.
            gamma_srgb(idx as u8)
        }))
    }

    /// Corrected value for `level`.
    #[must_use]
    pub const fn get(&self, level: u8) -> u8 {
        self.0[level as usize]
    }

    /// All entries, in level order.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Iterate on `(level, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..=u8::MAX).zip(self.0.iter().copied())
    }
}

impl From<[u8; TABLE_LEN]> for GammaTable {
    fn from(values: [u8; TABLE_LEN]) -> Self {
        Self(values)
    }
}

impl Index<u8> for GammaTable {
    type Output = u8;

    fn index(&self, level: u8) -> &Self::Output {
        &self.0[usize::from(level)]
    }
}
