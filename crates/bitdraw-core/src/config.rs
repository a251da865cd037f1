//! [`ConfigMask`]: which host configuration changes a drawable depends on.
//!
//! The mask is opaque to bitdraw. It is stored and merged so that caching
//! layers above can decide when a cached drawable must be rebuilt.

use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitmask of host configuration aspects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigMask(pub u32);

impl ConfigMask {
    pub const NONE: Self = Self(0);
    pub const LOCALE: Self = Self(1 << 2);
    pub const KEYBOARD: Self = Self(1 << 4);
    pub const ORIENTATION: Self = Self(1 << 7);
    pub const SCREEN_LAYOUT: Self = Self(1 << 8);
    pub const UI_MODE: Self = Self(1 << 9);
    pub const SCREEN_SIZE: Self = Self(1 << 10);
    pub const DENSITY: Self = Self(1 << 12);
    pub const LAYOUT_DIRECTION: Self = Self(1 << 13);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ConfigMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ConfigMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ConfigMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_masks() {
        let mut m = ConfigMask::ORIENTATION;
        m |= ConfigMask::DENSITY;
        assert!(m.contains(ConfigMask::ORIENTATION | ConfigMask::DENSITY));
        assert!(!m.contains(ConfigMask::LOCALE));
        assert!(ConfigMask::default().is_empty());
    }
}
