//! Display [`Density`] and density-aware size scaling.

use std::fmt;

/// A display or image density in dots per inch.
///
/// `0` ([`Density::NONE`]) means "not density aware": sizes are never scaled
/// to or from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density(pub u32);

impl Density {
    /// No density information.
    pub const NONE: Self = Self(0);
    /// The reference density (medium density screens).
    pub const DEFAULT: Self = Self(160);

    pub const LOW: Self = Self(120);
    pub const HIGH: Self = Self(240);
    pub const XHIGH: Self = Self(320);
    pub const XXHIGH: Self = Self(480);

    /// Normalise a raw dpi value: zero or negative becomes [`Density::DEFAULT`].
    #[inline]
    pub const fn from_dpi(dpi: i32) -> Self {
        if dpi <= 0 { Self::DEFAULT } else { Self(dpi as u32) }
    }

    /// Whether this is [`Density::NONE`].
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Scale a pixel length authored at `source` density to `target`.
    ///
    /// Rounds half up: `(size * target + source / 2) / source`. Lengths are
    /// returned unchanged when either density is [`Density::NONE`] or both
    /// are equal.
    pub fn scale(size: i32, source: Density, target: Density) -> i32 {
        if source.is_none() || target.is_none() || source == target {
            return size;
        }
        let src = i64::from(source.0);
        let scaled = (i64::from(size) * i64::from(target.0) + (src >> 1)) / src;
        scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl Default for Density {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dpi", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_from_mdpi_to_xhdpi() {
        assert_eq!(Density::scale(100, Density::DEFAULT, Density::XHIGH), 200);
        assert_eq!(Density::scale(50, Density::DEFAULT, Density::XHIGH), 100);
    }

    #[test]
    fn rounds_half_up() {
        // 3 * 240 / 160 = 4.5 -> 5
        assert_eq!(Density::scale(3, Density::DEFAULT, Density::HIGH), 5);
        // 1 * 120 / 160 = 0.75 -> 1
        assert_eq!(Density::scale(1, Density::DEFAULT, Density::LOW), 1);
        // 5 * 120 / 160 = 3.75 -> 4
        assert_eq!(Density::scale(5, Density::DEFAULT, Density::LOW), 4);
        // 10 * 160 / 240 = 6.67 -> 7
        assert_eq!(Density::scale(10, Density::HIGH, Density::DEFAULT), 7);
        // 2 * 120 / 160 = 1.5 -> 2
        assert_eq!(Density::scale(2, Density::DEFAULT, Density::LOW), 2);
    }

    #[test]
    fn none_never_scales() {
        assert_eq!(Density::scale(77, Density::NONE, Density::XHIGH), 77);
        assert_eq!(Density::scale(77, Density::HIGH, Density::NONE), 77);
        assert_eq!(Density::scale(77, Density::HIGH, Density::HIGH), 77);
    }

    #[test]
    fn from_dpi_normalises() {
        assert_eq!(Density::from_dpi(0), Density::DEFAULT);
        assert_eq!(Density::from_dpi(-30), Density::DEFAULT);
        assert_eq!(Density::from_dpi(480), Density::XXHIGH);
    }
}
