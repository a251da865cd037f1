//! Render attributes: [`Color`], [`PaintFlags`], [`ColorFilter`] and
//! [`Paint`].

use std::ops::{BitAnd, BitOr, Not};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An ARGB colour packed into a `u32` (0xAARRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Construct an opaque colour from RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Construct from individual ARGB components.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Alpha component.
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// PaintFlags
// ---------------------------------------------------------------------------

/// Bitmask of rendering quality switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaintFlags(pub u32);

impl PaintFlags {
    pub const NONE: Self = Self(0);
    pub const ANTI_ALIAS: Self = Self(1 << 0);
    pub const FILTER_BITMAP: Self = Self(1 << 1);
    pub const DITHER: Self = Self(1 << 2);

    /// Flags a bitmap paint starts with.
    pub const BITMAP_DEFAULT: Self = Self(Self::FILTER_BITMAP.0 | Self::DITHER.0);

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

    /// Return the mask with `other` switched on or off.
    #[inline]
    pub const fn with(self, other: Self, on: bool) -> Self {
        if on {
            Self(self.0 | other.0)
        } else {
            Self(self.0 & !other.0)
        }
    }
}

impl BitOr for PaintFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for PaintFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for PaintFlags {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// ---------------------------------------------------------------------------
// ColorFilter
// ---------------------------------------------------------------------------

/// A per-pixel colour transform applied while drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorFilter {
    /// Replace the RGB of every pixel by the given colour, scaling the
    /// source alpha by the colour's alpha.
    Tint(Color),
    /// Multiply RGB by `mul`, then add `add`, saturating. Alpha is untouched.
    Lighting { mul: Color, add: Color },
}

// ---------------------------------------------------------------------------
// Paint
// ---------------------------------------------------------------------------

/// Rendering attributes handed to a canvas with every draw call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paint {
    pub flags: PaintFlags,
    pub alpha: u8,
    pub color_filter: Option<ColorFilter>,
}

impl Paint {
    /// A paint with the given flags, fully opaque and unfiltered.
    #[inline]
    pub const fn new(flags: PaintFlags) -> Self {
        Self {
            flags,
            alpha: 0xFF,
            color_filter: None,
        }
    }

    #[inline]
    pub const fn is_anti_alias(&self) -> bool {
        self.flags.contains(PaintFlags::ANTI_ALIAS)
    }

    #[inline]
    pub const fn is_filter_bitmap(&self) -> bool {
        self.flags.contains(PaintFlags::FILTER_BITMAP)
    }

    #[inline]
    pub const fn is_dither(&self) -> bool {
        self.flags.contains(PaintFlags::DITHER)
    }

    pub fn set_anti_alias(&mut self, on: bool) {
        self.flags = self.flags.with(PaintFlags::ANTI_ALIAS, on);
    }

    pub fn set_filter_bitmap(&mut self, on: bool) {
        self.flags = self.flags.with(PaintFlags::FILTER_BITMAP, on);
    }

    pub fn set_dither(&mut self, on: bool) {
        self.flags = self.flags.with(PaintFlags::DITHER, on);
    }

    /// Set the alpha (builder).
    #[inline]
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the colour filter (builder).
    #[inline]
    pub const fn with_color_filter(mut self, filter: Option<ColorFilter>) -> Self {
        self.color_filter = filter;
        self
    }
}

impl Default for Paint {
    /// The bitmap default: filtering and dithering on, opaque.
    #[inline]
    fn default() -> Self {
        Self::new(PaintFlags::BITMAP_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_argb(0x80, 0xAB, 0xCD, 0xEF);
        assert_eq!(c.a(), 0x80);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
        assert_eq!(Color::from_rgb(1, 2, 3).a(), 0xFF);
    }

    #[test]
    fn paint_flag_ops() {
        let m = PaintFlags::ANTI_ALIAS | PaintFlags::DITHER;
        assert!(m.contains(PaintFlags::ANTI_ALIAS));
        assert!(!m.contains(PaintFlags::FILTER_BITMAP));
        assert_eq!(m.with(PaintFlags::DITHER, false), PaintFlags::ANTI_ALIAS);
        assert_eq!(m & !PaintFlags::ANTI_ALIAS, PaintFlags::DITHER);
    }

    #[test]
    fn default_paint_filters_and_dithers() {
        let p = Paint::default();
        assert!(p.is_filter_bitmap());
        assert!(p.is_dither());
        assert!(!p.is_anti_alias());
        assert_eq!(p.alpha, 255);
        assert_eq!(p.color_filter, None);
    }

    #[test]
    fn paint_setters() {
        let mut p = Paint::default();
        p.set_anti_alias(true);
        p.set_filter_bitmap(false);
        p.set_dither(false);
        assert_eq!(p.flags, PaintFlags::ANTI_ALIAS);
        let p = p
            .with_alpha(10)
            .with_color_filter(Some(ColorFilter::Tint(Color::WHITE)));
        assert_eq!(p.alpha, 10);
        assert!(p.color_filter.is_some());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn paint_round_trip() {
        let paint = Paint::default()
            .with_alpha(40)
            .with_color_filter(Some(ColorFilter::Lighting {
                mul: Color::from_rgb(1, 2, 3),
                add: Color::BLACK,
            }));
        let json = serde_json::to_string(&paint).unwrap();
        let back: Paint = serde_json::from_str(&json).unwrap();
        assert_eq!(paint, back);
    }

    #[test]
    fn masks_are_plain_numbers() {
        let json = serde_json::to_string(&PaintFlags::BITMAP_DEFAULT).unwrap();
        assert_eq!(json, "6");
        let back: PaintFlags = serde_json::from_str("1").unwrap();
        assert_eq!(back, PaintFlags::ANTI_ALIAS);
    }
}
