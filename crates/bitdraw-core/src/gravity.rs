//! [`Gravity`]: how content of a known size is placed inside a container.
//!
//! Each axis owns four bits: *specified*, *pull before* (towards the start
//! edge), *pull after* (towards the end edge) and *clip*. The X axis uses the
//! low nibble, the Y axis the next one.
//!
//! Resolution per axis:
//!
//! | pull before | pull after | result |
//! |---|---|---|
//! | no  | no  | [`AxisAlign::Center`] |
//! | yes | no  | [`AxisAlign::Start`] |
//! | no  | yes | [`AxisAlign::End`] |
//! | yes | yes | [`AxisAlign::Fill`] |
//!
//! So combining `LEFT | RIGHT` is the same as `FILL_HORIZONTAL`, and
//! `LEFT | CENTER_HORIZONTAL` is the same as `LEFT`.

use std::ops::{BitAnd, BitOr};

use crate::geom::{Point, Rect};

/// Bit positions shared by both axes.
pub const AXIS_SPECIFIED: u32 = 0x0001;
pub const AXIS_PULL_BEFORE: u32 = 0x0002;
pub const AXIS_PULL_AFTER: u32 = 0x0004;
pub const AXIS_CLIP: u32 = 0x0008;

/// Shift of the X axis nibble.
pub const AXIS_X_SHIFT: u32 = 0;
/// Shift of the Y axis nibble.
pub const AXIS_Y_SHIFT: u32 = 4;

// ---------------------------------------------------------------------------
// Gravity
// ---------------------------------------------------------------------------

/// Bitmask describing alignment or stretching within a container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gravity(pub u32);

impl Gravity {
    pub const NO_GRAVITY: Self = Self(0);

    pub const CENTER_HORIZONTAL: Self = Self(AXIS_SPECIFIED << AXIS_X_SHIFT);
    pub const LEFT: Self = Self((AXIS_PULL_BEFORE | AXIS_SPECIFIED) << AXIS_X_SHIFT);
    pub const RIGHT: Self = Self((AXIS_PULL_AFTER | AXIS_SPECIFIED) << AXIS_X_SHIFT);
    pub const FILL_HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    pub const CLIP_HORIZONTAL: Self = Self(AXIS_CLIP << AXIS_X_SHIFT);

    pub const CENTER_VERTICAL: Self = Self(AXIS_SPECIFIED << AXIS_Y_SHIFT);
    pub const TOP: Self = Self((AXIS_PULL_BEFORE | AXIS_SPECIFIED) << AXIS_Y_SHIFT);
    pub const BOTTOM: Self = Self((AXIS_PULL_AFTER | AXIS_SPECIFIED) << AXIS_Y_SHIFT);
    pub const FILL_VERTICAL: Self = Self(Self::TOP.0 | Self::BOTTOM.0);
    pub const CLIP_VERTICAL: Self = Self(AXIS_CLIP << AXIS_Y_SHIFT);

    pub const CENTER: Self = Self(Self::CENTER_HORIZONTAL.0 | Self::CENTER_VERTICAL.0);
    pub const FILL: Self = Self(Self::FILL_HORIZONTAL.0 | Self::FILL_VERTICAL.0);

    /// Whether this gravity contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether both axes stretch to the container.
    #[inline]
    pub const fn is_fill(self) -> bool {
        self.contains(Self::FILL)
    }

    /// Resolved horizontal alignment.
    #[inline]
    pub const fn horizontal(self) -> AxisAlign {
        AxisAlign::from_bits(self.0 >> AXIS_X_SHIFT)
    }

    /// Resolved vertical alignment.
    #[inline]
    pub const fn vertical(self) -> AxisAlign {
        AxisAlign::from_bits(self.0 >> AXIS_Y_SHIFT)
    }

    /// Whether the horizontal result is clipped to the container.
    #[inline]
    pub const fn clips_horizontal(self) -> bool {
        self.contains(Self::CLIP_HORIZONTAL)
    }

    /// Whether the vertical result is clipped to the container.
    #[inline]
    pub const fn clips_vertical(self) -> bool {
        self.contains(Self::CLIP_VERTICAL)
    }

    /// Compute where content of size `width × height` lands in `container`.
    ///
    /// Shorthand for [`apply`].
    #[inline]
    pub fn apply(self, width: i32, height: i32, container: Rect) -> Rect {
        apply(self, width, height, container)
    }
}

impl Default for Gravity {
    #[inline]
    fn default() -> Self {
        Self::FILL
    }
}

impl BitOr for Gravity {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Gravity {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// AxisAlign
// ---------------------------------------------------------------------------

/// Placement of content along a single axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisAlign {
    Start,
    Center,
    End,
    Fill,
}

impl AxisAlign {
    const fn from_bits(nibble: u32) -> Self {
        match nibble & (AXIS_PULL_BEFORE | AXIS_PULL_AFTER) {
            0 => Self::Center,
            AXIS_PULL_BEFORE => Self::Start,
            AXIS_PULL_AFTER => Self::End,
            _ => Self::Fill,
        }
    }

    /// Resolve `[start, end)` for content of length `len` in `[min, max)`.
    ///
    /// Computed in i64; edges that leave the i32 range saturate.
    fn place(self, len: i32, min: i32, max: i32, clip: bool) -> (i32, i32) {
        let (len, lo, hi) = (i64::from(len), i64::from(min), i64::from(max));
        let (start, end) = match self {
            Self::Fill => return (min, max),
            Self::Start => (lo, lo + len),
            Self::End => (hi - len, hi),
            Self::Center => {
                let start = lo + (hi - lo - len) / 2;
                (start, start + len)
            }
        };
        let (start, end) = if clip { (start.max(lo), end.min(hi)) } else { (start, end) };
        (saturate(start), saturate(end))
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Place content of size `width × height` inside `container`.
///
/// A negative size means "unknown" and yields `container` unchanged. Aligned
/// (non-filling) axes keep the content's natural length and may overflow the
/// container unless that axis' clip bit is set.
pub fn apply(gravity: Gravity, width: i32, height: i32, container: Rect) -> Rect {
    if width < 0 || height < 0 {
        return container;
    }
    let (x0, x1) = gravity.horizontal().place(
        width,
        container.min.x,
        container.max.x,
        gravity.clips_horizontal(),
    );
    let (y0, y1) = gravity.vertical().place(
        height,
        container.min.y,
        container.max.y,
        gravity.clips_vertical(),
    );
    Rect {
        min: Point::new(x0, y0),
        max: Point::new(x1, y1),
    }
}
