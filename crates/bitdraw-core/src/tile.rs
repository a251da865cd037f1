//! Per-axis repetition policy: [`TileMode`].

/// How an image is continued past its edges along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileMode {
    /// Not tiled: the image is stretched or aligned by gravity instead.
    #[default]
    None,
    /// Repeat the edge pixel.
    Clamp,
    /// Repeat the image.
    Repeat,
    /// Repeat the image, mirroring every other copy.
    Mirror,
}

impl TileMode {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// The mode a shader uses for this axis: `None` falls back to `Clamp`.
    #[inline]
    pub const fn or_clamp(self) -> Self {
        match self {
            Self::None => Self::Clamp,
            other => other,
        }
    }

    /// Map coordinate `v` onto `[0, len)` according to this mode.
    ///
    /// `len` must be positive. `None` behaves like `Clamp`.
    pub fn resolve(self, v: i32, len: i32) -> i32 {
        debug_assert!(len > 0);
        match self {
            Self::None | Self::Clamp => v.clamp(0, len - 1),
            Self::Repeat => v.rem_euclid(len),
            Self::Mirror => {
                let m = v.rem_euclid(len * 2);
                if m < len { m } else { len * 2 - 1 - m }
            }
        }
    }
}
