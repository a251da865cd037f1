//! [`DirtyState`]: which derived geometry must be rebuilt before drawing.

/// Pending recomputation for a drawable.
///
/// *Gravity* covers the destination rectangle (bounds or alignment
/// changed); *shader* covers the tiling pattern (tile modes changed).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DirtyState {
    #[default]
    Clean,
    GravityDirty,
    ShaderDirty,
    BothDirty,
}

impl DirtyState {
    #[inline]
    pub const fn is_gravity_dirty(self) -> bool {
        matches!(self, Self::GravityDirty | Self::BothDirty)
    }

    #[inline]
    pub const fn is_shader_dirty(self) -> bool {
        matches!(self, Self::ShaderDirty | Self::BothDirty)
    }

    /// Bounds or gravity changed.
    pub fn mark_gravity(&mut self) {
        *self = match *self {
            Self::Clean | Self::GravityDirty => Self::GravityDirty,
            Self::ShaderDirty | Self::BothDirty => Self::BothDirty,
        };
    }

    /// Tile modes changed.
    pub fn mark_shader(&mut self) {
        *self = match *self {
            Self::Clean | Self::ShaderDirty => Self::ShaderDirty,
            Self::GravityDirty | Self::BothDirty => Self::BothDirty,
        };
    }

    /// Clear the shader flag, returning whether it was set.
    pub fn take_shader(&mut self) -> bool {
        let was = self.is_shader_dirty();
        *self = match *self {
            Self::ShaderDirty => Self::Clean,
            Self::BothDirty => Self::GravityDirty,
            other => other,
        };
        was
    }

    /// Clear the gravity flag, returning whether it was set.
    pub fn take_gravity(&mut self) -> bool {
        let was = self.is_gravity_dirty();
        *self = match *self {
            Self::GravityDirty => Self::Clean,
            Self::BothDirty => Self::ShaderDirty,
            other => other,
        };
        was
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_combine() {
        let mut d = DirtyState::Clean;
        d.mark_gravity();
        assert_eq!(d, DirtyState::GravityDirty);
        d.mark_shader();
        assert_eq!(d, DirtyState::BothDirty);
        d.mark_gravity();
        assert_eq!(d, DirtyState::BothDirty);
    }

    #[test]
    fn take_clears_one_flag() {
        let mut d = DirtyState::BothDirty;
        assert!(d.take_shader());
        assert_eq!(d, DirtyState::GravityDirty);
        assert!(!d.take_shader());
        assert!(d.take_gravity());
        assert_eq!(d, DirtyState::Clean);
        assert!(!d.take_gravity());
    }

    #[test]
    fn shader_then_gravity() {
        let mut d = DirtyState::default();
        d.mark_shader();
        assert!(!d.is_gravity_dirty());
        assert!(!d.take_gravity());
        assert_eq!(d, DirtyState::ShaderDirty);
    }
}
