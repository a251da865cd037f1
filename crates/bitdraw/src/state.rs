//! Drawable configuration shared between instances: [`BitmapState`] and the
//! copy-on-write [`StateRef`].
//!
//! Drawables created from the same resource hold one `Rc<BitmapState>`.
//! The first time an instance changes its configuration it clones the state
//! into a private copy; the image itself stays shared.

use std::fmt;
use std::rc::Rc;

use bitdraw_core::{ConfigMask, Density, Gravity, Paint, TileMode};

// ---------------------------------------------------------------------------
// StateConfig
// ---------------------------------------------------------------------------

/// The image-independent part of a [`BitmapState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StateConfig {
    pub gravity: Gravity,
    pub tile_mode_x: TileMode,
    pub tile_mode_y: TileMode,
    pub paint: Paint,
    pub target_density: Density,
    pub changing_configurations: ConfigMask,
}

// ---------------------------------------------------------------------------
// BitmapState
// ---------------------------------------------------------------------------

/// Configuration of a bitmap drawable, shareable by reference.
pub struct BitmapState<I: ?Sized> {
    pub image: Option<Rc<I>>,
    pub gravity: Gravity,
    pub tile_mode_x: TileMode,
    pub tile_mode_y: TileMode,
    pub paint: Paint,
    /// Density new drawables built from this state render at.
    pub target_density: Density,
    pub changing_configurations: ConfigMask,
}

impl<I: ?Sized> BitmapState<I> {
    /// Default configuration around `image`.
    pub fn new(image: Option<Rc<I>>) -> Self {
        Self::from_config(image, StateConfig::default())
    }

    /// Build a state from a stored configuration.
    pub fn from_config(image: Option<Rc<I>>, config: StateConfig) -> Self {
        Self {
            image,
            gravity: config.gravity,
            tile_mode_x: config.tile_mode_x,
            tile_mode_y: config.tile_mode_y,
            paint: config.paint,
            target_density: config.target_density,
            changing_configurations: config.changing_configurations,
        }
    }

    /// Snapshot of everything but the image.
    pub fn config(&self) -> StateConfig {
        StateConfig {
            gravity: self.gravity,
            tile_mode_x: self.tile_mode_x,
            tile_mode_y: self.tile_mode_y,
            paint: self.paint,
            target_density: self.target_density,
            changing_configurations: self.changing_configurations,
        }
    }

    /// Set the gravity (builder).
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set both tile modes (builder).
    pub fn with_tile_modes(mut self, x: TileMode, y: TileMode) -> Self {
        self.tile_mode_x = x;
        self.tile_mode_y = y;
        self
    }

    /// Set the paint (builder).
    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    /// Set the target density (builder).
    pub fn with_target_density(mut self, density: Density) -> Self {
        self.target_density = density;
        self
    }

    /// Whether both states use the very same image allocation.
    pub fn shares_image_with(&self, other: &Self) -> bool {
        match (&self.image, &other.image) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<I: ?Sized> Clone for BitmapState<I> {
    /// Copies the configuration; the image is shared, never duplicated.
    fn clone(&self) -> Self {
        Self::from_config(self.image.clone(), self.config())
    }
}

impl<I: ?Sized> PartialEq for BitmapState<I> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_image_with(other) && self.config() == other.config()
    }
}

impl<I: ?Sized> fmt::Debug for BitmapState<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitmapState")
            .field("has_image", &self.image.is_some())
            .field("config", &self.config())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// StateRef
// ---------------------------------------------------------------------------

/// A drawable's handle on its [`BitmapState`]: shared until first mutation.
pub enum StateRef<I: ?Sized> {
    Shared(Rc<BitmapState<I>>),
    Owned(BitmapState<I>),
}

impl<I: ?Sized> StateRef<I> {
    /// Hold `state` by reference.
    #[inline]
    pub fn attach(state: Rc<BitmapState<I>>) -> Self {
        Self::Shared(state)
    }

    /// Whether this handle owns a private copy.
    #[inline]
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Read access, shared or not.
    #[inline]
    pub fn get(&self) -> &BitmapState<I> {
        match self {
            Self::Shared(rc) => &**rc,
            Self::Owned(state) => state,
        }
    }

    /// Replace a shared state by a private clone. Later calls do nothing.
    pub fn ensure_private(&mut self) {
        if let Self::Shared(rc) = self {
            log::trace!("bitmap state: promoting shared state to private copy");
            let owned = BitmapState::clone(rc);
            *self = Self::Owned(owned);
        }
    }

    /// Write access; promotes to a private copy first.
    pub fn get_mut(&mut self) -> &mut BitmapState<I> {
        self.ensure_private();
        match self {
            Self::Owned(state) => state,
            Self::Shared(_) => unreachable!("state was promoted above"),
        }
    }

    /// An `Rc` other drawables can attach to.
    ///
    /// Shared handles return their own `Rc`; private ones return a fresh
    /// snapshot that does not follow later changes.
    pub fn share(&self) -> Rc<BitmapState<I>> {
        match self {
            Self::Shared(rc) => Rc::clone(rc),
            Self::Owned(state) => Rc::new(state.clone()),
        }
    }
}

impl<I: ?Sized> fmt::Debug for StateRef<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared(rc) => f.debug_tuple("Shared").field(&**rc).finish(),
            Self::Owned(state) => f.debug_tuple("Owned").field(state).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_image::TestImage;

    fn shared() -> Rc<BitmapState<TestImage>> {
        Rc::new(BitmapState::new(Some(Rc::new(TestImage::opaque(4, 4)))))
    }

    #[test]
    fn defaults() {
        let s = BitmapState::<TestImage>::new(None);
        assert_eq!(s.gravity, Gravity::FILL);
        assert_eq!(s.tile_mode_x, TileMode::None);
        assert_eq!(s.tile_mode_y, TileMode::None);
        assert_eq!(s.paint, Paint::default());
        assert_eq!(s.target_density, Density::DEFAULT);
        assert!(s.changing_configurations.is_empty());
    }

    #[test]
    fn clone_shares_image() {
        let s = shared();
        let c = BitmapState::clone(&s);
        assert!(c.shares_image_with(&s));
        assert_eq!(c, *s);
    }

    #[test]
    fn attach_is_not_private() {
        let s = shared();
        let r = StateRef::attach(Rc::clone(&s));
        assert!(!r.is_private());
        assert_eq!(Rc::strong_count(&s), 2);
    }

    #[test]
    fn ensure_private_is_idempotent() {
        let s = shared();
        let mut r = StateRef::attach(Rc::clone(&s));
        r.ensure_private();
        assert!(r.is_private());
        let first = r.get() as *const BitmapState<TestImage>;
        let snapshot = r.get().config();
        r.ensure_private();
        r.ensure_private();
        assert_eq!(r.get() as *const BitmapState<TestImage>, first);
        assert_eq!(r.get().config(), snapshot);
        // the shared Rc was released
        assert_eq!(Rc::strong_count(&s), 1);
    }

    #[test]
    fn get_mut_leaves_other_holders_alone() {
        let s = shared();
        let mut a = StateRef::attach(Rc::clone(&s));
        let b = StateRef::attach(Rc::clone(&s));
        a.get_mut().tile_mode_x = TileMode::Repeat;
        a.get_mut().gravity = Gravity::CENTER;
        assert_eq!(b.get().tile_mode_x, TileMode::None);
        assert_eq!(b.get().gravity, Gravity::FILL);
        assert!(a.get().shares_image_with(b.get()));
    }

    #[test]
    fn share_snapshots_private_state() {
        let mut r = StateRef::attach(shared());
        r.get_mut().gravity = Gravity::TOP;
        let snap = r.share();
        r.get_mut().gravity = Gravity::BOTTOM;
        assert_eq!(snap.gravity, Gravity::TOP);
        assert!(snap.shares_image_with(r.get()));
    }

    #[test]
    fn builders_set_fields() {
        let paint = Paint::default().with_alpha(7);
        let s = BitmapState::new(Some(Rc::new(TestImage::opaque(2, 2))))
            .with_gravity(Gravity::LEFT)
            .with_tile_modes(TileMode::Repeat, TileMode::Clamp)
            .with_paint(paint)
            .with_target_density(Density::LOW);
        assert_eq!(s.gravity, Gravity::LEFT);
        assert_eq!((s.tile_mode_x, s.tile_mode_y), (TileMode::Repeat, TileMode::Clamp));
        assert_eq!(s.paint, paint);
        assert_eq!(s.target_density, Density::LOW);
        assert!(s.image.is_some());
    }

    #[test]
    fn config_round_trip_keeps_fields() {
        let cfg = StateConfig {
            gravity: Gravity::RIGHT | Gravity::BOTTOM,
            tile_mode_x: TileMode::Mirror,
            tile_mode_y: TileMode::Clamp,
            paint: Paint::default().with_alpha(80),
            target_density: Density::HIGH,
            changing_configurations: ConfigMask::DENSITY,
        };
        let s = BitmapState::<TestImage>::from_config(None, cfg);
        assert_eq!(s.config(), cfg);
    }
}
