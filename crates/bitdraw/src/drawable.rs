//! [`BitmapDrawable`]: an image drawn stretched, aligned or tiled inside its
//! bounds.

use std::cell::OnceCell;
use std::rc::Rc;

use bitdraw_core::{ColorFilter, ConfigMask, Density, Gravity, Paint, Rect, TileMode};

use crate::canvas::{BitmapShader, Canvas};
use crate::dirty::DirtyState;
use crate::image::{DensityMetrics, ImageHandle};
use crate::state::{BitmapState, StateRef};

// ---------------------------------------------------------------------------
// Drawable / Opacity
// ---------------------------------------------------------------------------

/// Whether a drawable is guaranteed to cover its whole area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opacity {
    Opaque,
    Translucent,
}

/// Something a host can size, position and draw.
pub trait Drawable {
    type Image: ImageHandle + ?Sized;

    /// Render into `canvas`.
    fn draw(&mut self, canvas: &mut dyn Canvas<Self::Image>);

    /// The area the drawable covers.
    fn bounds(&self) -> Rect;

    /// Move or resize the drawable.
    fn set_bounds(&mut self, bounds: Rect);

    /// Natural width, or `-1` when unknown.
    fn intrinsic_width(&self) -> i32;

    /// Natural height, or `-1` when unknown.
    fn intrinsic_height(&self) -> i32;

    fn opacity(&self) -> Opacity;

    /// Host configuration aspects this drawable depends on.
    fn changing_configurations(&self) -> ConfigMask;

    /// Detach from shared state so later changes stay local.
    fn mutate(&mut self) -> &mut Self
    where
        Self: Sized;
}

// ---------------------------------------------------------------------------
// BitmapDrawable
// ---------------------------------------------------------------------------

/// A bitmap that can be tiled, stretched or aligned within its bounds.
///
/// Configuration lives in a [`BitmapState`] that is shared with every
/// drawable built from the same state until one of them changes it.
/// All methods must be called from the thread owning the UI; the `Rc`
/// handles make the type `!Send`.
pub struct BitmapDrawable<I: ImageHandle + ?Sized> {
    state: StateRef<I>,
    image: Option<Rc<I>>,
    target_density: Density,
    // Scaled to `target_density`; -1 without an image.
    bitmap_width: i32,
    bitmap_height: i32,
    bounds: Rect,
    dst_rect: Rect,
    dirty: DirtyState,
    shader: Option<BitmapShader<I>>,
    changing_configurations: ConfigMask,
    // Returned by `constant_state` until the configuration changes.
    shared: OnceCell<Rc<BitmapState<I>>>,
}

impl<I: ImageHandle + ?Sized> BitmapDrawable<I> {
    /// A drawable around `image` rendering at the default density.
    pub fn new(image: Option<Rc<I>>) -> Self {
        Self::from_state(Rc::new(BitmapState::new(image)), None)
    }

    /// A drawable with no image; it draws nothing.
    pub fn empty() -> Self {
        Self::new(None)
    }

    /// A drawable around `image` rendering at the density of `metrics`.
    pub fn with_metrics(image: Option<Rc<I>>, metrics: &dyn DensityMetrics) -> Self {
        let density = Density::from_dpi(metrics.density_dpi());
        let state = BitmapState::new(image).with_target_density(density);
        Self::from_state(Rc::new(state), Some(metrics))
    }

    /// A drawable attached to an existing shared state.
    ///
    /// Renders at the density of `metrics` when given, else at the state's
    /// target density.
    pub fn from_state(state: Rc<BitmapState<I>>, metrics: Option<&dyn DensityMetrics>) -> Self {
        let target_density = match metrics {
            Some(m) => Density::from_dpi(m.density_dpi()),
            None => state.target_density,
        };
        let image = state.image.clone();
        let mut drawable = Self {
            state: StateRef::attach(state),
            image: None,
            target_density,
            bitmap_width: -1,
            bitmap_height: -1,
            bounds: Rect::default(),
            dst_rect: Rect::default(),
            dirty: DirtyState::Clean,
            shader: None,
            changing_configurations: ConfigMask::NONE,
            shared: OnceCell::new(),
        };
        drawable.set_image(image);
        drawable
    }

    // --- shared state ---

    /// Read-only view of the current configuration.
    #[inline]
    pub fn state(&self) -> &BitmapState<I> {
        self.state.get()
    }

    /// Whether this drawable owns a private configuration.
    #[inline]
    pub fn is_mutated(&self) -> bool {
        self.state.is_private()
    }

    /// A shareable snapshot of the configuration for building new drawables.
    ///
    /// The instance-level changing-configuration mask is folded into it.
    /// Repeated calls return the same `Rc` until this drawable's
    /// configuration changes.
    pub fn constant_state(&self) -> Rc<BitmapState<I>> {
        let shared = self.shared.get_or_init(|| {
            let shared = self.state.share();
            if self.changing_configurations.is_empty()
                || shared
                    .changing_configurations
                    .contains(self.changing_configurations)
            {
                return shared;
            }
            let mut state = BitmapState::clone(&shared);
            state.changing_configurations |= self.changing_configurations;
            Rc::new(state)
        });
        Rc::clone(shared)
    }

    /// Build another drawable sharing this one's configuration.
    pub fn new_drawable(&self, metrics: Option<&dyn DensityMetrics>) -> Self {
        Self::from_state(self.constant_state(), metrics)
    }

    /// Set the instance-level changing-configuration mask.
    pub fn set_changing_configurations(&mut self, mask: ConfigMask) {
        self.shared.take();
        self.changing_configurations = mask;
    }

    /// Write access to the configuration; detaches from shared state.
    fn state_mut(&mut self) -> &mut BitmapState<I> {
        self.shared.take();
        self.state.get_mut()
    }

    // --- image and size ---

    /// The image being drawn.
    #[inline]
    pub fn image(&self) -> Option<&Rc<I>> {
        self.image.as_ref()
    }

    /// Replace the image drawn by this instance.
    ///
    /// The shared state keeps its own image.
    pub fn set_image(&mut self, image: Option<Rc<I>>) {
        self.image = image;
        if self.shader.is_some() {
            self.dirty.mark_shader();
        }
        self.compute_bitmap_size();
    }

    fn compute_bitmap_size(&mut self) {
        let (w, h) = match &self.image {
            Some(image) => (
                image.scaled_width(self.target_density),
                image.scaled_height(self.target_density),
            ),
            None => (-1, -1),
        };
        if (w, h) != (self.bitmap_width, self.bitmap_height) {
            self.bitmap_width = w;
            self.bitmap_height = h;
            self.dirty.mark_gravity();
        }
    }

    /// The density sizes are scaled to.
    #[inline]
    pub fn target_density(&self) -> Density {
        self.target_density
    }

    /// Render at `dpi`. Zero or negative selects [`Density::DEFAULT`].
    pub fn set_target_density(&mut self, dpi: i32) {
        self.target_density = Density::from_dpi(dpi);
        if self.image.is_some() {
            self.compute_bitmap_size();
        }
    }

    /// Render at the density reported by `metrics`.
    pub fn set_target_density_from_metrics(&mut self, metrics: &dyn DensityMetrics) {
        self.set_target_density(metrics.density_dpi());
    }

    /// Render at the density of `canvas`.
    pub fn set_target_density_from_canvas(&mut self, canvas: &dyn Canvas<I>) {
        self.set_target_density(canvas.density().0 as i32);
    }

    // --- gravity ---

    #[inline]
    pub fn gravity(&self) -> Gravity {
        self.state.get().gravity
    }

    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.state_mut().gravity = gravity;
        self.dirty.mark_gravity();
    }

    // --- tile modes ---

    #[inline]
    pub fn tile_mode_x(&self) -> TileMode {
        self.state.get().tile_mode_x
    }

    #[inline]
    pub fn tile_mode_y(&self) -> TileMode {
        self.state.get().tile_mode_y
    }

    pub fn set_tile_mode_x(&mut self, mode: TileMode) {
        let y = self.tile_mode_y();
        self.set_tile_mode_xy(mode, y);
    }

    pub fn set_tile_mode_y(&mut self, mode: TileMode) {
        let x = self.tile_mode_x();
        self.set_tile_mode_xy(x, mode);
    }

    /// Set both tile modes. [`TileMode::None`] on both axes disables tiling.
    pub fn set_tile_mode_xy(&mut self, x: TileMode, y: TileMode) {
        let rebuild = self.shader.is_none();
        let state = self.state_mut();
        let changed = state.tile_mode_x != x || state.tile_mode_y != y;
        if changed || rebuild {
            state.tile_mode_x = x;
            state.tile_mode_y = y;
            self.dirty.mark_shader();
        }
    }

    // --- paint ---

    /// Render attributes passed to the canvas.
    #[inline]
    pub fn paint(&self) -> &Paint {
        &self.state.get().paint
    }

    pub fn set_anti_alias(&mut self, on: bool) {
        self.state_mut().paint.set_anti_alias(on);
    }

    pub fn set_filter_bitmap(&mut self, on: bool) {
        self.state_mut().paint.set_filter_bitmap(on);
    }

    pub fn set_dither(&mut self, on: bool) {
        self.state_mut().paint.set_dither(on);
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.state.get().paint.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.state_mut().paint.alpha = alpha;
    }

    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.state_mut().paint.color_filter = filter;
    }

    // --- geometry ---

    /// Destination computed by the last draw.
    #[inline]
    pub fn dst_rect(&self) -> Rect {
        self.dst_rect
    }

    /// Pending recomputation.
    #[inline]
    pub fn dirty(&self) -> DirtyState {
        self.dirty
    }

    fn rebuild_shader(&mut self, image: &Rc<I>) {
        let (x, y) = (self.tile_mode_x(), self.tile_mode_y());
        self.shader = if x.is_none() && y.is_none() {
            None
        } else {
            Some(BitmapShader::new(Rc::clone(image), x, y))
        };
        log::debug!("bitmap drawable: rebuilt shader ({x:?}, {y:?})");
        self.dst_rect = self.bounds;
        if self.shader.is_none() {
            // Back to a single copy: the aligned rect must be recomputed.
            self.dirty.mark_gravity();
        }
    }
}

impl<I: ImageHandle + ?Sized> Drawable for BitmapDrawable<I> {
    type Image = I;

    fn draw(&mut self, canvas: &mut dyn Canvas<I>) {
        let Some(image) = self.image.clone() else {
            return;
        };
        if self.dirty.take_shader() {
            self.rebuild_shader(&image);
        }
        let paint = self.state.get().paint;
        match &self.shader {
            None => {
                if self.dirty.take_gravity() {
                    let gravity = self.state.get().gravity;
                    self.dst_rect =
                        gravity.apply(self.bitmap_width, self.bitmap_height, self.bounds);
                    log::debug!(
                        "bitmap drawable: placed {}x{} at {} ({:?})",
                        self.bitmap_width,
                        self.bitmap_height,
                        self.dst_rect,
                        gravity
                    );
                }
                canvas.draw_image(&image, None, self.dst_rect, &paint);
            }
            Some(shader) => {
                if self.dirty.take_gravity() {
                    self.dst_rect = self.bounds;
                }
                canvas.draw_rect(self.dst_rect, shader, &paint);
            }
        }
    }

    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty.mark_gravity();
        }
    }

    #[inline]
    fn intrinsic_width(&self) -> i32 {
        self.bitmap_width
    }

    #[inline]
    fn intrinsic_height(&self) -> i32 {
        self.bitmap_height
    }

    fn opacity(&self) -> Opacity {
        let state = self.state.get();
        if state.gravity != Gravity::FILL {
            return Opacity::Translucent;
        }
        match &self.image {
            Some(image) if !image.has_alpha() && state.paint.alpha == 0xFF => Opacity::Opaque,
            _ => Opacity::Translucent,
        }
    }

    fn changing_configurations(&self) -> ConfigMask {
        self.changing_configurations | self.state.get().changing_configurations
    }

    fn mutate(&mut self) -> &mut Self {
        if !self.state.is_private() {
            self.shared.take();
            self.state.ensure_private();
        }
        self
    }
}
