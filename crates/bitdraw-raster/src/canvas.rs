//! [`RasterCanvas`]: a software [`Canvas`] compositing into an RGBA buffer.
//!
//! Sampling is nearest-neighbour; the paint's filter and dither flags are
//! accepted but have no effect here.

use bitdraw::{BitmapShader, Canvas, ColorFilter, Density, ImageHandle, Paint, Point, Rect};
use image::{Rgba, RgbaImage};

use crate::bitmap::RasterImage;

/// An RGBA render target.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    target: RgbaImage,
    density: Density,
}

impl RasterCanvas {
    /// A transparent canvas of the given size.
    pub fn new(width: u32, height: u32, density: Density) -> Self {
        Self::from_image(RgbaImage::new(width, height), density)
    }

    /// Draw on top of existing pixels.
    pub fn from_image(target: RgbaImage, density: Density) -> Self {
        Self { target, density }
    }

    /// The pixels drawn so far.
    #[inline]
    pub fn target(&self) -> &RgbaImage {
        &self.target
    }

    /// Consume the canvas, returning its pixels.
    pub fn into_inner(self) -> RgbaImage {
        self.target
    }

    /// Pixel at `(x, y)`, which must be inside the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.target.get_pixel(x, y).0
    }

    /// The whole canvas as a rect.
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.target.width() as i32, self.target.height() as i32)
    }

    fn blend(&mut self, p: Point, src: [u8; 4], paint: &Paint) {
        let src = shade(src, paint);
        let dst = self.target.get_pixel_mut(p.x as u32, p.y as u32);
        *dst = Rgba(src_over(src, dst.0));
    }
}

impl Canvas<RasterImage> for RasterCanvas {
    fn density(&self) -> Density {
        self.density
    }

    fn draw_image(&mut self, image: &RasterImage, src: Option<Rect>, dst: Rect, paint: &Paint) {
        let full = Rect::new(0, 0, image.width(), image.height());
        let src = src.map_or(full, |r| r.intersect(full));
        if src.is_empty() || dst.is_empty() {
            return;
        }
        let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));
        let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
        for p in dst.intersect(self.rect()) {
            // Sample at the centre of the destination pixel.
            let dx = i64::from(p.x - dst.min.x);
            let dy = i64::from(p.y - dst.min.y);
            let sx = src.min.x + ((2 * dx + 1) * sw / (2 * dw)) as i32;
            let sy = src.min.y + ((2 * dy + 1) * sh / (2 * dh)) as i32;
            let px = image.pixel(sx, sy);
            self.blend(p, px, paint);
        }
    }

    fn draw_rect(&mut self, dst: Rect, shader: &BitmapShader<RasterImage>, paint: &Paint) {
        let image = shader.image();
        let (w, h) = (image.width(), image.height());
        if w <= 0 || h <= 0 {
            return;
        }
        for p in dst.intersect(self.rect()) {
            let sx = shader.tile_x().resolve(p.x, w);
            let sy = shader.tile_y().resolve(p.y, h);
            let px = image.pixel(sx, sy);
            self.blend(p, px, paint);
        }
    }
}

// ---------------------------------------------------------------------------
// Pixel helpers
// ---------------------------------------------------------------------------

/// Apply the paint's colour filter and alpha to a source pixel.
fn shade(px: [u8; 4], paint: &Paint) -> [u8; 4] {
    let [mut r, mut g, mut b, mut a] = px;
    match paint.color_filter {
        Some(ColorFilter::Tint(c)) => {
            r = c.r();
            g = c.g();
            b = c.b();
            a = mul_div255(a, c.a());
        }
        Some(ColorFilter::Lighting { mul, add }) => {
            r = mul_div255(r, mul.r()).saturating_add(add.r());
            g = mul_div255(g, mul.g()).saturating_add(add.g());
            b = mul_div255(b, mul.b()).saturating_add(add.b());
        }
        None => {}
    }
    [r, g, b, mul_div255(a, paint.alpha)]
}

#[inline]
fn mul_div255(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 127) / 255) as u8
}

/// Source-over compositing of non-premultiplied RGBA.
fn src_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = f32::from(src[3]) / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = f32::from(dst[3]) / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        return [0, 0, 0, 0];
    }
    let channel = |s: u8, d: u8| {
        let v = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / oa;
        v.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (oa * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitdraw::{Color, TileMode};
    use std::rc::Rc;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    /// 2x1 image: red then blue.
    fn red_blue() -> RasterImage {
        let mut px = RgbaImage::new(2, 1);
        px.put_pixel(0, 0, Rgba(RED));
        px.put_pixel(1, 0, Rgba(BLUE));
        RasterImage::from_rgba(px, Density::DEFAULT)
    }

    fn row(canvas: &RasterCanvas, y: u32) -> Vec<[u8; 4]> {
        (0..canvas.target().width()).map(|x| canvas.pixel(x, y)).collect()
    }

    #[test]
    fn stretches_image_nearest() {
        let mut c = RasterCanvas::new(4, 1, Density::DEFAULT);
        c.draw_image(&red_blue(), None, Rect::new(0, 0, 4, 1), &Paint::default());
        assert_eq!(row(&c, 0), [RED, RED, BLUE, BLUE]);
    }

    #[test]
    fn draws_sub_rect_and_clips_to_canvas() {
        let mut c = RasterCanvas::new(3, 1, Density::DEFAULT);
        let src = Some(Rect::new(1, 0, 2, 1));
        c.draw_image(&red_blue(), src, Rect::new(-2, 0, 2, 1), &Paint::default());
        assert_eq!(row(&c, 0), [BLUE, BLUE, [0, 0, 0, 0]]);
    }

    #[test]
    fn shader_repeats_from_origin() {
        let mut c = RasterCanvas::new(5, 1, Density::DEFAULT);
        let shader = BitmapShader::new(Rc::new(red_blue()), TileMode::Repeat, TileMode::None);
        c.draw_rect(Rect::new(1, 0, 5, 1), &shader, &Paint::default());
        assert_eq!(row(&c, 0), [[0, 0, 0, 0], BLUE, RED, BLUE, RED]);
    }

    #[test]
    fn shader_mirror_and_clamp() {
        let mut c = RasterCanvas::new(6, 1, Density::DEFAULT);
        let mirror = BitmapShader::new(Rc::new(red_blue()), TileMode::Mirror, TileMode::Clamp);
        c.draw_rect(c.rect(), &mirror, &Paint::default());
        assert_eq!(row(&c, 0), [RED, BLUE, BLUE, RED, RED, BLUE]);

        let clamp = BitmapShader::new(Rc::new(red_blue()), TileMode::Clamp, TileMode::Clamp);
        c.draw_rect(c.rect(), &clamp, &Paint::default());
        assert_eq!(row(&c, 0), [RED, BLUE, BLUE, BLUE, BLUE, BLUE]);
    }

    #[test]
    fn paint_alpha_blends_over_destination() {
        let blue = RgbaImage::from_pixel(1, 1, Rgba(BLUE));
        let mut c = RasterCanvas::from_image(blue, Density::DEFAULT);
        let paint = Paint::default().with_alpha(0);
        c.draw_image(&red_blue(), Some(Rect::new(0, 0, 1, 1)), c.rect(), &paint);
        assert_eq!(c.pixel(0, 0), BLUE);

        let paint = Paint::default().with_alpha(128);
        c.draw_image(&red_blue(), Some(Rect::new(0, 0, 1, 1)), c.rect(), &paint);
        let [r, g, b, a] = c.pixel(0, 0);
        assert_eq!(a, 255);
        assert_eq!(g, 0);
        assert!((127..=129).contains(&r));
        assert!((126..=128).contains(&b));
    }

    #[test]
    fn color_filters() {
        let green = ColorFilter::Tint(Color::from_rgb(0, 255, 0));
        let tint = Paint::default().with_color_filter(Some(green));
        assert_eq!(shade(RED, &tint), [0, 255, 0, 255]);

        let lighting = Paint::default().with_color_filter(Some(ColorFilter::Lighting {
            mul: Color::from_rgb(0, 0, 0),
            add: Color::from_rgb(10, 20, 30),
        }));
        assert_eq!(shade(RED, &lighting), [10, 20, 30, 255]);
    }

    #[test]
    fn src_over_edge_cases() {
        assert_eq!(src_over(RED, BLUE), RED);
        assert_eq!(src_over([9, 9, 9, 0], [0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(src_over([0, 0, 0, 0], BLUE), BLUE);
    }
}
