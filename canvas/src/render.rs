//! Rendering: composes the base diagram and zone overlays into an RGBA buffer.
//!
//! Layer order is fixed. The base image is drawn first, scaled to cover the
//! viewport and centered, so it always sits at the back. Quadrant overlays
//! are blended on top afterwards and stay visible.
//!
//! Nothing here mutates application state; callers own the buffers.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageResult, Pixel, Rgba, RgbaImage};

use crate::camera::{CoverFit, Point};
use crate::consts::{OVERLAY_ALPHA, OVERLAY_STROKE_PX, SURFACE_CLEAR_RGBA};
use crate::zones::Quadrant;

/// Scale `source` to cover a `width`×`height` surface, centered, and return
/// the composed surface with the fit used.
///
/// Overflow on the longer axis is cropped evenly on both sides. Only the
/// visible part of the source is resampled, so the work is bounded by the
/// surface size whatever the aspect mismatch. Returns `None` when the
/// surface or the image has a zero dimension.
#[must_use]
pub fn compose_cover(source: &DynamicImage, width: u32, height: u32) -> Option<(RgbaImage, CoverFit)> {
    let fit = CoverFit::compute(
        f64::from(width),
        f64::from(height),
        f64::from(source.width()),
        f64::from(source.height()),
    )?;

    let crop = SourceCrop::visible(&fit, source.width(), source.height());
    let visible = imageops::crop_imm(source, crop.x, crop.y, crop.width, crop.height).to_image();
    let resized = imageops::resize(&visible, width, height, FilterType::Triangle);

    let mut surface = RgbaImage::from_pixel(width, height, Rgba(SURFACE_CLEAR_RGBA));
    imageops::overlay(&mut surface, &resized, 0, 0);

    Some((surface, fit))
}

/// Region of the source image that lands inside the viewport, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceCrop {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl SourceCrop {
    /// Widened outward to whole pixels and clamped to the image; never empty.
    fn visible(fit: &CoverFit, image_w: u32, image_h: u32) -> Self {
        let top_left = fit.viewport_to_image(Point::new(0.0, 0.0));
        let bottom_right = fit.viewport_to_image(Point::new(fit.viewport_width, fit.viewport_height));
        let (x, width) = Self::span(top_left.x, bottom_right.x, image_w);
        let (y, height) = Self::span(top_left.y, bottom_right.y, image_h);
        Self { x, y, width, height }
    }

    fn span(start: f64, end: f64, max: u32) -> (u32, u32) {
        let lo = start.floor().clamp(0.0, f64::from(max - 1)) as u32;
        let hi = end.ceil().clamp(f64::from(lo + 1), f64::from(max)) as u32;
        (lo, hi - lo)
    }
}

/// Blend each quadrant's fill and outline onto `surface`.
pub fn draw_quadrant_overlays(surface: &mut RgbaImage, fit: &CoverFit, layout: &[Quadrant]) {
    for q in layout {
        let Some([r, g, b]) = parse_hex_color(q.color) else {
            continue;
        };
        let top_left = fit.normalized_to_viewport(Point::new(q.bounds.x1, q.bounds.y1));
        let bottom_right = fit.normalized_to_viewport(Point::new(q.bounds.x2, q.bounds.y2));
        let Some(rect) = PixelRect::clamped(top_left, bottom_right, surface.width(), surface.height()) else {
            continue;
        };
        let fill = Rgba([r, g, b, (OVERLAY_ALPHA * 255.0).round() as u8]);
        let stroke = Rgba([r, g, b, 255]);
        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                let px = surface.get_pixel_mut(x, y);
                if rect.on_border(x, y, OVERLAY_STROKE_PX) {
                    *px = stroke;
                } else {
                    px.blend(&fill);
                }
            }
        }
    }
}

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)` clipped to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelRect {
    fn clamped(a: Point, b: Point, width: u32, height: u32) -> Option<Self> {
        let clamp = |v: f64, max: u32| v.round().clamp(0.0, f64::from(max)) as u32;
        let rect = Self {
            x0: clamp(a.x.min(b.x), width),
            y0: clamp(a.y.min(b.y), height),
            x1: clamp(a.x.max(b.x), width),
            y1: clamp(a.y.max(b.y), height),
        };
        (rect.x1 > rect.x0 && rect.y1 > rect.y0).then_some(rect)
    }

    fn on_border(&self, x: u32, y: u32, stroke: u32) -> bool {
        x < self.x0 + stroke || y < self.y0 + stroke || x + stroke >= self.x1 || y + stroke >= self.y1
    }
}

/// Parse a `#RRGGBB` color into its channels.
#[must_use]
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let mut digits = hex.chars().map(|c| c.to_digit(16));
    let mut channel = || -> Option<u8> {
        let hi = digits.next()??;
        let lo = digits.next()??;
        Some((hi * 16 + lo) as u8)
    };
    Some([channel()?, channel()?, channel()?])
}

/// Encode a surface as PNG bytes.
///
/// # Errors
///
/// Returns the encoder error if PNG encoding fails.
pub fn encode_png(surface: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    surface.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
