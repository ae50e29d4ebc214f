//! Cover-fit placement of the base image and the coordinate conversions it implies.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in viewport pixels, image pixels, or normalized image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of an image scaled to fully cover a fixed viewport.
///
/// `scale` is uniform on both axes. `left` / `top` are the viewport-pixel
/// offsets of the scaled image's top-left corner; they are zero or negative
/// because the image overflows the viewport on at least one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverFit {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub image_width: f64,
    pub image_height: f64,
    pub scale: f64,
    pub scaled_width: f64,
    pub scaled_height: f64,
    pub left: f64,
    pub top: f64,
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl CoverFit {
    /// Compute the cover placement of an `image_w`×`image_h` image in a
    /// `viewport_w`×`viewport_h` viewport.
    ///
    /// Returns `None` if any dimension is zero, negative, or not finite.
    #[must_use]
    pub fn compute(viewport_w: f64, viewport_h: f64, image_w: f64, image_h: f64) -> Option<Self> {
        if !(positive(viewport_w) && positive(viewport_h) && positive(image_w) && positive(image_h)) {
            return None;
        }
        let scale = (viewport_w / image_w).max(viewport_h / image_h);
        let scaled_width = image_w * scale;
        let scaled_height = image_h * scale;
        Some(Self {
            viewport_width: viewport_w,
            viewport_height: viewport_h,
            image_width: image_w,
            image_height: image_h,
            scale,
            scaled_width,
            scaled_height,
            left: (viewport_w - scaled_width) / 2.0,
            top: (viewport_h - scaled_height) / 2.0,
        })
    }

    /// Convert a viewport-pixel point to image-pixel coordinates.
    #[must_use]
    pub fn viewport_to_image(&self, p: Point) -> Point {
        Point { x: (p.x - self.left) / self.scale, y: (p.y - self.top) / self.scale }
    }

    /// Convert an image-pixel point to viewport pixels.
    #[must_use]
    pub fn image_to_viewport(&self, p: Point) -> Point {
        Point { x: p.x * self.scale + self.left, y: p.y * self.scale + self.top }
    }

    /// Convert a viewport-pixel point to normalized image space (`[0,1]²` when on the image).
    #[must_use]
    pub fn viewport_to_normalized(&self, p: Point) -> Point {
        let img = self.viewport_to_image(p);
        Point { x: img.x / self.image_width, y: img.y / self.image_height }
    }

    /// Convert a normalized image-space point to viewport pixels.
    #[must_use]
    pub fn normalized_to_viewport(&self, p: Point) -> Point {
        self.image_to_viewport(Point { x: p.x * self.image_width, y: p.y * self.image_height })
    }

    /// Whether the scaled image leaves no uncovered viewport pixels.
    #[must_use]
    pub fn covers_viewport(&self) -> bool {
        // Relative slack absorbs rounding in `image * (viewport / image)`.
        let eps = 1e-9;
        self.scaled_width >= self.viewport_width * (1.0 - eps) && self.scaled_height >= self.viewport_height * (1.0 - eps)
    }
}
