//! Shared numeric constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Upper bound of normalized image space on either axis.
pub const NORM_MAX: f64 = 1.0;

/// Upper bound of percent space used by detailed symptom regions.
pub const PCT_MAX: f64 = 100.0;

// ── Rendering ───────────────────────────────────────────────────

/// Opacity applied to quadrant fills drawn over the base image.
pub const OVERLAY_ALPHA: f32 = 0.3;

/// Stroke width for quadrant outlines, in surface pixels.
pub const OVERLAY_STROKE_PX: u32 = 2;

/// Background used where no image pixel lands (never visible under cover fit).
pub const SURFACE_CLEAR_RGBA: [u8; 4] = [255, 255, 255, 255];
