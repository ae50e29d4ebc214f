//! Hit testing: which quadrant or symptom region a normalized point lands in.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::PCT_MAX;
use crate::zones::{Quadrant, ZoneId};

/// Axis-aligned rectangle in percent-of-image space (`[0,100]` on each axis).
///
/// Used for detailed-phase symptom regions, whose coordinates are authored
/// as percentages rather than fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRect {
    pub x_pct: f64,
    pub y_pct: f64,
    pub w_pct: f64,
    pub h_pct: f64,
}

impl RegionRect {
    #[must_use]
    pub const fn new(x_pct: f64, y_pct: f64, w_pct: f64, h_pct: f64) -> Self {
        Self { x_pct, y_pct, w_pct, h_pct }
    }

    /// Strict containment of a normalized point.
    #[must_use]
    pub fn contains_normalized(&self, p: Point) -> bool {
        let x = p.x * PCT_MAX;
        let y = p.y * PCT_MAX;
        x > self.x_pct && x < self.x_pct + self.w_pct && y > self.y_pct && y < self.y_pct + self.h_pct
    }

    /// Whether the rectangle stays inside percent space.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        self.x_pct >= 0.0
            && self.y_pct >= 0.0
            && self.w_pct >= 0.0
            && self.h_pct >= 0.0
            && self.x_pct + self.w_pct <= PCT_MAX
            && self.y_pct + self.h_pct <= PCT_MAX
    }
}

/// Return the zone whose box strictly contains `normalized`, if any.
///
/// Quadrants never overlap, so at most one can match; the first in table
/// order is returned regardless.
#[must_use]
pub fn hit_quadrant(normalized: Point, layout: &[Quadrant]) -> Option<ZoneId> {
    layout
        .iter()
        .find(|q| q.bounds.contains_strict(normalized))
        .map(|q| q.id)
}

/// Return the index of the first region strictly containing `normalized`.
#[must_use]
pub fn hit_region(normalized: Point, regions: &[RegionRect]) -> Option<usize> {
    regions.iter().position(|r| r.contains_normalized(normalized))
}
