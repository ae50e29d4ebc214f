//! Body views, zone identifiers, and the static quadrant table.
//!
//! Quadrant boxes are axis-aligned rectangles in normalized image space, so
//! they stay valid at any canvas pixel size. Within one view, boxes must not
//! overlap; [`validate_layout`] checks that and is run at service startup and
//! in tests.

#[cfg(test)]
#[path = "zones_test.rs"]
mod zones_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::NORM_MAX;

/// Which side of the body the diagram shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyView {
    #[default]
    Front,
    Back,
}

impl BodyView {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// Gender of the depicted body. Only selects the base image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// Coarse body zone emitted by a quadrant click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    Head,
    Chest,
    Abdomen,
    Back,
    Buttocks,
    Arms,
    Legs,
}

impl ZoneId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Chest => "chest",
            Self::Abdomen => "abdomen",
            Self::Back => "back",
            Self::Buttocks => "buttocks",
            Self::Arms => "arms",
            Self::Legs => "legs",
        }
    }

    /// Key used by the symptom data source for this zone.
    #[must_use]
    pub fn body_part(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Chest => "CHEST",
            Self::Abdomen => "ABDOMEN",
            Self::Back => "BACK",
            Self::Buttocks => "BUTTOCKS",
            Self::Arms => "ARMS",
            Self::Legs => "LEGS",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown zone id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone id: {0}")]
pub struct UnknownZone(pub String);

impl FromStr for ZoneId {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "chest" => Ok(Self::Chest),
            "abdomen" => Ok(Self::Abdomen),
            "back" => Ok(Self::Back),
            "buttocks" => Ok(Self::Buttocks),
            "arms" => Ok(Self::Arms),
            "legs" => Ok(Self::Legs),
            _ => Err(UnknownZone(s.to_owned())),
        }
    }
}

/// Axis-aligned box in normalized image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl NormBox {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Strict containment: points on the border are outside.
    #[must_use]
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > self.x1 && p.x < self.x2 && p.y > self.y1 && p.y < self.y2
    }

    /// Whether the two boxes share a region of positive area.
    #[must_use]
    pub fn intersects(&self, other: &NormBox) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    #[must_use]
    pub fn is_within_unit(&self) -> bool {
        (0.0..=NORM_MAX).contains(&self.x1)
            && (0.0..=NORM_MAX).contains(&self.y1)
            && (0.0..=NORM_MAX).contains(&self.x2)
            && (0.0..=NORM_MAX).contains(&self.y2)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// One clickable coarse zone on the body diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quadrant {
    pub id: ZoneId,
    pub name: &'static str,
    pub bounds: NormBox,
    /// CSS hex color used for the overlay fill.
    pub color: &'static str,
}

const FRONT: [Quadrant; 5] = [
    Quadrant { id: ZoneId::Head, name: "Head", bounds: NormBox::new(0.38, 0.0, 0.62, 0.15), color: "#FF6B6B" },
    Quadrant { id: ZoneId::Chest, name: "Chest", bounds: NormBox::new(0.33, 0.16, 0.67, 0.36), color: "#4ECDC4" },
    Quadrant { id: ZoneId::Abdomen, name: "Abdomen", bounds: NormBox::new(0.33, 0.37, 0.67, 0.52), color: "#45B7D1" },
    Quadrant { id: ZoneId::Arms, name: "Arms", bounds: NormBox::new(0.10, 0.16, 0.32, 0.52), color: "#96CEB4" },
    Quadrant { id: ZoneId::Legs, name: "Legs", bounds: NormBox::new(0.30, 0.53, 0.70, 1.0), color: "#FFEAA7" },
];

const BACK: [Quadrant; 5] = [
    Quadrant { id: ZoneId::Head, name: "Head", bounds: NormBox::new(0.38, 0.0, 0.62, 0.15), color: "#FF6B6B" },
    Quadrant { id: ZoneId::Back, name: "Back", bounds: NormBox::new(0.33, 0.16, 0.67, 0.45), color: "#4ECDC4" },
    Quadrant { id: ZoneId::Buttocks, name: "Buttocks", bounds: NormBox::new(0.33, 0.46, 0.67, 0.58), color: "#45B7D1" },
    Quadrant { id: ZoneId::Arms, name: "Arms", bounds: NormBox::new(0.68, 0.16, 0.90, 0.52), color: "#96CEB4" },
    Quadrant { id: ZoneId::Legs, name: "Legs", bounds: NormBox::new(0.30, 0.59, 0.70, 1.0), color: "#FFEAA7" },
];

/// Number of quadrants every view defines.
pub const QUADRANTS_PER_VIEW: usize = 5;

/// Quadrant layout for a view. `gender` is accepted for API symmetry with the
/// base image lookup; geometry is currently shared between genders.
#[must_use]
pub fn quadrants(view: BodyView, _gender: Gender) -> &'static [Quadrant] {
    match view {
        BodyView::Front => &FRONT,
        BodyView::Back => &BACK,
    }
}

/// Asset file name of the base diagram for a view and gender.
#[must_use]
pub fn base_image_key(view: BodyView, gender: Gender) -> String {
    format!("{}_{}.png", gender.as_str(), view.as_str())
}

/// Violations of the static quadrant layout invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected 5 quadrants, found {0}")]
    WrongCount(usize),
    #[error("quadrant {0} lies outside normalized image space")]
    OutOfBounds(ZoneId),
    #[error("quadrant {0} has zero or negative area")]
    Degenerate(ZoneId),
    #[error("quadrants {0} and {1} overlap")]
    Overlap(ZoneId, ZoneId),
}

/// Check a quadrant layout: exact count, unit-square bounds, positive area,
/// and pairwise non-overlap.
///
/// # Errors
///
/// Returns the first [`LayoutError`] found, in table order.
pub fn validate_layout(layout: &[Quadrant]) -> Result<(), LayoutError> {
    if layout.len() != QUADRANTS_PER_VIEW {
        return Err(LayoutError::WrongCount(layout.len()));
    }
    for q in layout {
        if !q.bounds.is_within_unit() {
            return Err(LayoutError::OutOfBounds(q.id));
        }
        if q.bounds.is_degenerate() {
            return Err(LayoutError::Degenerate(q.id));
        }
    }
    for (i, a) in layout.iter().enumerate() {
        for b in &layout[i + 1..] {
            if a.bounds.intersects(&b.bounds) {
                return Err(LayoutError::Overlap(a.id, b.id));
            }
        }
    }
    Ok(())
}

/// Validate every built-in layout.
///
/// # Errors
///
/// Returns the first violation across all (view, gender) combinations.
pub fn validate_builtin_layouts() -> Result<(), LayoutError> {
    for view in [BodyView::Front, BodyView::Back] {
        for gender in [Gender::Female, Gender::Male] {
            validate_layout(quadrants(view, gender))?;
        }
    }
    Ok(())
}
