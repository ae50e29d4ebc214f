use crate::camera::{CoverFit, Point};
use crate::hit;
use crate::input::Button;
use crate::zones::{self, BodyView, Gender, Quadrant, ZoneId};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// A primary click landed strictly inside a quadrant.
    ZoneSelected(ZoneId),
}

/// Quadrant selector state: which layout applies and how the base image is
/// placed in the viewport.
///
/// Clicks arrive in viewport pixels and are mapped to normalized image space
/// through the current [`CoverFit`]. Until both the viewport and the image
/// size are known, every click yields [`Action::None`].
#[derive(Debug, Clone, Default)]
pub struct SelectorCore {
    pub view: BodyView,
    pub gender: Gender,
    pub viewport_width: f64,
    pub viewport_height: f64,
    image_size: Option<(f64, f64)>,
    fit: Option<CoverFit>,
}

impl SelectorCore {
    #[must_use]
    pub fn new(view: BodyView, gender: Gender) -> Self {
        Self { view, gender, ..Self::default() }
    }

    // --- Configuration ---

    pub fn set_view(&mut self, view: BodyView) {
        self.view = view;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Update viewport dimensions in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.refit();
    }

    /// Record the natural size of the loaded base image.
    pub fn set_image_size(&mut self, width: f64, height: f64) {
        self.image_size = Some((width, height));
        self.refit();
    }

    /// Adopt a fit computed elsewhere (e.g. by the surface loader).
    pub fn set_fit(&mut self, fit: CoverFit) {
        self.viewport_width = fit.viewport_width;
        self.viewport_height = fit.viewport_height;
        self.image_size = Some((fit.image_width, fit.image_height));
        self.fit = Some(fit);
    }

    fn refit(&mut self) {
        self.fit = self
            .image_size
            .and_then(|(w, h)| CoverFit::compute(self.viewport_width, self.viewport_height, w, h));
    }

    // --- Input ---

    /// Handle a click at a viewport-pixel position.
    #[must_use]
    pub fn on_click(&self, screen_pt: Point, button: Button) -> Action {
        if !button.selects() {
            return Action::None;
        }
        let Some(fit) = self.fit else {
            return Action::None;
        };
        self.on_normalized_click(fit.viewport_to_normalized(screen_pt))
    }

    /// Handle a click already expressed in normalized image space.
    #[must_use]
    pub fn on_normalized_click(&self, normalized: Point) -> Action {
        match hit::hit_quadrant(normalized, self.quadrants()) {
            Some(id) => Action::ZoneSelected(id),
            None => Action::None,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn quadrants(&self) -> &'static [Quadrant] {
        zones::quadrants(self.view, self.gender)
    }

    #[must_use]
    pub fn fit(&self) -> Option<CoverFit> {
        self.fit
    }

    /// Asset key of the base image for the current view and gender.
    #[must_use]
    pub fn base_image_key(&self) -> String {
        zones::base_image_key(self.view, self.gender)
    }
}
