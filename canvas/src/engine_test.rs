#![allow(clippy::float_cmp)]

use super::*;

fn ready_core(view: BodyView) -> SelectorCore {
    let mut core = SelectorCore::new(view, Gender::Female);
    core.set_viewport(400.0, 300.0);
    core.set_image_size(800.0, 400.0);
    core
}

fn center_on_screen(core: &SelectorCore, id: ZoneId) -> Point {
    let q = core.quadrants().iter().find(|q| q.id == id).unwrap();
    core.fit().unwrap().normalized_to_viewport(q.bounds.center())
}

// =============================================================
// Construction and configuration
// =============================================================

#[test]
fn new_core_has_no_fit() {
    let core = SelectorCore::new(BodyView::Front, Gender::Male);
    assert!(core.fit().is_none());
    assert_eq!(core.viewport_width, 0.0);
}

#[test]
fn fit_requires_viewport_and_image() {
    let mut core = SelectorCore::new(BodyView::Front, Gender::Male);
    core.set_image_size(800.0, 400.0);
    assert!(core.fit().is_none());
    core.set_viewport(400.0, 300.0);
    let fit = core.fit().unwrap();
    assert_eq!(fit.scale, 0.75);
}

#[test]
fn zero_viewport_clears_fit() {
    let mut core = ready_core(BodyView::Front);
    core.set_viewport(0.0, 300.0);
    assert!(core.fit().is_none());
}

#[test]
fn set_fit_adopts_dimensions() {
    let mut core = SelectorCore::new(BodyView::Back, Gender::Male);
    let fit = CoverFit::compute(200.0, 200.0, 100.0, 400.0).unwrap();
    core.set_fit(fit);
    assert_eq!(core.viewport_width, 200.0);
    assert_eq!(core.fit(), Some(fit));
}

#[test]
fn view_switch_changes_layout() {
    let mut core = ready_core(BodyView::Front);
    assert!(core.quadrants().iter().any(|q| q.id == ZoneId::Chest));
    core.set_view(BodyView::Back);
    assert!(core.quadrants().iter().any(|q| q.id == ZoneId::Buttocks));
    assert!(!core.quadrants().iter().any(|q| q.id == ZoneId::Chest));
}

#[test]
fn base_image_key_tracks_gender_and_view() {
    let mut core = SelectorCore::new(BodyView::Front, Gender::Female);
    core.set_gender(Gender::Male);
    core.set_view(BodyView::Back);
    assert_eq!(core.base_image_key(), "male_back.png");
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_inside_each_zone_selects_it() {
    for view in [BodyView::Front, BodyView::Back] {
        let mut core = SelectorCore::new(view, Gender::Female);
        core.set_viewport(600.0, 900.0);
        core.set_image_size(500.0, 1000.0);
        for q in core.quadrants() {
            let pt = center_on_screen(&core, q.id);
            assert_eq!(core.on_click(pt, Button::Primary), Action::ZoneSelected(q.id));
        }
    }
}

#[test]
fn click_before_image_loads_is_ignored() {
    let mut core = SelectorCore::new(BodyView::Front, Gender::Female);
    core.set_viewport(400.0, 300.0);
    assert_eq!(core.on_click(Point::new(200.0, 150.0), Button::Primary), Action::None);
}

#[test]
fn secondary_click_is_ignored() {
    let core = ready_core(BodyView::Front);
    let pt = center_on_screen(&core, ZoneId::Head);
    assert_eq!(core.on_click(pt, Button::Secondary), Action::None);
    assert_eq!(core.on_click(pt, Button::Middle), Action::None);
}

#[test]
fn click_outside_zones_is_none() {
    let core = ready_core(BodyView::Front);
    assert_eq!(core.on_normalized_click(Point::new(0.02, 0.5)), Action::None);
}

#[test]
fn one_click_yields_one_action() {
    let core = ready_core(BodyView::Front);
    let pt = center_on_screen(&core, ZoneId::Abdomen);
    let actions: Vec<Action> = std::iter::once(core.on_click(pt, Button::Primary))
        .filter(|a| *a != Action::None)
        .collect();
    assert_eq!(actions, vec![Action::ZoneSelected(ZoneId::Abdomen)]);
}

#[test]
fn normalized_click_is_scale_invariant() {
    let mut small = SelectorCore::new(BodyView::Back, Gender::Male);
    small.set_viewport(100.0, 100.0);
    small.set_image_size(50.0, 100.0);
    let mut large = SelectorCore::new(BodyView::Back, Gender::Male);
    large.set_viewport(2000.0, 1200.0);
    large.set_image_size(50.0, 100.0);
    let p = Point::new(0.5, 0.3);
    assert_eq!(small.on_normalized_click(p), large.on_normalized_click(p));
    assert_eq!(small.on_normalized_click(p), Action::ZoneSelected(ZoneId::Back));
}
