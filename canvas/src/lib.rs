//! Geometry, hit-testing, and raster layer for the body-region symptom selector.
//!
//! This crate is pure: it never performs I/O. It owns the coordinate math that
//! maps a body diagram onto a fixed viewport (cover fit), the static quadrant
//! layout for each body view, hit-testing of pointer positions against those
//! quadrants and against finer symptom regions, and raster composition of the
//! base image with translucent zone overlays. The host service is responsible
//! for fetching images, owning sessions, and translating [`engine::Action`]s
//! into selection-state transitions.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Quadrant selector engine ([`engine::SelectorCore`]) |
//! | [`zones`] | Body views, zone ids, and the static quadrant table |
//! | [`camera`] | Cover-fit transform and coordinate conversions |
//! | [`input`] | Pointer input types |
//! | [`hit`] | Hit-testing against quadrants and percent-space regions |
//! | [`render`] | Cover composition and overlay drawing on RGBA buffers |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod zones;
