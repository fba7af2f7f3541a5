// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_describe_a_valid_frustum() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    // The deepest scroll position must stay inside the frustum
    assert!(CAMERA_BASE_Z + SCROLL_DEPTH_SPAN < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_band_fractions_are_normalized() {
    assert!(CAMERA_DAMPING > 0.0 && CAMERA_DAMPING <= 1.0);
    assert!(FOCUS_BAND_TOP >= 0.0 && FOCUS_BAND_TOP < FOCUS_BAND_BOTTOM);
    assert!(FOCUS_BAND_BOTTOM <= 1.0);
}

#[test]
fn geometry_tables_have_one_entry_per_solid() {
    assert_eq!(GEOMETRY_POSITIONS.len(), 3);
    assert_eq!(GEOMETRY_COLORS.len(), 3);
    assert_eq!(GEOMETRY_OPACITY.len(), 3);
    for o in GEOMETRY_OPACITY {
        assert!(o > 0.0 && o <= 1.0);
    }
    for c in GEOMETRY_COLORS.iter().chain([AMBIENT_COLOR, POINT_LIGHT_COLOR].iter()) {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_and_solid_sizes_are_positive() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPREAD > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(TORUS_TUBE < TORUS_RADIUS);
    assert!(TORUS_RADIAL_SEGMENTS >= 3 && TORUS_TUBULAR_SEGMENTS >= 3);
    assert!(ICOSAHEDRON_RADIUS > 0.0 && OCTAHEDRON_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_timings_and_selectors() {
    assert!(LOADING_FADE_DELAY_MS > 0);
    assert!(LOADING_HIDE_DELAY_MS > 0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(CANVAS_ID.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    assert!(PROJECT_ATTR.starts_with("data-"));
    assert!(SECTION_SELECTOR.starts_with('.'));
}
