// Host-side tests for the scroll-to-camera mapping and section focus band.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scene::PerspectiveCamera;
use crate::core::scroll::*;

fn metrics(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        scroll_height,
        viewport_height,
    }
}

fn rect(top: f64, bottom: f64) -> SectionRect {
    SectionRect { top, bottom }
}

#[test]
fn top_and_bottom_of_page_map_to_depth_and_tilt() {
    let top = camera_for_scroll(0.0);
    assert_eq!(top, ScrollCamera { z: 5.0, tilt_x: 0.0 });
    let bottom = camera_for_scroll(1.0);
    assert_eq!(bottom, ScrollCamera { z: 15.0, tilt_x: 0.5 });
    let half = camera_for_scroll(0.5);
    assert_eq!(half.z, 10.0);
    assert_eq!(half.tilt_x, 0.25);
}

#[test]
fn fraction_covers_scrollable_distance() {
    assert_eq!(metrics(0.0, 3000.0, 1000.0).fraction(), Some(0.0));
    assert_eq!(metrics(1000.0, 3000.0, 1000.0).fraction(), Some(0.5));
    assert_eq!(metrics(2000.0, 3000.0, 1000.0).fraction(), Some(1.0));
}

#[test]
fn page_that_does_not_scroll_has_no_fraction() {
    assert_eq!(metrics(0.0, 800.0, 800.0).fraction(), None);
    assert_eq!(metrics(0.0, 600.0, 800.0).fraction(), None);
    assert_eq!(ScrollMetrics::default().fraction(), None);
}

#[test]
fn apply_scroll_only_touches_depth_and_tilt() {
    let mut camera = PerspectiveCamera::new(1.5);
    camera.transform.position.x = 0.3;
    camera.transform.position.y = -0.2;
    camera.transform.rotation.y = 0.7;
    apply_scroll(&mut camera, 1.0);
    assert_eq!(camera.transform.position.z, 15.0);
    assert_eq!(camera.transform.rotation.x, 0.5);
    assert_eq!(camera.transform.position.x, 0.3);
    assert_eq!(camera.transform.position.y, -0.2);
    assert_eq!(camera.transform.rotation.y, 0.7);
}

#[test]
fn progress_bar_width_is_a_percentage() {
    assert_eq!(progress_width(0.0), "0%");
    assert_eq!(progress_width(0.5), "50%");
    assert_eq!(progress_width(1.0), "100%");
}

#[test]
fn focus_band_is_strictly_between_forty_and_sixty_percent() {
    let vh = 1000.0;
    assert!(in_focus_band(rect(0.0, 1000.0), vh));
    assert!(in_focus_band(rect(599.0, 1200.0), vh));
    assert!(in_focus_band(rect(-800.0, 401.0), vh));
    assert!(!in_focus_band(rect(600.0, 1200.0), vh));
    assert!(!in_focus_band(rect(-800.0, 400.0), vh));
    assert!(!in_focus_band(rect(-2000.0, -1000.0), vh));
}

#[test]
fn current_section_is_last_visible_in_document_order() {
    let rects = [
        rect(-500.0, 300.0),
        rect(350.0, 900.0),
        rect(550.0, 1200.0),
        rect(700.0, 1500.0),
    ];
    let focus = section_focus(&rects, 1000.0);
    assert_eq!(focus.active.as_slice(), &[false, true, true, false]);
    assert_eq!(focus.current, Some(2));
}

#[test]
fn no_section_in_band_leaves_current_unset() {
    let rects = [rect(-900.0, -100.0), rect(1100.0, 1900.0)];
    let focus = section_focus(&rects, 1000.0);
    assert!(focus.active.iter().all(|a| !a));
    assert_eq!(focus.current, None);
    assert!(section_focus(&[], 1000.0).active.is_empty());
}
