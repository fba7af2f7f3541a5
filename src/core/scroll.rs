use super::constants::*;
use super::scene::PerspectiveCamera;
use smallvec::SmallVec;

/// Raw page measurements read on each scroll event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Fraction of the scrollable distance covered, `None` when the page does
    /// not scroll (content shorter than the viewport).
    pub fn fraction(&self) -> Option<f64> {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable > 0.0 {
            Some(self.scroll_y / scrollable)
        } else {
            None
        }
    }
}

/// Camera depth and tilt for a scroll fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCamera {
    pub z: f64,
    pub tilt_x: f64,
}

#[inline]
pub fn camera_for_scroll(fraction: f64) -> ScrollCamera {
    ScrollCamera {
        z: CAMERA_BASE_Z + fraction * SCROLL_DEPTH_SPAN,
        tilt_x: fraction * SCROLL_TILT_SPAN,
    }
}

/// Set camera depth and tilt for a scroll fraction; other fields untouched.
pub fn apply_scroll(camera: &mut PerspectiveCamera, fraction: f64) {
    let mapped = camera_for_scroll(fraction);
    camera.transform.position.z = mapped.z;
    camera.transform.rotation.x = mapped.tilt_x;
}

/// CSS width for the progress bar.
#[inline]
pub fn progress_width(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// Whether the section overlaps the band between 40% and 60% of the viewport.
#[inline]
pub fn in_focus_band(rect: SectionRect, viewport_height: f64) -> bool {
    rect.top < viewport_height * FOCUS_BAND_BOTTOM && rect.bottom > viewport_height * FOCUS_BAND_TOP
}

#[derive(Clone, Debug, Default)]
pub struct SectionFocus {
    pub active: SmallVec<[bool; 8]>,
    /// Last active index in DOM order; `None` if no section is in the band.
    pub current: Option<usize>,
}

pub fn section_focus(rects: &[SectionRect], viewport_height: f64) -> SectionFocus {
    let mut focus = SectionFocus::default();
    for (i, rect) in rects.iter().enumerate() {
        let visible = in_focus_band(*rect, viewport_height);
        if visible {
            focus.current = Some(i);
        }
        focus.active.push(visible);
    }
    focus
}
