use super::PageWiring;
use crate::constants::{ACTIVE_CLASS, SCROLL_PROGRESS_SELECTOR, SECTION_SELECTOR};
use crate::core::scroll::{self, ScrollMetrics, SectionRect};
use crate::dom;
use web_sys as web;

fn read_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let (_, viewport_height) = dom::viewport_size(window);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        scroll_height: document
            .body()
            .map(|b| b.scroll_height() as f64)
            .unwrap_or(0.0),
        viewport_height,
    }
}

/// Scroll drives camera depth/tilt, the progress bar and the active section.
/// Runs on every native scroll event.
pub fn wire_scroll(w: &PageWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.window.clone().into();
    dom::listen(&target, "scroll", move |_: web::Event| {
        let metrics = read_metrics(&w.window, &w.document);
        if let Some(fraction) = metrics.fraction() {
            if let Some(bar) = dom::query_html(&w.document, SCROLL_PROGRESS_SELECTOR) {
                dom::set_style(&bar, "width", &scroll::progress_width(fraction));
            }
            scroll::apply_scroll(&mut w.scene.borrow_mut().camera, fraction);
        }
        update_sections(&w, metrics.viewport_height);
    });
}

fn update_sections(w: &PageWiring, viewport_height: f64) {
    let sections = dom::query_all(&w.document, SECTION_SELECTOR);
    let rects: Vec<SectionRect> = sections
        .iter()
        .map(|s| {
            let r = s.get_bounding_client_rect();
            SectionRect {
                top: r.top(),
                bottom: r.bottom(),
            }
        })
        .collect();
    let focus = scroll::section_focus(&rects, viewport_height);
    for (section, active) in sections.iter().zip(focus.active.iter()) {
        let cl = section.class_list();
        if *active {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
    if let Some(current) = focus.current {
        w.scene.borrow_mut().current_section = current;
    }
}
