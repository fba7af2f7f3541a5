use super::PageWiring;
use crate::constants::{
    CTA_BUTTON_SELECTOR, CTA_TARGET_SELECTOR, NAV_LINK_SELECTOR, PROJECT_ATTR,
    PROJECT_CARD_SELECTOR,
};
use crate::core::tween::{parse_project_id, project_target};
use crate::dom;
use web_sys as web;

/// In-page navigation links scroll smoothly to the section named by `href`.
pub fn wire_nav_links(document: &web::Document) {
    let doc = document.clone();
    dom::on_click_all(document, NAV_LINK_SELECTOR, move |link, ev| {
        ev.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        match doc.query_selector(&href) {
            Ok(Some(section)) => dom::smooth_scroll_to(&section),
            _ => log::warn!("[nav] no section for {href}"),
        }
    });
}

pub fn wire_cta(document: &web::Document) {
    let doc = document.clone();
    dom::on_click_all(document, CTA_BUTTON_SELECTOR, move |_, _| {
        if let Ok(Some(target)) = doc.query_selector(CTA_TARGET_SELECTOR) {
            dom::smooth_scroll_to(&target);
        }
    });
}

/// Clicking a project card queues a camera tween; the frame loop starts it.
pub fn wire_project_cards(w: &PageWiring) {
    let queued = w.queued_project.clone();
    dom::on_click_all(&w.document, PROJECT_CARD_SELECTOR, move |card, _| {
        let raw = card.get_attribute(PROJECT_ATTR).unwrap_or_default();
        match parse_project_id(&raw) {
            Some(id) => {
                log::info!("[project] focus {id}");
                *queued.borrow_mut() = Some(project_target(id));
            }
            None => log::warn!("[project] ignoring card with {PROJECT_ATTR}={raw:?}"),
        }
    });
}
