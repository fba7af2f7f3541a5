use crate::constants::{LOADING_FADE_DELAY_MS, LOADING_HIDE_DELAY_MS, LOADING_SCREEN_ID};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn loading_screen(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(LOADING_SCREEN_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn fade(document: &web::Document) {
    if let Some(el) = loading_screen(document) {
        dom::set_style(&el, "opacity", "0");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = loading_screen(document) {
        dom::set_style(&el, "display", "none");
    }
}

/// Fade the loading screen out and release the frame loop. `loaded` flips to
/// true when the fade starts and is never cleared.
pub fn schedule_dismiss(document: &web::Document, loaded: Rc<RefCell<bool>>) {
    let doc = document.clone();
    dom::set_timeout(LOADING_FADE_DELAY_MS, move || {
        fade(&doc);
        *loaded.borrow_mut() = true;
        log::info!("[scene] content loaded");
        dom::set_timeout(LOADING_HIDE_DELAY_MS, move || hide(&doc));
    });
}
