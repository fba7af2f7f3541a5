use super::PageWiring;
use crate::constants::{CURSOR_CLASS, CURSOR_PRESSED_TRANSFORM, CURSOR_RELEASED_TRANSFORM};
use crate::core::MouseNdc;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &PageWiring) {
    let cursor = create_cursor(&w.document);
    wire_mousemove(w, cursor.clone());
    if let Some(cursor) = cursor {
        wire_press(&w.document, cursor);
    }
}

// Decorative cursor that trails the pointer
fn create_cursor(document: &web::Document) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(CURSOR_CLASS);
    let body = document.body()?;
    _ = body.append_child(&el);
    el.dyn_into::<web::HtmlElement>().ok()
}

fn wire_mousemove(w: &PageWiring, cursor: Option<web::HtmlElement>) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().into();
    dom::listen(&target, "mousemove", move |ev: web::MouseEvent| {
        let (vw, vh) = dom::viewport_size(&w.window);
        let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);
        if vw > 0.0 && vh > 0.0 {
            w.scene.borrow_mut().mouse = MouseNdc::from_client(cx, cy, vw, vh);
        }
        if let Some(c) = &cursor {
            dom::set_style(c, "left", &format!("{cx}px"));
            dom::set_style(c, "top", &format!("{cy}px"));
        }
    });
}

fn wire_press(document: &web::Document, cursor: web::HtmlElement) {
    let target: web::EventTarget = document.clone().into();
    let down = cursor.clone();
    dom::listen(&target, "mousedown", move |_: web::MouseEvent| {
        dom::set_style(&down, "transform", CURSOR_PRESSED_TRANSFORM);
    });
    dom::listen(&target, "mouseup", move |_: web::MouseEvent| {
        dom::set_style(&cursor, "transform", CURSOR_RELEASED_TRANSFORM);
    });
}
