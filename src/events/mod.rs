pub mod form;
pub mod nav;
pub mod pointer;
pub mod scroll;

use crate::core::tween::ProjectTarget;
use crate::core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every page listener may touch.
#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub scene: Rc<RefCell<SceneState>>,
    pub queued_project: Rc<RefCell<Option<ProjectTarget>>>,
}

/// Register every page listener. Each one is attached independently; a
/// missing element only disables its own behavior.
pub fn wire_page(w: &PageWiring) {
    pointer::wire_pointer_handlers(w);
    scroll::wire_scroll(w);
    nav::wire_nav_links(&w.document);
    nav::wire_cta(&w.document);
    nav::wire_project_cards(w);
    form::wire_contact_form(&w.document);
}
