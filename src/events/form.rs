use crate::constants::{FORM_FIELD_SELECTOR, SUBMIT_BUTTON_SELECTOR};
use crate::core::form::{self, ButtonFace, FieldMark, SubmitButton, CONFIRMATION_MS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Text-bearing form control: inputs and textareas share the same handling.
#[derive(Clone)]
enum FormField {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
}

impl FormField {
    fn from_element(el: web::Element) -> Option<Self> {
        match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => Some(FormField::Input(input)),
            Err(el) => el
                .dyn_into::<web::HtmlTextAreaElement>()
                .ok()
                .map(FormField::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            FormField::Input(i) => i.value(),
            FormField::TextArea(t) => t.value(),
        }
    }

    fn clear(&self) {
        match self {
            FormField::Input(i) => i.set_value(""),
            FormField::TextArea(t) => t.set_value(""),
        }
    }

    fn html(&self) -> &web::HtmlElement {
        match self {
            FormField::Input(i) => i,
            FormField::TextArea(t) => t,
        }
    }
}

fn show_face(button: &web::HtmlElement, face: ButtonFace) {
    button.set_text_content(Some(face.text()));
    dom::set_style(button, "background", face.background());
}

/// Client-side only: color the fields, flash a confirmation on the button,
/// then reset. Nothing is sent anywhere.
pub fn wire_contact_form(document: &web::Document) {
    let Some(button) = dom::query_html(document, SUBMIT_BUTTON_SELECTOR) else {
        return;
    };
    let doc = document.clone();
    let state = Rc::new(RefCell::new(SubmitButton::default()));
    let button_cb = button.clone();
    dom::listen(&button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let fields: Vec<FormField> = dom::query_all(&doc, FORM_FIELD_SELECTOR)
            .into_iter()
            .filter_map(FormField::from_element)
            .collect();
        let values: Vec<String> = fields.iter().map(FormField::value).collect();
        let validation = form::validate(&values);
        for (field, mark) in fields.iter().zip(validation.marks.iter()) {
            dom::set_style(field.html(), "border-color", mark.border_color());
        }
        let now = js_sys::Date::now();
        let Some(deadline) = state.borrow_mut().submit(&validation, now) else {
            let missing = validation
                .marks
                .iter()
                .filter(|m| **m == FieldMark::Error)
                .count();
            log::info!("[form] {missing} empty field(s)");
            return;
        };
        show_face(&button_cb, ButtonFace::Sent);
        let state_t = state.clone();
        let button_t = button_cb.clone();
        dom::set_timeout(CONFIRMATION_MS as i32, move || {
            if state_t.borrow_mut().poll(deadline) {
                show_face(&button_t, ButtonFace::Default);
                for field in &fields {
                    field.clear();
                }
            }
        });
    });
}

