use crate::core::{meter, slot, Control, Page};
use crate::dom::{self, DomSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedPage = Rc<RefCell<Page<DomSurface>>>;

pub fn wire_all(document: &web::Document, page: &SharedPage) {
    wire_question_flow(document, page);
    wire_evasive_controls(document, page);
    wire_love_meter(document, page);
    wire_music_toggle(document, page);
}

fn wire_question_flow(document: &web::Document, page: &SharedPage) {
    for control in Control::ALL {
        let page = page.clone();
        let wired = dom::add_click_listener(document, control.element_id(), move || {
            page.borrow_mut().trigger(control, &mut rand::thread_rng());
        });
        if !wired {
            log::debug!("[flow] #{} missing", control.element_id());
        }
    }
}

// Hover and click both make the control run away.
fn wire_evasive_controls(document: &web::Document, page: &SharedPage) {
    for id in slot::EVASIVE {
        for event in ["mouseover", "click"] {
            let page = page.clone();
            dom::add_listener(document, id, event, move || {
                page.borrow_mut().evade(id, &mut rand::thread_rng());
            });
        }
    }
}

fn wire_love_meter(document: &web::Document, page: &SharedPage) {
    let Some(input) = document
        .get_element_by_id(slot::LOVE_METER)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let page = page.clone();
    dom::add_listener(document, slot::LOVE_METER, "input", move || {
        let raw = input.value();
        match meter::parse_reading(&raw) {
            Some(value) => {
                page.borrow_mut().on_meter_input(value);
            }
            None => log::warn!("[meter] unreadable value {:?}", raw),
        }
    });
}

fn wire_music_toggle(document: &web::Document, page: &SharedPage) {
    if !page.borrow().music_ready() {
        return;
    }
    let page = page.clone();
    dom::add_click_listener(document, slot::MUSIC_TOGGLE, move || {
        page.borrow_mut().toggle_music();
    });
}
