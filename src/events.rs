use crate::constants::{BUTTON_ZONE_ID, NO_BUTTON_ID, YES_BUTTON_ID};
use crate::core::{BurstLoop, Card};
use crate::dom;
use crate::view;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub card: Rc<RefCell<Card>>,
    pub burst: Rc<RefCell<Option<BurstLoop>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_zone_pointermove(&w);
    wire_target_escapes(&w);
    wire_confirm(&w);
}

fn wire_zone_pointermove(w: &InputWiring) {
    let Some(zone) = w.document.get_element_by_id(BUTTON_ZONE_ID) else {
        log::warn!("[input] missing #{}", BUTTON_ZONE_ID);
        return;
    };
    let w = w.clone();
    dom::add_listener::<web::MouseEvent, _>(&zone, "mousemove", move |ev| {
        if w.card.borrow().is_confirmed() {
            return;
        }
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let center = dom::element_center(&w.document, NO_BUTTON_ID);
        if w.card.borrow_mut().on_pointer_move(pointer, center) {
            log::debug!("[card] dodge -> {:?}", w.card.borrow().offset());
        }
    });
}

fn wire_target_escapes(w: &InputWiring) {
    let Some(target) = w.document.get_element_by_id(NO_BUTTON_ID) else {
        log::warn!("[input] missing #{}", NO_BUTTON_ID);
        return;
    };
    for event in ["mouseenter", "click"] {
        let card = w.card.clone();
        dom::add_listener::<web::MouseEvent, _>(&target, event, move |_| {
            card.borrow_mut().relocate();
        });
    }
    let card = w.card.clone();
    dom::add_listener::<web::TouchEvent, _>(&target, "touchstart", move |ev| {
        if card.borrow_mut().relocate() {
            ev.prevent_default();
        }
    });
}

fn wire_confirm(w: &InputWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, YES_BUTTON_ID, move || {
        let started = w.card.borrow_mut().confirm(instant::now());
        if let Some(burst) = started {
            log::info!("[card] confirmed; bursting until {:.0}", burst.end_ms());
            *w.burst.borrow_mut() = Some(burst);
            view::show_celebration(&w.document);
        }
    });
}
