use crate::dom;
use crate::frame::CardApp;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Events that count as "about to press" the decline button.
pub const PROXIMITY_EVENTS: [&str; 3] = ["mouseenter", "touchstart", "focus"];

#[derive(Clone)]
pub struct ControlWiring {
    pub app: Rc<RefCell<CardApp>>,
    pub accept: web::HtmlElement,
    pub decline: web::HtmlElement,
    pub restart: web::HtmlElement,
}

pub fn wire_controls(w: ControlWiring) {
    wire_decline(&w);
    wire_accept(&w);
    wire_restart(&w);
}

fn wire_decline(w: &ControlWiring) {
    for event in PROXIMITY_EVENTS {
        let app = w.app.clone();
        dom::add_listener(&w.decline, event, move |_ev| {
            app.borrow_mut().on_decline_proximity();
        });
    }

    let app = w.app.clone();
    dom::add_listener(&w.decline, "click", move |_ev| {
        app.borrow().on_decline_activate();
    });
}

fn wire_accept(w: &ControlWiring) {
    let app = w.app.clone();
    dom::add_listener(&w.accept, "click", move |_ev| {
        if !app.borrow_mut().accept(dom::now_ms()) {
            log::debug!("[click] accept ignored, already accepted");
        }
    });
}

fn wire_restart(w: &ControlWiring) {
    let app = w.app.clone();
    dom::add_listener(&w.restart, "click", move |_ev| {
        app.borrow_mut().restart(dom::now_ms(), dom::viewport_size());
    });
}
