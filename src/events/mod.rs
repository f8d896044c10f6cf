pub mod pointer;

pub use pointer::*;

use crate::dom;
use crate::frame::{CardApp, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level wiring: keep the confetti canvas in step with the viewport.
/// The frame loop stops when the page is torn down and resumes when the page
/// is restored from the back/forward cache.
pub fn wire_window(app: Rc<RefCell<CardApp>>, canvas: web::HtmlCanvasElement, frame_loop: LoopHandle) {
    let Some(window) = web::window() else {
        return;
    };

    dom::add_listener(&window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas);
        app.borrow_mut().set_viewport(dom::viewport_size());
    });

    // pages entering the back/forward cache come back through pageshow
    let on_hide = frame_loop.clone();
    dom::add_listener(&window, "pagehide", move |ev| {
        if !is_persisted(&ev) {
            on_hide.stop();
        }
    });

    dom::add_listener(&window, "pageshow", move |ev| {
        if is_persisted(&ev) {
            frame_loop.resume();
        }
    });
}

fn is_persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|e| e.persisted())
        .unwrap_or(false)
}
