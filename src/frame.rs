use crate::core::ProposalApp;
use crate::dom;
use crate::view::CardDom;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CardApp = ProposalApp<StdRng>;

pub struct FrameContext {
    pub app: Rc<RefCell<CardApp>>,
    pub dom: CardDom,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let now_ms = dom::now_ms();

        let mut app = self.app.borrow_mut();
        let report = app.frame(now_ms, dt);
        if report.hearts_replaced > 1 {
            log::debug!("[hearts] caught up {} spawns after a long frame", report.hearts_replaced);
        }
        self.dom.render(&*app, now_ms);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop.
///
/// `stop` cancels the pending frame; `resume` schedules it again and makes
/// the next frame measure its delta from the resume point.
#[derive(Clone)]
pub struct LoopHandle {
    tick: TickClosure,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    resync: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("frame loop stopped");
    }

    pub fn resume(&self) {
        self.resync.set(true);
        if !self.stopped.replace(false) {
            return;
        }
        self.request();
        log::info!("frame loop resumed");
    }

    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), self.tick.borrow().as_ref()) {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.pending.set(Some(id));
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        tick: Rc::new(RefCell::new(None)),
        pending: Rc::new(Cell::new(None)),
        stopped: Rc::new(Cell::new(false)),
        resync: Rc::new(Cell::new(false)),
    };
    let handle_tick = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.pending.set(None);
        if handle_tick.stopped.get() {
            return;
        }
        {
            let mut ctx = frame_ctx.borrow_mut();
            if handle_tick.resync.take() {
                ctx.last_instant = Instant::now();
            }
            ctx.frame();
        }
        handle_tick.request();
    }) as Box<dyn FnMut()>));
    handle.request();
    handle
}
