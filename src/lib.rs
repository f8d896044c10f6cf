#![cfg(target_arch = "wasm32")]
use crate::core::text::CardText;
use crate::core::ProposalApp;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod view;

fn card_text(window: &web::Window) -> CardText {
    match window.location().search() {
        Ok(query) => CardText::from_query(&query),
        Err(e) => {
            log::warn!("location.search unavailable: {:?}", e);
            CardText::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(constants::ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::ROOT_ID))?;

    let text = card_text(&window);
    let card_dom = view::CardDom::build(&document, &root, &text)?;

    let viewport = dom::viewport_size();
    let app = Rc::new(RefCell::new(ProposalApp::mount(
        viewport,
        dom::now_ms(),
        StdRng::from_entropy(),
    )));
    log::info!(
        "[flow] mounted for {} at {:.0}x{:.0}, {} hearts",
        text.recipient,
        viewport.x,
        viewport.y,
        app.borrow().field().len()
    );

    events::wire_controls(events::ControlWiring {
        app: app.clone(),
        accept: card_dom.accept.clone(),
        decline: card_dom.decline.clone(),
        restart: card_dom.restart.clone(),
    });
    let canvas = card_dom.canvas.clone();

    // Hearts, spring, burst and rendering all advance on requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app: app.clone(),
        dom: card_dom,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);
    events::wire_window(app, canvas, frame_loop);

    Ok(())
}
