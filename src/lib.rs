#![cfg(target_arch = "wasm32")]
use crate::core::{Card, Evader, Spring2};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod confetti;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod view;

fn wire_canvas_resize(confetti: &Rc<RefCell<confetti::ConfettiCanvas>>) {
    let confetti_resize = confetti.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        confetti_resize.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("be-mine starting");

    if let Some(document) = dom::window_document() {
        if let Some(root) = document.get_element_by_id(constants::ROOT_ID) {
            view::render_placeholder(&root);
        }
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static MOUNTED: AtomicBool = AtomicBool::new(false);
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or(dom::DomError::NoWindow)?;
    let document = window.document().ok_or(dom::DomError::NoDocument)?;

    view::mount(&document)?;

    let card = Rc::new(RefCell::new(Card::new(Evader::from_entropy())));
    let burst = Rc::new(RefCell::new(None));
    let confetti = Rc::new(RefCell::new(confetti::ConfettiCanvas::new(&document)?));
    wire_canvas_resize(&confetti);

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        card: card.clone(),
        burst: burst.clone(),
    });

    // Without the no-button the spring has nothing to move; the rest still works.
    let no_button = dom::require_html(&document, constants::NO_BUTTON_ID)
        .map_err(|e| log::warn!("[view] {}", e))
        .ok();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        card,
        burst,
        confetti,
        no_button,
        spring: Spring2::default(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
