use crate::confetti::ConfettiCanvas;
use crate::core::{BurstLoop, Card, Spring2};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub card: Rc<RefCell<Card>>,
    pub burst: Rc<RefCell<Option<BurstLoop>>>,
    pub confetti: Rc<RefCell<ConfettiCanvas>>,
    pub no_button: Option<web::HtmlElement>,
    pub spring: Spring2,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.follow_target(dt_sec);

        let mut confetti = self.confetti.borrow_mut();
        {
            let mut burst = self.burst.borrow_mut();
            if let Some(b) = burst.as_mut() {
                if !b.frame(instant::now(), &mut *confetti) {
                    log::info!("[burst] done after {} frames", b.frames());
                    *burst = None;
                }
            }
        }
        confetti.step_and_draw();
    }

    fn follow_target(&mut self, dt_sec: f32) {
        let card = self.card.borrow();
        if card.is_confirmed() {
            return;
        }
        let target = card.offset();
        drop(card);
        if self.spring.is_at_rest(target) {
            return;
        }
        self.spring.step(target, dt_sec);
        if let Some(btn) = &self.no_button {
            crate::dom::set_translate(btn, self.spring.pos);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
