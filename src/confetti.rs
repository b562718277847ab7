use crate::constants::CONFETTI_CANVAS_ID;
use crate::core::{Burst, ConfettiSink, ParticleField};
use crate::dom::{self, DomError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Full-viewport canvas that renders the particle field.
pub struct ConfettiCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    dpr: f64,
}

impl ConfettiCanvas {
    pub fn new(document: &web::Document) -> Result<Self, DomError> {
        let canvas = dom::require_element(document, CONFETTI_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| DomError::WrongElementType(CONFETTI_CANVAS_ID, "canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(DomError::NoContext("2d"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| DomError::NoContext("2d"))?;
        let mut this = Self {
            canvas,
            ctx,
            field: ParticleField::from_entropy(),
            dpr: 1.0,
        };
        this.resize();
        Ok(this)
    }

    pub fn resize(&mut self) {
        let css = dom::sync_canvas_backing_size(&self.canvas);
        self.dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.field.set_viewport(css.x, css.y);
    }

    /// Advance the particles one frame and redraw.
    pub fn step_and_draw(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        if self.field.is_empty() {
            return;
        }
        self.field.step();
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        for p in self.field.iter() {
            let [a, b, c, d] = p.corners();
            self.ctx.set_global_alpha(p.opacity() as f64);
            self.ctx.set_fill_style_str(p.color);
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.line_to(c.x as f64, c.y as f64);
            self.ctx.line_to(d.x as f64, d.y as f64);
            self.ctx.close_path();
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }
}

impl ConfettiSink for ConfettiCanvas {
    fn fire(&mut self, burst: &Burst) {
        self.field.fire(burst);
    }
}
