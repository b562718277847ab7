use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not a {1}")]
    WrongElementType(&'static str, &'static str),
    #[error("no {0} context")]
    NoContext(&'static str),
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        DomError::Js(format!("{:?}", v))
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn require_element(
    document: &web::Document,
    id: &'static str,
) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))
}

pub fn require_html(
    document: &web::Document,
    id: &'static str,
) -> Result<web::HtmlElement, DomError> {
    require_element(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::WrongElementType(id, "HtmlElement"))
}

/// Centre of the element's rendered box in client coordinates, transforms
/// included. `None` if the element is not in the document.
#[inline]
pub fn element_center(document: &web::Document, id: &str) -> Option<Vec2> {
    let el = document.get_element_by_id(id)?;
    let rect = el.get_bounding_client_rect();
    Some(Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    ))
}

#[inline]
pub fn set_translate(el: &web::HtmlElement, offset: Vec2) {
    let value = format!("translate({:.2}px, {:.2}px)", offset.x, offset.y);
    _ = el.style().set_property("transform", &value);
}

pub fn add_listener<E, F>(target: &web::EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener::<web::MouseEvent, _>(&el, "click", move |_| handler());
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref::<js_sys::Function>(),
            delay_ms,
        );
    }
}

/// Keep the canvas backing store at CSS size × devicePixelRatio.
/// Returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let mut css = Vec2::ONE;
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
        css = Vec2::new(rect.width() as f32, rect.height() as f32);
    }
    css
}
