use crate::constants::EVENT_RESIZE;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-fit the canvas and re-seed the field whenever the window resizes.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let canvas = canvas.clone();
    let container = container.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_size(&canvas, &container);
        frame_ctx.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(EVENT_RESIZE, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
