use crate::constants::{EVENT_MOUSE_LEAVE, EVENT_MOUSE_MOVE};
use crate::input::PointerTracker;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over `container`, in coordinates local to `canvas`.
pub fn wire_pointer_tracking(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    tracker: Rc<RefCell<PointerTracker>>,
) {
    wire_mousemove(canvas, container, tracker.clone());
    wire_mouseleave(container, tracker);
}

fn wire_mousemove(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    tracker: Rc<RefCell<PointerTracker>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = canvas.get_bounding_client_rect();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        tracker.borrow_mut().move_to(client, origin);
    }) as Box<dyn FnMut(_)>);
    _ = container
        .add_event_listener_with_callback(EVENT_MOUSE_MOVE, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(container: &web::HtmlElement, tracker: Rc<RefCell<PointerTracker>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        tracker.borrow_mut().leave();
    }) as Box<dyn FnMut(_)>);
    _ = container
        .add_event_listener_with_callback(EVENT_MOUSE_LEAVE, closure.as_ref().unchecked_ref());
    closure.forget();
}
