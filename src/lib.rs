#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, DATA_ATTR_PREFIX, EVENT_DOM_READY, LOG_LEVEL};
use crate::frame::FrameContext;
use crate::input::PointerTracker;
use crate::render::CanvasSurface;
use anyhow::anyhow;
use instant::Instant;
use particle_core::ParticleField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overrides;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("particle-network starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(run) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback(EVENT_DOM_READY, closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        run();
    }
    Ok(())
}

fn run() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::info!("no #{} canvas on this page; background disabled", CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    let container = dom::canvas_container(&canvas)?;
    let ctx = dom::context_2d(&canvas)?;

    let config = overrides::resolve_config(|key| {
        canvas.get_attribute(&format!("{}{}", DATA_ATTR_PREFIX, key))
    });
    let viewport = dom::sync_canvas_size(&canvas, &container);
    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(config, viewport, &mut rng)?;
    log::info!(
        "[field] {} particles, {:.0}x{:.0}",
        field.particles().len(),
        viewport.width,
        viewport.height
    );

    let pointer = Rc::new(RefCell::new(PointerTracker::default()));
    events::wire_pointer_tracking(&canvas, &container, pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field,
        rng,
        pointer,
        surface: CanvasSurface::new(canvas.clone(), ctx),
        commands: Vec::new(),
        stats_since: Instant::now(),
        stats_frames: 0,
    }));
    events::wire_canvas_resize(&canvas, &container, frame_ctx.clone());

    frame::start_loop(frame_ctx);
    Ok(())
}
