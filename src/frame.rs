use crate::constants::FRAME_LOG_INTERVAL_SEC;
use crate::input::PointerTracker;
use crate::render::CanvasSurface;
use instant::Instant;
use particle_core::{paint, DrawCommand, ParticleField, Viewport};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub rng: StdRng,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub surface: CanvasSurface,

    // Reused between frames
    pub commands: Vec<DrawCommand>,

    pub stats_since: Instant,
    pub stats_frames: u32,
}

impl FrameContext {
    /// One animation tick: simulate, describe, clear, paint.
    pub fn frame(&mut self) {
        let radius = self.field.config().pointer.radius;
        let pointer = self.pointer.borrow().pointer(radius);

        self.field.update(pointer.as_ref());
        self.field.render_into(pointer.as_ref(), &mut self.commands);
        paint(&mut self.surface, &self.commands);

        self.log_stats();
    }

    /// Throw the current particles away and seed a new batch for `viewport`.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("[resize] {:.0}x{:.0}", viewport.width, viewport.height);
        self.field.reseed(viewport, &mut self.rng);
    }

    fn log_stats(&mut self) {
        self.stats_frames += 1;
        let elapsed = self.stats_since.elapsed().as_secs_f32();
        if elapsed >= FRAME_LOG_INTERVAL_SEC {
            let lines = self.commands.iter().filter(|c| c.is_line()).count();
            log::debug!(
                "[frame] {:.1} fps, {} particles, {} lines",
                self.stats_frames as f32 / elapsed,
                self.field.particles().len(),
                lines
            );
            self.stats_frames = 0;
            self.stats_since = Instant::now();
        }
    }
}

/// Drive `frame()` from `requestAnimationFrame` until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
