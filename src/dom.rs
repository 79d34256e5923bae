use anyhow::anyhow;
use particle_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The element whose height the canvas follows (the page header in practice).
pub fn canvas_container(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::HtmlElement> {
    canvas
        .parent_element()
        .ok_or_else(|| anyhow!("canvas has no parent element"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Size the canvas backing store to the window width and the container height.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, container: &web::HtmlElement) -> Viewport {
    let width = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(0.0) as u32;
    let height = container.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    Viewport::new(width as f32, height as f32)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}
