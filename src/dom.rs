use crate::core::shapes::Metrics;
use web_sys as web;

/// Keep the canvas backing store matched to its CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Engine geometry derived from the current backing-store size.
#[inline]
pub fn canvas_metrics(canvas: &web::HtmlCanvasElement) -> Metrics {
    Metrics::new(canvas.width() as f32, canvas.height() as f32)
}
