#![cfg(target_arch = "wasm32")]
//! Morphing binary hero animation: a field of "0"/"1" glyphs that morphs
//! through grid, neuron, kidney and galaxy silhouettes before settling on a
//! text block. The pure engine lives in `core`; this crate root wires it to
//! the page canvas and the requestAnimationFrame loop.

use crate::core::constants::PARTICLE_COUNT;
use crate::core::machine::MorphEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod render;

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    frame_ctx: &Rc<RefCell<frame::FrameContext>>,
) {
    let canvas_resize = canvas.clone();
    let frame_ctx_resize = frame_ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        // Targets already in flight stay in the old coordinate space; the
        // next forming phase regenerates them under the new metrics.
        let metrics = dom::canvas_metrics(&canvas_resize);
        frame_ctx_resize.borrow_mut().engine.set_metrics(metrics);
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
    log::info!("morph-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Pages without the hero canvas simply run no animation
    let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
        log::info!("no #{} element; animation disabled", constants::CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    let metrics = dom::canvas_metrics(&canvas);
    log::info!(
        "canvas {}x{} scale={:.1}",
        metrics.width,
        metrics.height,
        metrics.scale
    );

    let seed = js_sys::Date::now() as u64;
    let engine = MorphEngine::new(PARTICLE_COUNT, metrics, seed, 0.0);
    let renderer = render::CanvasRenderer::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        renderer,
        epoch: Instant::now(),
    }));

    wire_canvas_resize(&canvas, &frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}
