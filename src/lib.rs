#![cfg(target_arch = "wasm32")]
//! Boot sequence: read the reduced-motion preference, size the canvas, load
//! the two texture tiles, bring up WebGPU, wire the interaction layer, then
//! gate everything behind the preloader before the frame loop starts.

use crate::core::{Choreographer, OverlayState, RenderState, ScrollTriggers, SHOTS};
use crate::input::CursorState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod preloader;
mod render;
mod texture;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Snapshot of the platform's reduced-motion preference, taken once.
fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn schedule_trigger_refresh(triggers: Rc<RefCell<ScrollTriggers>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            events::measure_and_refresh(&triggers);
        }) as Box<dyn FnMut()>);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            constants::TRIGGER_REFRESH_DELAY_MS,
        );
        closure.forget();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let reduce_motion = prefers_reduced_motion(&window);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("gl")
        .ok_or_else(|| anyhow::anyhow!("missing #gl"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    // Both tiles must be resolved (or written off) before the first render.
    let noise = texture::load_image_pixels("textures/noise.png").await;
    let grain = texture::load_image_pixels("textures/grain.png").await;
    let gpu = frame::init_gpu(&canvas, &noise, &grain).await;

    let (vw, vh) = dom::viewport_size(&window);
    let cursor = Rc::new(RefCell::new(CursorState::centered(vw, vh)));
    let overlay_state = Rc::new(RefCell::new(OverlayState::new()));
    let triggers = Rc::new(RefCell::new(ScrollTriggers::new()));

    events::wire_cursor_tracking(cursor.clone());
    events::wire_cards(&document, overlay_state.clone(), reduce_motion);
    events::wire_cta(&document, reduce_motion);
    events::wire_overlay_close(&document, overlay_state);
    events::wire_resize(canvas.clone(), triggers.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: RenderState::at_shot(&SHOTS[0]),
        choreo: Choreographer::new(reduce_motion),
        triggers: triggers.clone(),
        cursor,
        cursor_el: document.get_element_by_id("cursor"),
        canvas,
        gpu,
        start: Instant::now(),
        reduce_motion,
    }));

    preloader::run(reduce_motion, move || {
        if let Some(doc) = dom::window_document() {
            events::size_chapter_pins(&doc);
        }
        events::measure_and_refresh(&triggers);
        frame_ctx.borrow_mut().go_to_shot(0);
        frame::start_loop(frame_ctx);
        // pick up late layout (fonts, images) once things settle
        schedule_trigger_refresh(triggers);
    });

    Ok(())
}
