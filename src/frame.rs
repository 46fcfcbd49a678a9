use crate::constants::*;
use crate::core::{Choreographer, RenderState, ScrollTriggers};
use crate::dom;
use crate::input::CursorState;
use crate::render;
use crate::texture::ImagePixels;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick owns or shares with the event layer.
pub struct FrameContext<'a> {
    pub state: RenderState,
    pub choreo: Choreographer,
    pub triggers: Rc<RefCell<ScrollTriggers>>,
    pub cursor: Rc<RefCell<CursorState>>,
    pub cursor_el: Option<web::Element>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub start: Instant,
    pub reduce_motion: bool,
}

impl<'a> FrameContext<'a> {
    /// Starts (or re-targets) a shot transition at the current frame time.
    pub fn go_to_shot(&mut self, index: usize) {
        let now = self.start.elapsed().as_secs_f64();
        self.choreo.go_to_shot(index, &self.state, now);
    }

    /// One display frame: publish scroll to the choreography, settle state,
    /// then project state into the renderer. Scroll handling always precedes
    /// the render so the frame never sees a half-updated state.
    pub fn frame(&mut self) {
        let now = self.start.elapsed().as_secs_f64();
        let t = now as f32;

        if let Some(window) = web::window() {
            let pos = dom::scroll_pos(&window);
            let fired = self.triggers.borrow_mut().update(pos);
            if let Some(shot) = fired {
                self.choreo.go_to_shot(shot, &self.state, now);
            }
            let progress = self.triggers.borrow().progress(pos);
            self.choreo.set_scroll_progress(&mut self.state, progress);
        }
        self.choreo.apply(&mut self.state, now);

        if !self.reduce_motion {
            let mut cursor = self.cursor.borrow_mut();
            cursor.step(CURSOR_FOLLOW_FACTOR);
            if let Some(el) = &self.cursor_el {
                dom::set_style(
                    el,
                    &format!("transform:translate({:.1}px,{:.1}px)", cursor.cx, cursor.cy),
                );
            }
        }

        if let Some(g) = &mut self.gpu {
            g.set_hero_rotation(
                self.state.rot + t * HERO_SPIN_RATE,
                (t * HERO_TILT_FREQ).sin() * HERO_TILT_AMPL,
            );
            g.set_particles_rotation(
                t * DOTS_SPIN_RATE,
                (t * DOTS_TILT_FREQ).sin() * DOTS_TILT_AMPL,
            );
            g.set_camera(self.state.cam, self.state.look);
            let fill = Vec3::new(
                FILL_BASE_X + (t * FILL_WOBBLE_FREQ).sin() * FILL_WOBBLE_AMPL,
                FILL_Y,
                FILL_Z,
            );
            let rim = Vec3::new(
                RIM_X,
                RIM_Y,
                RIM_BASE_Z + (t * RIM_WOBBLE_FREQ).cos() * RIM_WOBBLE_AMPL,
            );
            g.set_lights(self.state.key, fill, rim);

            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(t) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    noise: &ImagePixels,
    grain: &ImagePixels,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, noise, grain).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
