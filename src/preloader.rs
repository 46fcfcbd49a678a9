//! One-shot startup gate: tween a progress readout to 100%, fade the veil,
//! then hand control to the boot continuation.

use crate::constants::{PRELOADER_DURATION, PRELOADER_FADE};
use crate::core::Ease;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs the preloader sequence and invokes `on_done` exactly once after the
/// fade completes. Under reduced motion the veil is removed immediately.
pub fn run(reduce_motion: bool, on_done: impl FnOnce() + 'static) {
    let Some(document) = dom::window_document() else {
        on_done();
        return;
    };
    if reduce_motion {
        hide(&document);
        on_done();
        return;
    }

    let start = Instant::now();
    let on_done: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_done))));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let t = start.elapsed().as_secs_f32();

        if t < PRELOADER_DURATION {
            let p = (100.0 * Ease::QuadOut.sample(t / PRELOADER_DURATION)).round();
            set_progress(&document, p as u32);
        } else if t < PRELOADER_DURATION + PRELOADER_FADE {
            set_progress(&document, 100);
            if let Some(el) = document.get_element_by_id("preloader") {
                let _ = el.class_list().add_1("fade");
            }
        } else {
            hide(&document);
            if let Some(done) = on_done.borrow_mut().take() {
                done();
            }
            return; // stop scheduling
        }

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

fn set_progress(document: &web::Document, pct: u32) {
    dom::set_text(document, "pct", &format!("{}%", pct));
    if let Some(bar) = document.get_element_by_id("bar") {
        dom::set_style(&bar, &format!("width:{}%", pct));
    }
}

fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("preloader") {
        dom::set_style(&el, "display:none");
    }
}
