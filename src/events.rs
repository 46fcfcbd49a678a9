//! Listener wiring for the interaction layer: cursor tracking, magnetic
//! hover, card/CTA microinteractions, overlay close paths, resize.
//!
//! All handlers tolerate missing elements and keep the closure-and-forget
//! shape; nothing here touches the 3D core beyond the scroll triggers.

use crate::constants::{CARD_MAGNET_STRENGTH, CTA_MAGNET_STRENGTH, MAGNET_Y_FACTOR};
use crate::core::{chapter_pin_distance, OverlayState, PanelRect, ScrollTriggers};
use crate::dom;
use crate::input::{self, CursorState};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Records the raw pointer position; the frame loop eases toward it.
pub fn wire_cursor_tracking(cursor: Rc<RefCell<CursorState>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut c = cursor.borrow_mut();
            c.mx = ev.client_x() as f32;
            c.my = ev.client_y() as f32;
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn set_cursor_label(document: &web::Document, text: &str, show: bool) {
    if let Some(el) = document.get_element_by_id("cursorLabel") {
        el.set_text_content(Some(text));
        let _ = if show {
            el.class_list().add_1("show")
        } else {
            el.class_list().remove_1("show")
        };
    }
}

/// Magnetic hover: the element leans toward the pointer inside its rect and
/// relaxes on leave (the CSS transition supplies the easing).
fn wire_magnetic(el: &web::Element, strength: f32) {
    {
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let fx = input::rect_fraction(ev.client_x() as f32, rect.left() as f32, rect.width() as f32);
            let fy = input::rect_fraction(ev.client_y() as f32, rect.top() as f32, rect.height() as f32);
            let (dx, dy) = input::magnetic_offset(fx, fy, strength, MAGNET_Y_FACTOR);
            dom::set_style(&target, &format!("transform:translate({:.1}px,{:.1}px)", dx, dy));
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            dom::set_style(&target, "");
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_hover_label(el: &web::Element, label: &'static str) {
    {
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            if let Some(doc) = dom::window_document() {
                set_cursor_label(&doc, label, true);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            if let Some(doc) = dom::window_document() {
                set_cursor_label(&doc, "", false);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Work cards: magnetic hover, cursor label, click-to-open case study.
pub fn wire_cards(
    document: &web::Document,
    overlay_state: Rc<RefCell<OverlayState>>,
    reduce_motion: bool,
) {
    for card in dom::query_all(document, ".card") {
        if !reduce_motion {
            wire_magnetic(&card, CARD_MAGNET_STRENGTH);
        }
        wire_hover_label(&card, "View");

        let state = overlay_state.clone();
        let card_for_click = card.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let title = card_for_click
                .get_attribute("data-case")
                .or_else(|| dom::child_text(&card_for_click, "h3"))
                .unwrap_or_else(|| "Project".to_string());
            let desc = card_for_click
                .get_attribute("data-desc")
                .or_else(|| dom::child_text(&card_for_click, "p"))
                .unwrap_or_else(|| "Placeholder case study.".to_string());
            if state.borrow_mut().open() {
                if let Some(doc) = dom::window_document() {
                    overlay::open(&doc, &title, &desc);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_cta(document: &web::Document, reduce_motion: bool) {
    if let Some(cta) = document.get_element_by_id("cta") {
        if !reduce_motion {
            wire_magnetic(&cta, CTA_MAGNET_STRENGTH);
        }
        wire_hover_label(&cta, "Start");
    }
}

/// Overlay close paths: close control, backdrop click, Escape.
pub fn wire_overlay_close(document: &web::Document, overlay_state: Rc<RefCell<OverlayState>>) {
    let close = move |state: &Rc<RefCell<OverlayState>>| {
        if state.borrow_mut().close() {
            if let Some(doc) = dom::window_document() {
                overlay::close(&doc);
            }
        }
    };

    {
        let state = overlay_state.clone();
        let close = close.clone();
        dom::add_click_listener(document, "caseClose", move || close(&state));
    }

    if let Some(el) = document.get_element_by_id("caseOverlay") {
        let state = overlay_state.clone();
        let close = close.clone();
        let overlay_el = el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let hit_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|t| t == overlay_el || t.class_list().contains("case-bg"))
                .unwrap_or(false);
            if hit_backdrop {
                close(&state);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(window) = web::window() {
        let state = overlay_state;
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" {
                close(&state);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Resize: resync the canvas backing store and recompute trigger boundaries.
pub fn wire_resize(canvas: web::HtmlCanvasElement, triggers: Rc<RefCell<ScrollTriggers>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
            measure_and_refresh(&triggers);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Measures panel geometry from the DOM and rebuilds the trigger table.
pub fn measure_and_refresh(triggers: &Rc<RefCell<ScrollTriggers>>) {
    let Some(window) = web::window() else { return };
    let Some(document) = window.document() else {
        return;
    };
    let scroll_y = dom::scroll_pos(&window);
    let (_, viewport_h) = dom::viewport_size(&window);
    let rects: Vec<PanelRect> = dom::query_all(&document, ".panel")
        .iter()
        .map(|panel| {
            let shot = panel
                .get_attribute("data-shot")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(0);
            let rect = panel.get_bounding_client_rect();
            PanelRect {
                shot,
                top: rect.top() as f32 + scroll_y,
                height: rect.height() as f32,
            }
        })
        .collect();
    let total_scroll = (dom::document_height(&document) - viewport_h).max(0.0);
    triggers
        .borrow_mut()
        .refresh(&rects, viewport_h, total_scroll, scroll_y);
}

/// Sizes each chapter wrapper so its sticky inner section stays pinned for
/// 150% of its own height of scroll.
pub fn size_chapter_pins(document: &web::Document) {
    for chapter in dom::query_all(document, ".chapter") {
        if let Ok(Some(inner)) = chapter.query_selector(".chapter-inner") {
            let h = inner.get_bounding_client_rect().height() as f32;
            if h > 0.0 {
                dom::set_style(&chapter, &format!("height:{:.0}px", h + chapter_pin_distance(h)));
            }
        }
    }
}
