//! DOM side of the case-study overlay. The open/close guard lives in
//! `core::overlay`; these helpers only apply the visual transition.

use crate::dom;
use web_sys as web;

#[inline]
pub fn open(document: &web::Document, title: &str, desc: &str) {
    dom::set_text(document, "caseTitle", title);
    dom::set_text(document, "caseDesc", desc);
    if let Some(el) = document.get_element_by_id("caseOverlay") {
        let _ = el.set_attribute("aria-hidden", "false");
        let _ = el.class_list().add_1("open");
    }
    freeze_scroll(document, true);
}

#[inline]
pub fn close(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("caseOverlay") {
        let _ = el.set_attribute("aria-hidden", "true");
        let _ = el.class_list().remove_1("open");
    }
    freeze_scroll(document, false);
}

/// Page scroll is held while the overlay is up.
fn freeze_scroll(document: &web::Document, frozen: bool) {
    if let Some(body) = document.body() {
        let _ = body.set_attribute("style", if frozen { "overflow:hidden" } else { "" });
    }
}
