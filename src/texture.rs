//! Startup texture loading: URL -> decoded RGBA pixels.
//!
//! Failures never abort the page; callers get a flat placeholder and the
//! scene renders with degraded (but stable) visuals.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded straight-alpha RGBA pixels ready for upload.
pub struct ImagePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImagePixels {
    /// Flat mid-gray tile: noise/grain passes become identity-ish with it.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![128, 128, 128, 255],
        }
    }
}

/// Loads and decodes an image, substituting a placeholder on any failure.
pub async fn load_image_pixels(url: &str) -> ImagePixels {
    match try_load(url).await {
        Some(pixels) => pixels,
        None => {
            log::warn!("texture {} unavailable; using flat placeholder", url);
            ImagePixels::placeholder()
        }
    }
}

async fn try_load(url: &str) -> Option<ImagePixels> {
    let document = dom::window_document()?;
    let img = web::HtmlImageElement::new().ok()?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(loaded).await.ok()?;

    let width = img.natural_width();
    let height = img.natural_height();
    if width == 0 || height == 0 {
        return None;
    }

    // Decode through a scratch 2D canvas; WebGPU gets plain bytes.
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d =
        canvas.get_context("2d").ok().flatten()?.dyn_into().ok()?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .ok()?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .ok()?;
    Some(ImagePixels {
        width,
        height,
        rgba: data.data().0,
    })
}
