use fx_core::{effective_pixel_ratio, FrameRect, PointerFrame, SizeSource, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a canvas by id. `Ok(None)` when the element is absent; an error
/// when it exists but is not a canvas.
pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", id))
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn js_f32(v: Result<JsValue, JsValue>) -> f32 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

/// `innerWidth` x `innerHeight` in CSS pixels.
pub fn window_size() -> (f32, f32) {
    match web::window() {
        Some(w) => (js_f32(w.inner_width()), js_f32(w.inner_height())),
        None => (0.0, 0.0),
    }
}

pub fn device_pixel_ratio() -> f32 {
    web::window().map(|w| w.device_pixel_ratio() as f32).unwrap_or(1.0)
}

/// Drawable size for a scene canvas, with the pixel ratio capped.
pub fn read_viewport(canvas: &web::HtmlCanvasElement, source: SizeSource, cap: Option<f32>) -> Viewport {
    let (width, height) = match source {
        SizeSource::Window => window_size(),
        SizeSource::Element => (canvas.client_width() as f32, canvas.client_height() as f32),
    };
    Viewport::new(width, height, effective_pixel_ratio(device_pixel_ratio(), cap))
}

/// Match the canvas backing store to the viewport's physical size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w, h) = viewport.physical_size();
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
}

/// The rect pointer coordinates are normalized against.
pub fn pointer_rect(canvas: &web::HtmlCanvasElement, frame: PointerFrame) -> FrameRect {
    match frame {
        PointerFrame::Window => {
            let (w, h) = window_size();
            FrameRect::window(w, h)
        }
        PointerFrame::Element => {
            let r = canvas.get_bounding_client_rect();
            FrameRect {
                left: r.left() as f32,
                top: r.top() as f32,
                width: r.width() as f32,
                height: r.height() as f32,
            }
        }
    }
}

/// Whether the browser exposes `navigator.gpu`.
pub fn has_webgpu() -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let nav = w.navigator();
    js_sys::Reflect::get(&nav, &JsValue::from_str("gpu"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    let _ = el.set_attribute("style", style);
}
