use crate::constants::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The full-screen preloader: a canvas for the loader scene plus a title and
/// a progress bar, built inside the `#preloader` container.
pub struct PreloaderOverlay {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    bar: web::HtmlElement,
}

fn create_html(document: &web::Document, tag: &str, style: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::set_style(&el, style);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

impl PreloaderOverlay {
    /// Replace the container's content with the overlay markup.
    pub fn build(document: &web::Document, container: web::Element) -> anyhow::Result<Self> {
        let container = container
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", PRELOADER_ID))?;
        container.set_inner_html("");
        dom::set_style(&container, PRELOADER_STYLE);

        let canvas = dom::create_canvas(document)?;
        dom::set_style(&canvas, PRELOADER_CANVAS_STYLE);
        append(&container, &canvas)?;

        let text = create_html(document, "div", LOADING_TEXT_STYLE)?;
        let title = create_html(document, "h2", LOADING_TITLE_STYLE)?;
        title.set_text_content(Some(LOADING_TITLE));
        let track = create_html(document, "div", LOADING_TRACK_STYLE)?;
        let bar = create_html(document, "div", LOADING_BAR_STYLE)?;
        bar.set_id(LOADING_BAR_ID);
        append(&track, &bar)?;
        append(&text, &title)?;
        append(&text, &track)?;
        append(&container, &text)?;

        Ok(Self { container, canvas, bar })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn set_progress(&self, percent: f32) {
        let _ = self
            .bar
            .style()
            .set_property("width", &format!("{}%", percent.clamp(0.0, 100.0)));
    }

    pub fn set_opacity(&self, opacity: f32) {
        let _ = self
            .container
            .style()
            .set_property("opacity", &format!("{}", opacity.clamp(0.0, 1.0)));
    }

    pub fn hide(&self) {
        let _ = self.container.style().set_property("display", "none");
    }
}

/// Hide the container without building anything (intro already seen).
#[inline]
pub fn hide_container(container: &web::Element) {
    dom::set_style(container, PRELOADER_HIDDEN_STYLE);
}
