#![cfg(target_arch = "wasm32")]
//! Browser entry point: mounts the page's background scenes and the intro
//! overlay onto whichever canvases the page provides.

use crate::constants::*;
use fx_core::{FxError, SceneKind};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod mount;
mod overlay;
mod preloader;
mod render;
mod session;
mod timer;

pub use mount::SceneMount;

thread_local! {
    static MOUNTS: RefCell<Vec<SceneMount>> = const { RefCell::new(Vec::new()) };
    static INTRO: RefCell<Option<preloader::Preloader>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("webnex-fx starting");

    let Some(document) = dom::window_document() else {
        log::warn!("[start] no window/document");
        return Ok(());
    };

    for id in [HERO_CANVAS_ID, ABOUT_CANVAS_ID, CONTACT_CANVAS_ID] {
        match dom::canvas_by_id(&document, id) {
            Ok(Some(canvas)) => {
                let kind = scene_for(id, &canvas);
                let mounted = mount::mount(canvas, kind);
                MOUNTS.with(|m| m.borrow_mut().push(mounted));
            }
            Ok(None) => log::info!("[start] {}; scene skipped", FxError::MissingElement(id.into())),
            Err(e) => log::warn!("[start] {:?}", e),
        }
    }

    let intro = preloader::Preloader::run(&document);
    INTRO.with(|slot| *slot.borrow_mut() = intro);
    Ok(())
}

/// The about section hosts either scene; `data-scene` picks one.
fn scene_for(id: &str, canvas: &web::HtmlCanvasElement) -> SceneKind {
    match id {
        HERO_CANVAS_ID => SceneKind::Hero,
        CONTACT_CANVAS_ID => SceneKind::Contact,
        _ => canvas
            .get_attribute(SCENE_ATTR)
            .and_then(|v| SceneKind::from_attr(&v))
            .unwrap_or(SceneKind::AboutHelix),
    }
}

/// Mount a scene by name (`hero`, `helix`, `particles`, `contact`, `loader`) onto the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn mount_scene(canvas_id: &str, kind: &str) -> Result<SceneMount, JsValue> {
    let kind = SceneKind::from_attr(kind).ok_or_else(|| JsValue::from_str(&format!("unknown scene '{}'", kind)))?;
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    match dom::canvas_by_id(&document, canvas_id) {
        Ok(Some(canvas)) => Ok(mount::mount(canvas, kind)),
        Ok(None) => Err(JsValue::from_str(&FxError::MissingElement(canvas_id.into()).to_string())),
        Err(e) => Err(JsValue::from_str(&format!("{:?}", e))),
    }
}

/// Stop every scene mounted at startup.
#[wasm_bindgen]
pub fn stop_all() {
    MOUNTS.with(|m| {
        for mounted in m.borrow_mut().drain(..) {
            mounted.stop();
        }
    });
}
