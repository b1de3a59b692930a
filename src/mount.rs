use crate::events::{self, EventListener};
use crate::frame::{self, FrameContext, FrameLoop};
use fx_core::{LifecycleState, SceneKind};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[derive(Default)]
struct MountState {
    ctx: Option<Rc<RefCell<FrameContext>>>,
    frame_loop: Option<FrameLoop>,
    listeners: SmallVec<[EventListener; 2]>,
    stopped: bool,
}

impl MountState {
    fn teardown(&mut self) {
        self.stopped = true;
        self.listeners.clear();
        self.frame_loop = None;
        if let Some(ctx) = self.ctx.take() {
            ctx.borrow_mut().controller.dispose();
        }
    }
}

/// A background scene bound to a canvas. `stop()` cancels the frame loop,
/// removes its listeners and releases GPU resources.
#[wasm_bindgen]
pub struct SceneMount {
    inner: Rc<RefCell<MountState>>,
}

#[wasm_bindgen]
impl SceneMount {
    pub fn stop(&self) {
        self.inner.borrow_mut().teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner
            .borrow()
            .frame_loop
            .as_ref()
            .map(|l| l.is_running())
            .unwrap_or(false)
    }
}

impl Drop for SceneMount {
    fn drop(&mut self) {
        self.inner.borrow_mut().teardown();
    }
}

/// Start `kind` on `canvas`. GPU setup finishes asynchronously; a scene
/// without WebGPU stays blank and never starts its loop.
pub fn mount(canvas: web::HtmlCanvasElement, kind: SceneKind) -> SceneMount {
    let ctx = Rc::new(RefCell::new(FrameContext::new(kind, canvas.clone())));
    let inner = Rc::new(RefCell::new(MountState {
        ctx: Some(ctx.clone()),
        ..MountState::default()
    }));

    let weak = Rc::downgrade(&inner);
    wasm_bindgen_futures::spawn_local(async move {
        let gpu = frame::init_gpu(&canvas).await;
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut state = inner.borrow_mut();
        if state.stopped {
            return;
        }
        if ctx.borrow_mut().attach(gpu) != LifecycleState::Running {
            return;
        }
        state.listeners.extend(events::wire_pointer(&ctx));
        state.listeners.extend(events::wire_resize(&ctx));
        let frame_ctx = Rc::downgrade(&ctx);
        state.frame_loop = Some(FrameLoop::start(move |elapsed| match frame_ctx.upgrade() {
            Some(ctx) => {
                ctx.borrow_mut().frame(elapsed);
                true
            }
            None => false,
        }));
        log::info!("[scene] {} running", kind.name());
    });

    SceneMount { inner }
}
