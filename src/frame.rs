use crate::constants::CALLBACK_RELEASE_DELAY_MS;
use crate::dom;
use crate::render;
use crate::timer;
use fx_core::{behavior_for, FxError, InputState, LifecycleState, SceneConfig, SceneController, SceneKind};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-scene state shared by the frame loop and the input listeners.
pub struct FrameContext {
    pub controller: SceneController<render::GpuState>,
    pub input: InputState,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn new(kind: SceneKind, canvas: web::HtmlCanvasElement) -> Self {
        Self::with_config(kind.config(), canvas)
    }

    pub fn with_config(config: SceneConfig, canvas: web::HtmlCanvasElement) -> Self {
        let viewport = dom::read_viewport(&canvas, config.size_source, config.max_pixel_ratio);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        let behavior = behavior_for(config.kind);
        Self {
            controller: SceneController::new(config, behavior),
            input: InputState::new(viewport),
            canvas,
        }
    }

    /// Build the scene on `gpu`. Without a GPU the controller stays
    /// `Uninitialized` (logged) and frames are no-ops.
    pub fn attach(&mut self, gpu: Option<render::GpuState>) -> LifecycleState {
        if let Err(e) = self.input.viewport.validate() {
            log::warn!("[scene] {}: {}; drawing at 1x1 until resized", self.controller.config().kind.name(), e);
        }
        let mut rng = StdRng::from_entropy();
        self.controller.initialize(gpu, self.input.viewport, &mut rng)
    }

    pub fn frame(&mut self, elapsed: f32) {
        self.controller.update(elapsed, &self.input);
    }

    pub fn sync_viewport(&mut self) {
        let cfg = self.controller.config();
        let viewport = dom::read_viewport(&self.canvas, cfg.size_source, cfg.max_pixel_ratio);
        if self.input.on_viewport_resize(viewport) {
            dom::sync_canvas_backing_size(&self.canvas, &viewport);
            self.controller.on_resize(viewport);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    if !dom::has_webgpu() {
        log::warn!("[gpu] {}", FxError::RenderUnavailable("navigator.gpu missing".into()));
        return None;
    }
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[gpu] {}", FxError::RenderUnavailable(format!("{:?}", e)));
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop. The callback receives seconds since the loop
/// started and returns whether to keep going.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f32) -> bool + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let started = Instant::now();
        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            if on_frame(started.elapsed().as_secs_f32()) {
                pending_tick.set(request_frame(&tick_clone));
            } else {
                halt(&running_tick, &pending_tick, &tick_clone);
            }
        }) as Box<dyn FnMut()>));
        pending.set(request_frame(&tick));

        Self {
            running,
            pending,
            tick,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and stop rescheduling. Idempotent.
    pub fn stop(&self) {
        halt(&self.running, &self.pending, &self.tick);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

fn halt(running: &Cell<bool>, pending: &Cell<Option<i32>>, tick: &TickSlot) {
    if !running.replace(false) {
        return;
    }
    if let (Some(id), Some(w)) = (pending.take(), web::window()) {
        let _ = w.cancel_animation_frame(id);
    }
    // The tick closure may be on the stack right now; free it from a later task.
    let tick = tick.clone();
    timer::defer(CALLBACK_RELEASE_DELAY_MS, move || {
        tick.borrow_mut().take();
    });
}
