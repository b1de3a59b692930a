use crate::constants::PRELOADER_ID;
use crate::events::{self, EventListener};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::overlay::{self, PreloaderOverlay};
use crate::session::BrowserSession;
use crate::timer::Timeout;
use fx_core::{FxError, IntroConfig, IntroPhase, IntroSequence, LifecycleState, SceneKind, MAX_FRAME_DT_SEC};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct PreloaderState {
    sequence: IntroSequence,
    overlay: PreloaderOverlay,
    scene: Rc<RefCell<FrameContext>>,
    frame_loop: Option<FrameLoop>,
    progress_timer: Option<Timeout>,
    grace_timer: Option<Timeout>,
    listeners: SmallVec<[EventListener; 2]>,
    rng: StdRng,
    last_elapsed: f32,
}

/// Handle to a running intro overlay. Callbacks only hold weak references, so
/// dropping the handle tears the intro down.
pub struct Preloader {
    state: Rc<RefCell<PreloaderState>>,
}

impl Preloader {
    /// Show the intro if `#preloader` exists and this session has not seen it.
    pub fn run(document: &web::Document) -> Option<Self> {
        Self::run_with(document, IntroConfig::default())
    }

    pub fn run_with(document: &web::Document, config: IntroConfig) -> Option<Self> {
        let Some(container) = document.get_element_by_id(PRELOADER_ID) else {
            log::info!("[intro] {}", FxError::MissingElement(PRELOADER_ID.into()));
            return None;
        };

        let mut sequence = IntroSequence::new(config);
        let mut session = BrowserSession::open();
        if sequence.start(&mut session) == IntroPhase::Hidden {
            overlay::hide_container(&container);
            return None;
        }

        let overlay = match PreloaderOverlay::build(document, container.clone()) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[intro] overlay build failed: {:?}", e);
                overlay::hide_container(&container);
                return None;
            }
        };
        let scene = Rc::new(RefCell::new(FrameContext::new(SceneKind::Loader, overlay.canvas().clone())));

        let state = Rc::new(RefCell::new(PreloaderState {
            sequence,
            overlay,
            scene,
            frame_loop: None,
            progress_timer: None,
            grace_timer: None,
            listeners: SmallVec::new(),
            rng: StdRng::from_entropy(),
            last_elapsed: 0.0,
        }));

        spawn_scene(&state);
        let weak = Rc::downgrade(&state);
        let frame_loop = FrameLoop::start(move |elapsed| match weak.upgrade() {
            Some(state) => on_frame(&state, elapsed),
            None => false,
        });
        state.borrow_mut().frame_loop = Some(frame_loop);
        schedule_progress(&state);

        Some(Self { state })
    }
}

/// Acquire the GPU for the loader scene. Without one the overlay still shows
/// the progress bar and fades out on schedule.
fn spawn_scene(state: &Rc<RefCell<PreloaderState>>) {
    let weak = Rc::downgrade(state);
    let canvas = state.borrow().scene.borrow().canvas.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let gpu = frame::init_gpu(&canvas).await;
        let Some(state) = weak.upgrade() else {
            return;
        };
        let mut s = state.borrow_mut();
        if s.sequence.phase() == IntroPhase::Hidden {
            return;
        }
        let scene = s.scene.clone();
        if scene.borrow_mut().attach(gpu) == LifecycleState::Running {
            s.listeners.extend(events::wire_resize(&scene));
        }
    });
}

fn schedule_progress(state: &Rc<RefCell<PreloaderState>>) {
    let weak = Rc::downgrade(state);
    let interval = state.borrow().sequence.config().interval_ms;
    let timer = Timeout::new(interval, move || {
        if let Some(state) = weak.upgrade() {
            on_progress(&state);
        }
    });
    state.borrow_mut().progress_timer = timer;
}

fn on_progress(state: &Rc<RefCell<PreloaderState>>) {
    let (tick, wants_more, grace_ms) = {
        let mut s = state.borrow_mut();
        let s = &mut *s;
        let tick = s.sequence.tick_progress(&mut s.rng);
        s.overlay.set_progress(tick.progress);
        (tick, s.sequence.wants_progress_tick(), s.sequence.config().grace_ms)
    };
    if wants_more {
        schedule_progress(state);
        return;
    }
    state.borrow_mut().progress_timer = None;
    if tick.completed {
        let weak: Weak<RefCell<PreloaderState>> = Rc::downgrade(state);
        let timer = Timeout::new(grace_ms, move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().sequence.grace_elapsed();
            }
        });
        state.borrow_mut().grace_timer = timer;
    }
}

fn on_frame(state: &Rc<RefCell<PreloaderState>>, elapsed: f32) -> bool {
    let mut s = state.borrow_mut();
    let dt = (elapsed - s.last_elapsed).clamp(0.0, MAX_FRAME_DT_SEC);
    s.last_elapsed = elapsed;

    if s.sequence.is_fading() {
        let frame = s.sequence.advance(dt);
        s.overlay.set_opacity(frame.opacity);
        s.scene.borrow_mut().controller.camera_mut().eye.z = frame.camera_z;
        if frame.finished {
            finish(&mut s);
            return false;
        }
    }
    let scene = s.scene.clone();
    drop(s);
    scene.borrow_mut().frame(elapsed);
    true
}

fn finish(s: &mut PreloaderState) {
    s.overlay.hide();
    s.scene.borrow_mut().controller.dispose();
    s.listeners.clear();
    s.progress_timer = None;
    s.grace_timer = None;
    // Returning false from the frame callback halts the loop; this drop only
    // releases the handle.
    s.frame_loop = None;
}
