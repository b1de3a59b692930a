// Host-side tests for the scene controller, driven through a recording target.

use fx_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Debug)]
struct Log {
    uploads: usize,
    uploaded_vertices: usize,
    resizes: Vec<(u32, u32)>,
    aspects: Vec<f32>,
    camera_eyes: Vec<glam::Vec3>,
    fog: Vec<[f32; 4]>,
    released: usize,
}

struct RecordingTarget {
    log: Rc<RefCell<Log>>,
    fail_upload: bool,
    fail_render: bool,
}

impl RecordingTarget {
    fn new() -> (Self, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        (
            Self {
                log: log.clone(),
                fail_upload: false,
                fail_render: false,
            },
            log,
        )
    }
}

impl RenderTarget for RecordingTarget {
    type Error = String;

    fn upload(&mut self, graph: &SceneGraph) -> Result<(), String> {
        if self.fail_upload {
            return Err("out of memory".into());
        }
        let mut log = self.log.borrow_mut();
        log.uploads += 1;
        log.uploaded_vertices = graph.vertex_count();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().resizes.push((width, height));
    }

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), String> {
        let mut log = self.log.borrow_mut();
        log.aspects.push(frame.camera.aspect);
        log.camera_eyes.push(frame.camera.eye);
        log.fog.push(Fog::shader_params(frame.fog));
        if self.fail_render {
            return Err("lost device".into());
        }
        Ok(())
    }

    fn release(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}

fn controller(kind: SceneKind) -> SceneController<RecordingTarget> {
    SceneController::new(kind.config(), behavior_for(kind))
}

fn desktop() -> Viewport {
    Viewport::new(1280.0, 720.0, 1.0)
}

#[test]
fn missing_target_stays_uninitialized() {
    let mut ctl = controller(SceneKind::Hero);
    let state = ctl.initialize(None, desktop(), &mut StdRng::seed_from_u64(1));
    assert_eq!(state, LifecycleState::Uninitialized);
    assert!(!ctl.is_running());
    assert!(ctl.graph().objects.is_empty());

    // updates and resizes are no-ops rather than panics
    ctl.update(0.5, &InputState::default());
    ctl.on_resize(desktop());
    assert_eq!(ctl.state(), LifecycleState::Uninitialized);
}

#[test]
fn initialize_sizes_then_uploads_once() {
    let (target, log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::AboutParticles);
    let state = ctl.initialize(Some(target), Viewport::new(800.0, 600.0, 2.0), &mut StdRng::seed_from_u64(2));
    assert_eq!(state, LifecycleState::Running);

    let log = log.borrow();
    assert_eq!(log.uploads, 1);
    assert_eq!(log.resizes, vec![(1600, 1200)]);
    assert!(log.uploaded_vertices >= SceneKind::AboutParticles.config().particle_count);
    assert!((ctl.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn failed_upload_leaves_controller_uninitialized() {
    let (mut target, log) = RecordingTarget::new();
    target.fail_upload = true;
    let mut ctl = controller(SceneKind::Contact);
    let state = ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(3));
    assert_eq!(state, LifecycleState::Uninitialized);
    assert!(ctl.target().is_none());
    assert!(ctl.graph().objects.is_empty());
    ctl.update(0.1, &InputState::default());
    assert!(log.borrow().aspects.is_empty());
}

#[test]
fn initialize_twice_is_ignored() {
    let (a, log_a) = RecordingTarget::new();
    let (b, log_b) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::Hero);
    let mut rng = StdRng::seed_from_u64(4);
    ctl.initialize(Some(a), desktop(), &mut rng);
    let objects = ctl.graph().objects.len();
    assert_eq!(ctl.initialize(Some(b), desktop(), &mut rng), LifecycleState::Running);
    assert_eq!(ctl.graph().objects.len(), objects);
    assert_eq!(log_a.borrow().uploads, 1);
    assert_eq!(log_b.borrow().uploads, 0);
}

#[test]
fn resize_updates_aspect_seen_by_next_frame() {
    let (target, log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::Hero);
    ctl.initialize(Some(target), Viewport::new(800.0, 800.0, 1.0), &mut StdRng::seed_from_u64(5));

    ctl.on_resize(Viewport::new(1920.0, 1080.0, 1.0));
    ctl.update(0.016, &InputState::default());

    let log = log.borrow();
    assert_eq!(log.resizes.last(), Some(&(1920, 1080)));
    let aspect = *log.aspects.last().unwrap();
    assert!((aspect - 1920.0 / 1080.0).abs() < 1e-6, "aspect {aspect}");
}

#[test]
fn zero_sized_resize_keeps_previous_aspect() {
    let (target, log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::AboutHelix);
    ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(6));
    let before = ctl.camera().aspect;

    ctl.on_resize(Viewport::new(0.0, 0.0, 1.0));
    assert_eq!(ctl.camera().aspect, before);
    // backing store never goes to zero
    assert_eq!(log.borrow().resizes.last(), Some(&(1, 1)));
}

#[test]
fn fog_is_forwarded_per_scene() {
    for (kind, mode) in [
        (SceneKind::Hero, 1.0),
        (SceneKind::AboutHelix, 2.0),
        (SceneKind::Contact, 1.0),
        (SceneKind::AboutParticles, 0.0),
        (SceneKind::Loader, 0.0),
    ] {
        let (target, log) = RecordingTarget::new();
        let mut ctl = controller(kind);
        ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(7));
        ctl.update(0.0, &InputState::default());
        assert_eq!(log.borrow().fog[0][0], mode, "{}", kind.name());
    }
}

#[test]
fn render_errors_do_not_stop_the_loop() {
    let (mut target, log) = RecordingTarget::new();
    target.fail_render = true;
    let mut ctl = controller(SceneKind::Loader);
    ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(8));
    for i in 0..3 {
        ctl.update(i as f32 * 0.016, &InputState::default());
    }
    assert!(ctl.is_running());
    assert_eq!(log.borrow().aspects.len(), 3);
}

#[test]
fn every_scene_animates_with_pointer_input() {
    for &kind in SceneKind::all() {
        let (target, log) = RecordingTarget::new();
        let mut ctl = controller(kind);
        let vp = desktop();
        assert_eq!(
            ctl.initialize(Some(target), vp, &mut StdRng::seed_from_u64(9)),
            LifecycleState::Running,
            "{}",
            kind.name()
        );
        let mut input = InputState::new(vp);
        input.pointer = glam::Vec2::new(0.3, -0.2);
        for frame in 0..120 {
            ctl.update(frame as f32 / 60.0, &input);
        }
        let log = log.borrow();
        assert_eq!(log.aspects.len(), 120);
        assert!(log.camera_eyes.iter().all(|e| e.is_finite()), "{}", kind.name());
        for id in ctl.graph().ids() {
            assert!(ctl.graph().world_matrix(id).is_finite(), "{}", kind.name());
        }
    }
}

#[test]
fn helix_camera_eases_toward_pointer() {
    let (target, log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::AboutHelix);
    ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(10));
    let mut input = InputState::new(desktop());
    input.pointer = glam::Vec2::new(1.0, 0.0);

    for frame in 0..400 {
        ctl.update(frame as f32 / 60.0, &input);
    }
    let eyes = &log.borrow().camera_eyes;
    // monotonic approach to pointer.x * 10, never overshooting
    for pair in eyes.windows(2) {
        assert!(pair[1].x >= pair[0].x);
        assert!(pair[1].x <= 10.0 + 1e-4);
    }
    let last = eyes.last().unwrap();
    assert!((last.x - 10.0).abs() < 0.01, "eye.x {}", last.x);
    assert!((last.y - 20.0).abs() < 0.01, "eye.y {}", last.y);
}

#[test]
fn smoothing_is_stable_at_its_target() {
    for x in [-3.0_f32, 0.0, 0.25, 40.0] {
        assert_eq!(approach(x, x, POINTER_FOLLOW_FACTOR), x);
    }
    let v = glam::Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(approach_vec3(v, v, POINTER_FOLLOW_FACTOR), v);
}

#[test]
fn large_frame_gaps_are_clamped() {
    let (target, _log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::AboutParticles);
    ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(11));
    let input = InputState::default();

    ctl.update(0.0, &input);
    let before = ctl.graph().objects[0].transform.rotation.y;
    // a tab left in the background for a minute
    ctl.update(60.0, &input);
    let after = ctl.graph().objects[0].transform.rotation.y;
    let max_step = 0.001 * MAX_FRAME_DT_SEC * FRAME_REFERENCE_HZ;
    assert!((after - before - max_step).abs() < 1e-6, "step {}", after - before);
}

#[test]
fn loader_leaves_camera_depth_to_the_caller() {
    let (target, _log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::Loader);
    ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(12));
    ctl.camera_mut().eye.z = 12.5;
    for frame in 0..10 {
        ctl.update(frame as f32 / 60.0, &InputState::default());
    }
    assert_eq!(ctl.camera().eye.z, 12.5);
}

#[test]
fn dispose_releases_once_and_stops_updates() {
    let (target, log) = RecordingTarget::new();
    let mut ctl = controller(SceneKind::Contact);
    ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(13));
    ctl.update(0.0, &InputState::default());

    ctl.dispose();
    ctl.dispose();
    assert_eq!(ctl.state(), LifecycleState::Disposed);
    assert_eq!(log.borrow().released, 1);

    ctl.update(1.0, &InputState::default());
    ctl.on_resize(desktop());
    assert_eq!(log.borrow().aspects.len(), 1);
    assert_eq!(log.borrow().resizes.len(), 1);
}

#[test]
fn dropping_a_running_controller_releases_the_target() {
    let (target, log) = RecordingTarget::new();
    {
        let mut ctl = controller(SceneKind::Hero);
        ctl.initialize(Some(target), desktop(), &mut StdRng::seed_from_u64(14));
    }
    assert_eq!(log.borrow().released, 1);
}
