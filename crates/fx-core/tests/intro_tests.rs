// Host-side tests for the session-gated intro sequence.

use fx_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_to_completion(seq: &mut IntroSequence, rng: &mut StdRng) -> Vec<ProgressTick> {
    let mut ticks = Vec::new();
    while seq.wants_progress_tick() {
        ticks.push(seq.tick_progress(rng));
        assert!(ticks.len() < 10_000, "progress never saturated");
    }
    ticks
}

#[test]
fn first_visit_shows_and_second_skips() {
    let mut session = MemorySession::new();

    let mut first = IntroSequence::default();
    assert_eq!(first.phase(), IntroPhase::NotYetShown);
    assert_eq!(first.start(&mut session), IntroPhase::Showing);
    assert!(session.has_shown_intro());

    let mut second = IntroSequence::default();
    assert_eq!(second.start(&mut session), IntroPhase::Hidden);
    assert!(!second.wants_progress_tick());
    assert_eq!(second.overlay_opacity(), 0.0);
}

#[test]
fn start_is_idempotent() {
    let mut session = MemorySession::new();
    let mut seq = IntroSequence::default();
    seq.start(&mut session);
    // a second call must not flip to Hidden just because the flag is now set
    assert_eq!(seq.start(&mut session), IntroPhase::Showing);
}

#[test]
fn progress_is_monotonic_and_saturates_once() {
    let mut session = MemorySession::new();
    let mut seq = IntroSequence::default();
    seq.start(&mut session);

    let ticks = run_to_completion(&mut seq, &mut StdRng::seed_from_u64(42));
    let completions = ticks.iter().filter(|t| t.completed).count();
    assert_eq!(completions, 1);
    assert!(ticks.last().unwrap().completed);
    assert_eq!(ticks.last().unwrap().progress, 100.0);
    for pair in ticks.windows(2) {
        assert!(pair[1].progress >= pair[0].progress);
        assert!(pair[1].progress - pair[0].progress <= INTRO_PROGRESS_STEP_MAX);
    }
    assert!(ticks.iter().all(|t| t.progress <= 100.0));
    assert_eq!(seq.phase(), IntroPhase::Completing);

    // further ticks after saturation change nothing
    let extra = seq.tick_progress(&mut StdRng::seed_from_u64(1));
    assert!(!extra.completed);
    assert_eq!(extra.progress, 100.0);
}

#[test]
fn ticks_before_start_do_nothing() {
    let mut seq = IntroSequence::default();
    let tick = seq.tick_progress(&mut StdRng::seed_from_u64(3));
    assert_eq!(tick.progress, 0.0);
    assert!(!tick.completed);
    assert_eq!(seq.phase(), IntroPhase::NotYetShown);
}

#[test]
fn fade_waits_for_grace_then_hides() {
    let mut session = MemorySession::new();
    let mut seq = IntroSequence::default();
    seq.start(&mut session);
    run_to_completion(&mut seq, &mut StdRng::seed_from_u64(7));

    // before the grace delay the overlay stays fully opaque
    let idle = seq.advance(0.5);
    assert_eq!(idle.opacity, 1.0);
    assert_eq!(idle.camera_z, INTRO_CAMERA_Z);
    assert!(!idle.finished);
    assert!(!seq.is_fading());

    seq.grace_elapsed();
    assert!(seq.is_fading());

    let mut frames = Vec::new();
    for _ in 0..120 {
        let frame = seq.advance(1.0 / 60.0);
        frames.push(frame);
        if frame.finished {
            break;
        }
    }
    let last = frames.last().unwrap();
    assert!(last.finished);
    assert_eq!(last.opacity, 0.0);
    assert_eq!(last.camera_z, 0.0);
    assert_eq!(seq.phase(), IntroPhase::Hidden);
    assert_eq!(frames.iter().filter(|f| f.finished).count(), 1);

    for pair in frames.windows(2) {
        assert!(pair[1].opacity <= pair[0].opacity);
        assert!(pair[1].camera_z <= pair[0].camera_z);
    }
    // expo-in: the camera barely moves during the first half of the fade
    let midway = frames[frames.len() / 2 - 1];
    assert!(midway.camera_z > INTRO_CAMERA_Z * 0.9, "camera z at midpoint {}", midway.camera_z);
}

#[test]
fn grace_before_saturation_is_ignored() {
    let mut session = MemorySession::new();
    let mut seq = IntroSequence::default();
    seq.start(&mut session);
    seq.grace_elapsed();
    assert!(!seq.is_fading());
    assert_eq!(seq.phase(), IntroPhase::Showing);
}

#[test]
fn progress_simulator_step_bounds() {
    let mut sim = ProgressSimulator::new(2.0, 10.0);
    let mut rng = StdRng::seed_from_u64(5);
    let mut prev = 0.0;
    while !sim.is_saturated() {
        let p = sim.tick(&mut rng);
        assert!(p >= prev && p - prev <= 2.0);
        prev = p;
    }
    assert_eq!(sim.progress(), 10.0);
}

#[test]
fn default_config_matches_site_timings() {
    let cfg = IntroConfig::default();
    assert_eq!(cfg.interval_ms, 50);
    assert_eq!(cfg.grace_ms, 500);
    assert_eq!(cfg.fade_sec, 1.0);
    assert_eq!(cfg.saturation, 100.0);
}
