//! Session-gated intro (preloader) sequence.
//!
//! `NotYetShown -> Showing -> Completing -> Hidden`. The progress counter is
//! synthetic: a random step per fixed interval until it saturates. It is not
//! tied to any asset-loading signal.

use crate::constants::*;
use crate::session::SessionState;
use crate::tween::{Ease, Tween};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    NotYetShown,
    Showing,
    Completing,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroConfig {
    pub interval_ms: u32,
    pub step_max: f32,
    pub saturation: f32,
    pub grace_ms: u32,
    pub fade_sec: f32,
    pub camera_from_z: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            interval_ms: INTRO_PROGRESS_INTERVAL_MS,
            step_max: INTRO_PROGRESS_STEP_MAX,
            saturation: INTRO_PROGRESS_SATURATION,
            grace_ms: INTRO_GRACE_MS,
            fade_sec: INTRO_FADE_SEC,
            camera_from_z: INTRO_CAMERA_Z,
        }
    }
}

/// Random-walk progress in `[0, saturation]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSimulator {
    progress: f32,
    step_max: f32,
    saturation: f32,
}

impl ProgressSimulator {
    pub fn new(step_max: f32, saturation: f32) -> Self {
        Self {
            progress: 0.0,
            step_max,
            saturation,
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        self.progress = (self.progress + rng.gen::<f32>() * self.step_max).min(self.saturation);
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_saturated(&self) -> bool {
        self.progress >= self.saturation
    }
}

/// Result of one progress interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTick {
    pub progress: f32,
    /// True only on the tick that entered `Completing`.
    pub completed: bool,
}

/// Overlay state for one animation frame of the fade-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    pub opacity: f32,
    pub camera_z: f32,
    /// True once, on the frame the sequence became `Hidden`.
    pub finished: bool,
}

pub struct IntroSequence {
    config: IntroConfig,
    phase: IntroPhase,
    progress: ProgressSimulator,
    fade: Option<Tween>,
    flythrough: Option<Tween>,
}

impl IntroSequence {
    pub fn new(config: IntroConfig) -> Self {
        Self {
            config,
            phase: IntroPhase::NotYetShown,
            progress: ProgressSimulator::new(config.step_max, config.saturation),
            fade: None,
            flythrough: None,
        }
    }

    /// Consult the session flag. Already shown this session: skip straight
    /// to `Hidden`. Otherwise set the flag and start `Showing`.
    pub fn start(&mut self, session: &mut dyn SessionState) -> IntroPhase {
        if self.phase != IntroPhase::NotYetShown {
            return self.phase;
        }
        if session.has_shown_intro() {
            log::info!("[intro] already shown this session; skipping");
            self.phase = IntroPhase::Hidden;
        } else {
            session.mark_intro_shown();
            log::info!("[intro] showing");
            self.phase = IntroPhase::Showing;
        }
        self.phase
    }

    /// One fixed-interval progress step. Only advances while `Showing`.
    pub fn tick_progress<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ProgressTick {
        if self.phase != IntroPhase::Showing {
            return ProgressTick {
                progress: self.progress.progress(),
                completed: false,
            };
        }
        let progress = self.progress.tick(rng);
        let completed = self.progress.is_saturated();
        if completed {
            log::info!("[intro] progress saturated; completing");
            self.phase = IntroPhase::Completing;
        }
        ProgressTick { progress, completed }
    }

    /// The grace delay after saturation has passed: start the fade-out and
    /// the camera flythrough.
    pub fn grace_elapsed(&mut self) {
        if self.phase != IntroPhase::Completing || self.fade.is_some() {
            return;
        }
        self.fade = Some(Tween::new(1.0, 0.0, self.config.fade_sec, Ease::Power2InOut));
        self.flythrough = Some(Tween::new(self.config.camera_from_z, 0.0, self.config.fade_sec, Ease::ExpoIn));
    }

    /// Drive the fade tweens by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> IntroFrame {
        let camera_z = match self.flythrough.as_mut() {
            Some(t) => t.advance(dt),
            None => self.config.camera_from_z,
        };
        let (opacity, fade_done) = match self.fade.as_mut() {
            Some(t) => (t.advance(dt), t.is_finished()),
            None => (self.overlay_opacity(), false),
        };
        let finished = fade_done && self.phase == IntroPhase::Completing;
        if finished {
            log::info!("[intro] hidden");
            self.phase = IntroPhase::Hidden;
        }
        IntroFrame {
            opacity,
            camera_z,
            finished,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress.progress()
    }

    pub fn config(&self) -> &IntroConfig {
        &self.config
    }

    /// Whether the progress timer should schedule another interval.
    pub fn wants_progress_tick(&self) -> bool {
        self.phase == IntroPhase::Showing
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some() && self.phase == IntroPhase::Completing
    }

    pub fn overlay_opacity(&self) -> f32 {
        match (self.phase, self.fade.as_ref()) {
            (IntroPhase::Hidden, _) | (IntroPhase::NotYetShown, _) => 0.0,
            (_, Some(t)) => t.value(),
            (_, None) => 1.0,
        }
    }
}

impl Default for IntroSequence {
    fn default() -> Self {
        Self::new(IntroConfig::default())
    }
}
