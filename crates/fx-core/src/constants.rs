// Shared tuning constants for the background scenes and the intro sequence.

// Per-frame constants in the scene behaviours were authored against this rate
pub const FRAME_REFERENCE_HZ: f32 = 60.0;
// Largest frame step fed to behaviours (seconds); longer gaps are tab switches
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Exponential smoothing factor applied once per update for pointer follow
pub const POINTER_FOLLOW_FACTOR: f32 = 0.05;

// Layout
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // viewport width below which the loader core shrinks
pub const DEFAULT_MAX_PIXEL_RATIO: f32 = 2.0;

// Palette (sRGB hex, as authored in the site's stylesheet)
pub const CYAN: u32 = 0x06b6d4;
pub const VIOLET: u32 = 0x8b5cf6;
pub const PINK: u32 = 0xec4899;
pub const AQUA: u32 = 0x00ffff;
pub const WHITE: u32 = 0xffffff;
pub const NIGHT: u32 = 0x0b0e14;
pub const DEEP_NIGHT: u32 = 0x0a0e14;
pub const BLACK: u32 = 0x000000;

// Spiral disc twist: angular offset added per radian of base angle
pub const SPIRAL_TWIST: f32 = 0.5;

// Intro sequence timings
pub const INTRO_PROGRESS_INTERVAL_MS: u32 = 50;
pub const INTRO_PROGRESS_STEP_MAX: f32 = 2.0;
pub const INTRO_PROGRESS_SATURATION: f32 = 100.0;
pub const INTRO_GRACE_MS: u32 = 500; // pause at 100% before fading
pub const INTRO_FADE_SEC: f32 = 1.0;
pub const INTRO_CAMERA_Z: f32 = 30.0; // flythrough starts here and ends at 0
