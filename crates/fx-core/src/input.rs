//! Pointer and viewport state fed to the per-frame update.
//!
//! The browser layer converts DOM events into raw client coordinates plus the
//! frame (window or element rect) they should be normalized against; the math
//! lives here so it can be exercised on the host.

use crate::error::{FxError, FxResult};
use glam::Vec2;

/// Output range of a normalized pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRange {
    /// `[-1, 1]` on both axes, y pointing up (NDC convention).
    Signed,
    /// `[-0.5, 0.5]` on both axes, y pointing down (screen convention).
    Centered,
}

/// Which box the pointer is normalized against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerFrame {
    Window,
    /// The canvas bounding rect; events are read from the canvas's parent.
    Element,
}

/// Per-scene pointer normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMapping {
    pub range: PointerRange,
    pub frame: PointerFrame,
    pub scale: f32,
}

impl PointerMapping {
    pub const fn new(range: PointerRange, frame: PointerFrame) -> Self {
        Self {
            range,
            frame,
            scale: 1.0,
        }
    }

    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Rectangle in CSS pixels that a pointer is normalized against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub fn window(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

/// Normalize client coordinates against `rect`. A degenerate rect maps to
/// the centre of the range.
pub fn normalize_pointer(client_x: f32, client_y: f32, rect: FrameRect, mapping: &PointerMapping) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::ZERO;
    }
    let u = (client_x - rect.left) / rect.width;
    let v = (client_y - rect.top) / rect.height;
    let p = match mapping.range {
        PointerRange::Signed => Vec2::new(u * 2.0 - 1.0, -(v * 2.0) + 1.0),
        PointerRange::Centered => Vec2::new(u - 0.5, v - 0.5),
    };
    p * mapping.scale
}

/// Drawable size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Reject sizes that cannot produce a projection.
    pub fn validate(&self) -> FxResult<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(FxError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio) as u32;
        let h = (self.height * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }
}

/// `devicePixelRatio` clamped to an optional cap.
#[inline]
pub fn effective_pixel_ratio(device_ratio: f32, cap: Option<f32>) -> f32 {
    let dpr = if device_ratio > 0.0 { device_ratio } else { 1.0 };
    match cap {
        Some(c) => dpr.min(c),
        None => dpr,
    }
}

/// Last-known pointer and viewport. Written by input events, read by update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub pointer: Vec2,
    pub viewport: Viewport,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: Vec2::ZERO,
            viewport,
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, rect: FrameRect, mapping: &PointerMapping) {
        self.pointer = normalize_pointer(client_x, client_y, rect, mapping);
    }

    /// Store the new viewport; returns whether the size actually changed so
    /// callers can skip a redundant resize.
    pub fn on_viewport_resize(&mut self, viewport: Viewport) -> bool {
        let changed = self.viewport != viewport;
        self.viewport = viewport;
        changed
    }
}
