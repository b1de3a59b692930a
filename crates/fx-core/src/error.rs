//! Failure modes of the decorative layer.
//!
//! None of these are fatal to the host page: callers log them and carry on
//! without the effect.

/// Reasons an effect could not be mounted or drawn.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FxError {
    /// The page has no element with the requested id.
    #[error("missing element #{0}")]
    MissingElement(String),

    /// The rendering capability (adapter, surface, device) is not available.
    #[error("rendering unavailable: {0}")]
    RenderUnavailable(String),

    /// Viewport dimensions that cannot produce a projection.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

impl FxError {
    /// Missing optional capabilities are worth a warning; missing elements
    /// just mean the page does not host that effect.
    pub fn is_degradation(&self) -> bool {
        matches!(self, FxError::RenderUnavailable(_))
    }
}

pub type FxResult<T> = Result<T, FxError>;
