/// Per-visit flag store consulted by the intro sequence.
pub trait SessionState {
    fn has_shown_intro(&self) -> bool;
    fn mark_intro_shown(&mut self);
}

/// In-process session, used by tests and as a fallback when the browser
/// refuses storage access.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    shown: bool,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionState for MemorySession {
    fn has_shown_intro(&self) -> bool {
        self.shown
    }

    fn mark_intro_shown(&mut self) {
        self.shown = true;
    }
}
