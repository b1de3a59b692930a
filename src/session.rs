use crate::constants::{SESSION_VISITED_KEY, SESSION_VISITED_VALUE};
use fx_core::{MemorySession, SessionState};
use web_sys as web;

/// `sessionStorage`-backed flag. Falls back to an in-memory flag when storage
/// is blocked (private mode, sandboxed iframes), which shows the intro on
/// every load instead of failing.
pub enum BrowserSession {
    Storage(web::Storage),
    Memory(MemorySession),
}

impl BrowserSession {
    pub fn open() -> Self {
        match web::window().and_then(|w| w.session_storage().ok().flatten()) {
            Some(s) => BrowserSession::Storage(s),
            None => {
                log::warn!("[intro] sessionStorage unavailable; using in-memory session");
                BrowserSession::Memory(MemorySession::new())
            }
        }
    }
}

impl SessionState for BrowserSession {
    fn has_shown_intro(&self) -> bool {
        match self {
            BrowserSession::Storage(s) => s.get_item(SESSION_VISITED_KEY).ok().flatten().is_some(),
            BrowserSession::Memory(m) => m.has_shown_intro(),
        }
    }

    fn mark_intro_shown(&mut self) {
        match self {
            BrowserSession::Storage(s) => {
                if let Err(e) = s.set_item(SESSION_VISITED_KEY, SESSION_VISITED_VALUE) {
                    log::warn!("[intro] could not persist session flag: {:?}", e);
                }
            }
            BrowserSession::Memory(m) => m.mark_intro_shown(),
        }
    }
}
