use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Schedule `f` once after `ms`. The callback is owned by JS and freed after
/// it runs. Returns the timer handle.
pub fn defer(ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms as i32)
        .ok()
}

/// One-shot `setTimeout`, cleared when dropped.
///
/// Dropping from inside its own callback is fine: clearing a timer that has
/// already fired does nothing.
pub struct Timeout {
    handle: i32,
}

impl Timeout {
    pub fn new(ms: u32, f: impl FnOnce() + 'static) -> Option<Self> {
        defer(ms, f).map(|handle| Self { handle })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.handle);
        }
    }
}
