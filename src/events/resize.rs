use super::EventListener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-read the viewport on every window resize. Unthrottled; the controller
/// only recomputes the projection and reconfigures the surface.
pub fn wire_resize(ctx: &Rc<RefCell<FrameContext>>) -> Option<EventListener> {
    let window: web::EventTarget = web::window()?.into();
    let ctx = ctx.clone();
    EventListener::new(&window, "resize", move |_ev: web::Event| {
        ctx.borrow_mut().sync_viewport();
    })
}
