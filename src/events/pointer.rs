use super::EventListener;
use crate::dom;
use crate::frame::FrameContext;
use fx_core::PointerFrame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer moves into the scene's input state.
///
/// Window-framed scenes listen on the window. Element-framed scenes listen on
/// the canvas's parent, since overlaid content usually covers the canvas, and
/// normalize against the canvas rect.
pub fn wire_pointer(ctx: &Rc<RefCell<FrameContext>>) -> Option<EventListener> {
    let (canvas, mapping) = {
        let c = ctx.borrow();
        (c.canvas.clone(), c.controller.config().pointer)
    };
    let target: web::EventTarget = match mapping.frame {
        PointerFrame::Window => web::window()?.into(),
        PointerFrame::Element => match canvas.parent_element() {
            Some(parent) => parent.into(),
            None => canvas.clone().into(),
        },
    };

    let ctx = ctx.clone();
    EventListener::new(&target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = dom::pointer_rect(&canvas, mapping.frame);
        ctx.borrow_mut()
            .input
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, rect, &mapping);
    })
}
