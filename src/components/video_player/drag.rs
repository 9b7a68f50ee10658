//! Document-level pointer tracking scoped to a single scrub gesture.
//!
//! The listeners are attached at drag start and must be gone by drag
//! end on every exit path - pointer release, pointer loss, component
//! teardown - so they never observe unrelated pointer movement
//! elsewhere on the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

pub struct DragListeners {
    attached: bool,
    move_cb: Closure<dyn FnMut(web_sys::PointerEvent)>,
    up_cb: Closure<dyn FnMut(web_sys::PointerEvent)>,
    cancel_cb: Closure<dyn FnMut(web_sys::PointerEvent)>,
}

impl DragListeners {
    /// Attaches move/up/cancel listeners to the document for the
    /// lifetime of one drag gesture. `on_release` fires for both the
    /// normal pointerup and the abnormal pointercancel path.
    pub fn attach(
        mut on_move: impl FnMut(f64) + 'static,
        on_release: impl FnMut() + 'static,
    ) -> Option<Self> {
        let document = window()?.document()?;

        let move_cb = Closure::wrap(Box::new(move |event: web_sys::PointerEvent| {
            on_move(event.client_x() as f64);
        }) as Box<dyn FnMut(_)>);

        let release = Rc::new(RefCell::new(on_release));
        let up_release = release.clone();
        let up_cb = Closure::wrap(Box::new(move |_event: web_sys::PointerEvent| {
            (up_release.borrow_mut())();
        }) as Box<dyn FnMut(_)>);
        let cancel_cb = Closure::wrap(Box::new(move |_event: web_sys::PointerEvent| {
            (release.borrow_mut())();
        }) as Box<dyn FnMut(_)>);

        let _ = document
            .add_event_listener_with_callback("pointermove", move_cb.as_ref().unchecked_ref());
        let _ =
            document.add_event_listener_with_callback("pointerup", up_cb.as_ref().unchecked_ref());
        let _ = document
            .add_event_listener_with_callback("pointercancel", cancel_cb.as_ref().unchecked_ref());

        Some(Self {
            attached: true,
            move_cb,
            up_cb,
            cancel_cb,
        })
    }

    /// Removes the document listeners. Idempotent, and safe to call
    /// from inside one of the listeners - only the DOM registration is
    /// dropped here, never the closures themselves.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let _ = document
            .remove_event_listener_with_callback("pointermove", self.move_cb.as_ref().unchecked_ref());
        let _ = document
            .remove_event_listener_with_callback("pointerup", self.up_cb.as_ref().unchecked_ref());
        let _ = document.remove_event_listener_with_callback(
            "pointercancel",
            self.cancel_cb.as_ref().unchecked_ref(),
        );
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.detach();
    }
}
