//! DOM event subscription: forwards browser input events into an
//! [`InputTracker`].
//!
//! [`bind`] registers listeners for the six input categories (key down/up,
//! button down/up, pointer motion, pointer enter/leave) exactly once. Each
//! callback performs a single tracker write and returns; nothing blocks and
//! nothing re-enters. The closures are deliberately leaked with
//! [`Closure::forget`] because the subscriptions live for the rest of the
//! process.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, KeyboardEvent, MouseEvent};

use crate::input::{InputEvent, InputTracker, MouseButton};

/// Subscribe the input listeners on `target`, writing into `tracker`.
///
/// Intended to be called once at startup; calling it again would register a
/// second set of listeners.
///
/// # Errors
///
/// Returns `Err` if the browser rejects a listener registration.
pub fn bind(target: &EventTarget, tracker: &Rc<RefCell<InputTracker>>) -> Result<(), JsValue> {
    on_key(target, "keydown", tracker, |code| InputEvent::KeyDown { code })?;
    on_key(target, "keyup", tracker, |code| InputEvent::KeyUp { code })?;
    on_button(target, "mousedown", tracker, |button| InputEvent::ButtonDown { button })?;
    on_button(target, "mouseup", tracker, |button| InputEvent::ButtonUp { button })?;
    on_pointer(target, "mousemove", tracker, |x, y| InputEvent::PointerMoved { x, y })?;
    on_pointer(target, "mouseenter", tracker, |x, y| InputEvent::PointerEntered { x, y })?;
    on_pointer(target, "mouseleave", tracker, |x, y| InputEvent::PointerLeft { x, y })?;
    log::debug!("input listeners registered");
    Ok(())
}

fn on_key(
    target: &EventTarget,
    kind: &str,
    tracker: &Rc<RefCell<InputTracker>>,
    to_event: impl Fn(u8) -> InputEvent + 'static,
) -> Result<(), JsValue> {
    let tracker = Rc::clone(tracker);
    register(target, kind, move |ev: KeyboardEvent| {
        // Codes above 255 fall outside the tracked table and are dropped.
        if let Ok(code) = u8::try_from(ev.key_code()) {
            tracker.borrow_mut().apply(to_event(code));
        }
    })
}

fn on_button(
    target: &EventTarget,
    kind: &str,
    tracker: &Rc<RefCell<InputTracker>>,
    to_event: impl Fn(MouseButton) -> InputEvent + 'static,
) -> Result<(), JsValue> {
    let tracker = Rc::clone(tracker);
    register(target, kind, move |ev: MouseEvent| {
        if let Some(button) = MouseButton::from_index(ev.button()) {
            tracker.borrow_mut().apply(to_event(button));
        }
    })
}

fn on_pointer(
    target: &EventTarget,
    kind: &str,
    tracker: &Rc<RefCell<InputTracker>>,
    to_event: impl Fn(f64, f64) -> InputEvent + 'static,
) -> Result<(), JsValue> {
    let tracker = Rc::clone(tracker);
    register(target, kind, move |ev: MouseEvent| {
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        tracker.borrow_mut().apply(to_event(x, y));
    })
}

fn register<E>(target: &EventTarget, kind: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
