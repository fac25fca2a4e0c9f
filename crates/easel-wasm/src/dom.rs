//! DOM wiring: animation frames and input listeners.

use crate::canvas::WebCanvas;
use easel_runtime::{Drawable, KeyEvent, Modifiers, MouseButton, MouseEvent, Runtime};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, Window};

pub(crate) type Shared<D> = Rc<RefCell<Runtime<WebCanvas, D>>>;

pub fn key_event(e: &KeyboardEvent) -> KeyEvent {
    KeyEvent {
        key: e.key(),
        code: e.code(),
        modifiers: Modifiers {
            shift: e.shift_key(),
            ctrl: e.ctrl_key(),
            alt: e.alt_key(),
            meta: e.meta_key(),
        },
    }
}

pub fn mouse_event(e: &web_sys::MouseEvent) -> MouseEvent {
    MouseEvent {
        offset_x: e.offset_x() as f64,
        offset_y: e.offset_y() as f64,
        button: MouseButton::from_dom(e.button()),
        modifiers: Modifiers {
            shift: e.shift_key(),
            ctrl: e.ctrl_key(),
            alt: e.alt_key(),
            meta: e.meta_key(),
        },
    }
}

/// Drive `runtime` from `requestAnimationFrame` until the page goes away.
///
/// The next frame is requested before the current one runs. A panic inside a
/// tick leaves the runtime borrowed, so later frames and input fail too.
pub(crate) fn run_animation_loop<D>(window: Window, runtime: Shared<D>) -> Result<(), JsValue>
where
    D: Drawable<WebCanvas> + 'static,
{
    // The closure holds a handle to itself and therefore lives as long as
    // the page.
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&callback);
    let win = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if let Some(cb) = handle.borrow().as_ref()
            && let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref())
        {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
        runtime.borrow_mut().frame(js_sys::Date::now());
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// `keydown`/`keyup` on the window.
pub(crate) fn listen_keys<D>(window: &Window, runtime: &Shared<D>) -> Result<(), JsValue>
where
    D: Drawable<WebCanvas> + 'static,
{
    let rt = Rc::clone(runtime);
    listen(window, "keydown", move |event| {
        if let Some(e) = event.dyn_ref::<KeyboardEvent>() {
            rt.borrow_mut().key_down(&key_event(e));
        }
    })?;

    let rt = Rc::clone(runtime);
    listen(window, "keyup", move |event| {
        if let Some(e) = event.dyn_ref::<KeyboardEvent>() {
            rt.borrow_mut().key_up(&key_event(e));
        }
    })
}

/// `mousedown`/`mousemove` on the canvas.
pub(crate) fn listen_mouse<D>(
    canvas: &HtmlCanvasElement,
    runtime: &Shared<D>,
) -> Result<(), JsValue>
where
    D: Drawable<WebCanvas> + 'static,
{
    let rt = Rc::clone(runtime);
    listen(canvas, "mousedown", move |event| {
        if let Some(e) = event.dyn_ref::<web_sys::MouseEvent>() {
            rt.borrow_mut().mouse_down(&mouse_event(e));
        }
    })?;

    let rt = Rc::clone(runtime);
    listen(canvas, "mousemove", move |event| {
        if let Some(e) = event.dyn_ref::<web_sys::MouseEvent>() {
            rt.borrow_mut().mouse_move(&mouse_event(e));
        }
    })
}

/// Capture-phase listener that skips already-handled events and marks the
/// ones it handles.
fn listen(
    target: &EventTarget,
    kind: &str,
    mut handler: impl FnMut(&Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if event.default_prevented() {
            return;
        }
        handler(&event);
        event.prevent_default();
    });
    target.add_event_listener_with_callback_and_bool(
        kind,
        closure.as_ref().unchecked_ref(),
        true,
    )?;
    // Listeners stay registered for the page lifetime.
    closure.forget();
    Ok(())
}
