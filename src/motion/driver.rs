use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop that keeps going while its callback
/// returns `true`. Cloning shares the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,
    running: Cell<bool>,
    raf_id: Cell<i32>,
}

fn request_frame(closure: &FrameClosure) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    /// `callback` gets the frame timestamp in milliseconds.
    pub fn new(callback: impl FnMut(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(FrameInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// No-op if already running. Must not be called from inside the frame
    /// callback.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if !inner.running.get() {
                return;
            }

            let keep_going = inner.callback.borrow_mut()(timestamp_ms);
            if !keep_going {
                inner.running.set(false);
                return;
            }

            if let Some(ref closure) = *inner.closure.borrow() {
                match request_frame(closure) {
                    Some(id) => inner.raf_id.set(id),
                    None => inner.running.set(false),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        match request_frame(&closure) {
            Some(id) => self.inner.raf_id.set(id),
            None => self.inner.running.set(false),
        }
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.inner.raf_id.get());
        }
    }

    /// Stops the loop and drops the JS closure, breaking its reference back
    /// to this loop.
    pub fn dispose(&self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}
