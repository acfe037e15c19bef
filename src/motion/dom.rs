//! Binds the stage to the live document: element lookup and styling,
//! window listeners, and the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::driver::FrameLoop;
use super::props::VisualProps;
use super::scene::{self, Scene};
use super::stage::{Stage, Target};
use super::trigger::{Layout, Viewport};
use crate::config::MotionConfig;

pub const NAVBAR: &str = ".top-nav";
pub const HERO: &str = ".hero";
pub const HERO_LINE: &str = ".hero-line";
pub const FEATURES: &str = ".features";
pub const FEATURE_CARD: &str = ".feature-card";
pub const PHILOSOPHY_LINE: &str = ".philosophy-line";
pub const PROTOCOL_CARD: &str = ".protocol-card";

const RESIZE_DEBOUNCE_MS: u32 = 150;

pub struct DomTarget {
    element: HtmlElement,
    original_style: Option<String>,
}

impl DomTarget {
    pub fn new(element: HtmlElement) -> Self {
        let original_style = element.get_attribute("style");
        Self {
            element,
            original_style,
        }
    }
}

impl Target for DomTarget {
    // Walks the offset-parent chain rather than using the bounding rect,
    // so transforms we apply never feed back into trigger windows.
    fn layout(&self) -> Option<Layout> {
        if !self.element.is_connected() {
            return None;
        }
        let mut top = 0.0;
        let mut node = Some(self.element.clone());
        while let Some(el) = node {
            top += el.offset_top() as f64;
            node = el.offset_parent().and_then(|p| p.dyn_into::<HtmlElement>().ok());
        }
        Some(Layout {
            top,
            height: self.element.offset_height() as f64,
        })
    }

    fn apply(&self, props: &VisualProps) {
        let style = self.element.style();
        for (name, value) in props.css() {
            if let Err(e) = style.set_property(name, &value) {
                debug!("Failed to set {}: {} on element: {:?}", name, value, e);
            }
        }
    }

    fn revert(&self) {
        let restored = match &self.original_style {
            Some(style) => self.element.set_attribute("style", style),
            None => self.element.remove_attribute("style"),
        };
        if let Err(e) = restored {
            debug!("Failed to restore element style: {:?}", e);
        }
    }
}

fn query_one(document: &Document, selector: &str) -> Option<DomTarget> {
    let found = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomTarget::new);
    if found.is_none() {
        debug!("No element for {}", selector);
    }
    found
}

fn query_all(document: &Document, selector: &str) -> Vec<DomTarget> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomTarget::new)
        .collect()
}

pub fn collect_scene(document: &Document) -> Scene<DomTarget> {
    Scene {
        navbar: query_one(document, NAVBAR),
        hero: query_one(document, HERO),
        hero_lines: query_all(document, HERO_LINE),
        features: query_one(document, FEATURES),
        feature_cards: query_all(document, FEATURE_CARD),
        philosophy_lines: query_all(document, PHILOSOPHY_LINE),
        protocol_cards: query_all(document, PROTOCOL_CARD),
    }
}

fn viewport(window: &Window) -> Viewport {
    Viewport {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        height: window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
    }
}

/// Seconds on the same clock `requestAnimationFrame` stamps frames with.
fn now(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0) / 1000.0
}

/// A window event listener removed when dropped.
struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn new(window: &Window, event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything one mount of the page registered. Dropping it releases all of
/// it at once.
pub struct MotionHandle {
    stage: Rc<RefCell<Stage<DomTarget>>>,
    frames: FrameLoop,
    pending_refresh: Rc<RefCell<Option<Timeout>>>,
    _listeners: Vec<WindowListener>,
}

impl Drop for MotionHandle {
    fn drop(&mut self) {
        self.frames.dispose();
        self.pending_refresh.borrow_mut().take();
        self.stage.borrow_mut().release();
        info!("Scroll motion released");
    }
}

/// Binds every scroll trigger on the current document. Returns `None` when
/// there is no window to bind to.
pub fn mount(config: MotionConfig) -> Option<MotionHandle> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let stage = scene::bind(collect_scene(&document), config, viewport(&window), now(&window));
    let registrations = stage.registration_count();
    let stage = Rc::new(RefCell::new(stage));

    let frames = {
        let stage = Rc::clone(&stage);
        FrameLoop::new(move |timestamp_ms| stage.borrow_mut().on_frame(timestamp_ms / 1000.0))
    };
    if stage.borrow().is_animating() {
        frames.start();
    }

    let mut listeners = Vec::new();

    let on_scroll = {
        let stage = Rc::clone(&stage);
        let frames = frames.clone();
        let window = window.clone();
        move || {
            let mut stage = stage.borrow_mut();
            stage.on_scroll(viewport(&window), now(&window));
            if stage.is_animating() && !frames.is_running() {
                frames.start();
            }
        }
    };
    listeners.extend(WindowListener::new(&window, "scroll", on_scroll));

    let pending_refresh = Rc::new(RefCell::new(None));
    let on_resize = {
        let stage = Rc::clone(&stage);
        let frames = frames.clone();
        let window = window.clone();
        let pending = Rc::clone(&pending_refresh);
        move || {
            let stage = Rc::clone(&stage);
            let frames = frames.clone();
            let window = window.clone();
            // Replacing the previous timeout cancels it.
            *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                let mut stage = stage.borrow_mut();
                let viewport = viewport(&window);
                stage.measure(viewport);
                stage.on_scroll(viewport, now(&window));
                if stage.is_animating() && !frames.is_running() {
                    frames.start();
                }
                debug!("Scroll triggers re-measured for {}px viewport", viewport.height);
            }));
        }
    };
    listeners.extend(WindowListener::new(&window, "resize", on_resize));

    info!("Scroll motion bound: {} triggers", registrations);
    Some(MotionHandle {
        stage,
        frames,
        pending_refresh,
        _listeners: listeners,
    })
}
