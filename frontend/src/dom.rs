//! Thin helpers over `web_sys` shared by the components.
//!
//! Everything here absorbs `JsValue` errors: a missing window, document or
//! element turns into `None` and callers treat it as "nothing to do".

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

/// All elements matching `selector` as `HtmlElement`s, in document order.
pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// `(top, bottom)` of the element relative to the viewport.
pub fn viewport_edges(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.bottom())
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls to the element an in-page `#id` href points at, leaving
/// room for the fixed navbar. Returns `false` when there is no such element.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = query_html(href) else {
        return false;
    };
    let navbar_height = query_html(".navbar").map_or(0, |nav| nav.offset_height());
    smooth_scroll_to(&window, anchor_scroll_top(target.offset_top(), navbar_height));
    true
}

/// Scroll position that puts a target's top edge just below the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: i32, navbar_height: i32) -> f64 {
    f64::from(target_offset_top) - f64::from(navbar_height)
}

pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    let list = root.class_list();
    let result = if enabled { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        warn!("Could not update root class {}: {:?}", class, e);
    }
}

pub fn set_root_style(property: &str, value: &str) {
    if let Some(root) = document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = root.style().set_property(property, value);
    }
}

pub fn set_body_style(property: &str, value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property(property, value);
    }
}

pub fn document_loaded() -> bool {
    document().map_or(false, |d| d.ready_state() == "complete")
}

/// A scheduled animation frame. Dropping it cancels the frame if it has not
/// run yet and releases the callback.
pub struct Frame {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Frame {
    fn drop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

/// Runs `f` on the next animation frame, for as long as the returned
/// [`Frame`] is alive.
pub fn request_frame(f: impl FnOnce() + 'static) -> Option<Frame> {
    let window = web_sys::window()?;
    let mut f = Some(f);
    let callback = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| warn!("requestAnimationFrame failed: {:?}", e))
        .ok()?;
    Some(Frame {
        window,
        id,
        _callback: callback,
    })
}

/// Calls `tick` on every animation frame until dropped.
pub struct FrameLoop {
    window: Window,
    frame: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let frame = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let frame = frame.clone();
            let callback = callback.clone();
            Closure::wrap(Box::new(move || {
                tick();
                if let Some(next) = callback.borrow().as_ref() {
                    frame.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut()>)
        };

        frame.set(window.request_animation_frame(closure.as_ref().unchecked_ref()).ok());
        *callback.borrow_mut() = Some(closure);

        Some(Self {
            window,
            frame,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds a handle to its own slot; clearing it breaks the cycle.
        self.callback.borrow_mut().take();
    }
}

/// Milliseconds from navigation start to the end of the load event, once
/// the browser has recorded it.
pub fn load_duration(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    (load_event_end > 0.0 && load_event_end >= navigation_start)
        .then(|| load_event_end - navigation_start)
}

pub fn page_load_time() -> Option<f64> {
    let timing = web_sys::window()?.performance()?.timing();
    load_duration(timing.navigation_start(), timing.load_event_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_scroll_clears_navbar() {
        assert_eq!(anchor_scroll_top(1200, 80), 1120.0);
        assert_eq!(anchor_scroll_top(1200, 0), 1200.0);
        // Sections near the top may ask for a negative offset; the browser clamps it.
        assert_eq!(anchor_scroll_top(40, 80), -40.0);
    }

    #[test]
    fn test_load_duration_requires_recorded_end() {
        assert_eq!(load_duration(1000.0, 0.0), None);
        assert_eq!(load_duration(1000.0, 1850.0), Some(850.0));
        assert_eq!(load_duration(1000.0, 900.0), None);
    }
}
