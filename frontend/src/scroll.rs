//! Scroll reactors and the per-frame coordinator that feeds them.
//!
//! Scroll, resize and load events only request a frame; the frame takes one
//! [`ScrollMetrics`] snapshot and publishes it through context. Every reactor
//! recomputes from that snapshot, so the work per rendered frame is bounded
//! no matter how many events fire.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn read(window: &Window) -> Self {
        let root = window.document().and_then(|d| d.document_element());
        Self {
            scroll_y: window.scroll_y().unwrap_or_default(),
            viewport_width: window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default(),
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default(),
            scroll_height: root.as_ref().map_or(0.0, |r| f64::from(r.scroll_height())),
            client_height: root.as_ref().map_or(0.0, |r| f64::from(r.client_height())),
        }
    }
}

/// Collapses bursts of events into at most one pending animation frame.
///
/// The last scheduled frame handle is kept until the next one replaces it or
/// the coordinator is torn down, so it is never released from inside its own
/// callback.
#[derive(Debug)]
pub struct FrameCoalescer<F> {
    ticking: bool,
    pending: Option<F>,
}

impl<F> Default for FrameCoalescer<F> {
    fn default() -> Self {
        Self {
            ticking: false,
            pending: None,
        }
    }
}

impl<F> FrameCoalescer<F> {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn scheduled(&mut self, frame: Option<F>) {
        match frame {
            Some(id) => self.pending = Some(id),
            // Scheduling failed; let the next event try again.
            None => self.ticking = false,
        }
    }

    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn take_pending(&mut self) -> Option<F> {
        self.ticking = false;
        self.pending.take()
    }
}

const COORDINATED_EVENTS: [&str; 3] = ["scroll", "resize", "load"];

/// Installs the window listeners and returns the latest frame's metrics.
#[hook]
pub fn use_scroll_coordinator() -> ScrollMetrics {
    let metrics = use_state(|| {
        web_sys::window()
            .map(|w| ScrollMetrics::read(&w))
            .unwrap_or_default()
    });

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let coalescer = Rc::new(RefCell::new(FrameCoalescer::<dom::Frame>::default()));

                let on_event = {
                    let coalescer = coalescer.clone();
                    Closure::wrap(Box::new(move || {
                        if !coalescer.borrow_mut().request() {
                            return;
                        }
                        let frame = {
                            let coalescer = coalescer.clone();
                            let metrics = metrics.clone();
                            dom::request_frame(move || {
                                coalescer.borrow_mut().complete();
                                if let Some(window) = web_sys::window() {
                                    metrics.set(ScrollMetrics::read(&window));
                                }
                            })
                        };
                        coalescer.borrow_mut().scheduled(frame);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    for event in COORDINATED_EVENTS {
                        if let Err(e) = window.add_event_listener_with_callback(
                            event,
                            on_event.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not listen for {}: {:?}", event, e);
                        }
                    }
                }

                // Initial pass, in case the page mounted scrolled.
                on_event
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&wasm_bindgen::JsValue::NULL)
                    .ok();

                move || {
                    if let Some(window) = &window {
                        for event in COORDINATED_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                on_event.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    drop(coalescer.borrow_mut().take_pending());
                }
            },
            (),
        );
    }

    *metrics
}

/// Latest metrics published by the coordinator.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    use_context::<ScrollMetrics>().unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section under `scroll_y + offset`. Overlapping sections resolve
/// to the last one in document order.
pub fn active_section(sections: &[SectionBox], scroll_y: f64, offset: f64) -> Option<&str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .filter(|s| position >= s.top && position < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Percentage of the scrollable distance already covered, in `[0, 100]`.
pub fn progress_percent(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has come within `offset` px of the viewport bottom.
pub fn in_reveal_range(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox { id: "a".into(), top: 0.0, height: 300.0 },
            SectionBox { id: "b".into(), top: 300.0, height: 300.0 },
        ]
    }

    #[test]
    fn test_active_section_uses_offset_position() {
        assert_eq!(active_section(&sections(), 250.0, 100.0), Some("b"));
        assert_eq!(active_section(&sections(), 150.0, 100.0), Some("a"));
        assert_eq!(active_section(&sections(), 0.0, 100.0), Some("a"));
    }

    #[test]
    fn test_active_section_half_open_ranges() {
        assert_eq!(active_section(&sections(), 200.0, 100.0), Some("b"));
        assert_eq!(active_section(&sections(), 500.0, 100.0), None);
        assert_eq!(active_section(&[], 10.0, 100.0), None);
    }

    #[test]
    fn test_active_section_overlap_prefers_last() {
        let mut overlapping = sections();
        overlapping.push(SectionBox { id: "c".into(), top: 200.0, height: 400.0 });
        assert_eq!(active_section(&overlapping, 250.0, 100.0), Some("c"));
    }

    #[test]
    fn test_threshold_reactors() {
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(51.0, 50.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }

    #[test]
    fn test_parallax_moves_at_half_speed_upwards() {
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(400.0, 0.5), -200.0);
    }

    #[test]
    fn test_progress_percent() {
        let metrics = ScrollMetrics {
            scroll_y: 500.0,
            scroll_height: 2000.0,
            client_height: 1000.0,
            ..Default::default()
        };
        assert_eq!(progress_percent(&metrics), 50.0);

        let overscrolled = ScrollMetrics { scroll_y: 1200.0, ..metrics };
        assert_eq!(progress_percent(&overscrolled), 100.0);

        let short_page = ScrollMetrics {
            scroll_y: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
            ..Default::default()
        };
        assert_eq!(progress_percent(&short_page), 0.0);
    }

    #[test]
    fn test_reveal_range() {
        assert!(in_reveal_range(50.0, 800.0, 100.0));
        assert!(!in_reveal_range(700.0, 800.0, 100.0));
        assert!(!in_reveal_range(900.0, 800.0, 100.0));
    }

    #[test]
    fn test_in_viewport() {
        assert!(in_viewport(100.0, 200.0, 800.0));
        assert!(!in_viewport(-300.0, -10.0, 800.0));
        assert!(!in_viewport(800.0, 900.0, 800.0));
    }

    #[test]
    fn test_coalescer_allows_one_frame_at_a_time() {
        let mut c = FrameCoalescer::<i32>::default();
        assert!(c.request());
        c.scheduled(Some(7));
        assert!(!c.request());
        assert!(!c.request());

        c.complete();
        assert!(c.request());
    }

    #[test]
    fn test_coalescer_failed_schedule_rearms() {
        let mut c = FrameCoalescer::<i32>::default();
        assert!(c.request());
        c.scheduled(None);
        assert!(c.request());
    }

    #[test]
    fn test_coalescer_take_pending_on_teardown() {
        let mut c = FrameCoalescer::<i32>::default();
        c.request();
        c.scheduled(Some(3));
        assert_eq!(c.take_pending(), Some(3));
        assert_eq!(c.take_pending(), None);
        assert!(c.request());
    }

    #[test]
    fn test_coalescer_holds_last_frame_until_replaced() {
        let mut c = FrameCoalescer::<i32>::default();
        c.request();
        c.scheduled(Some(1));
        c.complete();

        assert!(c.request());
        c.scheduled(Some(2));
        c.complete();
        assert_eq!(c.take_pending(), Some(2));
    }
}
