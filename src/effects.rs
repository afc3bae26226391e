use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, EventTarget, HtmlElement};

use crate::config;
use crate::motion::style::VisualStyle;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(config::REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn now_secs() -> f64 {
    web_sys::js_sys::Date::now() / 1000.0
}

/// The one place derived styles touch the DOM.
pub fn apply_style(el: &HtmlElement, style: &VisualStyle) {
    let css = el.style();
    let _ = css.set_property("transform", &style.transform());
    let _ = css.set_property("opacity", &style.opacity.to_string());
}

pub fn set_property(el: &HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}

pub fn remove_property(el: &HtmlElement, name: &str) {
    let _ = el.style().remove_property(name);
}

/// Every descendant of `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Registers a passive listener; dropping the guard removes it.
pub fn passive_listener<F>(target: &EventTarget, event: &'static str, callback: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        callback,
    )
}

type Tick = Box<dyn FnMut(f64) -> bool>;

/// Per-frame driver. At most one animation frame is pending at any time and
/// dropping the loop cancels it, so nothing runs against an unmounted tree.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    /// `tick` receives the frame time in seconds and returns whether to keep
    /// running.
    pub fn start<F>(tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending = Rc::new(RefCell::new(None));
        let tick: Rc<RefCell<Tick>> = Rc::new(RefCell::new(Box::new(tick)));
        schedule(Rc::downgrade(&pending), tick, None);
        Self { pending }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn schedule(
    slot: std::rc::Weak<RefCell<Option<AnimationFrame>>>,
    tick: Rc<RefCell<Tick>>,
    last: Option<f64>,
) {
    let Some(pending) = slot.upgrade() else {
        return;
    };
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        // long pauses (background tab) count as a single frame
        let dt = last
            .map(|prev| ((timestamp - prev) / 1000.0).clamp(0.0, 0.1))
            .unwrap_or(1.0 / 60.0);
        let keep_going = {
            let mut step = tick.borrow_mut();
            (*step)(dt)
        };
        if keep_going {
            schedule(next_slot, tick, Some(timestamp));
        } else if let Some(pending) = next_slot.upgrade() {
            pending.borrow_mut().take();
        }
    });
    *pending.borrow_mut() = Some(frame);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    fn counting_loop(ticks: &Rc<Cell<u32>>, keep_going: bool) -> FrameLoop {
        let ticks = ticks.clone();
        FrameLoop::start(move |_| {
            ticks.set(ticks.get() + 1);
            keep_going
        })
    }

    #[wasm_bindgen_test]
    async fn test_dropped_frame_loop_never_ticks() {
        let ticks = Rc::new(Cell::new(0));
        let frames = counting_loop(&ticks, true);
        drop(frames);
        TimeoutFuture::new(100).await;
        assert_eq!(ticks.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_frame_loop_stops_when_tick_says_so() {
        let ticks = Rc::new(Cell::new(0));
        let _frames = counting_loop(&ticks, false);
        TimeoutFuture::new(100).await;
        assert_eq!(ticks.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_running_loop_is_cancelled_on_drop() {
        let ticks = Rc::new(Cell::new(0));
        let frames = counting_loop(&ticks, true);
        TimeoutFuture::new(100).await;
        drop(frames);
        let seen = ticks.get();
        assert!(seen > 0);
        TimeoutFuture::new(100).await;
        assert_eq!(ticks.get(), seen);
    }

    #[wasm_bindgen_test]
    fn test_dropped_listener_is_removed() {
        let document = window().and_then(|w| w.document()).unwrap();
        let target = document.create_element("div").unwrap();
        let hits = Rc::new(Cell::new(0));
        let listener = {
            let hits = hits.clone();
            passive_listener(&target, "ping", move |_| hits.set(hits.get() + 1))
        };
        let event = Event::new("ping").unwrap();
        target.dispatch_event(&event).unwrap();
        drop(listener);
        target.dispatch_event(&event).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
