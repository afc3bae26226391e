use std::cell::Cell;
use std::rc::Rc;

use log::info;

use crate::effects;
use crate::motion::scroll::ScrollState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

struct EngineState {
    origin: f64,
    reduced_motion: bool,
    scroll: Cell<ScrollState>,
}

/// Handle every animated component receives as a prop. It carries the
/// environment flags read once at startup and the scroll signal published by
/// the page scroll driver.
#[derive(Clone)]
pub struct MotionEngine {
    state: Rc<EngineState>,
}

impl PartialEq for MotionEngine {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl MotionEngine {
    pub fn detect() -> Self {
        let reduced_motion = effects::prefers_reduced_motion();
        let scroll_y = effects::scroll_y();
        info!("motion engine ready (reduced motion: {})", reduced_motion);
        Self {
            state: Rc::new(EngineState {
                origin: effects::now_secs(),
                reduced_motion,
                scroll: Cell::new(ScrollState {
                    raw_offset: scroll_y,
                    smoothed_offset: scroll_y,
                    velocity: 0.0,
                }),
            }),
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.state.reduced_motion
    }

    /// Seconds since the engine was created.
    pub fn now(&self) -> f64 {
        effects::now_secs() - self.state.origin
    }

    pub fn scroll(&self) -> ScrollState {
        self.state.scroll.get()
    }

    pub fn publish_scroll(&self, scroll: ScrollState) {
        self.state.scroll.set(scroll);
    }

    /// Current viewport, re-read on every call so resize handlers always see
    /// fresh numbers.
    pub fn viewport(&self) -> Viewport {
        let (width, height) = effects::viewport_size();
        Viewport { width, height }
    }
}
