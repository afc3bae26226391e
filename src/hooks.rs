use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::effects::{self, FrameLoop};
use crate::engine::MotionEngine;
use crate::motion::reveal::{RevealSpec, RevealTarget};
use crate::motion::scroll::SmoothedOffset;

/// Smooths native scroll into the engine's scroll signal every frame.
#[hook]
pub fn use_scroll_driver(engine: &MotionEngine) {
    let engine = engine.clone();
    use_effect_with_deps(
        move |_| {
            let offset = Rc::new(RefCell::new(SmoothedOffset::new(
                effects::scroll_y(),
                config::SCROLL_LERP,
            )));

            let listeners = window().map(|window| {
                let on_scroll = {
                    let offset = offset.clone();
                    effects::passive_listener(&window, "scroll", move |_| {
                        offset.borrow_mut().set_target(effects::scroll_y());
                    })
                };
                let on_resize = {
                    let offset = offset.clone();
                    effects::passive_listener(&window, "resize", move |_| {
                        offset.borrow_mut().reset(effects::scroll_y());
                    })
                };
                (on_scroll, on_resize)
            });

            let frames = listeners.as_ref().map(|_| {
                let engine = engine.clone();
                FrameLoop::start(move |dt| {
                    let state = offset.borrow_mut().advance(dt);
                    engine.publish_scroll(state);
                    true
                })
            });
            debug!("scroll driver mounted");

            move || {
                drop(frames);
                drop(listeners);
                debug!("scroll driver unmounted");
            }
        },
        (),
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStart {
    /// Waits for the element top to cross its start threshold.
    OnScroll,
    /// Plays as soon as the reveal is armed.
    Immediately,
}

/// Drives a `RevealTarget` for `node`. With a `selector` the matching
/// descendants are animated as a staggered group instead of the node itself.
/// Nothing happens until `armed` is true; until then the initial state is
/// held.
#[hook]
pub fn use_reveal(
    engine: &MotionEngine,
    node: NodeRef,
    spec: RevealSpec,
    selector: Option<&'static str>,
    start: RevealStart,
    armed: bool,
) {
    let engine = engine.clone();
    use_effect_with_deps(
        move |armed| {
            let mut frames = None;
            if let Some(root) = node.cast::<HtmlElement>() {
                let targets = match selector {
                    Some(selector) => effects::select_all(&root, selector),
                    None => vec![root.clone()],
                };
                let mut reveal = RevealTarget::new(spec, engine.reduced_motion());
                paint(&targets, &reveal, engine.now());
                if *armed {
                    if start == RevealStart::Immediately {
                        reveal.trigger_now(engine.now());
                    }
                    let engine = engine.clone();
                    let count = targets.len();
                    let mut marked = false;
                    frames = Some(FrameLoop::start(move |_| {
                        let now = engine.now();
                        if start == RevealStart::OnScroll {
                            let (_, viewport_height) = effects::viewport_size();
                            let top = root.get_bounding_client_rect().top();
                            reveal.observe(top, viewport_height, now);
                        }
                        if reveal.triggered() != marked {
                            marked = reveal.triggered();
                            let value = if marked { "true" } else { "false" };
                            let _ = root.set_attribute("data-revealed", value);
                        }
                        paint(&targets, &reveal, now);
                        !reveal.is_finished(count, now)
                    }));
                }
            }
            move || drop(frames)
        },
        armed,
    );
}

fn paint(targets: &[HtmlElement], reveal: &RevealTarget, now: f64) {
    for (i, el) in targets.iter().enumerate() {
        effects::apply_style(el, &reveal.style_at(i, now));
    }
}
