use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::effects::{self, FrameLoop};
use crate::engine::MotionEngine;
use crate::motion::pointer::PointerFollower;

#[derive(Properties, PartialEq)]
pub struct MagneticCursorProps {
    pub engine: MotionEngine,
}

// Soft dot that trails the pointer and swells over `data-magnetic` elements.
#[function_component(MagneticCursor)]
pub fn magnetic_cursor(props: &MagneticCursorProps) -> Html {
    let dot_ref = use_node_ref();
    let reduced = props.engine.reduced_motion();

    {
        let engine = props.engine.clone();
        let dot_ref = dot_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut guards = None;
                if let (Some(dot), Some(window)) = (dot_ref.cast::<HtmlElement>(), window()) {
                    let viewport = engine.viewport();
                    let follower = Rc::new(RefCell::new(PointerFollower::new(
                        viewport.width,
                        viewport.height,
                        engine.reduced_motion(),
                    )));

                    if !follower.borrow().is_hidden() {
                        let on_move = {
                            let follower = follower.clone();
                            effects::passive_listener(&window, "pointermove", move |event| {
                                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                    return;
                                };
                                let over_magnetic = event
                                    .target()
                                    .and_then(|target| target.dyn_into::<Element>().ok())
                                    .and_then(|el| el.closest("[data-magnetic]").ok().flatten())
                                    .is_some();
                                follower.borrow_mut().pointer_moved(
                                    event.client_x() as f64,
                                    event.client_y() as f64,
                                    over_magnetic,
                                );
                            })
                        };

                        let frames = FrameLoop::start(move |_| {
                            let frame = follower.borrow_mut().advance();
                            effects::set_property(&dot, "transform", &frame.transform());
                            let class = if frame.attracted {
                                "magnetic-cursor attracted"
                            } else {
                                "magnetic-cursor"
                            };
                            if dot.class_name() != class {
                                dot.set_class_name(class);
                            }
                            true
                        });
                        guards = Some((on_move, frames));
                    }
                }
                move || drop(guards)
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .magnetic-cursor {
                        pointer-events: none;
                        position: fixed;
                        z-index: 100;
                        top: 0;
                        left: 0;
                        height: 20px;
                        width: 20px;
                        border-radius: 9999px;
                        background-color: rgba(255, 255, 255, 0.15);
                        backdrop-filter: blur(2px);
                        mix-blend-mode: difference;
                        transition: scale 150ms, background-color 150ms;
                        will-change: transform;
                    }
                    .magnetic-cursor.attracted {
                        scale: 1.5;
                        background-color: rgba(255, 255, 255, 0.3);
                    }
                "#}
            </style>
            <div
                ref={dot_ref}
                aria-hidden="true"
                class="magnetic-cursor"
                style={reduced.then(|| "display: none;")}
            />
        </>
    }
}
