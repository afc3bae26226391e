use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ResizeObserver};
use yew::prelude::*;

use crate::components::hover_card::HoverCard;
use crate::config;
use crate::effects::{self, FrameLoop};
use crate::engine::MotionEngine;
use crate::motion::pin::{
    FrameInput, HorizontalChoreographer, PinPhase, ShowcaseFrame, ShowcaseLayout, ViewportMode,
};
use crate::motion::style::VisualStyle;

struct Slide {
    title: &'static str,
    body: &'static str,
    parallax: f64,
    backdrop: &'static str,
}

const POTTERY: &str = "https://images.unsplash.com/photo-1629380321590-3b3f75d66dec?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxjZXJhbWljJTIwcG90dGVyeSUyMGhhbmRtYWRlfGVufDB8MHx8fDE3NjM1MTI1ODN8MA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80";

const SLIDES: [Slide; 4] = [
    Slide {
        title: "Featured Reel",
        body: "A montage of high-impact commercial pieces, product films, and interactive brand moments.",
        parallax: 0.15,
        backdrop: "",
    },
    Slide {
        title: "Automotive Vision",
        body: "Dynamic camera moves, glossy surfaces, and precision lighting designed for speed.",
        parallax: 0.25,
        backdrop: POTTERY,
    },
    Slide {
        title: "Product Stories",
        body: "Macro textures and tactile choreography that elevate the physical into the iconic.",
        parallax: 0.18,
        backdrop: POTTERY,
    },
    Slide {
        title: "Interactive Worlds",
        body: "Real-time experiences and websites with filmic motion and narrative cadence.",
        parallax: 0.12,
        backdrop: POTTERY,
    },
];

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub engine: MotionEngine,
}

/// DOM handles the choreography reads from and writes to.
struct ShowcaseDom {
    wrapper: HtmlElement,
    section: HtmlElement,
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    layers: Vec<HtmlElement>,
    skewables: Vec<HtmlElement>,
}

impl ShowcaseDom {
    fn bind(wrapper: &NodeRef, section: &NodeRef, track: &NodeRef) -> Option<Self> {
        let wrapper = wrapper.cast::<HtmlElement>()?;
        let section = section.cast::<HtmlElement>()?;
        let track = track.cast::<HtmlElement>()?;
        Some(Self {
            slides: effects::select_all(&track, ".h-slide"),
            layers: effects::select_all(&track, "[data-parallax]"),
            skewables: effects::select_all(&track, ".skewable"),
            wrapper,
            section,
            track,
        })
    }

    fn measure(&self, engine: &MotionEngine) -> ShowcaseLayout {
        let viewport = engine.viewport();
        ShowcaseLayout {
            viewport_width: viewport.width,
            container_top: self.wrapper.get_bounding_client_rect().top() + effects::scroll_y(),
            container_width: self.section.offset_width() as f64,
            track_scroll_width: self.track.scroll_width() as f64,
            slide_lefts: self.slides.iter().map(|s| s.offset_left() as f64).collect(),
        }
    }

    /// Sticky pinning plus the extra scroll room it consumes.
    fn apply_pin(&self, mode: ViewportMode, pin_distance: f64) {
        match mode {
            ViewportMode::Desktop => {
                let height = self.section.offset_height() as f64 + pin_distance;
                effects::set_property(&self.wrapper, "height", &format!("{}px", height));
                effects::set_property(&self.section, "position", "sticky");
                effects::set_property(&self.section, "top", "0");
            }
            ViewportMode::Compact => {
                effects::remove_property(&self.wrapper, "height");
                effects::remove_property(&self.section, "position");
                effects::remove_property(&self.section, "top");
            }
        }
        let _ = self.wrapper.set_attribute(
            "data-mode",
            match mode {
                ViewportMode::Desktop => "desktop",
                ViewportMode::Compact => "compact",
            },
        );
    }

    fn paint(&self, frame: &ShowcaseFrame) {
        effects::set_property(
            &self.track,
            "transform",
            &VisualStyle::translate_x(frame.track_x).transform(),
        );
        let skew = VisualStyle::skewed(frame.skew_y).transform();
        for el in &self.skewables {
            effects::set_property(el, "transform", &skew);
        }
        for (el, x) in self.layers.iter().zip(&frame.layer_x) {
            effects::set_property(el, "transform", &VisualStyle::translate_x(*x).transform());
        }
        for (el, style) in self.slides.iter().zip(&frame.slides) {
            effects::apply_style(el, style);
        }
        let pinned = if frame.phase == PinPhase::Pinned { "true" } else { "false" };
        let _ = self.wrapper.set_attribute("data-pinned", pinned);
    }

    fn slide_tops(&self) -> Vec<f64> {
        self.slides
            .iter()
            .map(|s| s.get_bounding_client_rect().top())
            .collect()
    }
}

/// Horizontal showcase: pinned and scrubbed sideways on desktop, a stack of
/// individually revealed slides on compact screens.
#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let wrapper_ref = use_node_ref();
    let section_ref = use_node_ref();
    let track_ref = use_node_ref();

    {
        let engine = props.engine.clone();
        let wrapper_ref = wrapper_ref.clone();
        let section_ref = section_ref.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut guards = None;
                if let (Some(dom), Some(window)) =
                    (ShowcaseDom::bind(&wrapper_ref, &section_ref, &track_ref), window())
                {
                    let dom = Rc::new(dom);
                    let strengths = dom
                        .layers
                        .iter()
                        .map(|el| {
                            el.get_attribute("data-parallax")
                                .and_then(|v| v.parse::<f64>().ok())
                                .unwrap_or(config::DEFAULT_PARALLAX)
                        })
                        .collect();
                    let choreo = Rc::new(RefCell::new(HorizontalChoreographer::new(
                        strengths,
                        engine.reduced_motion(),
                    )));

                    // Measures and rebuilds the session, tearing down the old one.
                    let refresh = {
                        let dom = dom.clone();
                        let choreo = choreo.clone();
                        let engine = engine.clone();
                        Rc::new(move || {
                            let layout = dom.measure(&engine);
                            let mut choreo = choreo.borrow_mut();
                            let previous = choreo.mode();
                            choreo.configure(&layout, effects::scroll_y());
                            if previous != choreo.mode() {
                                info!(
                                    "showcase switched to {:?} (session {})",
                                    choreo.mode(),
                                    choreo.generation()
                                );
                            }
                            let distance = choreo.session().map(|s| s.pin_distance).unwrap_or(0.0);
                            dom.apply_pin(choreo.mode(), distance);
                        })
                    };
                    refresh();

                    let on_resize = {
                        let refresh = refresh.clone();
                        effects::passive_listener(&window, "resize", move |_| refresh())
                    };
                    let on_load = {
                        let refresh = refresh.clone();
                        effects::passive_listener(&window, "load", move |_| refresh())
                    };

                    // content reflow inside the track (images, fonts)
                    let last_width = Rc::new(RefCell::new(dom.track.scroll_width()));
                    let observer = {
                        let refresh = refresh.clone();
                        let track = dom.track.clone();
                        let last_width = last_width.clone();
                        let callback = Closure::<dyn FnMut()>::new(move || {
                            let width = track.scroll_width();
                            if *last_width.borrow() != width {
                                *last_width.borrow_mut() = width;
                                refresh();
                            }
                        });
                        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref()).ok();
                        if let Some(observer) = observer.as_ref() {
                            observer.observe(&dom.track);
                        }
                        observer.map(|observer| (observer, callback))
                    };

                    let frames = {
                        let dom = dom.clone();
                        let choreo = choreo.clone();
                        FrameLoop::start(move |dt| {
                            let (_, viewport_height) = effects::viewport_size();
                            let slide_tops = if choreo.borrow().mode() == ViewportMode::Compact {
                                dom.slide_tops()
                            } else {
                                Vec::new()
                            };
                            let frame = choreo.borrow_mut().frame(&FrameInput {
                                scroll: engine.scroll(),
                                now: engine.now(),
                                dt,
                                viewport_height,
                                slide_tops: &slide_tops,
                            });
                            dom.paint(&frame);
                            true
                        })
                    };

                    guards = Some((frames, on_resize, on_load, observer, choreo));
                }

                move || {
                    if let Some((frames, on_resize, on_load, observer, choreo)) = guards {
                        drop(frames);
                        drop(on_resize);
                        drop(on_load);
                        if let Some((observer, _callback)) = observer {
                            observer.disconnect();
                        }
                        choreo.borrow_mut().teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="showcase" ref={wrapper_ref} data-mode="compact" data-pinned="false">
            <style>
                {r#"
                    .showcase-section {
                        position: relative;
                        width: 100%;
                        background: #000;
                        color: #fff;
                        overflow: hidden;
                    }
                    .showcase-track {
                        display: flex;
                        will-change: transform;
                    }
                    .h-slide {
                        position: relative;
                        flex-shrink: 0;
                        width: 100vw;
                        height: 80vh;
                        padding: 2rem;
                        display: flex;
                        align-items: flex-end;
                        background: #171717;
                        border-right: 1px solid rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                        box-sizing: border-box;
                    }
                    .h-slide:last-child { border-right: none; }
                    .h-slide-layer {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .h-slide-layer .tint {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top right, rgba(220, 38, 38, 0.3), transparent);
                    }
                    .h-slide-layer .photo {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        opacity: 0.4;
                    }
                    .skewable {
                        position: relative;
                        z-index: 10;
                        max-width: 28rem;
                        transform-origin: center;
                    }
                    .hover-card {
                        transition: transform 150ms;
                        will-change: transform;
                        transform-style: preserve-3d;
                    }
                    .hover-card h3 {
                        font-size: 1.875rem;
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    .hover-card p {
                        margin-top: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    @media (max-width: 767px) {
                        .showcase-track { flex-direction: column; }
                        .h-slide { border-right: none; border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                    }
                    @media (min-width: 768px) {
                        .h-slide { width: 70vw; height: 90vh; padding: 3rem; }
                        .hover-card h3 { font-size: 3rem; }
                    }
                    @media (min-width: 1280px) {
                        .h-slide { width: 60vw; }
                    }
                "#}
            </style>
            <section id="works" class="showcase-section" ref={section_ref}>
                <div class="showcase-track" ref={track_ref}>
                    {
                        SLIDES.iter().map(|slide| {
                            let layer = if slide.backdrop.is_empty() {
                                html! { <div class="tint"></div> }
                            } else {
                                let style = format!("background-image: url('{}');", slide.backdrop);
                                html! { <div class="photo" style={style}></div> }
                            };
                            html! {
                                <article class="h-slide" key={slide.title}>
                                    <div class="h-slide-layer" data-parallax={slide.parallax.to_string()}>
                                        { layer }
                                    </div>
                                    <div class="skewable">
                                        <HoverCard still={props.engine.reduced_motion()}>
                                            <h3>{slide.title}</h3>
                                            <p>{slide.body}</p>
                                        </HoverCard>
                                    </div>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
