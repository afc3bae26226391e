use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::effects::{self, FrameLoop};
use crate::engine::MotionEngine;
use crate::motion::loading::{GatePhase, GateTrigger, LoadingGate, ParticleField};

const LETTERS: &str = "Loading";

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub engine: MotionEngine,
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

fn random() -> f64 {
    web_sys::js_sys::Math::random()
}

fn canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (w, h) = (field.width, field.height);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.save();

    if let Ok(grad) = ctx.create_radial_gradient(
        w / 2.0,
        h / 2.0,
        w.min(h) * 0.2,
        w / 2.0,
        h / 2.0,
        w.max(h) * 0.8,
    ) {
        let _ = grad.add_color_stop(0.0, "rgba(0,0,0,0)");
        let _ = grad.add_color_stop(1.0, "rgba(0,0,0,0.6)");
        ctx.set_fill_style(&grad);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    let _ = ctx.set_global_composite_operation("lighter");
    for p in &field.particles {
        let (tail_x, tail_y) = p.tail();
        ctx.begin_path();
        ctx.set_stroke_style(&JsValue::from_str(&format!("rgba(255,255,255,{})", p.alpha)));
        ctx.set_line_width(p.size);
        ctx.move_to(p.x, p.y);
        ctx.line_to(tail_x, tail_y);
        ctx.stroke();
    }
    ctx.restore();
}

/// Full-screen gate shown until the page has loaded (or the fallback timer
/// fires), then faded out.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let mounted = use_state(|| true);
    let overlay_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let reduced = props.engine.reduced_motion();

    {
        let engine = props.engine.clone();
        let on_complete = props.on_complete.clone();
        let mounted = mounted.clone();
        let overlay_ref = overlay_ref.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let gate = Rc::new(RefCell::new(LoadingGate::default()));

                let load_listener = window().and_then(|window| {
                    let already_loaded = window
                        .document()
                        .map(|doc| doc.ready_state() == "complete")
                        .unwrap_or(false);
                    if already_loaded {
                        gate.borrow_mut().trigger(GateTrigger::PageLoaded, engine.now());
                        return None;
                    }
                    let gate = gate.clone();
                    let engine = engine.clone();
                    Some(effects::passive_listener(&window, "load", move |_| {
                        gate.borrow_mut().trigger(GateTrigger::PageLoaded, engine.now());
                    }))
                });

                let timeout = {
                    let gate = gate.clone();
                    let engine = engine.clone();
                    Timeout::new(config::GATE_TIMEOUT_MS, move || {
                        gate.borrow_mut().trigger(GateTrigger::Timeout, engine.now());
                    })
                };

                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                let ctx = canvas.as_ref().and_then(canvas_context);
                let (width, height) = effects::viewport_size();
                if let Some(canvas) = canvas.as_ref() {
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                }
                let count = if reduced {
                    config::PARTICLE_COUNT_REDUCED
                } else {
                    config::PARTICLE_COUNT
                };
                let field = Rc::new(RefCell::new(ParticleField::new(count, width, height, random)));

                let resize_listener = window().map(|window| {
                    let field = field.clone();
                    let canvas = canvas.clone();
                    effects::passive_listener(&window, "resize", move |_| {
                        let (width, height) = effects::viewport_size();
                        field.borrow_mut().resize(width, height);
                        if let Some(canvas) = canvas.as_ref() {
                            canvas.set_width(width as u32);
                            canvas.set_height(height as u32);
                        }
                    })
                });

                let frames = FrameLoop::start(move |_| {
                    let now = engine.now();
                    let completed = gate.borrow_mut().tick(now);
                    if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
                        let gate = gate.borrow();
                        effects::set_property(&overlay, "opacity", &gate.opacity(now).to_string());
                        // the page underneath takes input as soon as the fade starts
                        if gate.phase() != GatePhase::Visible {
                            effects::set_property(&overlay, "pointer-events", "none");
                        }
                    }
                    if let Some(ctx) = ctx.as_ref() {
                        field.borrow_mut().step(random);
                        draw_particles(ctx, &field.borrow());
                    }
                    if completed {
                        info!("loading gate complete");
                        mounted.set(false);
                        on_complete.emit(());
                        return false;
                    }
                    true
                });

                move || {
                    drop(frames);
                    drop(timeout);
                    drop(load_listener);
                    drop(resize_listener);
                }
            },
            (),
        );
    }

    if !*mounted {
        return html! {};
    }

    let letter_iterations = if reduced { "1" } else { "infinite" };

    html! {
        <div class="loading-overlay" ref={overlay_ref} aria-busy="true">
            <style>
                {r#"
                    .loading-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        color: #fff;
                        perspective: 800px;
                    }
                    .loading-overlay canvas {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .loading-content {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        user-select: none;
                        animation: loadingContentIn 0.8s ease-out both;
                    }
                    .loading-rule {
                        margin-bottom: 1rem;
                        height: 1px;
                        width: 6rem;
                        background: rgba(255, 255, 255, 0.2);
                        transform-origin: center;
                        animation: loadingRule 0.8s ease-out both;
                    }
                    .loading-letters {
                        display: flex;
                        gap: 0.25rem;
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: 0.2em;
                    }
                    .loading-letters.skewed {
                        transform: skewY(-4deg);
                    }
                    .loading-letters span {
                        display: inline-block;
                        animation-name: loadingLetter;
                        animation-duration: 1.4s;
                        animation-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
                        animation-direction: alternate;
                        animation-fill-mode: both;
                    }
                    .loading-caption {
                        margin-top: 1.5rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: rgba(255, 255, 255, 0.5);
                        animation: loadingCaption 0.8s 0.6s both;
                    }
                    .loading-grain {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        opacity: 0.08;
                        mix-blend-mode: overlay;
                        background-size: 120px 120px;
                        background-image: url("data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='120' height='120' viewBox='0 0 120 120'><filter id='n'><feTurbulence baseFrequency='0.8' numOctaves='2' /></filter><rect width='100%' height='100%' filter='url(%23n)' opacity='0.6'/></svg>");
                    }
                    @keyframes loadingContentIn {
                        from { opacity: 0; transform: translateY(10px) rotateX(12deg); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes loadingRule {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                    @keyframes loadingLetter {
                        0% { transform: translateY(20px) scale(0.9); opacity: 0; }
                        33% { transform: translateY(0) scale(1); opacity: 1; }
                        66% { transform: translateY(-2px) scale(1.02); opacity: 1; }
                        100% { transform: translateY(0) scale(1); opacity: 1; }
                    }
                    @keyframes loadingCaption {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @media (min-width: 768px) {
                        .loading-letters { font-size: 3.75rem; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .loading-content, .loading-rule, .loading-caption { animation: none; }
                    }
                "#}
            </style>
            <canvas ref={canvas_ref}></canvas>
            <div class="loading-content">
                <div class="loading-rule"></div>
                <div class={classes!("loading-letters", (!reduced).then(|| "skewed"))}>
                    {
                        LETTERS.chars().enumerate().map(|(i, c)| {
                            let style = format!(
                                "animation-delay: {}s; animation-iteration-count: {};",
                                i as f64 * config::LOADING_LETTER_DELAY,
                                letter_iterations,
                            );
                            html! { <span key={i} style={style}>{c.to_string()}</span> }
                        }).collect::<Html>()
                    }
                </div>
                <div class="loading-caption">{"Preparing experience"}</div>
            </div>
            <div class="loading-grain"></div>
        </div>
    }
}
