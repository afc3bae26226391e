use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::scroll_cue::ScrollCue;
use crate::config;
use crate::effects::{self, FrameLoop};
use crate::engine::MotionEngine;
use crate::hooks::{use_reveal, RevealStart};
use crate::motion::ease::{lerp, Ease};
use crate::motion::reveal::RevealSpec;
use crate::motion::style::VisualStyle;
use crate::motion::text::{split_text, Split};
use crate::motion::tween::Yoyo;

const TITLE: &str = "We craft cinematic digital experiences.";
const SUBTITLE: &str = "Production agency for ambitious brands. Film-grade craft, real-time 3D, and interactive stories.";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub engine: MotionEngine,
    /// Flips once the loading gate has faded out.
    pub ready: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let accents_ref = use_node_ref();

    let words = split_text(TITLE, Split::Words);

    let title_spec =
        RevealSpec::rise_percent(100.0, config::HERO_WORD_DURATION, Ease::Power3Out, 1.0)
            .with_stagger(config::HERO_WORD_STAGGER);
    // subtitle overlaps the tail of the title
    let subtitle_delay =
        (title_spec.total_duration(words.len()) - config::HERO_SUBTITLE_OVERLAP).max(0.0);
    let subtitle_spec = RevealSpec::rise(20.0, config::HERO_SUBTITLE_DURATION, Ease::Power3Out, 1.0)
        .with_delay(subtitle_delay);

    use_reveal(
        &props.engine,
        title_ref.clone(),
        title_spec,
        Some(".reveal-word"),
        RevealStart::Immediately,
        props.ready,
    );
    use_reveal(
        &props.engine,
        subtitle_ref.clone(),
        subtitle_spec,
        None,
        RevealStart::Immediately,
        props.ready,
    );

    // floating accents and the scroll-out dim
    {
        let engine = props.engine.clone();
        let hero_ref = hero_ref.clone();
        let accents_ref = accents_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut frames = None;
                if let (Some(hero), Some(accents)) =
                    (hero_ref.cast::<HtmlElement>(), accents_ref.cast::<HtmlElement>())
                {
                    let floaties = effects::select_all(&accents, ".floaty");
                    let loops: Vec<Yoyo> = (0..floaties.len())
                        .map(|i| {
                            Yoyo::new(config::FLOATY_SECS, Ease::SineInOut)
                                .with_delay(i as f64 * config::FLOATY_STAGGER)
                        })
                        .collect();
                    let reduced = engine.reduced_motion();

                    frames = Some(FrameLoop::start(move |_| {
                        let now = engine.now();
                        if !reduced {
                            for (el, yoyo) in floaties.iter().zip(&loops) {
                                let p = yoyo.progress(now);
                                let style = VisualStyle {
                                    x: 15.0 * p,
                                    y: 30.0 * p,
                                    ..VisualStyle::IDENTITY
                                };
                                effects::set_property(el, "transform", &style.transform());
                            }
                        }

                        // "top top" to "bottom top"
                        let height = hero.offset_height() as f64;
                        let progress = if height > 0.0 {
                            (engine.scroll().smoothed_offset / height).clamp(0.0, 1.0)
                        } else {
                            0.0
                        };
                        let opacity = lerp(1.0, config::HERO_SCROLLED_OPACITY, progress);
                        effects::set_property(&hero, "opacity", &opacity.to_string());
                        true
                    }));
                }
                move || drop(frames)
            },
            (),
        );
    }

    html! {
        <section id="hero" class="hero" ref={hero_ref}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100dvh;
                        width: 100%;
                        background: #000;
                        color: #fff;
                        overflow: hidden;
                    }
                    .hero-media {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-media spline-viewer {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .hero-glow {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at center, rgba(255,0,0,0.12), transparent 50%);
                    }
                    .hero-fade {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0,0,0,0) 0%, rgba(0,0,0,0.35) 60%, rgba(0,0,0,0.85) 100%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .hero-title {
                        font-family: 'Courier Prime', Courier, monospace;
                        font-weight: 700;
                        line-height: 0.95;
                        letter-spacing: -0.02em;
                        font-size: clamp(2.25rem, 7vw, 6rem);
                        margin: 0;
                    }
                    .hero-title .split-piece {
                        margin-right: 0.5rem;
                    }
                    .hero-subtitle {
                        margin-top: 1.5rem;
                        max-width: 42rem;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.125rem;
                    }
                    .hero-accents {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                    }
                    .floaty { position: absolute; }
                    .floaty.dot {
                        top: 20%;
                        left: 8%;
                        width: 12px;
                        height: 12px;
                        border-radius: 9999px;
                        background: rgba(239, 68, 68, 0.8);
                        box-shadow: 0 0 30px 6px rgba(239, 68, 68, 0.35);
                    }
                    .floaty.ring {
                        bottom: 18%;
                        right: 12%;
                        width: 6rem;
                        height: 6rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                    }
                    .floaty.dash {
                        top: 35%;
                        right: 30%;
                        width: 4rem;
                        height: 2.5rem;
                        rotate: 12deg;
                        border-top: 1px solid rgba(239, 68, 68, 0.4);
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        left: 2rem;
                        z-index: 20;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="hero-media">
                <@{"spline-viewer"} url={config::HERO_SCENE_URL}></@>
            </div>
            <div class="hero-glow"></div>
            <div class="hero-fade"></div>

            <div class="hero-content">
                <div>
                    <h1 class="hero-title" ref={title_ref}>
                        {
                            words.iter().map(|word| html! {
                                <span class="split-piece">
                                    <span class="reveal-word inner">{word.clone()}</span>
                                </span>
                            }).collect::<Html>()
                        }
                    </h1>
                    <p class="hero-subtitle" ref={subtitle_ref}>{SUBTITLE}</p>
                </div>
            </div>

            <div class="hero-accents" ref={accents_ref}>
                <div class="floaty dot"></div>
                <div class="floaty ring"></div>
                <div class="floaty dash"></div>
            </div>

            <ScrollCue engine={props.engine.clone()} target="works" />
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::window;

    use super::*;

    #[wasm_bindgen_test]
    async fn test_background_is_only_the_scene_embed() {
        let document = window().and_then(|w| w.document()).unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = HeroProps {
            engine: MotionEngine::detect(),
            ready: false,
        };
        let app = yew::Renderer::<Hero>::with_root_and_props(root.clone(), props).render();
        TimeoutFuture::new(50).await;

        assert!(root.query_selector("spline-viewer").unwrap().is_some());
        assert!(root.query_selector("video").unwrap().is_none());
        assert_eq!(root.query_selector_all(".reveal-word").unwrap().length(), 5);
        app.destroy();
    }
}
