use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::reveal::Reveal;
use crate::config;
use crate::engine::MotionEngine;
use crate::motion::text::Split;

const OFFERINGS: [&str; 4] = ["Strategy", "Direction", "CGI", "Interactive"];

#[derive(Properties, PartialEq)]
pub struct VerticalSectionsProps {
    pub engine: MotionEngine,
}

#[function_component(VerticalSections)]
pub fn vertical_sections(props: &VerticalSectionsProps) -> Html {
    let engine = props.engine.clone();

    html! {
        <section class="vertical-sections">
            <style>
                {r#"
                    .vertical-sections {
                        background: #000;
                        color: #fff;
                        padding: 6rem 0;
                    }
                    .vertical-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-eyebrow {
                        margin: 0 0 1rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #f87171;
                    }
                    .vertical-headline {
                        font-size: 1.875rem;
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    .vertical-headline .split-piece { margin-right: 0.5rem; }
                    .vertical-columns {
                        display: grid;
                        gap: 2.5rem;
                        margin-top: 3rem;
                    }
                    .vertical-columns p {
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.625;
                    }
                    .offerings {
                        margin-top: 4rem;
                        display: grid;
                        gap: 1.5rem;
                    }
                    .offering {
                        background: rgba(23, 23, 23, 0.6);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                    }
                    .offering h3 { font-size: 1.125rem; font-weight: 600; margin: 0; }
                    .offering p { font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); margin-top: 0.5rem; }
                    @media (min-width: 640px) {
                        .offerings { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 768px) {
                        .vertical-sections { padding: 10rem 0; }
                        .section-eyebrow {
                        margin: 0 0 1rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #f87171;
                    }
                    .vertical-headline { font-size: 3rem; }
                        .vertical-columns { grid-template-columns: repeat(2, 1fr); gap: 4rem; margin-top: 5rem; }
                        .offerings { margin-top: 6rem; }
                    }
                    @media (min-width: 1024px) {
                        .offerings { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="vertical-inner">
                <AnimatedText
                    engine={engine.clone()}
                    text="Our approach"
                    tag="p"
                    class={classes!("section-eyebrow")}
                    on_scroll={true}
                    delay={0.1}
                />
                <AnimatedText
                    engine={engine.clone()}
                    text="We design for attention and memory."
                    tag="h2"
                    class={classes!("vertical-headline")}
                    split={Split::Words}
                    on_scroll={true}
                    stagger={config::REVEAL_LINE_STAGGER}
                    start={config::REVEAL_LINE_START}
                    offset_percent={100.0}
                />
                <div class="vertical-columns">
                    <Reveal engine={engine.clone()} scrub_to={config::SCRUB_REVEAL_END}>
                        <p>{"From the first frame to the last interaction, we craft rhythm. Our team blends film craft, brand systems, and interactive design to create products and stories that resonate."}</p>
                    </Reveal>
                    <Reveal engine={engine.clone()} scrub_to={config::SCRUB_REVEAL_END}>
                        <p>{"We collaborate with agencies and in-house teams to produce launch films, product visualizations, and high-performance web experiences."}</p>
                    </Reveal>
                </div>

                <div class="offerings">
                    {
                        OFFERINGS.iter().map(|label| html! {
                            <Reveal engine={engine.clone()} class={classes!("offering")} key={*label}>
                                <h3>{*label}</h3>
                                <p>{"Replace with your offering bullets, services, or capabilities."}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
