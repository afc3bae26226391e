use yew::prelude::*;

use crate::config;
use crate::engine::MotionEngine;
use crate::hooks::{use_reveal, RevealStart};
use crate::motion::ease::Ease;
use crate::motion::reveal::RevealSpec;

const SOCIALS: [(&str, &str); 3] = [("Instagram", "#"), ("Vimeo", "#"), ("LinkedIn", "#")];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub engine: MotionEngine,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer_ref = use_node_ref();
    let spec = RevealSpec::rise(
        config::REVEAL_OFFSET_Y,
        config::REVEAL_DURATION,
        Ease::Power3Out,
        config::REVEAL_START,
    )
    .with_stagger(config::FOOTER_STAGGER);
    use_reveal(&props.engine, footer_ref.clone(), spec, Some(".line"), RevealStart::OnScroll, true);

    html! {
        <footer class="site-footer" ref={footer_ref}>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        height: 100vh;
                        background: #000;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .site-footer .glow {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, rgba(255,0,0,0.12), transparent 60%);
                    }
                    .footer-content { text-align: center; padding: 0 1.5rem; }
                    .footer-content h2 {
                        font-size: 2.25rem;
                        font-weight: 900;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    .footer-email { margin-top: 1rem; color: rgba(255, 255, 255, 0.7); }
                    .footer-links {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .footer-links a {
                        color: inherit;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                        text-decoration-color: #ef4444;
                        transition: color 150ms;
                    }
                    .footer-links a:hover { color: #f87171; }
                    @media (min-width: 768px) {
                        .footer-content h2 { font-size: 3.75rem; }
                    }
                "#}
            </style>
            <div class="glow"></div>
            <div class="footer-content">
                <h2 class="line">{"Let’s build something cinematic."}</h2>
                <p class="line footer-email">{"hello@yourstudio.com"}</p>
                <div class="line footer-links">
                    {
                        SOCIALS.iter().map(|(label, href)| html! {
                            <a href={*href} data-magnetic="true" key={*label}>{*label}</a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </footer>
    }
}
