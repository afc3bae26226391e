use log::info;
use yew::prelude::*;

use crate::components::loading_overlay::LoadingOverlay;
use crate::components::magnetic_cursor::MagneticCursor;
use crate::engine::MotionEngine;
use crate::hooks::use_scroll_driver;
use crate::pages::footer::Footer;
use crate::pages::hero::Hero;
use crate::pages::sections::VerticalSections;
use crate::pages::showcase::Showcase;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub engine: MotionEngine,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let ready = use_state(|| false);
    use_scroll_driver(&props.engine);

    let on_complete = {
        let ready = ready.clone();
        Callback::from(move |_: ()| {
            info!("Loading gate finished, starting hero intro");
            ready.set(true);
        })
    };

    html! {
        <div class="home">
            <style>
                {r#"
                    html, body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }
                    .home {
                        min-height: 100vh;
                        background: #000;
                        overflow-x: clip;
                    }
                    .split-piece {
                        display: inline-block;
                        overflow: hidden;
                        vertical-align: top;
                    }
                    .inner {
                        display: inline-block;
                        will-change: transform;
                    }
                    [data-reveal] {
                        will-change: transform, opacity;
                    }
                "#}
            </style>
            if !*ready {
                <LoadingOverlay engine={props.engine.clone()} {on_complete} />
            }
            <MagneticCursor engine={props.engine.clone()} />
            <main>
                <Hero engine={props.engine.clone()} ready={*ready} />
                <Showcase engine={props.engine.clone()} />
                <VerticalSections engine={props.engine.clone()} />
                <Footer engine={props.engine.clone()} />
            </main>
        </div>
    }
}
