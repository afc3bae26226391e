use log::info;
use yew::prelude::*;

mod config;
mod effects;
mod engine;
mod hooks;
mod motion {
    pub mod ease;
    pub mod loading;
    pub mod pin;
    pub mod pointer;
    pub mod reveal;
    pub mod scroll;
    pub mod style;
    pub mod text;
    pub mod tween;
}
mod components {
    pub mod animated_text;
    pub mod hover_card;
    pub mod loading_overlay;
    pub mod magnetic_cursor;
    pub mod reveal;
    pub mod scroll_cue;
}
mod pages {
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod sections;
    pub mod showcase;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use engine::MotionEngine;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    // One engine for the whole page; reduced motion is read once here.
    let engine = use_state(MotionEngine::detect);

    html! {
        <Home engine={(*engine).clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
