use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::effects::{self, FrameLoop};
use crate::engine::MotionEngine;
use crate::motion::ease::Ease;
use crate::motion::style::VisualStyle;
use crate::motion::tween::Yoyo;

const BOUNCE_PX: f64 = 10.0;

#[derive(Properties, PartialEq)]
pub struct ScrollCueProps {
    pub engine: MotionEngine,
    /// Element id to scroll to.
    pub target: AttrValue,
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub color: AttrValue,
}

fn scroll_to_id(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let Some(el) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };
    let top = el.get_bounding_client_rect().top() + effects::scroll_y();
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(ScrollCue)]
pub fn scroll_cue(props: &ScrollCueProps) -> Html {
    let cue_ref = use_node_ref();

    {
        let engine = props.engine.clone();
        let cue_ref = cue_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut frames = None;
                if let Some(cue) = cue_ref.cast::<HtmlElement>() {
                    if !engine.reduced_motion() {
                        let bounce = Yoyo::new(config::SCROLL_CUE_SECS, Ease::SineInOut);
                        frames = Some(FrameLoop::start(move |_| {
                            let y = BOUNCE_PX * bounce.progress(engine.now());
                            let style = VisualStyle { y, ..VisualStyle::IDENTITY };
                            effects::set_property(&cue, "transform", &style.transform());
                            true
                        }));
                    }
                }
                move || drop(frames)
            },
            (),
        );
    }

    let onclick = {
        let target = props.target.clone();
        Callback::from(move |_: MouseEvent| scroll_to_id(&target))
    };

    html! {
        <button
            ref={cue_ref}
            class="scroll-cue"
            aria-label="Scroll to next section"
            data-magnetic="true"
            {onclick}
        >
            <svg width="42" height="42" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    d="M12 2v16M12 18l-4-4m4 4 4-4"
                    stroke={props.color.clone()}
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </button>
    }
}
