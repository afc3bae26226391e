use yew::prelude::*;

use crate::config;
use crate::engine::MotionEngine;
use crate::hooks::{use_reveal, RevealStart};
use crate::motion::ease::Ease;
use crate::motion::reveal::RevealSpec;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub engine: MotionEngine,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Ties the reveal to scroll until the top reaches this viewport
    /// fraction, reversing when scrolling back up.
    #[prop_or_default]
    pub scrub_to: Option<f64>,
}

/// Block that rises into place once its top passes 80% of the viewport, or
/// follows scroll both ways when `scrub_to` is set.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let spec = match props.scrub_to {
        Some(end) => RevealSpec::rise(
            config::REVEAL_OFFSET_Y,
            config::REVEAL_DURATION,
            Ease::None,
            config::REVEAL_LINE_START,
        )
        .scrubbed(end),
        None => RevealSpec::rise(
            config::REVEAL_OFFSET_Y,
            config::REVEAL_DURATION,
            Ease::Power3Out,
            config::REVEAL_START,
        ),
    };
    use_reveal(&props.engine, node.clone(), spec, None, RevealStart::OnScroll, true);

    html! {
        <div ref={node} class={props.class.clone()} data-reveal="true">
            { for props.children.iter() }
        </div>
    }
}
