use yew::prelude::*;

use crate::config;
use crate::engine::MotionEngine;
use crate::hooks::{use_reveal, RevealStart};
use crate::motion::ease::Ease;
use crate::motion::reveal::RevealSpec;
use crate::motion::text::{split_text, Split};

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub engine: MotionEngine,
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("h1"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Split::Letters)]
    pub split: Split,
    /// Wait for the text to scroll into view instead of playing on mount.
    #[prop_or_default]
    pub on_scroll: bool,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(config::TEXT_STAGGER)]
    pub stagger: f64,
    #[prop_or(config::REVEAL_START)]
    pub start: f64,
    #[prop_or(config::TEXT_OFFSET_PERCENT)]
    pub offset_percent: f64,
}

/// Splits its text into words or letters and slides each piece up in turn.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let node = use_node_ref();

    let spec = RevealSpec::rise_percent(
        props.offset_percent,
        config::TEXT_DURATION,
        Ease::Power3Out,
        props.start,
    )
    .with_stagger(props.stagger)
    .with_delay(props.delay);
    let start = if props.on_scroll {
        RevealStart::OnScroll
    } else {
        RevealStart::Immediately
    };
    use_reveal(&props.engine, node.clone(), spec, Some(".inner"), start, true);

    let pieces = split_text(&props.text, props.split);
    let joiner = match props.split {
        Split::Words => " ",
        Split::Letters => "",
    };
    let count = pieces.len();

    html! {
        <@{props.tag.to_string()} ref={node} class={props.class.clone()} aria-label={props.text.clone()}>
            {
                pieces.into_iter().enumerate().map(|(i, piece)| html! {
                    <>
                        <span class="split-piece" aria-hidden="true">
                            <span class="inner">{piece}</span>
                        </span>
                        { if i + 1 < count { joiner } else { "" } }
                    </>
                }).collect::<Html>()
            }
        </@>
    }
}
