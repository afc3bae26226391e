use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::effects;
use crate::motion::pointer::hover_tilt;
use crate::motion::style::VisualStyle;

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub still: bool,
}

/// Card that tilts towards the pointer while hovered.
#[function_component(HoverCard)]
pub fn hover_card(props: &HoverCardProps) -> Html {
    let card_ref = use_node_ref();

    let onmousemove = {
        let card_ref = card_ref.clone();
        let still = props.still;
        Callback::from(move |e: MouseEvent| {
            if still {
                return;
            }
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let tilt = hover_tilt(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            );
            effects::set_property(&card, "transform", &tilt.transform());
        })
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                effects::set_property(&card, "transform", &VisualStyle::IDENTITY.transform());
            }
        })
    };

    html! {
        <div
            ref={card_ref}
            class={classes!("hover-card", props.class.clone())}
            data-magnetic="true"
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
