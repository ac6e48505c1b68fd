use yew::prelude::*;

use crate::components::lazy_section::scoped_style;
use crate::config;
use crate::hooks::viewport::use_in_view;
use crate::motion::gate::{entrance_css, Direction, RevealTiming};
use crate::motion::visibility::InViewOptions;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub direction: Direction,
    /// Transition delay once visible, in milliseconds.
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(config::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(AttrValue::Static(config::ANIMATED_SECTION_ROOT_MARGIN))]
    pub root_margin: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Always-mounted content that animates in the first time it is seen.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(
        &node,
        InViewOptions::new(props.threshold, props.root_margin.clone(), false),
    );
    let (class, inline) = scoped_style(entrance_css(
        props.direction,
        visible,
        RevealTiming::with_delay(props.delay),
    ));

    html! {
        <div
            ref={node}
            class={classes!("animated-section", visible.then(|| "in-view"), class, props.class.clone())}
            style={inline}
        >
            { for props.children.iter() }
        </div>
    }
}
