use yew::prelude::*;

use crate::config;
use crate::hooks::scroll::use_scroll_progress;
use crate::motion::progress::{parallax_offset, ScrollOffsets};

#[derive(Properties, PartialEq)]
pub struct ParallaxSectionProps {
    #[prop_or_default]
    pub children: Children,
    /// Multiplier on the background's travel; 0 pins it, negative reverses it.
    #[prop_or(config::DEFAULT_PARALLAX_SPEED)]
    pub speed: f64,
    #[prop_or_default]
    pub background: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ParallaxSection)]
pub fn parallax_section(props: &ParallaxSectionProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(&node, ScrollOffsets::default());
    let offset = parallax_offset(progress, props.speed);

    let layer_style = {
        let mut style = format!(
            "position: absolute; inset: -{pad}% 0; transform: translate3d(0, {offset:.3}%, 0); will-change: transform; background-size: cover; background-position: center;",
            pad = config::PARALLAX_TRAVEL_PCT,
            offset = offset,
        );
        if let Some(background) = &props.background {
            style.push_str(&format!(" background-image: url('{}');", background));
        }
        style
    };

    html! {
        <section
            ref={node}
            class={classes!("parallax-section", props.class.clone())}
            style="position: relative; overflow: hidden;"
        >
            <div class="parallax-layer" aria-hidden="true" style={layer_style}></div>
            <div class="parallax-content" style="position: relative;">
                { for props.children.iter() }
            </div>
        </section>
    }
}
