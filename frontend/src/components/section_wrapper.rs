use yew::prelude::*;

use crate::components::lazy_section::scoped_style;
use crate::config;
use crate::hooks::viewport::use_in_view;
use crate::motion::gate::{entrance_css, stagger_delay, Direction, RevealTiming};
use crate::motion::visibility::InViewOptions;

#[derive(Properties, PartialEq)]
pub struct SectionWrapperProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or(config::STAGGER_STEP_MS)]
    pub stagger: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// A page section whose children enter one after another.
#[function_component(SectionWrapper)]
pub fn section_wrapper(props: &SectionWrapperProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(
        &node,
        InViewOptions::new(
            config::DEFAULT_THRESHOLD,
            config::ANIMATED_SECTION_ROOT_MARGIN,
            false,
        ),
    );

    let items = props.children.iter().enumerate().map(|(index, child)| {
        let delay = stagger_delay(index, props.stagger, config::STAGGER_MAX_MS);
        let (class, inline) = scoped_style(entrance_css(
            Direction::Up,
            visible,
            RevealTiming::with_delay(delay),
        ));
        html! {
            <div class={classes!("section-item", class)} style={inline}>
                { child }
            </div>
        }
    });

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("page-section", visible.then(|| "in-view"), props.class.clone())}
        >
            {
                if props.eyebrow.is_some() || props.title.is_some() {
                    html! {
                        <header class="section-header">
                            if let Some(eyebrow) = props.eyebrow.clone() {
                                <p class="section-eyebrow">{eyebrow}</p>
                            }
                            if let Some(title) = props.title.clone() {
                                <h2 class="section-title">{title}</h2>
                            }
                        </header>
                    }
                } else {
                    html! {}
                }
            }
            <div class="section-body">
                { for items }
            </div>
        </section>
    }
}
