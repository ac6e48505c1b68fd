use stylist::Style;
use yew::prelude::*;

use crate::config;
use crate::hooks::frame::FrameLoop;
use crate::hooks::idle::DeferredReveal;
use crate::hooks::viewport::use_in_view;
use crate::motion::gate::{gate_css, GatePhase};
use crate::motion::visibility::InViewOptions;

#[derive(Properties, PartialEq)]
pub struct LazySectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(config::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(AttrValue::Static(config::LAZY_SECTION_ROOT_MARGIN))]
    pub root_margin: AttrValue,
    /// Milliseconds to wait after becoming visible, spent in an idle period when possible.
    #[prop_or(0)]
    pub delay: u32,
    #[prop_or(false)]
    pub priority: bool,
    #[prop_or(AttrValue::Static(config::LAZY_SECTION_MIN_HEIGHT))]
    pub min_height: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Registers `css` as a scoped class. Falls back to an inline style string
/// when the stylesheet manager rejects it.
pub(crate) fn scoped_style(css: String) -> (Classes, Option<String>) {
    match Style::new(css.as_str()) {
        Ok(style) => (classes!(style.get_class_name().to_string()), None),
        Err(err) => {
            log::warn!("falling back to inline style: {}", err);
            (Classes::new(), Some(css))
        }
    }
}

/// Holds back expensive children until the section nears the viewport.
#[function_component(LazySection)]
pub fn lazy_section(props: &LazySectionProps) -> Html {
    let node = use_node_ref();
    let phase = use_state_eq(|| GatePhase::Placeholder);
    let visible = use_in_view(
        &node,
        InViewOptions::new(props.threshold, props.root_margin.clone(), props.priority),
    );

    // Visible -> Mounted, after the optional delay
    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |(visible, delay): &(bool, u32)| {
                let mut pending = None;
                if *visible && *phase == GatePhase::Placeholder {
                    let phase = phase.clone();
                    let current = *phase;
                    pending = Some(DeferredReveal::schedule(*delay, move || {
                        phase.set(current.advance(GatePhase::Mounted));
                    }));
                }
                move || drop(pending)
            },
            (visible, props.delay),
        );
    }

    // Mounted -> Revealed once the hidden pose has been styled
    {
        let current = *phase;
        let phase = phase.clone();
        use_effect_with_deps(
            move |current: &GatePhase| {
                let mut frames = None;
                if *current == GatePhase::Mounted {
                    let mounted = *current;
                    let mut elapsed_frames = 0;
                    frames = Some(FrameLoop::start(move |_| {
                        elapsed_frames += 1;
                        let next = mounted.after_frames(elapsed_frames);
                        if next != mounted {
                            phase.set(next);
                        }
                    }));
                }
                move || drop(frames)
            },
            current,
        );
    }

    let (style_class, inline_style) = scoped_style(gate_css(*phase, &props.min_height));

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("lazy-section", style_class, props.class.clone())}
            style={inline_style}
            data-phase={format!("{:?}", *phase).to_lowercase()}
        >
            {
                if phase.shows_children() {
                    html! { <>{ for props.children.iter() }</> }
                } else {
                    html! { <div class="lazy-section-placeholder" aria-hidden="true"></div> }
                }
            }
        </div>
    }
}
