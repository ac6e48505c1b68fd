use yew::prelude::*;

use crate::components::lazy_section::scoped_style;
use crate::config;
use crate::hooks::viewport::use_in_view;
use crate::motion::gate::{entrance_css, Direction, RevealTiming};
use crate::motion::visibility::InViewOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImagePhase {
    /// Not near the viewport yet, no request made.
    Waiting,
    Loading,
    Loaded,
    Failed,
}

impl ImagePhase {
    /// Priority images skip the wait and request on first render.
    pub fn initial(priority: bool) -> Self {
        if priority {
            ImagePhase::Loading
        } else {
            ImagePhase::Waiting
        }
    }

    pub fn on_visible(self) -> Self {
        match self {
            ImagePhase::Waiting => ImagePhase::Loading,
            other => other,
        }
    }

    pub fn on_load(self) -> Self {
        match self {
            ImagePhase::Loading => ImagePhase::Loaded,
            other => other,
        }
    }

    pub fn on_error(self) -> Self {
        match self {
            ImagePhase::Loading => ImagePhase::Failed,
            other => other,
        }
    }

    fn requests_image(self) -> bool {
        matches!(self, ImagePhase::Loading | ImagePhase::Loaded)
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    /// CSS aspect ratio of the reserved box, e.g. `"4 / 3"`.
    #[prop_or(AttrValue::Static("1 / 1"))]
    pub aspect_ratio: AttrValue,
    #[prop_or(false)]
    pub priority: bool,
    #[prop_or(config::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(AttrValue::Static(config::LAZY_IMAGE_ROOT_MARGIN))]
    pub root_margin: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let phase = use_state_eq(|| ImagePhase::initial(props.priority));
    let visible = use_in_view(
        &node,
        InViewOptions::new(props.threshold, props.root_margin.clone(), props.priority),
    );

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible {
                    phase.set(phase.on_visible());
                }
                || ()
            },
            visible,
        );
    }

    let onload = {
        let phase = phase.clone();
        Callback::from(move |_: Event| phase.set(phase.on_load()))
    };
    let onerror = {
        let phase = phase.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("image failed to load: {}", src);
            phase.set(phase.on_error());
        })
    };

    let loaded = *phase == ImagePhase::Loaded;
    let (fade_class, fade_inline) = scoped_style(entrance_css(
        Direction::Fade,
        loaded,
        RevealTiming::default(),
    ));

    html! {
        <div
            ref={node}
            class={classes!("lazy-image", (!loaded).then(|| "lazy-image-pending"), props.class.clone())}
            style={format!("aspect-ratio: {}; position: relative; overflow: hidden;", props.aspect_ratio)}
        >
            {
                match *phase {
                    ImagePhase::Failed => html! {
                        <span class="lazy-image-fallback" role="img" aria-label={props.alt.clone()}>
                            {props.alt.clone()}
                        </span>
                    },
                    current if current.requests_image() => html! {
                        <img
                            src={props.src.clone()}
                            alt={props.alt.clone()}
                            loading={if props.priority { "eager" } else { "lazy" }}
                            fetchpriority={props.priority.then(|| "high")}
                            decoding="async"
                            class={fade_class}
                            style={fade_inline}
                            {onload}
                            {onerror}
                        />
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}
