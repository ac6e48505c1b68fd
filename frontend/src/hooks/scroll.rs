use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element};
use yew::prelude::*;

use crate::hooks::frame::FrameThrottle;
use crate::motion::progress::{Geometry, ScrollOffsets};

const TRACKED_EVENTS: [&str; 2] = ["scroll", "resize"];

fn read_progress(node: &NodeRef, offsets: ScrollOffsets) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(offsets.progress(Geometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    }))
}

/// Scroll progress of the element behind `node` through `offsets`, in [0, 1].
///
/// Scroll and resize events only schedule work; geometry is read once per
/// animation frame. A detached element leaves the last value in place.
#[hook]
pub fn use_scroll_progress(node: &NodeRef, offsets: ScrollOffsets) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let node = node.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |offsets: &ScrollOffsets| {
                let offsets = *offsets;
                let throttle = FrameThrottle::new();
                let measure: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(value) = read_progress(&node, offsets) {
                        progress.set(value);
                    }
                });

                let on_event = {
                    let throttle = throttle.clone();
                    let measure = measure.clone();
                    Closure::<dyn Fn()>::new(move || {
                        let measure = measure.clone();
                        throttle.request(move || measure());
                    })
                };

                let window = web_sys::window();
                if let Some(window) = &window {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    for event in TRACKED_EVENTS {
                        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                            event,
                            on_event.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            log::warn!("could not listen for {}: {:?}", event, err);
                        }
                    }
                }

                // Initial read
                throttle.request(move || measure());

                move || {
                    if let Some(window) = window {
                        for event in TRACKED_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                on_event.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    throttle.cancel();
                }
            },
            offsets,
        );
    }

    *progress
}
