use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreloadPhase {
    Loading,
    Fading,
    Done,
}

impl PreloadPhase {
    /// Next phase given what has happened so far. Never goes backwards.
    pub fn step(self, page_loaded: bool, min_elapsed: bool, fade_elapsed: bool) -> Self {
        let next = match self {
            PreloadPhase::Loading if page_loaded && min_elapsed => PreloadPhase::Fading,
            PreloadPhase::Fading if fade_elapsed => PreloadPhase::Done,
            current => current,
        };
        self.max(next)
    }
}

fn document_complete() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(true)
}

/// Full-screen brand overlay shown until the page has loaded.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    let page_loaded = use_state_eq(|| false);
    let min_elapsed = use_state_eq(|| false);
    let fade_elapsed = use_state_eq(|| false);
    let phase = use_state_eq(|| PreloadPhase::Loading);

    {
        let page_loaded = page_loaded.clone();
        let min_elapsed = min_elapsed.clone();
        use_effect_with_deps(
            move |_| {
                let mut listener = None;
                if document_complete() {
                    page_loaded.set(true);
                } else if let Some(window) = web_sys::window() {
                    let on_load = {
                        let page_loaded = page_loaded.clone();
                        Closure::<dyn Fn()>::new(move || page_loaded.set(true))
                    };
                    match window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref()) {
                        Ok(()) => listener = Some((window, on_load)),
                        Err(err) => {
                            log::warn!("no load event, dismissing preloader on timer: {:?}", err);
                            page_loaded.set(true);
                        }
                    }
                }
                let min_timer = Timeout::new(config::PRELOADER_MIN_MS, move || min_elapsed.set(true));
                move || {
                    drop(min_timer);
                    if let Some((window, on_load)) = listener {
                        let _ = window.remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    {
        let signals = (*page_loaded, *min_elapsed, *fade_elapsed);
        let phase = phase.clone();
        let fade_elapsed = fade_elapsed.clone();
        use_effect_with_deps(
            move |(loaded, min, faded): &(bool, bool, bool)| {
                let next = phase.step(*loaded, *min, *faded);
                phase.set(next);
                let fade_timer = (next == PreloadPhase::Fading && !*faded).then(|| {
                    Timeout::new(config::PRELOADER_FADE_MS, move || fade_elapsed.set(true))
                });
                if next == PreloadPhase::Done {
                    log::debug!("preloader dismissed");
                }
                move || drop(fade_timer)
            },
            signals,
        );
    }

    if *phase == PreloadPhase::Done {
        return html! {};
    }

    let fading = *phase == PreloadPhase::Fading;
    html! {
        <div
            class={classes!("preloader", fading.then(|| "preloader-fading"))}
            role="status"
            aria-live="polite"
            style={format!(
                "position: fixed; inset: 0; z-index: 1000; display: flex; align-items: center; justify-content: center; background: #0b0b0d; transition: opacity {}ms ease; opacity: {};",
                config::PRELOADER_FADE_MS,
                if fading { 0 } else { 1 },
            )}
        >
            <div class="preloader-mark">
                <span class="preloader-ingot"></span>
                <span class="preloader-label">{"AURUM VAULT"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_both_load_and_minimum_time() {
        let phase = PreloadPhase::Loading;
        assert_eq!(phase.step(true, false, false), PreloadPhase::Loading);
        assert_eq!(phase.step(false, true, false), PreloadPhase::Loading);
        assert_eq!(phase.step(true, true, false), PreloadPhase::Fading);
    }

    #[test]
    fn fades_then_finishes() {
        let phase = PreloadPhase::Fading;
        assert_eq!(phase.step(true, true, false), PreloadPhase::Fading);
        assert_eq!(phase.step(true, true, true), PreloadPhase::Done);
        assert_eq!(PreloadPhase::Done.step(false, false, false), PreloadPhase::Done);
    }

    #[test]
    fn fade_signal_alone_does_not_skip_loading() {
        assert_eq!(PreloadPhase::Loading.step(false, false, true), PreloadPhase::Loading);
    }
}
