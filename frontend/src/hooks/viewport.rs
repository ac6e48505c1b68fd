use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::MotionError;
use crate::motion::visibility::{InViewOptions, Sample, VisibilityWatch};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A fire-once `IntersectionObserver` subscription.
///
/// The observer disconnects itself after delivering the first qualifying
/// entry, or when released; whichever comes first. Dropping the handle
/// releases it.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    watch: Rc<RefCell<VisibilityWatch>>,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    pub fn observe(
        target: &Element,
        options: &InViewOptions,
        on_visible: impl FnOnce() + 'static,
    ) -> Result<Self, MotionError> {
        let watch = Rc::new(RefCell::new(VisibilityWatch::new(options.threshold)));
        let mut on_visible = Some(on_visible);

        let callback = {
            let watch = watch.clone();
            ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample = Sample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if watch.borrow_mut().deliver(sample) {
                        observer.disconnect();
                        if let Some(on_visible) = on_visible.take() {
                            on_visible();
                        }
                        break;
                    }
                }
            })
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.normalized_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| MotionError::Unsupported("IntersectionObserver"))?;
        watch.borrow_mut().observe();
        observer.observe(target);

        Ok(Self {
            observer,
            watch,
            _callback: callback,
        })
    }

    /// Disconnects if still observing. Safe to call any number of times.
    pub fn release(&self) {
        if self.watch.borrow_mut().release() {
            log::debug!("releasing viewport observer before it fired");
            self.observer.disconnect();
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.release();
    }
}

/// Reports whether the element behind `node` has entered the viewport.
///
/// Goes from `false` to `true` at most once per component instance and never
/// back. With `priority` set the answer is `true` from the first render.
#[hook]
pub fn use_in_view(node: &NodeRef, options: InViewOptions) -> bool {
    let visible = use_state_eq(|| options.priority);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &InViewOptions| {
                let mut subscription = None;
                if options.priority {
                    visible.set(true);
                } else if !*visible {
                    match node.cast::<Element>() {
                        Some(target) => {
                            let on_visible = {
                                let visible = visible.clone();
                                move || visible.set(true)
                            };
                            match ViewportObserver::observe(&target, options, on_visible) {
                                Ok(observer) => subscription = Some(observer),
                                Err(err) => {
                                    log::warn!("{}; rendering without viewport deferral", err);
                                    visible.set(true);
                                }
                            }
                        }
                        None => log::debug!("in-view target not attached, skipping observation"),
                    }
                }
                move || {
                    if let Some(observer) = subscription {
                        observer.release();
                    }
                }
            },
            options,
        );
    }

    *visible
}
