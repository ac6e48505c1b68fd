use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Reflect;
use web_sys::{IdleRequestOptions, Window};

use crate::motion::schedule::{RevealLatch, RevealPlan};

pub fn idle_callback_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("requestIdleCallback")).unwrap_or(false)
}

/// A pending reveal, waiting on an idle period or a timer.
///
/// Cancelling (or dropping) releases every scheduled callback; the reveal
/// then never runs.
pub struct DeferredReveal {
    latch: Rc<RevealLatch>,
    idle: Option<(u32, Closure<dyn FnMut()>)>,
    timer: Option<Timeout>,
}

impl DeferredReveal {
    pub fn schedule(delay_ms: u32, on_ready: impl FnOnce() + 'static) -> Self {
        let latch = RevealLatch::new(on_ready);
        // Immediate reveals never touch the browser schedulers.
        let window = if delay_ms == 0 { None } else { web_sys::window() };
        let idle_supported = window.as_ref().map(idle_callback_supported).unwrap_or(false);

        let mut deferred = Self { latch: latch.clone(), idle: None, timer: None };
        match RevealPlan::for_delay(delay_ms, idle_supported) {
            RevealPlan::Immediate => {
                latch.fire();
            }
            RevealPlan::Idle { timeout_ms, guard_ms } => {
                if let Some(window) = window {
                    deferred.idle = request_idle(&window, timeout_ms, latch.clone());
                }
                let guard = latch.clone();
                deferred.timer = Some(Timeout::new(guard_ms, move || {
                    if guard.fire() {
                        log::debug!("idle callback never arrived, revealed by guard timer");
                    }
                }));
            }
            RevealPlan::Timer { delay_ms } => {
                let timer = latch.clone();
                deferred.timer = Some(Timeout::new(delay_ms, move || {
                    timer.fire();
                }));
            }
        }
        deferred
    }

    pub fn cancel(&mut self) {
        self.latch.disarm();
        if let Some((handle, _closure)) = self.idle.take() {
            if let Some(window) = web_sys::window() {
                window.cancel_idle_callback(handle);
            }
        }
        self.timer.take();
    }
}

impl Drop for DeferredReveal {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_idle(
    window: &Window,
    timeout_ms: u32,
    latch: Rc<RevealLatch>,
) -> Option<(u32, Closure<dyn FnMut()>)> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        latch.fire();
    });
    let options = IdleRequestOptions::new();
    options.set_timeout(timeout_ms);
    match window.request_idle_callback_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(handle) => Some((handle, closure)),
        Err(err) => {
            log::warn!("requestIdleCallback failed, relying on timer: {:?}", err);
            None
        }
    }
}
