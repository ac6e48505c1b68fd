use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use crate::motion::schedule::FrameClock;

struct LoopState {
    clock: FrameClock,
    frame: RefCell<Option<AnimationFrame>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
}

/// A per-frame callback that keeps rescheduling itself until stopped.
///
/// The tick receives milliseconds elapsed since the first frame, so motion
/// stays correct under variable refresh rates.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(tick: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(LoopState {
            clock: FrameClock::new(),
            frame: RefCell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule(&state);
        Self { state }
    }

    /// Cancels the pending frame. Calling it again does nothing.
    pub fn stop(&self) {
        if self.state.clock.stop() {
            self.state.frame.borrow_mut().take();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &Rc<LoopState>) {
    let next = Rc::clone(state);
    let frame = request_animation_frame(move |timestamp| {
        next.frame.borrow_mut().take();
        let Some(elapsed) = next.clock.tick(timestamp) else {
            return;
        };
        {
            let mut tick = next.tick.borrow_mut();
            (tick.as_mut())(elapsed);
        }
        if next.clock.is_running() {
            schedule(&next);
        }
    });
    *state.frame.borrow_mut() = Some(frame);
}

/// Coalesces bursts of events into at most one callback per animation frame.
#[derive(Clone, Default)]
pub struct FrameThrottle {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `work` for the next frame unless a frame is already pending.
    pub fn request(&self, work: impl FnOnce() + 'static) {
        if self.pending.borrow().is_some() {
            return;
        }
        let pending = self.pending.clone();
        let frame = request_animation_frame(move |_| {
            pending.borrow_mut().take();
            work();
        });
        *self.pending.borrow_mut() = Some(frame);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
