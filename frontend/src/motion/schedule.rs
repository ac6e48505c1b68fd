use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config;

/// How a gate waits between becoming visible and mounting its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPlan {
    Immediate,
    /// Ask for an idle period no later than `timeout_ms`; a guard timer at
    /// `guard_ms` reveals anyway if the idle callback never arrives.
    Idle { timeout_ms: u32, guard_ms: u32 },
    Timer { delay_ms: u32 },
}

impl RevealPlan {
    pub fn for_delay(delay_ms: u32, idle_supported: bool) -> Self {
        if delay_ms == 0 {
            RevealPlan::Immediate
        } else if idle_supported {
            RevealPlan::Idle {
                timeout_ms: delay_ms,
                guard_ms: delay_ms.saturating_add(config::IDLE_GUARD_GRACE_MS),
            }
        } else {
            RevealPlan::Timer { delay_ms }
        }
    }
}

/// Holds a callback that runs at most once, whichever scheduler gets there first.
pub struct RevealLatch {
    callback: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl RevealLatch {
    pub fn new(callback: impl FnOnce() + 'static) -> Rc<Self> {
        Rc::new(Self {
            callback: RefCell::new(Some(Box::new(callback))),
        })
    }

    /// Runs the callback if nobody has yet. Returns whether this call ran it.
    pub fn fire(&self) -> bool {
        let callback = self.callback.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Drops the callback without running it.
    pub fn disarm(&self) {
        self.callback.borrow_mut().take();
    }

    #[cfg(test)]
    pub fn is_spent(&self) -> bool {
        self.callback.borrow().is_none()
    }
}

/// Run flag and start time of a per-frame loop.
#[derive(Debug)]
pub struct FrameClock {
    running: Cell<bool>,
    started_at: Cell<Option<f64>>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            running: Cell::new(true),
            started_at: Cell::new(None),
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the first frame, or `None` once stopped.
    pub fn tick(&self, timestamp: f64) -> Option<f64> {
        if !self.running.get() {
            return None;
        }
        let started_at = match self.started_at.get() {
            Some(started_at) => started_at,
            None => {
                self.started_at.set(Some(timestamp));
                timestamp
            }
        };
        Some((timestamp - started_at).max(0.0))
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Returns true only for the call that actually stopped the clock.
    pub fn stop(&self) -> bool {
        self.running.replace(false)
    }
}
