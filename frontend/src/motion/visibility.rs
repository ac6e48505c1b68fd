use yew::AttrValue;

use crate::config;

/// Options shared by everything that waits for an element to scroll into view.
#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element's area that must be visible.
    pub threshold: f64,
    /// Extra activation distance around the viewport, CSS margin syntax.
    pub root_margin: AttrValue,
    /// Skip observation and report visible straight away.
    pub priority: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: config::DEFAULT_THRESHOLD,
            root_margin: AttrValue::Static("0px"),
            priority: false,
        }
    }
}

impl InViewOptions {
    pub fn new(threshold: f64, root_margin: impl Into<AttrValue>, priority: bool) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            root_margin: root_margin.into(),
            priority,
        }
    }

    /// Root margin normalised for the browser. Unparsable input falls back to `0px`.
    pub fn normalized_margin(&self) -> String {
        match RootMargin::parse(&self.root_margin) {
            Some(margin) => margin.to_css(),
            None => {
                log::warn!("ignoring invalid root margin {:?}", &*self.root_margin);
                RootMargin::zero().to_css()
            }
        }
    }
}

pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        return config::DEFAULT_THRESHOLD;
    }
    threshold.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (number, unit) = if let Some(value) = token.strip_suffix("px") {
            (value, "px")
        } else if let Some(value) = token.strip_suffix('%') {
            (value, "%")
        } else {
            (token, "")
        };
        let value: f64 = number.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        match unit {
            "px" => Some(Length::Px(value)),
            "%" => Some(Length::Percent(value)),
            // A bare zero is the only unitless length CSS accepts.
            _ if value == 0.0 => Some(Length::Px(0.0)),
            _ => None,
        }
    }

    fn to_css(self) -> String {
        match self {
            Length::Px(value) => format!("{}px", value),
            Length::Percent(value) => format!("{}%", value),
        }
    }
}

/// CSS-style margin shorthand, the format `IntersectionObserver` takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub fn zero() -> Self {
        let zero = Length::Px(0.0);
        Self { top: zero, right: zero, bottom: zero, left: zero }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let parts = input
            .split_whitespace()
            .map(Length::parse)
            .collect::<Option<Vec<_>>>()?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return None,
        };
        Some(Self { top, right, bottom, left })
    }

    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {}",
            self.top.to_css(),
            self.right.to_css(),
            self.bottom.to_css(),
            self.left.to_css()
        )
    }
}

/// One intersection report for the watched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Sample {
    pub fn meets(&self, threshold: f64) -> bool {
        if !self.is_intersecting {
            return false;
        }
        if threshold <= 0.0 {
            // The observer reports zero-area intersections at threshold 0.
            return true;
        }
        self.ratio >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Unobserved,
    Observing,
    /// Callback delivered and subscription disconnected.
    Fired,
    /// Torn down before visibility was reached.
    Cancelled,
}

/// Lifecycle of a fire-once visibility subscription.
#[derive(Clone, Debug)]
pub struct VisibilityWatch {
    state: WatchState,
    threshold: f64,
}

impl VisibilityWatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: WatchState::Unobserved,
            threshold: clamp_threshold(threshold),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> WatchState {
        self.state
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.state == WatchState::Fired
    }

    /// Returns true when the caller should create the subscription.
    pub fn observe(&mut self) -> bool {
        if self.state == WatchState::Unobserved {
            self.state = WatchState::Observing;
            true
        } else {
            false
        }
    }

    /// Returns true exactly once, on the sample that makes the element visible.
    /// The caller disconnects the subscription when it sees true.
    pub fn deliver(&mut self, sample: Sample) -> bool {
        if self.state != WatchState::Observing || !sample.meets(self.threshold) {
            return false;
        }
        self.state = WatchState::Fired;
        true
    }

    /// Returns true when a live subscription still has to be disconnected.
    pub fn release(&mut self) -> bool {
        match self.state {
            WatchState::Observing => {
                self.state = WatchState::Cancelled;
                true
            }
            WatchState::Unobserved => {
                self.state = WatchState::Cancelled;
                false
            }
            WatchState::Fired | WatchState::Cancelled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn visible(ratio: f64) -> Sample {
        Sample { is_intersecting: true, ratio }
    }

    #[test]
    fn parses_margin_shorthand() {
        let one = RootMargin::parse("200px").unwrap();
        assert_eq!(one.top, Length::Px(200.0));
        assert_eq!(one.left, Length::Px(200.0));

        let two = RootMargin::parse("50px 0px").unwrap();
        assert_eq!(two.bottom, Length::Px(50.0));
        assert_eq!(two.right, Length::Px(0.0));

        let three = RootMargin::parse("10% 0 -20px").unwrap();
        assert_eq!(three.top, Length::Percent(10.0));
        assert_eq!(three.bottom, Length::Px(-20.0));
        assert_eq!(three.left, Length::Px(0.0));

        assert_eq!(three.to_css(), "10% 0px -20px 0px");
    }

    #[test]
    fn rejects_bad_margins() {
        assert!(RootMargin::parse("").is_none());
        assert!(RootMargin::parse("20em").is_none());
        assert!(RootMargin::parse("12").is_none());
        assert!(RootMargin::parse("1px 2px 3px 4px 5px").is_none());
    }

    #[test]
    fn invalid_margin_option_normalizes_to_zero() {
        let options = InViewOptions::new(0.1, "soon", false);
        assert_eq!(options.normalized_margin(), "0px 0px 0px 0px");
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(clamp_threshold(1.5), 1.0);
        assert_eq!(clamp_threshold(-0.2), 0.0);
        assert_eq!(clamp_threshold(f64::NAN), config::DEFAULT_THRESHOLD);
    }

    #[test]
    fn fires_once_then_stays_fired() {
        let mut watch = VisibilityWatch::new(0.1);
        assert!(watch.observe());
        assert!(!watch.observe());
        assert!(!watch.deliver(visible(0.05)));
        assert!(watch.deliver(visible(0.2)));
        assert!(!watch.deliver(visible(0.9)));
        assert!(!watch.deliver(Sample { is_intersecting: false, ratio: 0.0 }));
        assert_eq!(watch.state(), WatchState::Fired);
        assert!(!watch.release());
        assert_eq!(watch.state(), WatchState::Fired);
    }

    #[test]
    fn release_before_visibility_cancels_once() {
        let mut watch = VisibilityWatch::new(0.1);
        watch.observe();
        assert!(watch.release());
        assert!(!watch.release());
        assert!(!watch.deliver(visible(1.0)));
        assert_eq!(watch.state(), WatchState::Cancelled);
    }

    #[test]
    fn release_without_subscription_has_nothing_to_disconnect() {
        let mut watch = VisibilityWatch::new(0.1);
        assert!(!watch.release());
        assert!(!watch.observe());
    }

    #[test]
    fn zero_threshold_accepts_edge_intersection() {
        let mut watch = VisibilityWatch::new(0.0);
        watch.observe();
        assert!(watch.deliver(visible(0.0)));
    }

    proptest! {
        #[test]
        fn visibility_never_reverts(samples in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..64)) {
            let mut watch = VisibilityWatch::new(0.1);
            watch.observe();
            let mut seen = false;
            let mut fires = 0;
            for (is_intersecting, ratio) in samples {
                if watch.deliver(Sample { is_intersecting, ratio }) {
                    fires += 1;
                }
                if seen {
                    prop_assert!(watch.has_fired());
                }
                seen |= watch.has_fired();
            }
            prop_assert!(fires <= 1);
            watch.release();
            prop_assert_eq!(watch.has_fired(), seen);
        }
    }
}
