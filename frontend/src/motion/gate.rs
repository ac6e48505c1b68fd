use crate::config;

/// Animation frames a freshly mounted gate waits before revealing. The hidden
/// pose is styled after the first; the switch happens on the second.
pub const REVEAL_SETTLE_FRAMES: u32 = 2;

/// Where a deferred subtree is in its reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GatePhase {
    /// Only the layout-reserving placeholder is rendered.
    Placeholder,
    /// Real children are mounted in their hidden starting pose.
    Mounted,
    /// Entrance transition has been triggered.
    Revealed,
}

impl GatePhase {
    /// Phases only move forward; anything earlier than the current one is ignored.
    pub fn advance(self, next: GatePhase) -> GatePhase {
        self.max(next)
    }

    pub fn shows_children(self) -> bool {
        self != GatePhase::Placeholder
    }

    /// Phase after `frames` animation frames have run since this one began.
    pub fn after_frames(self, frames: u32) -> GatePhase {
        match self {
            GatePhase::Mounted if frames >= REVEAL_SETTLE_FRAMES => GatePhase::Revealed,
            current => current,
        }
    }
}

/// Entrance direction for [`entrance_css`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
    Fade,
}

impl Direction {
    fn hidden_transform(self) -> String {
        let offset = config::REVEAL_OFFSET_PX;
        match self {
            Direction::Up => format!("translate3d(0, {}px, 0)", offset),
            Direction::Left => format!("translate3d({}px, 0, 0)", offset),
            Direction::Right => format!("translate3d(-{}px, 0, 0)", offset),
            Direction::Fade => "none".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_ms: config::REVEAL_DURATION_MS,
            delay_ms: 0,
        }
    }
}

impl RevealTiming {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms, ..Self::default() }
    }
}

/// Declarations for an element entering (or waiting to enter) the page.
pub fn entrance_css(direction: Direction, shown: bool, timing: RevealTiming) -> String {
    let (opacity, transform) = if shown {
        ("1".to_string(), "none".to_string())
    } else {
        ("0".to_string(), direction.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}ms {} {}ms, transform {}ms {} {}ms; will-change: opacity, transform;",
        opacity,
        transform,
        timing.duration_ms,
        config::REVEAL_EASING,
        timing.delay_ms,
        timing.duration_ms,
        config::REVEAL_EASING,
        timing.delay_ms,
    )
}

/// Declarations for a render gate in `phase`.
pub fn gate_css(phase: GatePhase, min_height: &str) -> String {
    match phase {
        GatePhase::Placeholder => format!("min-height: {}; width: 100%;", min_height),
        GatePhase::Mounted => entrance_css(Direction::Up, false, RevealTiming::default()),
        GatePhase::Revealed => entrance_css(Direction::Up, true, RevealTiming::default()),
    }
}

/// Transition delay for the `index`-th child of a staggered group.
pub fn stagger_delay(index: usize, step_ms: u32, max_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(max_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn phases_never_move_backwards() {
        let phase = GatePhase::Placeholder.advance(GatePhase::Revealed);
        assert_eq!(phase, GatePhase::Revealed);
        assert_eq!(phase.advance(GatePhase::Mounted), GatePhase::Revealed);
        assert_eq!(phase.advance(GatePhase::Placeholder), GatePhase::Revealed);
        assert!(!GatePhase::Placeholder.shows_children());
        assert!(GatePhase::Mounted.shows_children());
    }

    #[test]
    fn mounted_gate_reveals_only_after_the_hidden_pose_is_styled() {
        assert_eq!(GatePhase::Mounted.after_frames(0), GatePhase::Mounted);
        assert_eq!(GatePhase::Mounted.after_frames(1), GatePhase::Mounted);
        assert_eq!(GatePhase::Mounted.after_frames(2), GatePhase::Revealed);
        assert_eq!(GatePhase::Mounted.after_frames(9), GatePhase::Revealed);
        assert_eq!(GatePhase::Placeholder.after_frames(9), GatePhase::Placeholder);
        assert_eq!(GatePhase::Revealed.after_frames(0), GatePhase::Revealed);
    }

    #[test]
    fn hidden_and_shown_poses_share_the_transition() {
        let transition = |css: &str| css.split("transition:").nth(1).map(str::to_owned);
        let hidden = gate_css(GatePhase::Mounted, "0");
        let shown = gate_css(GatePhase::Revealed, "0");
        assert!(transition(&hidden).is_some());
        assert_eq!(transition(&hidden), transition(&shown));
    }

    #[test]
    fn placeholder_reserves_height() {
        let css = gate_css(GatePhase::Placeholder, "320px");
        assert!(css.contains("min-height: 320px"));
    }

    #[test]
    fn mounted_children_start_hidden_and_reveal_with_fixed_easing() {
        let hidden = gate_css(GatePhase::Mounted, "0");
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(0, 24px, 0)"));

        let shown = gate_css(GatePhase::Revealed, "0");
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
        assert!(shown.contains("800ms cubic-bezier(0.22, 1, 0.36, 1) 0ms"));
    }

    #[test]
    fn fade_has_no_offset() {
        let css = entrance_css(Direction::Fade, false, RevealTiming::with_delay(150));
        assert!(css.contains("transform: none;"));
        assert!(css.contains(" 150ms"));
    }

    #[test]
    fn stagger_is_capped() {
        assert_eq!(stagger_delay(0, 120, 600), 0);
        assert_eq!(stagger_delay(3, 120, 600), 360);
        assert_eq!(stagger_delay(40, 120, 600), 600);
        assert_eq!(stagger_delay(usize::MAX, 120, 600), 600);
    }

    proptest! {
        #[test]
        fn advance_is_monotonic(steps in prop::collection::vec(0u8..3, 0..32)) {
            let mut phase = GatePhase::Placeholder;
            for step in steps {
                let next = match step {
                    0 => GatePhase::Placeholder,
                    1 => GatePhase::Mounted,
                    _ => GatePhase::Revealed,
                };
                let advanced = phase.advance(next);
                prop_assert!(advanced >= phase);
                phase = advanced;
            }
        }
    }
}
