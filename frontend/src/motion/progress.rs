use crate::config;

/// A point on the element lined up with a point on the viewport.
///
/// Both values are fractions: `element` of the element's height measured
/// from its top edge, `viewport` of the viewport's height from its top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }
}

/// Live geometry of the tracked element, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// Input range of a scroll-linked animation: progress is 0 when `start`
/// lines up and 1 when `end` does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffsets {
    pub start: Anchor,
    pub end: Anchor,
}

impl Default for ScrollOffsets {
    /// Element top meets viewport bottom, through element bottom meets viewport top.
    fn default() -> Self {
        Self {
            start: Anchor::new(0.0, 1.0),
            end: Anchor::new(1.0, 0.0),
        }
    }
}

impl ScrollOffsets {
    fn gap(anchor: Anchor, geometry: Geometry) -> f64 {
        geometry.top + anchor.element * geometry.height - anchor.viewport * geometry.viewport_height
    }

    pub fn progress(&self, geometry: Geometry) -> f64 {
        let from_start = Self::gap(self.start, geometry);
        let span = from_start - Self::gap(self.end, geometry);
        if !from_start.is_finite() {
            return 0.0;
        }
        if !span.is_finite() || span.abs() < f64::EPSILON {
            // Degenerate range: snap to whichever side of `start` we are on.
            return if from_start > 0.0 { 0.0 } else { 1.0 };
        }
        clamp_unit(from_start / span)
    }
}

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Linear interpolation of clamped `progress` onto `(from, to)`.
pub fn map_range(progress: f64, output: (f64, f64)) -> f64 {
    let (from, to) = output;
    from + (to - from) * clamp_unit(progress)
}

/// Vertical background offset in percent for a parallax layer.
pub fn parallax_offset(progress: f64, speed: f64) -> f64 {
    let travel = config::PARALLAX_TRAVEL_PCT * speed;
    map_range(progress, (-travel, travel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(top: f64, height: f64) -> Geometry {
        Geometry { top, height, viewport_height: 800.0 }
    }

    #[test]
    fn default_range_runs_from_entry_to_exit() {
        let offsets = ScrollOffsets::default();
        assert_eq!(offsets.progress(at(800.0, 400.0)), 0.0);
        assert_eq!(offsets.progress(at(-400.0, 400.0)), 1.0);
        assert!((offsets.progress(at(200.0, 400.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn clamps_outside_tracked_range() {
        let offsets = ScrollOffsets::default();
        assert_eq!(offsets.progress(at(5000.0, 400.0)), 0.0);
        assert_eq!(offsets.progress(at(-5000.0, 400.0)), 1.0);
    }

    #[test]
    fn zero_height_element_is_tolerated() {
        let offsets = ScrollOffsets::default();
        assert!((offsets.progress(at(400.0, 0.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn detached_element_clamps() {
        // A detached element reports an all-zero rect, and the viewport may too.
        let offsets = ScrollOffsets::default();
        assert_eq!(offsets.progress(at(0.0, 0.0)), 1.0);
        assert_eq!(offsets.progress(Geometry::default()), 1.0);
    }

    #[test]
    fn custom_range_centre_to_top() {
        let offsets = ScrollOffsets {
            start: Anchor::new(0.0, 0.5),
            end: Anchor::new(0.0, 0.0),
        };
        assert_eq!(offsets.progress(at(400.0, 100.0)), 0.0);
        assert!((offsets.progress(at(200.0, 100.0)) - 0.5).abs() < 1e-9);
        assert_eq!(offsets.progress(at(0.0, 100.0)), 1.0);
    }

    #[test]
    fn maps_onto_output_range() {
        assert_eq!(map_range(0.25, (0.0, 100.0)), 25.0);
        assert_eq!(map_range(2.0, (10.0, 20.0)), 20.0);
        assert_eq!(map_range(f64::NAN, (10.0, 20.0)), 10.0);
        assert_eq!(parallax_offset(0.0, 0.5), -15.0);
        assert_eq!(parallax_offset(1.0, 0.5), 15.0);
        assert_eq!(parallax_offset(0.5, 2.0), 0.0);
    }

    proptest! {
        #[test]
        fn progress_stays_in_unit_range(
            top in -1.0e6f64..1.0e6,
            height in 0.0f64..1.0e5,
            viewport_height in 0.0f64..1.0e4,
            start_e in -1.0f64..2.0,
            start_v in -1.0f64..2.0,
            end_e in -1.0f64..2.0,
            end_v in -1.0f64..2.0,
        ) {
            let offsets = ScrollOffsets {
                start: Anchor::new(start_e, start_v),
                end: Anchor::new(end_e, end_v),
            };
            let p = offsets.progress(Geometry { top, height, viewport_height });
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn default_progress_grows_as_page_scrolls_down(
            top in -2000.0f64..2000.0,
            scrolled in 0.0f64..500.0,
            height in 0.0f64..1500.0,
        ) {
            let offsets = ScrollOffsets::default();
            let before = offsets.progress(at(top, height));
            let after = offsets.progress(at(top - scrolled, height));
            prop_assert!(after >= before);
        }
    }
}
