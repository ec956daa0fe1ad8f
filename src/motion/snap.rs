//! Global snapping across pinned sections.
//!
//! Every pinned section contributes one region of the page's scroll range. Once
//! scrolling settles inside (or close to) any of them, the page is pulled to the
//! closest region center; anywhere else the scroll position is left alone.

use crate::config::MotionConfig;
use crate::motion::ease::Ease;

/// Scroll bounds of one pinned section, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRegion {
    pub start: f64,
    pub end: f64,
}

impl PinnedRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn center(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }

    /// How far `scroll` has travelled through the pin, from 0 to 1.
    pub fn progress_at(&self, scroll: f64) -> f64 {
        if self.end <= self.start {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// A pinned region as fractions of the total scrollable distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedRange {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl NormalizedRange {
    fn new(region: &PinnedRegion, max_scroll: f64) -> Self {
        Self {
            start: region.start / max_scroll,
            end: region.end / max_scroll,
            center: region.center() / max_scroll,
        }
    }

    fn contains_padded(&self, value: f64, padding: f64) -> bool {
        value >= self.start - padding && value <= self.end + padding
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnapAggregator {
    ranges: Vec<NormalizedRange>,
    padding: f64,
    duration_min: f64,
    duration_max: f64,
    delay: f64,
    ease: Ease,
}

impl SnapAggregator {
    /// Returns `None` when there is nothing to snap to: no pinned regions, or a page
    /// that cannot scroll.
    pub fn install(regions: &[PinnedRegion], max_scroll: f64, config: &MotionConfig) -> Option<Self> {
        if regions.is_empty() || !(max_scroll > 0.0) {
            return None;
        }

        let mut sorted = regions.to_vec();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

        Some(Self {
            ranges: sorted.iter().map(|r| NormalizedRange::new(r, max_scroll)).collect(),
            padding: config.snap_padding,
            duration_min: config.snap_duration_min,
            duration_max: config.snap_duration_max,
            delay: config.snap_delay,
            ease: config.snap_ease,
        })
    }

    pub fn ranges(&self) -> &[NormalizedRange] {
        &self.ranges
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Maps a scroll fraction to where scrolling should come to rest.
    pub fn snap_to(&self, value: f64) -> f64 {
        let in_pinned = self.ranges.iter().any(|r| r.contains_padded(value, self.padding));
        if !in_pinned {
            return value;
        }

        // Strict comparison keeps the earliest region on ties.
        self.ranges.iter().skip(1).fold(self.ranges[0].center, |closest, r| {
            if (r.center - value).abs() < (closest - value).abs() {
                r.center
            } else {
                closest
            }
        })
    }

    /// Seconds a snap from `from` to `to` takes, clamped to the configured window.
    /// Scales with the distance relative to the longest correction any band allows.
    pub fn duration_for(&self, from: f64, to: f64) -> f64 {
        let reference = self
            .ranges
            .iter()
            .map(|r| (r.end - r.start) / 2.0 + self.padding)
            .fold(0.0, f64::max);
        if reference <= 0.0 {
            return self.duration_min;
        }
        let raw = self.duration_max * (to - from).abs() / reference;
        raw.clamp(self.duration_min, self.duration_max)
    }
}
