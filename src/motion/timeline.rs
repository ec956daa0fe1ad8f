use crate::motion::ease::Ease;
use crate::motion::style::{Keyframe, Prop, Style, Viewport};

/// Tweens created without an explicit duration last this long, in timeline seconds.
pub const DEFAULT_DURATION: f64 = 0.5;

/// The surface a timeline renders onto.
pub trait Stage {
    fn viewport(&self) -> Viewport;
    /// Number of elements matching `target`.
    fn count(&self, target: &str) -> usize;
    fn apply(&mut self, target: &str, index: usize, style: &Style);
}

/// What drives a timeline's playhead.
#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// Plays once on mount after `delay` seconds.
    Autoplay { delay: f64 },
    /// Scrubbed by scroll progress through the pinned `section`. With
    /// `reset_on_leave_back` the timeline jumps back to its start, skipping the
    /// scrub lag, once scrolling returns above the pin.
    Pin {
        section: String,
        scrub: f64,
        reset_on_leave_back: bool,
    },
    /// Plays forward once `trigger`'s top crosses `start` of the viewport height,
    /// reverses when it goes back below.
    Toggle { trigger: String, start: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: String,
    pub from: Keyframe,
    pub to: Keyframe,
    pub at: f64,
    pub duration: f64,
    pub ease: Ease,
    pub stagger: f64,
}

impl Tween {
    fn start_for(&self, index: usize) -> f64 {
        self.at + self.stagger * index as f64
    }

    fn end_for(&self, count: usize) -> f64 {
        self.start_for(count.saturating_sub(1)) + self.duration
    }

    fn touches(&self, prop: Prop) -> bool {
        self.from.get(prop).is_some() || self.to.get(prop).is_some()
    }

    fn from_value(&self, prop: Prop, viewport: Viewport) -> f64 {
        self.from
            .get(prop)
            .map(|v| v.resolve(viewport))
            .unwrap_or_else(|| Style::default().get(prop))
    }

    fn value_at(&self, prop: Prop, time: f64, index: usize, viewport: Viewport) -> f64 {
        let from = self.from_value(prop, viewport);
        let to = self.to.get(prop).map(|v| v.resolve(viewport)).unwrap_or(from);
        let local = if self.duration > 0.0 {
            (time - self.start_for(index)) / self.duration
        } else {
            1.0
        };
        from + (to - from) * self.ease.apply(local)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    pub trigger: Trigger,
    pub tweens: Vec<Tween>,
}

impl Timeline {
    pub fn autoplay(delay: f64) -> Self {
        Self::with_trigger(Trigger::Autoplay { delay })
    }

    pub fn pinned(section: &str, scrub: f64) -> Self {
        Self::with_trigger(Trigger::Pin {
            section: section.to_string(),
            scrub,
            reset_on_leave_back: false,
        })
    }

    pub fn reset_on_leave_back(mut self) -> Self {
        if let Trigger::Pin {
            reset_on_leave_back, ..
        } = &mut self.trigger
        {
            *reset_on_leave_back = true;
        }
        self
    }

    pub fn toggle(trigger: &str, start: f64) -> Self {
        Self::with_trigger(Trigger::Toggle {
            trigger: trigger.to_string(),
            start,
        })
    }

    fn with_trigger(trigger: Trigger) -> Self {
        Self {
            trigger,
            tweens: Vec::new(),
        }
    }

    pub fn from_to(mut self, target: &str, from: Keyframe, to: Keyframe, at: f64) -> Self {
        self.tweens.push(Tween {
            target: target.to_string(),
            from,
            to,
            at,
            duration: DEFAULT_DURATION,
            ease: Ease::default(),
            stagger: 0.0,
        });
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        if let Some(tween) = self.tweens.last_mut() {
            tween.duration = duration;
        }
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        if let Some(tween) = self.tweens.last_mut() {
            tween.ease = ease;
        }
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        if let Some(tween) = self.tweens.last_mut() {
            tween.stagger = stagger;
        }
        self
    }

    /// Selectors touched by this timeline, in first-use order.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for tween in &self.tweens {
            if !targets.contains(&tween.target.as_str()) {
                targets.push(&tween.target);
            }
        }
        targets
    }

    pub fn total_duration(&self, stage: &impl Stage) -> f64 {
        self.tweens
            .iter()
            .map(|t| t.end_for(stage.count(&t.target)))
            .fold(f64::EPSILON, f64::max)
    }

    pub fn render_progress(&self, progress: f64, stage: &mut impl Stage) {
        let time = progress.clamp(0.0, 1.0) * self.total_duration(&*stage);
        self.render_at(time, stage);
    }

    /// Writes every target's style at `time`. Per prop, the latest tween that has
    /// started wins; before any has started the earliest tween's `from` is shown.
    pub fn render_at(&self, time: f64, stage: &mut impl Stage) {
        let viewport = stage.viewport();
        for target in self.targets() {
            let mut tweens: Vec<&Tween> = self.tweens.iter().filter(|t| t.target == target).collect();
            tweens.sort_by(|a, b| a.at.total_cmp(&b.at));

            let mut props: Vec<Prop> = tweens
                .iter()
                .flat_map(|t| t.from.props().chain(t.to.props()))
                .collect();
            props.sort();
            props.dedup();

            for index in 0..stage.count(target) {
                let mut style = Style::default();
                for &prop in &props {
                    let touching: Vec<&&Tween> = tweens.iter().filter(|t| t.touches(prop)).collect();
                    let value = match touching.iter().rev().find(|t| t.start_for(index) <= time) {
                        Some(active) => active.value_at(prop, time, index, viewport),
                        None => touching[0].from_value(prop, viewport),
                    };
                    style.apply(prop, value);
                }
                stage.apply(target, index, &style);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::motion::dom::ScrollStage;
    use crate::motion::error::MotionError;
    use crate::motion::style::Length;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// In-memory stage: every selector matches `counts[selector]` elements (default 1).
    /// Layout comes from `rects` (document top, height) and `tops` (viewport top).
    pub(crate) struct RecordingStage {
        pub viewport: Viewport,
        pub counts: HashMap<String, usize>,
        pub styles: HashMap<(String, usize), Style>,
        pub writes: Vec<String>,
        pub scroll: f64,
        pub max_scroll: f64,
        pub rects: HashMap<String, (f64, f64)>,
        pub tops: HashMap<String, f64>,
        pub top_reads: Cell<usize>,
        pub scrolled_to: Vec<f64>,
        pub cleared: bool,
    }

    impl RecordingStage {
        pub fn new() -> Self {
            Self {
                viewport: Viewport {
                    width: 1000.0,
                    height: 800.0,
                },
                counts: HashMap::new(),
                styles: HashMap::new(),
                writes: Vec::new(),
                scroll: 0.0,
                max_scroll: 0.0,
                rects: HashMap::new(),
                tops: HashMap::new(),
                top_reads: Cell::new(0),
                scrolled_to: Vec::new(),
                cleared: false,
            }
        }

        pub fn with_count(mut self, target: &str, count: usize) -> Self {
            self.counts.insert(target.to_string(), count);
            self
        }

        pub fn with_rect(mut self, selector: &str, top: f64, height: f64) -> Self {
            self.rects.insert(selector.to_string(), (top, height));
            self
        }

        pub fn with_top(mut self, selector: &str, top: f64) -> Self {
            self.tops.insert(selector.to_string(), top);
            self
        }

        pub fn with_scroll(mut self, scroll: f64, max_scroll: f64) -> Self {
            self.scroll = scroll;
            self.max_scroll = max_scroll;
            self
        }

        pub fn style(&self, target: &str, index: usize) -> Style {
            self.styles[&(target.to_string(), index)]
        }
    }

    impl Stage for RecordingStage {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn count(&self, target: &str) -> usize {
            self.counts.get(target).copied().unwrap_or(1)
        }

        fn apply(&mut self, target: &str, index: usize, style: &Style) {
            self.writes.push(target.to_string());
            self.styles.insert((target.to_string(), index), *style);
        }
    }

    impl ScrollStage for RecordingStage {
        fn prepare(&mut self, _selectors: &[&str]) -> Result<(), MotionError> {
            Ok(())
        }

        fn refresh_viewport(&mut self) -> Result<(), MotionError> {
            Ok(())
        }

        fn scroll_y(&self) -> f64 {
            self.scroll
        }

        fn max_scroll(&self) -> f64 {
            self.max_scroll
        }

        fn scroll_to(&mut self, y: f64) {
            self.scroll = y;
            self.scrolled_to.push(y);
        }

        fn document_rect(&self, selector: &str) -> Option<(f64, f64)> {
            self.rects.get(selector).copied()
        }

        fn viewport_top(&self, selector: &str) -> Option<f64> {
            self.top_reads.set(self.top_reads.get() + 1);
            self.tops.get(selector).copied()
        }

        fn clear(&mut self) {
            self.cleared = true;
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn entrance_then_exit() -> Timeline {
        Timeline::pinned("#problem", 0.6)
            .from_to(
                ".card",
                Keyframe::new().x(Length::Vw(-60.0)).opacity(0.0).scale(0.96),
                Keyframe::new().x(0).opacity(1.0).scale(1.0),
                0.0,
            )
            .ease(Ease::None)
            .from_to(
                ".card",
                Keyframe::new().x(0).opacity(1.0),
                Keyframe::new().x(Length::Vw(-18.0)).opacity(0.0),
                0.7,
            )
            .ease(Ease::None)
    }

    #[test]
    fn duration_spans_the_last_tween() {
        let stage = RecordingStage::new();
        assert!(close(entrance_then_exit().total_duration(&stage), 1.2));
    }

    #[test]
    fn stagger_extends_duration_by_element_count() {
        let timeline = Timeline::toggle(".grid", 0.8)
            .from_to(".item", Keyframe::new().y(40), Keyframe::new().y(0), 0.0)
            .duration(0.6)
            .stagger(0.1);
        let stage = RecordingStage::new().with_count(".item", 3);
        assert!(close(timeline.total_duration(&stage), 0.8));
    }

    #[test]
    fn empty_timeline_has_positive_duration() {
        let stage = RecordingStage::new();
        assert!(Timeline::autoplay(0.0).total_duration(&stage) > 0.0);
    }

    #[test]
    fn start_renders_entrance_from_values() {
        let mut stage = RecordingStage::new();
        entrance_then_exit().render_at(0.0, &mut stage);
        let style = stage.style(".card", 0);
        assert!(close(style.x, -600.0));
        assert!(close(style.opacity, 0.0));
        assert!(close(style.scale, 0.96));
    }

    #[test]
    fn midway_interpolates_the_entrance() {
        let mut stage = RecordingStage::new();
        entrance_then_exit().render_at(0.25, &mut stage);
        let style = stage.style(".card", 0);
        assert!(close(style.x, -300.0));
        assert!(close(style.opacity, 0.5));
    }

    #[test]
    fn exit_overrides_only_the_props_it_animates() {
        let mut stage = RecordingStage::new();
        entrance_then_exit().render_progress(1.0, &mut stage);
        let style = stage.style(".card", 0);
        assert!(close(style.x, -180.0));
        assert!(close(style.opacity, 0.0));
        // Scale only appears in the entrance, which has finished.
        assert!(close(style.scale, 1.0));
    }

    #[test]
    fn hold_between_entrance_and_exit_is_at_rest() {
        let mut stage = RecordingStage::new();
        entrance_then_exit().render_at(0.6, &mut stage);
        let style = stage.style(".card", 0);
        assert!(close(style.x, 0.0));
        assert!(close(style.opacity, 1.0));
    }

    #[test]
    fn staggered_elements_start_later() {
        let timeline = Timeline::pinned("#s", 0.6)
            .from_to(".line", Keyframe::new().y(20), Keyframe::new().y(0), 0.0)
            .ease(Ease::None)
            .stagger(0.1);
        let mut stage = RecordingStage::new().with_count(".line", 2);
        timeline.render_at(0.1, &mut stage);
        assert!(close(stage.style(".line", 0).y, 16.0));
        assert!(close(stage.style(".line", 1).y, 20.0));
    }

    #[test]
    fn prop_only_in_to_tweens_from_identity() {
        let timeline = Timeline::autoplay(0.0)
            .from_to(".bg", Keyframe::new(), Keyframe::new().y(-40), 0.0)
            .ease(Ease::None)
            .duration(1.0);
        let mut stage = RecordingStage::new();
        timeline.render_at(0.5, &mut stage);
        assert!(close(stage.style(".bg", 0).y, -20.0));
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut stage = RecordingStage::new().with_count(".card", 0);
        entrance_then_exit().render_at(0.3, &mut stage);
        assert!(stage.writes.is_empty());
    }
}
