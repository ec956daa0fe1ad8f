use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::MotionConfig;
use crate::motion::dom::{DomStage, ScrollStage};
use crate::motion::ease::Ease;
use crate::motion::error::MotionError;
use crate::motion::playback::{toggle_active, Playhead, Scrub};
use crate::motion::snap::{PinnedRegion, SnapAggregator};
use crate::motion::timeline::{Stage, Timeline, Trigger};

/// Longest step fed to the drivers, so a backgrounded tab does not jump on return.
const MAX_FRAME_STEP: f64 = 0.1;
/// Corrections shorter than this (in pixels) are not worth a snap.
const MIN_SNAP_PX: f64 = 1.0;
/// User input that takes over from a running snap.
const INTERRUPT_EVENTS: [&str; 4] = ["wheel", "touchstart", "keydown", "pointerdown"];

struct PinScene {
    timeline: Timeline,
    section: String,
    reset_on_leave_back: bool,
    scrub: Scrub,
    region: Option<PinnedRegion>,
}

struct ToggleScene {
    timeline: Timeline,
    trigger: String,
    start: f64,
    playhead: Playhead,
}

struct AutoplayScene {
    timeline: Timeline,
    playhead: Playhead,
    done: bool,
}

struct SnapMotion {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl SnapMotion {
    fn position(&self) -> f64 {
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

struct Engine<S> {
    config: MotionConfig,
    stage: S,
    pins: Vec<PinScene>,
    toggles: Vec<ToggleScene>,
    intros: Vec<AutoplayScene>,
    snap: Option<SnapAggregator>,
    snapping: Option<SnapMotion>,
    /// Generation of the last armed settle timer, cleared once it fires or is cancelled.
    settle: Option<u64>,
    settle_generation: u64,
    last_frame: Option<f64>,
    needs_render: bool,
    /// Set by scrolls and re-measures; toggle triggers are only read after one.
    scrolled: bool,
}

impl<S: ScrollStage> Engine<S> {
    fn new(config: MotionConfig, stage: S, timelines: Vec<Timeline>) -> Result<Self, MotionError> {
        let mut engine = Engine {
            config,
            stage,
            pins: Vec::new(),
            toggles: Vec::new(),
            intros: Vec::new(),
            snap: None,
            snapping: None,
            settle: None,
            settle_generation: 0,
            last_frame: None,
            needs_render: true,
            scrolled: true,
        };

        for timeline in timelines {
            engine.stage.prepare(&timeline.targets())?;
            match timeline.trigger.clone() {
                Trigger::Pin {
                    section,
                    scrub,
                    reset_on_leave_back,
                } => {
                    engine.stage.prepare(&[section.as_str()])?;
                    engine.pins.push(PinScene {
                        timeline,
                        section,
                        reset_on_leave_back,
                        scrub: Scrub::new(scrub),
                        region: None,
                    });
                }
                Trigger::Toggle { trigger, start } => {
                    engine.stage.prepare(&[trigger.as_str()])?;
                    let duration = timeline.total_duration(&engine.stage);
                    engine.toggles.push(ToggleScene {
                        timeline,
                        trigger,
                        start,
                        playhead: Playhead::new(duration),
                    });
                }
                Trigger::Autoplay { delay } => {
                    let mut playhead = Playhead::delayed(timeline.total_duration(&engine.stage), delay);
                    playhead.play();
                    engine.intros.push(AutoplayScene {
                        timeline,
                        playhead,
                        done: false,
                    });
                }
            }
        }

        engine.measure()?;
        Ok(engine)
    }

    /// Reads pin regions from layout and rebuilds the snap aggregator.
    fn measure(&mut self) -> Result<(), MotionError> {
        self.stage.refresh_viewport()?;
        let scroll = self.stage.scroll_y();
        let height = self.stage.viewport().height;

        let mut regions = Vec::new();
        for pin in &mut self.pins {
            pin.region = self
                .stage
                .document_rect(&pin.section)
                .map(|(top, spacer)| PinnedRegion::new(top, top + (spacer - height).max(0.0)));
            match pin.region {
                Some(region) => {
                    pin.scrub.reset(region.progress_at(scroll));
                    regions.push(region);
                }
                None => debug!("Pinned section {} not found, skipping", pin.section),
            }
        }

        self.snap = SnapAggregator::install(&regions, self.stage.max_scroll(), &self.config);
        match &self.snap {
            Some(snap) => debug!("Snapping across {} pinned ranges: {:?}", regions.len(), snap.ranges()),
            None => debug!("No pinned ranges to snap to"),
        }
        self.needs_render = true;
        self.scrolled = true;
        Ok(())
    }

    /// Returns the settle generation to hand back to [`Engine::settle_elapsed`]
    /// after `snap_settle_ms`, or `None` when no timer should be armed.
    fn on_scroll(&mut self) -> Option<u64> {
        self.needs_render = true;
        self.scrolled = true;
        // Scrolls caused by a running snap must not restart the settle timer.
        if self.snapping.is_some() || self.snap.is_none() {
            return None;
        }
        self.settle_generation += 1;
        self.settle = Some(self.settle_generation);
        self.settle
    }

    /// Starts a snap if `generation` is still the latest armed settle.
    fn settle_elapsed(&mut self, generation: u64) {
        if self.settle == Some(generation) {
            self.settle = None;
            self.begin_snap();
        }
    }

    fn interrupt(&mut self) {
        self.snapping = None;
        self.settle = None;
    }

    fn begin_snap(&mut self) {
        let Some(snap) = &self.snap else {
            return;
        };
        let max = self.stage.max_scroll();
        if max <= 0.0 {
            return;
        }
        let scroll = self.stage.scroll_y();
        let value = scroll / max;
        let target = snap.snap_to(value);
        if ((target - value) * max).abs() < MIN_SNAP_PX {
            return;
        }

        debug!("Snapping scroll {:.3} -> {:.3}", value, target);
        self.snapping = Some(SnapMotion {
            from: scroll,
            to: target * max,
            elapsed: -snap.delay(),
            duration: snap.duration_for(value, target),
            ease: snap.ease(),
        });
    }

    fn tick(&mut self, now: f64) {
        let dt = match self.last_frame {
            Some(last) => ((now - last) / 1000.0).clamp(0.0, MAX_FRAME_STEP),
            None => 0.0,
        };
        self.last_frame = Some(now);

        let mut snap_done = false;
        if let Some(motion) = &mut self.snapping {
            motion.elapsed += dt;
            if motion.elapsed >= 0.0 {
                self.stage.scroll_to(motion.position());
                self.scrolled = true;
            }
            snap_done = motion.finished();
        }
        if snap_done {
            self.snapping = None;
        }

        let scroll = self.stage.scroll_y();
        let mut changed = std::mem::take(&mut self.needs_render);

        for pin in &mut self.pins {
            let Some(region) = pin.region else {
                continue;
            };
            let target = region.progress_at(scroll);
            if pin.reset_on_leave_back && target <= 0.0 && pin.scrub.current() > 0.0 {
                pin.scrub.reset(0.0);
                changed = true;
            }
            changed |= pin.scrub.step(target, dt);
        }

        let height = self.stage.viewport().height;
        let scrolled = std::mem::take(&mut self.scrolled);
        for toggle in &mut self.toggles {
            if scrolled {
                if let Some(top) = self.stage.viewport_top(&toggle.trigger) {
                    if toggle_active(top, height, toggle.start) {
                        toggle.playhead.play();
                    } else {
                        toggle.playhead.reverse();
                    }
                }
            }
            changed |= toggle.playhead.advance(dt);
        }

        for intro in self.intros.iter_mut().filter(|intro| !intro.done) {
            changed |= intro.playhead.advance(dt);
        }

        if changed {
            self.render();
        }
    }

    /// Pinned timelines in document order, then toggles, then running intros,
    /// so an intro wins over a pin that shares its targets.
    fn render(&mut self) {
        for pin in &self.pins {
            pin.timeline.render_progress(pin.scrub.current(), &mut self.stage);
        }
        for toggle in &self.toggles {
            toggle.timeline.render_at(toggle.playhead.time(), &mut self.stage);
        }
        for intro in self.intros.iter_mut().filter(|intro| !intro.done) {
            intro.timeline.render_at(intro.playhead.time(), &mut self.stage);
            intro.done = intro.playhead.is_settled();
            // The pins it covered need one more frame to show through.
            self.needs_render |= intro.done;
        }
    }
}

/// Every listener, timer and frame callback created for one page view.
///
/// Returned by [`AnimationContext::setup`] and owned by the view that created it;
/// the view calls [`AnimationContext::revert`] when it unmounts. Dropping the
/// context without reverting tears it down too.
pub struct AnimationContext {
    engine: Rc<RefCell<Engine<DomStage>>>,
    window: Window,
    settle: Rc<RefCell<Option<Timeout>>>,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    reverted: bool,
}

impl AnimationContext {
    pub fn setup(timelines: Vec<Timeline>, config: MotionConfig) -> Result<Self, MotionError> {
        let stage = DomStage::acquire()?;
        let window = stage.window().clone();
        let engine = Rc::new(RefCell::new(Engine::new(config, stage, timelines)?));

        let mut context = Self {
            engine,
            window,
            settle: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            reverted: false,
        };

        let weak = Rc::downgrade(&context.engine);
        context.listen("scroll", {
            let weak = weak.clone();
            let settle = context.settle.clone();
            move || {
                let Some(engine) = weak.upgrade() else {
                    return;
                };
                let Ok(mut engine) = engine.try_borrow_mut() else {
                    return;
                };
                if let Some(generation) = engine.on_scroll() {
                    let weak = weak.clone();
                    // Replacing the previous timeout cancels it.
                    *settle.borrow_mut() = Some(Timeout::new(engine.config.snap_settle_ms, move || {
                        if let Some(engine) = weak.upgrade() {
                            if let Ok(mut engine) = engine.try_borrow_mut() {
                                engine.settle_elapsed(generation);
                            }
                        }
                    }));
                }
            }
        })?;
        context.listen("resize", {
            let weak = weak.clone();
            move || {
                if let Some(engine) = weak.upgrade() {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        if let Err(e) = engine.measure() {
                            warn!("Failed to re-measure pinned sections: {}", e);
                        }
                    }
                }
            }
        })?;
        for name in INTERRUPT_EVENTS {
            let weak = weak.clone();
            let settle = context.settle.clone();
            context.listen(name, move || {
                settle.borrow_mut().take();
                if let Some(engine) = weak.upgrade() {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        engine.interrupt();
                    }
                }
            })?;
        }
        context.start_frames()?;

        {
            let engine = context.engine.borrow();
            info!(
                "Motion ready: {} pinned, {} toggled, {} autoplay",
                engine.pins.len(),
                engine.toggles.len(),
                engine.intros.len()
            );
        }
        Ok(context)
    }

    /// Removes listeners, stops the frame loop and clears inline styles.
    pub fn revert(mut self) {
        self.teardown();
    }

    fn listen(&mut self, name: &'static str, handler: impl FnMut() + 'static) -> Result<(), MotionError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        self.listeners.push((name, closure));
        Ok(())
    }

    fn start_frames(&mut self) -> Result<(), MotionError> {
        let engine = Rc::downgrade(&self.engine);
        let frame = self.frame.clone();
        let frame_id = self.frame_id.clone();
        let window = self.window.clone();

        let tick = Closure::wrap(Box::new(move |now: f64| {
            if let Some(engine) = engine.upgrade() {
                if let Ok(mut engine) = engine.try_borrow_mut() {
                    engine.tick(now);
                }
            }
            if let Some(next) = frame.borrow().as_ref() {
                frame_id.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>);

        let id = self.window.request_animation_frame(tick.as_ref().unchecked_ref())?;
        self.frame_id.set(Some(id));
        *self.frame.borrow_mut() = Some(tick);
        Ok(())
    }

    fn teardown(&mut self) {
        if self.reverted {
            return;
        }
        self.reverted = true;

        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the frame closure's reference to itself.
        self.frame.borrow_mut().take();

        self.settle.borrow_mut().take();
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .window
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }

        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.interrupt();
            engine.stage.clear();
        }
        debug!("Motion context reverted");
    }
}

impl Drop for AnimationContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
