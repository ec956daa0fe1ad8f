/// Below this distance a scrub counts as caught up.
const SCRUB_EPSILON: f64 = 1e-4;

/// Smooths scroll-derived progress so a scrubbed timeline trails the scrollbar by `lag` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Scrub {
    lag: f64,
    current: f64,
}

impl Scrub {
    pub fn new(lag: f64) -> Self {
        Self { lag, current: 0.0 }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jumps straight to `progress`, used on mount and after a resize.
    pub fn reset(&mut self, progress: f64) {
        self.current = progress;
    }

    /// Moves toward `target`; exponential approach covering ~98% of the gap in `lag` seconds.
    /// Returns whether the value changed.
    pub fn step(&mut self, target: f64, dt: f64) -> bool {
        let before = self.current;
        if self.lag <= 0.0 {
            self.current = target;
        } else {
            let k = 1.0 - (-4.0 * dt.max(0.0) / self.lag).exp();
            self.current += (target - self.current) * k;
            if (target - self.current).abs() < SCRUB_EPSILON {
                self.current = target;
            }
        }
        self.current != before
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Paused,
    Forward,
    Backward,
}

/// Time-based playhead for autoplay and toggle timelines.
#[derive(Clone, Debug, PartialEq)]
pub struct Playhead {
    elapsed: f64,
    delay: f64,
    duration: f64,
    direction: Direction,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Self::delayed(duration, 0.0)
    }

    pub fn delayed(duration: f64, delay: f64) -> Self {
        Self {
            elapsed: 0.0,
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            direction: Direction::Paused,
        }
    }

    pub fn time(&self) -> f64 {
        (self.elapsed - self.delay).clamp(0.0, self.duration)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Backward;
    }

    /// Returns whether the rendered time moved.
    pub fn advance(&mut self, dt: f64) -> bool {
        let before = self.time();
        match self.direction {
            Direction::Paused => {}
            Direction::Forward => {
                self.elapsed = (self.elapsed + dt).min(self.delay + self.duration);
            }
            Direction::Backward => {
                // Reversing skips the delay; it only guards the first play.
                self.elapsed = (self.elapsed.max(self.delay) - dt).max(self.delay);
            }
        }
        self.time() != before
    }

    pub fn is_settled(&self) -> bool {
        match self.direction {
            Direction::Paused => true,
            Direction::Forward => self.elapsed >= self.delay + self.duration,
            Direction::Backward => self.time() <= 0.0,
        }
    }
}

/// `play none none reverse`: forward once the trigger's top is at or above
/// `start` of the viewport height, backward once it drops below again.
pub fn toggle_active(trigger_top: f64, viewport_height: f64, start: f64) -> bool {
    trigger_top <= viewport_height * start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_catches_up_within_its_lag() {
        let mut scrub = Scrub::new(0.6);
        let mut t = 0.0;
        while t < 0.6 {
            scrub.step(1.0, 1.0 / 60.0);
            t += 1.0 / 60.0;
        }
        assert!(scrub.current() > 0.97);
        assert!(scrub.current() <= 1.0);
    }

    #[test]
    fn scrub_settles_exactly_on_target() {
        let mut scrub = Scrub::new(0.6);
        for _ in 0..600 {
            scrub.step(0.42, 1.0 / 60.0);
        }
        assert_eq!(scrub.current(), 0.42);
        assert!(!scrub.step(0.42, 1.0 / 60.0));
    }

    #[test]
    fn zero_lag_scrub_follows_immediately() {
        let mut scrub = Scrub::new(0.0);
        assert!(scrub.step(0.3, 0.0));
        assert_eq!(scrub.current(), 0.3);
    }

    #[test]
    fn scrub_reverses_with_the_scrollbar() {
        let mut scrub = Scrub::new(0.6);
        scrub.reset(0.8);
        scrub.step(0.2, 0.1);
        assert!(scrub.current() < 0.8 && scrub.current() > 0.2);
    }

    #[test]
    fn delayed_playhead_holds_then_plays_to_the_end() {
        let mut head = Playhead::delayed(1.0, 0.2);
        head.play();
        assert!(!head.advance(0.1));
        assert_eq!(head.time(), 0.0);
        head.advance(0.6);
        assert!((head.time() - 0.5).abs() < 1e-9);
        head.advance(5.0);
        assert_eq!(head.time(), 1.0);
        assert!(head.is_settled());
    }

    #[test]
    fn reversed_playhead_clamps_at_zero() {
        let mut head = Playhead::new(0.8);
        head.play();
        head.advance(0.5);
        head.reverse();
        assert!(!head.is_settled());
        head.advance(2.0);
        assert_eq!(head.time(), 0.0);
        assert!(head.is_settled());
    }

    #[test]
    fn paused_playhead_does_not_move() {
        let mut head = Playhead::new(0.8);
        assert!(!head.advance(1.0));
        assert_eq!(head.direction(), Direction::Paused);
    }

    #[test]
    fn toggle_starts_at_the_configured_line() {
        assert!(toggle_active(640.0, 800.0, 0.8));
        assert!(!toggle_active(641.0, 800.0, 0.8));
        assert!(toggle_active(-200.0, 800.0, 0.8));
    }
}
