use log::Level;

use crate::motion::ease::Ease;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose motion setup logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for pinning, scrubbing and snapping.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    /// Extra band around each pinned range (as a fraction of total scroll)
    /// inside which free scrolling is pulled to the closest center.
    pub snap_padding: f64,
    pub snap_duration_min: f64,
    pub snap_duration_max: f64,
    pub snap_delay: f64,
    pub snap_ease: Ease,
    /// How long scrolling must be idle before a snap starts.
    pub snap_settle_ms: u32,
    /// Seconds the scrubbed progress takes to catch up with the scrollbar.
    pub scrub_lag: f64,
    /// Scroll distance of every pin, in viewport heights.
    pub pin_length: f64,
    /// Toggle reveals start once the trigger's top passes this share of the viewport.
    pub toggle_start: f64,
    pub intro_delay: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            snap_padding: 0.08,
            snap_duration_min: 0.15,
            snap_duration_max: 0.35,
            snap_delay: 0.0,
            snap_ease: Ease::Power2Out,
            snap_settle_ms: 120,
            scrub_lag: 0.6,
            pin_length: 1.3,
            toggle_start: 0.8,
            intro_delay: 0.2,
        }
    }
}

impl MotionConfig {
    /// Height of a pin spacer in viewport heights: the pinned screen plus its scroll distance.
    pub fn spacer_height_vh(&self) -> f64 {
        (1.0 + self.pin_length) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_snap_window_ordered() {
        let config = MotionConfig::default();
        assert!(config.snap_duration_min < config.snap_duration_max);
        assert_eq!(config.snap_padding, 0.08);
        assert_eq!(config.snap_ease, Ease::Power2Out);
    }

    #[test]
    fn spacer_covers_screen_and_pin_distance() {
        let config = MotionConfig::default();
        assert!((config.spacer_height_vh() - 230.0).abs() < 1e-9);
    }
}
