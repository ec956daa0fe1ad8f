/// Easing curves used by the page. `Power2` is the cubic family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    None,
    #[default]
    Power1Out,
    Power2In,
    Power2Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2In => t.powi(3),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_pins_its_endpoints() {
        for ease in [Ease::None, Ease::Power1Out, Ease::Power2In, Ease::Power2Out] {
            assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        }
    }

    #[test]
    fn in_lags_and_out_leads_linear() {
        assert!(Ease::Power2In.apply(0.5) < 0.5);
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-12);
        assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::None.apply(7.5), 1.0);
    }
}
