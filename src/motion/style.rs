#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Animatable properties. Positions are in CSS pixels, rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prop {
    Opacity,
    X,
    Y,
    Scale,
    ScaleX,
    Rotate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Vw(f64),
    Vh(f64),
}

impl Length {
    pub fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Length::Px(v) => v,
            Length::Vw(v) => v * viewport.width / 100.0,
            Length::Vh(v) => v * viewport.height / 100.0,
        }
    }
}

impl From<f64> for Length {
    fn from(v: f64) -> Self {
        Length::Px(v)
    }
}

impl From<i32> for Length {
    fn from(v: i32) -> Self {
        Length::Px(f64::from(v))
    }
}

/// One end of a tween: the props it sets, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keyframe(Vec<(Prop, Length)>);

impl Keyframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: Prop, value: impl Into<Length>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.0.push((prop, value)),
        }
        self
    }

    pub fn opacity(self, v: f64) -> Self {
        self.set(Prop::Opacity, v)
    }

    pub fn x(self, v: impl Into<Length>) -> Self {
        self.set(Prop::X, v)
    }

    pub fn y(self, v: impl Into<Length>) -> Self {
        self.set(Prop::Y, v)
    }

    pub fn scale(self, v: f64) -> Self {
        self.set(Prop::Scale, v)
    }

    pub fn scale_x(self, v: f64) -> Self {
        self.set(Prop::ScaleX, v)
    }

    pub fn rotate(self, v: f64) -> Self {
        self.set(Prop::Rotate, v)
    }

    pub fn get(&self, prop: Prop) -> Option<Length> {
        self.0.iter().find(|(p, _)| *p == prop).map(|(_, v)| *v)
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.0.iter().map(|(p, _)| *p)
    }
}

/// Resolved visual state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotate: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            rotate: 0.0,
        }
    }
}

impl Style {
    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::Scale => self.scale,
            Prop::ScaleX => self.scale_x,
            Prop::Rotate => self.rotate,
        }
    }

    pub fn apply(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Opacity => self.opacity = value,
            Prop::X => self.x = value,
            Prop::Y => self.y = value,
            Prop::Scale => self.scale = value,
            Prop::ScaleX => self.scale_x = value,
            Prop::Rotate => self.rotate = value,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.3}deg) scale({:.4}, {:.4})",
            self.x,
            self.y,
            self.rotate,
            self.scale * self.scale_x,
            self.scale
        )
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn viewport_units_resolve_against_their_axis() {
        assert_eq!(Length::Vw(-60.0).resolve(VIEWPORT), -720.0);
        assert_eq!(Length::Vh(-10.0).resolve(VIEWPORT), -80.0);
        assert_eq!(Length::Px(24.0).resolve(VIEWPORT), 24.0);
    }

    #[test]
    fn keyframe_overwrites_repeated_props() {
        let frame = Keyframe::new().opacity(0.0).y(24).opacity(0.5);
        assert_eq!(frame.get(Prop::Opacity), Some(Length::Px(0.5)));
        assert_eq!(frame.props().collect::<Vec<_>>(), vec![Prop::Opacity, Prop::Y]);
    }

    #[test]
    fn identity_style_renders_neutral_transform() {
        let style = Style::default();
        assert_eq!(
            style.css_transform(),
            "translate3d(0.00px, 0.00px, 0) rotate(0.000deg) scale(1.0000, 1.0000)"
        );
        assert_eq!(style.css_opacity(), "1.0000");
    }

    #[test]
    fn scale_x_only_stretches_horizontally() {
        let mut style = Style::default();
        style.apply(Prop::ScaleX, 0.5);
        style.apply(Prop::Scale, 0.9);
        assert!(style.css_transform().ends_with("scale(0.4500, 0.9000)"));
    }
}
