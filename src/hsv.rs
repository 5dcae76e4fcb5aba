//! Hue, saturation, value.

use crate::hsl::wrap_hue;
use crate::srgb::{unit_to_u8, Rgb};

const EPS: f64 = 1e-6;

/// A color given by its hue (degrees in \[0, 360)), saturation and
/// value (both in \[0, 1\]).  There is no alpha channel: conversions
/// to [`Rgb`] are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Move `x` ∈ \[0, 1\] towards 1 (`delta > 0`) or 0 (`delta < 0`)
/// by the fraction `|delta|` of the remaining distance.
#[inline]
fn push(x: f64, delta: f64) -> f64 {
    let d = delta.clamp(-1., 1.);
    let x = if d > 0. { x + d * (1. - x) } else { x + d * x };
    x.clamp(0., 1.)
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Hsv {
        Hsv { h: wrap_hue(h), s: s.clamp(0., 1.), v: v.clamp(0., 1.) }
    }

    /// Convert from RGB, ignoring the alpha.
    pub fn from_rgb(c: Rgb) -> Hsv {
        let u = c.to_unit();
        let max = u.r.max(u.g).max(u.b);
        let min = u.r.min(u.g).min(u.b);
        let delta = max - min;
        let mut h = {
            if delta < EPS { 0. }
            else if max == u.r { 60. * (((u.g - u.b) / delta) % 6.) }
            else if max == u.g { 60. * ((u.b - u.r) / delta + 2.) }
            else { 60. * ((u.r - u.g) / delta + 4.) } };
        if h < 0. { h += 360. }
        let s = if max < EPS { 0. } else { delta / max };
        Hsv::new(h, s, max)
    }

    /// Convert to an opaque RGB color, rounding each channel.
    pub fn to_rgb(&self) -> Rgb {
        let c = self.v * self.s;
        let x = c * (1. - ((self.h / 60.) % 2. - 1.).abs());
        let m = self.v - c;
        let (r, g, b) = {
            if self.h < 60. { (c, x, 0.) }
            else if self.h < 120. { (x, c, 0.) }
            else if self.h < 180. { (0., c, x) }
            else if self.h < 240. { (0., x, c) }
            else if self.h < 300. { (x, 0., c) }
            else { (c, 0., x) } };
        Rgb::new(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
    }

    /// Move the value towards 1 (`delta > 0`) or towards 0
    /// (`delta < 0`) by the fraction `|delta|` of the way.  `delta` is
    /// clamped to \[-1, 1\], so `1.` gives full brightness and `-1.`
    /// black.
    pub fn adjust_brightness(&mut self, delta: f64) {
        self.v = push(self.v, delta);
    }

    /// Same as [`Hsv::adjust_brightness`] for the saturation.
    pub fn adjust_saturation(&mut self, delta: f64) {
        self.s = push(self.s, delta);
    }
}

impl From<Rgb> for Hsv {
    #[inline]
    fn from(c: Rgb) -> Self { Hsv::from_rgb(c) }
}

impl From<Hsv> for Rgb {
    #[inline]
    fn from(c: Hsv) -> Self { c.to_rgb() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalization() {
        let hsv = Hsv::new(240., 0.8, 0.9);
        assert_eq!((hsv.h, hsv.s, hsv.v), (240., 0.8, 0.9));
        let hsv = Hsv::new(400., 1.2, -0.1);
        assert_eq!((hsv.h, hsv.s, hsv.v), (40., 1., 0.));
        assert_eq!(Hsv::new(450., 0.8, 0.9).h, 90.);
        assert_eq!(Hsv::new(-90., 0.8, 0.9).h, 270.);
        let c = Hsv::new(180., 1.5, -0.2);
        assert_eq!((c.s, c.v), (1., 0.));
    }

    #[test]
    fn primaries() {
        let blue = Hsv::from(Rgb::blue());
        assert_abs_diff_eq!(blue.h, 240., epsilon = 1e-9);
        assert_eq!((blue.s, blue.v), (1., 1.));
        assert_eq!(blue.to_rgb(), Rgb::blue());
        // Red with a blue component gets a negative raw hue.
        let rose = Hsv::from(Rgb::new(255, 0, 128));
        assert!(rose.h > 300. && rose.h < 360.);
        assert_eq!(Hsv::from(Rgb::black()), Hsv::new(0., 0., 0.));
        let white = Hsv::from(Rgb::white());
        assert_eq!((white.h, white.s, white.v), (0., 0., 1.));
    }

    #[test]
    fn alpha_dropped() {
        let c = Hsv::from(Rgb::with_alpha(10, 20, 30, 0)).to_rgb();
        assert_eq!(c.a, 255);
    }

    #[test]
    fn round_trip() {
        for c in [Rgb::new(123, 87, 213), Rgb::new(45, 67, 89),
                  Rgb::new(200, 150, 100), Rgb::new(50, 150, 250),
                  Rgb::new(255, 0, 128), Rgb::new(3, 3, 4)] {
            let back = Hsv::from(c).to_rgb();
            assert!(c.r.abs_diff(back.r) <= 1 && c.g.abs_diff(back.g) <= 1
                    && c.b.abs_diff(back.b) <= 1, "{c:?} → {back:?}");
        }
    }

    #[test]
    fn adjust_brightness() {
        let mut hsv = Hsv::new(180., 0.5, 0.7);
        hsv.adjust_brightness(0.2);
        assert_abs_diff_eq!(hsv.v, 0.76, epsilon = 1e-12);
        hsv.adjust_brightness(-0.5);
        assert_abs_diff_eq!(hsv.v, 0.38, epsilon = 1e-12);
        hsv.adjust_brightness(4.);
        assert_abs_diff_eq!(hsv.v, 1., epsilon = 1e-12);
        hsv.adjust_brightness(-1.);
        assert_eq!(hsv.v, 0.);
        assert_eq!((hsv.h, hsv.s), (180., 0.5));
    }

    #[test]
    fn adjust_saturation() {
        let mut hsv = Hsv::new(180., 0.5, 0.7);
        hsv.adjust_saturation(0.3);
        assert_abs_diff_eq!(hsv.s, 0.65, epsilon = 1e-12);
        hsv.adjust_saturation(-0.2);
        assert_abs_diff_eq!(hsv.s, 0.52, epsilon = 1e-12);
        hsv.adjust_saturation(0.);
        assert_abs_diff_eq!(hsv.s, 0.52, epsilon = 1e-12);
        assert_eq!(hsv.v, 0.7);
    }
}
