//! Hue, saturation, lightness.

use rand::Rng;
use crate::srgb::{unit_to_u8, Rgb};

/// Default angle (in degrees) of [`Hsl::analogous`] and
/// [`Hsl::split_complementary`].
pub const DEFAULT_HARMONY_ANGLE: f64 = 30.;

/// Wrap an angle in degrees into \[0, 360).
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.);
    // `rem_euclid` of a tiny negative number rounds up to 360.
    if h >= 360. { 0. } else { h }
}

/// A color given by its hue (degrees in \[0, 360)), saturation and
/// lightness (both in \[0, 1\]), plus an alpha in \[0, 255\].
///
/// Every constructor and adjustment normalizes the components: the hue
/// is taken modulo 360, saturation and lightness are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: u8,
}

impl Default for Hsl {
    fn default() -> Self { Hsl::new(0., 0., 0.) }
}

impl Hsl {
    /// Opaque color.
    pub fn new(h: f64, s: f64, l: f64) -> Hsl { Hsl::with_alpha(h, s, l, 255) }

    pub fn with_alpha(h: f64, s: f64, l: f64, a: u8) -> Hsl {
        Hsl { h: wrap_hue(h), s: s.clamp(0., 1.), l: l.clamp(0., 1.), a }
    }

    /// Convert from RGB.  Grays (including black and white) get a hue
    /// and saturation of 0.
    pub fn from_rgb(c: Rgb) -> Hsl {
        let u = c.to_unit();
        let max = u.r.max(u.g).max(u.b);
        let min = u.r.min(u.g).min(u.b);
        let delta = max - min;
        let l = (max + min) / 2.;
        if delta == 0. {
            return Hsl::with_alpha(0., 0., l, c.a)
        }
        let s = if l > 0.5 { delta / (2. - max - min) }
                else { delta / (max + min) };
        let h = {
            if max == u.r { (u.g - u.b) / delta + if u.g < u.b { 6. } else { 0. } }
            else if max == u.g { (u.b - u.r) / delta + 2. }
            else { (u.r - u.g) / delta + 4. } };
        Hsl::with_alpha(h / 6. * 360., s, l, c.a)
    }

    /// Convert to RGB, rounding each channel to the nearest integer.
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0. {
            let v = unit_to_u8(self.l);
            return Rgb::with_alpha(v, v, v, self.a)
        }
        let (s, l) = (self.s, self.l);
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        let h = self.h / 360.;
        Rgb::with_alpha(unit_to_u8(hue_to_rgb(p, q, h + 1. / 3.)),
                        unit_to_u8(hue_to_rgb(p, q, h)),
                        unit_to_u8(hue_to_rgb(p, q, h - 1. / 3.)),
                        self.a)
    }

    /// Rotate the hue by `degrees`.
    pub fn adjust_hue(&self, degrees: f64) -> Hsl {
        Hsl::with_alpha(self.h + degrees, self.s, self.l, self.a)
    }

    /// Multiply the saturation by `factor`.
    pub fn adjust_saturation(&self, factor: f64) -> Hsl {
        Hsl::with_alpha(self.h, self.s * factor, self.l, self.a)
    }

    /// Multiply the lightness by `factor`.
    pub fn adjust_lightness(&self, factor: f64) -> Hsl {
        Hsl::with_alpha(self.h, self.s, self.l * factor, self.a)
    }

    pub fn saturate(&self, amount: f64) -> Hsl {
        Hsl::with_alpha(self.h, self.s + amount, self.l, self.a)
    }

    pub fn desaturate(&self, amount: f64) -> Hsl {
        Hsl::with_alpha(self.h, self.s - amount, self.l, self.a)
    }

    pub fn lighten(&self, amount: f64) -> Hsl {
        Hsl::with_alpha(self.h, self.s, self.l + amount, self.a)
    }

    pub fn darken(&self, amount: f64) -> Hsl {
        Hsl::with_alpha(self.h, self.s, self.l - amount, self.a)
    }

    /// The opposite hue.
    pub fn complement(&self) -> Hsl { self.adjust_hue(180.) }

    /// `self` and the colors 120° and 240° away.  Hues are wrapped, so
    /// the last one may be numerically lower than `self.h`.
    pub fn triadic(&self) -> [Hsl; 3] {
        [*self, self.adjust_hue(120.), self.adjust_hue(240.)]
    }

    /// The colors `angle` degrees before and after `self`, with `self`
    /// in the middle.
    pub fn analogous(&self, angle: f64) -> [Hsl; 3] {
        [self.adjust_hue(-angle), *self, self.adjust_hue(angle)]
    }

    /// `self` and the two neighbours of its complement, `angle` degrees
    /// away from it.
    pub fn split_complementary(&self, angle: f64) -> [Hsl; 3] {
        [*self, self.adjust_hue(180. - angle), self.adjust_hue(180. + angle)]
    }

    /// Opaque color with uniform hue, saturation and lightness, using
    /// the thread-local generator.
    pub fn random() -> Hsl { Hsl::random_with(&mut rand::thread_rng()) }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
        Hsl::new(rng.gen_range(0. .. 360.), rng.gen(), rng.gen())
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. { t += 1. }
    if t > 1. { t -= 1. }
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 1. / 2. { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}

impl From<Rgb> for Hsl {
    #[inline]
    fn from(c: Rgb) -> Self { Hsl::from_rgb(c) }
}

impl From<Hsl> for Rgb {
    #[inline]
    fn from(c: Hsl) -> Self { c.to_rgb() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalization() {
        let hsl = Hsl::new(120., 0.5, 0.7);
        assert_eq!((hsl.h, hsl.s, hsl.l, hsl.a), (120., 0.5, 0.7, 255));
        let hsl = Hsl::new(370., 1.5, -0.1);
        assert_abs_diff_eq!(hsl.h, 10., epsilon = 1e-12);
        assert_eq!((hsl.s, hsl.l), (1., 0.));
        assert_eq!(Hsl::new(720., 0.5, 0.5).h, 0.);
        assert_eq!(Hsl::new(-120., 0.5, 0.5).h, 240.);
        assert_eq!(Hsl::new(360., 0.5, 0.5).h, 0.);
        let c = Hsl::new(180., 2., -0.5);
        assert_eq!((c.s, c.l), (1., 0.));
        assert!(Hsl::new(-1e-20, 0.5, 0.5).h < 360.);
    }

    #[test]
    fn from_primaries() {
        let red = Hsl::from(Rgb::red());
        assert_eq!(red.h, 0.);
        assert_eq!(red.s, 1.);
        assert_abs_diff_eq!(red.l, 0.5, epsilon = 0.01);
        assert_abs_diff_eq!(Hsl::from(Rgb::green()).h, 120., epsilon = 1e-9);
        assert_abs_diff_eq!(Hsl::from(Rgb::blue()).h, 240., epsilon = 1e-9);
        assert_abs_diff_eq!(Hsl::from(Rgb::magenta()).h, 300., epsilon = 1e-9);
        assert_eq!(Rgb::from(red), Rgb::red());
    }

    #[test]
    fn grays_are_achromatic() {
        for v in [0, 1, 77, 128, 254, 255] {
            let hsl = Hsl::from(Rgb::with_alpha(v, v, v, 42));
            assert_eq!((hsl.h, hsl.s, hsl.a), (0., 0., 42));
            assert_eq!(hsl.to_rgb(), Rgb::with_alpha(v, v, v, 42));
        }
    }

    #[test]
    fn round_trip() {
        for c in [Rgb::new(123, 87, 213), Rgb::new(45, 67, 89),
                  Rgb::new(200, 150, 100), Rgb::new(50, 150, 250),
                  Rgb::with_alpha(1, 254, 3, 17)] {
            let back = Hsl::from(c).to_rgb();
            assert!(c.r.abs_diff(back.r) <= 2 && c.g.abs_diff(back.g) <= 2
                    && c.b.abs_diff(back.b) <= 2, "{c:?} → {back:?}");
            assert_eq!(back.a, c.a);
        }
    }

    #[test]
    fn adjustments() {
        let base = Hsl::new(180., 0.5, 0.5);
        assert_eq!(base.adjust_hue(30.).h, 210.);
        assert_eq!(base.adjust_hue(200.).h, 20.);
        assert_abs_diff_eq!(base.saturate(0.2).s, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(base.desaturate(0.2).s, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(base.lighten(0.2).l, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(base.darken(0.2).l, 0.3, epsilon = 1e-12);
        assert_eq!(base.saturate(0.9).s, 1.);
        assert_eq!(base.darken(0.9).l, 0.);
        assert_eq!(base.adjust_saturation(3.).s, 1.);
        assert_eq!(base.adjust_lightness(0.5).l, 0.25);
    }

    #[test]
    fn harmonies() {
        let base = Hsl::new(120., 0.8, 0.6);
        assert_abs_diff_eq!(base.complement().h, 300., epsilon = 0.1);
        let [t0, t1, t2] = base.triadic();
        assert_eq!(t0, base);
        assert_abs_diff_eq!(t1.h, 240., epsilon = 0.1);
        // 120 + 240 wraps to 0.
        assert_abs_diff_eq!(t2.h, 0., epsilon = 0.1);
        let an = base.analogous(DEFAULT_HARMONY_ANGLE);
        assert_eq!(an[1], base);
        assert_eq!((an[0].h, an[2].h), (90., 150.));
        let sc = base.split_complementary(DEFAULT_HARMONY_ANGLE);
        assert_eq!(sc[0], base);
        assert_eq!((sc[1].h, sc[2].h), (270., 330.));
    }

    #[test]
    fn triadic_offsets() {
        for i in 0 .. 72 {
            let base = Hsl::new(f64::from(i) * 5. + 0.25, 0.6, 0.4);
            let [_, t1, t2] = base.triadic();
            assert_abs_diff_eq!(t1.h, (base.h + 120.) % 360., epsilon = 1e-9);
            assert_abs_diff_eq!(t2.h, (base.h + 240.) % 360., epsilon = 1e-9);
        }
    }

    #[test]
    fn random_in_range() {
        for _ in 0 .. 100 {
            let c = Hsl::random();
            assert!((0. .. 360.).contains(&c.h));
            assert!((0. ..= 1.).contains(&c.s) && (0. ..= 1.).contains(&c.l));
        }
    }
}
