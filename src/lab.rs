//! CIE L\*a\*b\* under the D65 illuminant.

use crate::srgb::Rgb;

/// Default threshold of [`Lab::is_similar`]: a CIE76 ΔE of about 2.3
/// is the "just noticeable difference".
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 2.3;

// D65 reference white.
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

const EPS: f64 = 0.008856;
const KAPPA: f64 = 7.787;
const OFFSET: f64 = 16. / 116.;

/// A color in the CIE L\*a\*b\* space.
///
/// `l` is nominally in \[0, 100\] and `a`, `b` roughly in
/// \[-128, 127\] but nothing is enforced: values outside the sRGB
/// gamut saturate when converted with [`Lab::to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness.
    pub l: f64,
    /// Green (negative) to red (positive).
    pub a: f64,
    /// Blue (negative) to yellow (positive).
    pub b: f64,
    pub alpha: u8,
}

impl Default for Lab {
    fn default() -> Self { Lab::new(0., 0., 0.) }
}

#[inline]
fn linearize(c: f64) -> f64 {
    if c > 0.04045 { ((c + 0.055) / 1.055).powf(2.4) } else { c / 12.92 }
}

#[inline]
fn gamma(c: f64) -> f64 {
    if c > 0.0031308 { 1.055 * c.powf(1. / 2.4) - 0.055 } else { 12.92 * c }
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPS { t.cbrt() } else { KAPPA * t + OFFSET }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPS { t3 } else { (t - OFFSET) / KAPPA }
}

impl Lab {
    /// Opaque color.
    pub const fn new(l: f64, a: f64, b: f64) -> Lab {
        Lab { l, a, b, alpha: 255 }
    }

    pub const fn with_alpha(l: f64, a: f64, b: f64, alpha: u8) -> Lab {
        Lab { l, a, b, alpha }
    }

    pub fn from_rgb(c: Rgb) -> Lab {
        let u = c.to_unit();
        let (r, g, b) = (linearize(u.r), linearize(u.g), linearize(u.b));
        let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
        let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
        let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;
        let fx = f(x / XN);
        let fy = f(y / YN);
        let fz = f(z / ZN);
        Lab { l: 116. * fy - 16.,
              a: 500. * (fx - fy),
              b: 200. * (fy - fz),
              alpha: c.a }
    }

    /// Convert to RGB.  Channels are rounded and out of gamut colors
    /// are clamped to \[0, 255\].
    pub fn to_rgb(&self) -> Rgb {
        let fy = (self.l + 16.) / 116.;
        let fx = self.a / 500. + fy;
        let fz = fy - self.b / 200.;
        let x = f_inv(fx) * XN;
        let y = f_inv(fy) * YN;
        let z = f_inv(fz) * ZN;
        let r = x * 3.2404542 - y * 1.5371385 - z * 0.4985314;
        let g = -x * 0.9692660 + y * 1.8760108 + z * 0.0415560;
        let b = x * 0.0556434 - y * 0.2040259 + z * 1.0572252;
        let to_u8 = |c: f64| (gamma(c) * 255.).round().clamp(0., 255.) as u8;
        Rgb::with_alpha(to_u8(r), to_u8(g), to_u8(b), self.alpha)
    }

    /// CIE76 color difference: the Euclidean distance in L\*a\*b\*.
    pub fn delta_e(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// A cheap approximation in the spirit of CIEDE2000: lightness,
    /// chroma and hue differences weighted by the chroma of `self`.
    /// This is *not* the CIEDE2000 formula and it is not symmetric.
    pub fn approximate_delta_e(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        let c1 = self.a.hypot(self.b);
        let c2 = other.a.hypot(other.b);
        let dc = c1 - c2;
        // Non-negative up to rounding errors.
        let dh = (da * da + db * db - dc * dc).max(0.).sqrt();
        let sl = 1.;
        let sc = 1. + 0.045 * c1;
        let sh = 1. + 0.015 * c1;
        ((dl / sl).powi(2) + (dc / sc).powi(2) + (dh / sh).powi(2)).sqrt()
    }

    /// Whether the CIE76 difference is below `threshold` (see
    /// [`DEFAULT_SIMILARITY_THRESHOLD`]).
    pub fn is_similar(&self, other: &Lab, threshold: f64) -> bool {
        self.delta_e(other) < threshold
    }

    /// Add `amount` to the lightness, clamping it to \[0, 100\].
    pub fn adjust_lightness(&self, amount: f64) -> Lab {
        Lab { l: (self.l + amount).clamp(0., 100.), ..*self }
    }

    /// Linear interpolation; `ratio` is clamped to \[0, 1\] and the
    /// alpha is truncated.
    pub fn mix(&self, other: &Lab, ratio: f64) -> Lab {
        let t = ratio.clamp(0., 1.);
        let lerp = |x: f64, y: f64| x * (1. - t) + y * t;
        Lab { l: lerp(self.l, other.l),
              a: lerp(self.a, other.a),
              b: lerp(self.b, other.b),
              alpha: lerp(f64::from(self.alpha), f64::from(other.alpha))
                  .clamp(0., 255.) as u8 }
    }
}

impl From<Rgb> for Lab {
    #[inline]
    fn from(c: Rgb) -> Self { Lab::from_rgb(c) }
}

impl From<Lab> for Rgb {
    #[inline]
    fn from(c: Lab) -> Self { c.to_rgb() }
}
