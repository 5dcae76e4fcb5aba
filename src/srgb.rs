//! 8-bit sRGB colors with an alpha channel.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;
use rand::Rng;
use rgb::{RGBA, RGB8, RGBA8};
use tracing::debug;
use crate::error::{ColorError, Result};
use crate::Gradient;

/// Default factor used by [`Rgb::brighten`], [`Rgb::darken`],
/// [`Rgb::warm`] and [`Rgb::cool`] when callers have no better value.
pub const DEFAULT_ADJUST_FACTOR: f64 = 0.1;

/// A color with red, green, blue and alpha channels in \[0, 255\].
///
/// Arithmetic operators and [`Rgb::mix`] saturate at the channel
/// bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha, 255 being opaque.
    pub a: u8,
}

/// Truncate `x` to a channel value, saturating at 0 and 255.
#[inline]
pub(crate) fn clamp_u8(x: f64) -> u8 { x.clamp(0., 255.) as u8 }

/// Round `x` ∈ \[0, 1\] to the nearest channel value.
#[inline]
pub(crate) fn unit_to_u8(x: f64) -> u8 { (x * 255.).round().clamp(0., 255.) as u8 }

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn invalid(hex: &str) -> ColorError {
    debug!(input = hex, "rejected hex color");
    ColorError::InvalidFormat(hex.to_string())
}

impl Default for Rgb {
    fn default() -> Self { Rgb::black() }
}

impl Rgb {
    /// Opaque color with the given channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb { Rgb { r, g, b, a: 255 } }

    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Rgb {
        Rgb { r, g, b, a }
    }

    /// Build a color from arbitrary integers, clamping each of them
    /// to \[0, 255\].
    pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Rgb {
        let c = |x: i32| x.clamp(0, 255) as u8;
        Rgb { r: c(r), g: c(g), b: c(b), a: c(a) }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional and
    /// digits are case-insensitive).  In the short form each digit is
    /// doubled, so `"#fa0"` is `"#ffaa00"`.
    ///
    /// # Example
    ///
    /// ```
    /// use pigment::Rgb;
    /// assert_eq!(Rgb::from_hex("#FF000080").unwrap(),
    ///            Rgb::with_alpha(255, 0, 0, 128));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let n: Vec<u8> = digits.bytes().map(nibble).collect::<Option<_>>()
            .ok_or_else(|| invalid(hex))?;
        let byte = |i: usize| (n[i] << 4) | n[i + 1];
        match n.len() {
            3 => Ok(Rgb::new(n[0] * 17, n[1] * 17, n[2] * 17)),
            6 => Ok(Rgb::new(byte(0), byte(2), byte(4))),
            8 => Ok(Rgb::with_alpha(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(invalid(hex)),
        }
    }

    /// Lowercase `#rrggbb`.  The alpha is appended (`#rrggbbaa`) only
    /// if `include_alpha` is set and the color is not opaque.
    pub fn to_hex(&self, include_alpha: bool) -> String {
        if include_alpha && self.a != 255 {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Return the channels scaled to \[0, 1\].
    #[inline]
    pub fn to_unit(&self) -> RGBA<f64> {
        RGBA { r: f64::from(self.r) / 255., g: f64::from(self.g) / 255.,
               b: f64::from(self.b) / 255., a: f64::from(self.a) / 255. }
    }

    /// Blend towards `other`; `ratio` is clamped to \[0, 1\], 0 giving
    /// `self` and 1 giving `other`.  Channels (alpha included) are
    /// truncated, not rounded: red and blue mixed at 0.5 give
    /// `(127, 0, 127)`.
    pub fn mix(self, other: Rgb, ratio: f64) -> Rgb {
        let t = ratio.clamp(0., 1.);
        let lerp = |x: u8, y: u8| {
            let x = f64::from(x);
            clamp_u8(x + (f64::from(y) - x) * t)
        };
        Rgb { r: lerp(self.r, other.r), g: lerp(self.g, other.g),
              b: lerp(self.b, other.b), a: lerp(self.a, other.a) }
    }

    /// BT.601 luma `0.299 r + 0.587 g + 0.114 b`, in \[0, 255\].
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g)
            + 0.114 * f64::from(self.b)
    }

    #[inline]
    pub fn is_dark(&self) -> bool { self.luminance() < 128. }

    #[inline]
    pub fn is_light(&self) -> bool { !self.is_dark() }

    /// Scale the color channels by `1 + factor`.
    pub fn brighten(self, factor: f64) -> Rgb { self * (1. + factor) }

    /// Scale the color channels by `1 - factor`.
    pub fn darken(self, factor: f64) -> Rgb { self * (1. - factor) }

    /// Push towards red and a bit of green.  `factor` is clamped to
    /// \[0, 1\].
    pub fn warm(self, factor: f64) -> Rgb {
        let f = 255. * factor.clamp(0., 1.);
        Rgb { r: clamp_u8(f64::from(self.r) + f * 0.3),
              g: clamp_u8(f64::from(self.g) + f * 0.1), ..self }
    }

    /// Push towards blue and a bit of green.  `factor` is clamped to
    /// \[0, 1\].
    pub fn cool(self, factor: f64) -> Rgb {
        let f = 255. * factor.clamp(0., 1.);
        Rgb { g: clamp_u8(f64::from(self.g) + f * 0.1),
              b: clamp_u8(f64::from(self.b) + f * 0.3), ..self }
    }

    /// Stretch (`contrast > 0`) or flatten (`contrast < 0`) the
    /// channels around 128.  `contrast` is clamped to \[-1, 1\]; -1
    /// turns every color into `(128, 128, 128)`.
    pub fn adjust_contrast(self, contrast: f64) -> Rgb {
        let c = 255. * contrast.clamp(-1., 1.);
        let factor = (259. * (c + 255.)) / (255. * (259. - c));
        let f = |x: u8| clamp_u8(factor * (f64::from(x) - 128.) + 128.);
        Rgb { r: f(self.r), g: f(self.g), b: f(self.b), a: self.a }
    }

    /// Gray with the (truncated) luminance of the color.
    pub fn to_grayscale(self) -> Rgb {
        let y = clamp_u8(self.luminance());
        Rgb { r: y, g: y, b: y, a: self.a }
    }

    pub fn invert(self) -> Rgb {
        Rgb { r: 255 - self.r, g: 255 - self.g, b: 255 - self.b, a: self.a }
    }

    /// Return a gradient from `self` to `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use pigment::{Rgb, ColorRange};
    /// let grad = Rgb::red().gradient(&Rgb::blue());
    /// assert_eq!(grad.rgb(0.5), Rgb::new(127, 0, 127));
    /// ```
    pub fn gradient(&self, c1: &Self) -> Gradient { Gradient::new(*self, *c1) }

    pub const fn black() -> Rgb { Rgb::new(0, 0, 0) }
    pub const fn white() -> Rgb { Rgb::new(255, 255, 255) }
    pub const fn red() -> Rgb { Rgb::new(255, 0, 0) }
    pub const fn green() -> Rgb { Rgb::new(0, 255, 0) }
    pub const fn blue() -> Rgb { Rgb::new(0, 0, 255) }
    pub const fn yellow() -> Rgb { Rgb::new(255, 255, 0) }
    pub const fn cyan() -> Rgb { Rgb::new(0, 255, 255) }
    pub const fn magenta() -> Rgb { Rgb::new(255, 0, 255) }
    pub const fn gray() -> Rgb { Rgb::new(128, 128, 128) }
    /// Fully transparent black.
    pub const fn transparent() -> Rgb { Rgb::with_alpha(0, 0, 0, 0) }

    /// Opaque color drawn uniformly using the thread-local generator.
    pub fn random() -> Rgb { Rgb::random_with(&mut rand::thread_rng()) }

    /// Opaque color drawn uniformly from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
        Rgb::new(rng.gen(), rng.gen(), rng.gen())
    }
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, o: Rgb) -> Rgb {
        Rgb { r: self.r.saturating_add(o.r), g: self.g.saturating_add(o.g),
              b: self.b.saturating_add(o.b), a: self.a.saturating_add(o.a) }
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    fn sub(self, o: Rgb) -> Rgb {
        Rgb { r: self.r.saturating_sub(o.r), g: self.g.saturating_sub(o.g),
              b: self.b.saturating_sub(o.b), a: self.a.saturating_sub(o.a) }
    }
}

/// Scale the color channels (not the alpha), saturating at the bounds.
impl Mul<f64> for Rgb {
    type Output = Rgb;

    fn mul(self, factor: f64) -> Rgb {
        let f = |x: u8| clamp_u8(f64::from(x) * factor);
        Rgb { r: f(self.r), g: f(self.g), b: f(self.b), a: self.a }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Rgb> { Rgb::from_hex(s) }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(false))
    }
}

impl From<RGB8> for Rgb {
    #[inline]
    fn from(c: RGB8) -> Self { Rgb::new(c.r, c.g, c.b) }
}

impl From<RGBA8> for Rgb {
    #[inline]
    fn from(c: RGBA8) -> Self { Rgb::with_alpha(c.r, c.g, c.b, c.a) }
}

impl From<Rgb> for RGBA8 {
    #[inline]
    fn from(c: Rgb) -> Self { RGBA8 { r: c.r, g: c.g, b: c.b, a: c.a } }
}

impl From<Rgb> for RGB8 {
    #[inline]
    fn from(c: Rgb) -> Self { RGB8 { r: c.r, g: c.g, b: c.b } }
}
