//! Single channel (gray) colors.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};
use crate::srgb::{clamp_u8, Rgb};

/// A gray level in \[0, 255\] with an alpha in \[0, 255\].
///
/// Ordered by gray level first, then alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mono {
    pub v: u8,
    pub a: u8,
}

impl Default for Mono {
    fn default() -> Self { Mono::black() }
}

impl Mono {
    /// Opaque gray, `v` being clamped to \[0, 255\].
    pub fn new(v: i32) -> Mono { Mono::with_alpha(v, 255) }

    /// Both `v` and `a` are clamped to \[0, 255\].
    pub fn with_alpha(v: i32, a: i32) -> Mono {
        Mono { v: v.clamp(0, 255) as u8, a: a.clamp(0, 255) as u8 }
    }

    pub const fn black() -> Mono { Mono { v: 0, a: 255 } }
    pub const fn white() -> Mono { Mono { v: 255, a: 255 } }
    pub const fn gray() -> Mono { Mono { v: 128, a: 255 } }

    /// The truncated luminance of `c` (see [`Rgb::luminance`]).
    pub fn from_rgb(c: Rgb) -> Mono {
        Mono { v: clamp_u8(c.luminance()), a: c.a }
    }

    pub fn to_rgb(&self) -> Rgb { Rgb::with_alpha(self.v, self.v, self.v, self.a) }

    /// Same rules as [`Rgb::mix`]: `ratio` clamped to \[0, 1\],
    /// truncated result, alpha blended too.
    pub fn mix(self, other: Mono, ratio: f64) -> Mono {
        let t = ratio.clamp(0., 1.);
        let lerp = |x: u8, y: u8| {
            let x = f64::from(x);
            clamp_u8(x + (f64::from(y) - x) * t)
        };
        Mono { v: lerp(self.v, other.v), a: lerp(self.a, other.a) }
    }

    /// `#vv`, lowercase.
    pub fn to_hex(&self) -> String { format!("#{:02x}", self.v) }
}

impl Add for Mono {
    type Output = Mono;

    fn add(self, o: Mono) -> Mono {
        Mono { v: self.v.saturating_add(o.v), a: self.a.saturating_add(o.a) }
    }
}

impl Sub for Mono {
    type Output = Mono;

    fn sub(self, o: Mono) -> Mono {
        Mono { v: self.v.saturating_sub(o.v), a: self.a.saturating_sub(o.a) }
    }
}

/// Scale the gray level (not the alpha).
impl Mul<f64> for Mono {
    type Output = Mono;

    fn mul(self, factor: f64) -> Mono {
        Mono { v: clamp_u8(f64::from(self.v) * factor), a: self.a }
    }
}

impl PartialOrd for Mono {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Mono {
    fn cmp(&self, other: &Self) -> Ordering {
        self.v.cmp(&other.v).then(self.a.cmp(&other.a))
    }
}

impl From<Rgb> for Mono {
    #[inline]
    fn from(c: Rgb) -> Self { Mono::from_rgb(c) }
}

impl From<Mono> for Rgb {
    #[inline]
    fn from(c: Mono) -> Self { c.to_rgb() }
}
