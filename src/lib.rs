//! Color spaces, conversions, palettes and color science.
//!
//! - [`Rgb`]: 8-bit sRGB with alpha, hex parsing and formatting.
//! - [`Mono`]: single channel gray.
//! - [`Hsl`], [`Hsv`] and [`Lab`]: alternate representations, each
//!   converting from and to [`Rgb`].
//! - [`Palette`]: ordered list of colors with gradients, harmonies and
//!   predefined sets.
//! - [`utils`]: contrast ratio, accessibility level, color-blindness
//!   simulation, harmonies, sorting and quantization.
//! - [`named`]: the CSS/X11 named colors.
//!
//! Continuous families of colors implement [`ColorRange`]: a
//! [`Gradient`] between two colors or a [`PaletteGradient`] through
//! all the colors of a palette.
//!
//! Color spaces share no base type.  They are bound together only by
//! their `From` conversions:
//!
//! ```
//! use pigment::{Hsl, Lab, Rgb};
//! let c = Rgb::from_hex("#3498db").unwrap();
//! let hsl = Hsl::from(c);
//! assert_eq!(Rgb::from(hsl.complement()).to_hex(false), "#db7734");
//! assert!(Lab::from(c).delta_e(&Lab::from(Rgb::blue())) > 10.);
//! ```

mod error;
mod hsl;
mod hsv;
mod lab;
mod mono;
mod palette;
mod palettes;
mod srgb;
pub mod utils;

pub use error::{ColorError, Result};
pub use hsl::{Hsl, DEFAULT_HARMONY_ANGLE};
pub use hsv::Hsv;
pub use lab::{Lab, DEFAULT_SIMILARITY_THRESHOLD};
pub use mono::Mono;
pub use palette::{Palette, DEFAULT_ANALOGOUS_RANGE, DEFAULT_PALETTE_COUNT};
pub use palettes::named;
pub use srgb::{Rgb, DEFAULT_ADJUST_FACTOR};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Rgb;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.  If `n == 1`, the only point is `a`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self, a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Return the colors of `n` uniformly spaced points of \[0, 1\],
    /// both ends included.
    fn samples(self, n: usize) -> Vec<Rgb>
    where Self: Sized {
        self.range(0., 1., n).map(|(_, c)| c).collect()
    }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R> {
    range: R,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R> Range<R> where R: ColorRange {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Rgb) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }
}

impl<R> Iterator for Range<R>
where R: ColorRange {
    type Item = (f64, Rgb);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R> ExactSizeIterator for Range<R>
where R: ColorRange {
    fn len(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R> DoubleEndedIterator for Range<R>
where R: ColorRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}


/// Gradient between two colors.
///
/// Created by [`Rgb::gradient`].  Colors are blended in sRGB with
/// [`Rgb::mix`], so `t == 0.` and `t == 1.` give back exactly the two
/// colors.  See the [`ColorRange`] trait for methods.
#[derive(Clone, Copy, Debug)]
pub struct Gradient {
    c0: Rgb, // first color
    c1: Rgb, // last color
}

impl Gradient {
    pub(crate) fn new(c0: Rgb, c1: Rgb) -> Self { Gradient { c0, c1 } }
}

impl ColorRange for Gradient {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    #[inline]
    fn rgb(&self, t: f64) -> Rgb { self.c0.mix(self.c1, t) }
}

/// A gradient going through all the colors of a [`Palette`].
///
/// Created by [`Palette::continuous`].
#[derive(Clone, Debug)]
pub struct PaletteGradient {
    gradients: Vec<Gradient>,
    // Color returned when there are fewer than 2 stops.
    only: Rgb,
}

impl PaletteGradient {
    pub(crate) fn new(stops: &[Rgb]) -> Self {
        PaletteGradient {
            gradients: stops.windows(2)
                .map(|c| c[0].gradient(&c[1]))
                .collect(),
            only: stops.first().copied().unwrap_or_default() }
    }
}

impl ColorRange for PaletteGradient {
    fn rgb(&self, t: f64) -> Rgb {
        let n = self.gradients.len();
        if n == 0 { return self.only }
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb(tn.fract()) }
        else { self.gradients[n-1].rgb(1.) }
    }
}
