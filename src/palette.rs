//! Ordered collections of colors.

use std::ops::{Index, IndexMut};
use rand::{seq::SliceRandom, Rng};
use tracing::trace;
use crate::{palettes, ColorRange, Hsl, PaletteGradient, Rgb};

/// Default number of colors of the generated palettes.
pub const DEFAULT_PALETTE_COUNT: usize = 5;

/// Default hue span (in degrees) of [`Palette::analogous`].
pub const DEFAULT_ANALOGOUS_RANGE: f64 = 60.;

/// An ordered list of colors.  Duplicates are allowed.
///
/// Indexing wraps around: `palette[i]` is `palette[i % palette.len()]`.
///
/// # Panics
///
/// Indexing an empty palette panics; use [`Palette::get`] to avoid it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: Vec<Rgb>,
}

// Keeps hue and saturation, varies the lightness in [0.2, 0.8].
struct LightnessSweep(Hsl);

impl ColorRange for LightnessSweep {
    fn rgb(&self, t: f64) -> Rgb {
        let Hsl { h, s, a, .. } = self.0;
        Hsl::with_alpha(h, s, 0.2 + 0.6 * t, a).to_rgb()
    }
}

// Keeps saturation and lightness, sweeps `span` degrees of hue
// centered on the base hue.
struct HueSweep { base: Hsl, span: f64 }

impl ColorRange for HueSweep {
    fn rgb(&self, t: f64) -> Rgb {
        let Hsl { h, s, l, a } = self.base;
        Hsl::with_alpha(h - self.span / 2. + self.span * t, s, l, a).to_rgb()
    }
}

impl Palette {
    pub fn new() -> Self { Palette { colors: Vec::new() } }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn clear(&mut self) { self.colors.clear() }

    /// Append a color.
    pub fn add(&mut self, color: Rgb) { self.colors.push(color) }

    /// Append several colors, in order.
    pub fn add_all(&mut self, colors: &[Rgb]) { self.colors.extend_from_slice(colors) }

    pub fn colors(&self) -> &[Rgb] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, Rgb> { self.colors.iter() }

    /// The color at `index % len`, or `None` if the palette is empty.
    pub fn get(&self, index: usize) -> Option<&Rgb> {
        if self.colors.is_empty() { None }
        else { self.colors.get(index % self.colors.len()) }
    }

    /// A color of the palette chosen uniformly with the thread-local
    /// generator, black if the palette is empty.
    pub fn random(&self) -> Rgb { self.random_with(&mut rand::thread_rng()) }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.colors.choose(rng).copied().unwrap_or_else(Rgb::black)
    }

    /// `steps` colors going from `start` to `end` (both included)
    /// with [`Rgb::mix`].  A single step gives `[start]` and zero
    /// steps an empty palette.
    ///
    /// # Example
    ///
    /// ```
    /// use pigment::{Palette, Rgb};
    /// let p = Palette::gradient(Rgb::red(), Rgb::blue(), 3);
    /// assert_eq!(p.to_hex(), ["#ff0000", "#7f007f", "#0000ff"]);
    /// ```
    pub fn gradient(start: Rgb, end: Rgb, steps: usize) -> Palette {
        trace!(%start, %end, steps, "gradient");
        start.gradient(&end).samples(steps).into()
    }

    /// Concatenate the gradients (of `steps_per_segment` colors each)
    /// between consecutive colors of `colors`.  Inner control colors
    /// therefore appear twice.  Fewer than two control colors give an
    /// empty palette.
    pub fn multi_gradient(colors: &[Rgb], steps_per_segment: usize) -> Palette {
        colors.windows(2)
            .flat_map(|c| c[0].gradient(&c[1]).samples(steps_per_segment))
            .collect()
    }

    /// The 16 primary colors of Google's Material Design.
    pub fn material_design() -> Palette { palettes::MATERIAL_DESIGN.clone().into() }

    /// Five warm colors: red, yellow, orange, pink, deep pink.
    pub fn warm() -> Palette { palettes::WARM.clone().into() }

    /// Five cool colors: teal, blue, green, light yellow, plum.
    pub fn cool() -> Palette { palettes::COOL.clone().into() }

    /// `count` shades of the hue and saturation of `base`, the
    /// lightness going from 0.2 to 0.8.  `count == 1` gives the
    /// darkest one.
    pub fn monochromatic(base: Rgb, count: usize) -> Palette {
        LightnessSweep(Hsl::from(base)).samples(count).into()
    }

    /// `count` colors with the saturation and lightness of `base`,
    /// hues spanning `range` degrees centered on the hue of `base`.
    /// `count == 1` gives the first hue, `range / 2` before `base`.
    pub fn analogous(base: Rgb, count: usize, range: f64) -> Palette {
        HueSweep { base: Hsl::from(base), span: range }.samples(count).into()
    }

    /// `base` and its complement.
    pub fn complementary(base: Rgb) -> Palette {
        Palette::from(vec![base, Hsl::from(base).complement().to_rgb()])
    }

    /// The [`Hsl::triadic`] colors of `base`.
    pub fn triadic(base: Rgb) -> Palette {
        Hsl::from(base).triadic().iter().map(Hsl::to_rgb).collect()
    }

    /// `count` light, desaturated colors with random hues.
    pub fn pastel(count: usize) -> Palette {
        Palette::pastel_with(count, &mut rand::thread_rng())
    }

    pub fn pastel_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Palette {
        (0 .. count).map(|_| Hsl::new(rng.gen_range(0. .. 360.), 0.3, 0.8).to_rgb())
            .collect()
    }

    /// `count` saturated colors of medium lightness with random hues.
    pub fn vibrant(count: usize) -> Palette {
        Palette::vibrant_with(count, &mut rand::thread_rng())
    }

    pub fn vibrant_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Palette {
        (0 .. count).map(|_| Hsl::new(rng.gen_range(0. .. 360.), 0.8, 0.5).to_rgb())
            .collect()
    }

    /// The colors as `#rrggbb` strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex(false)).collect()
    }

    /// A continuous gradient going through all the colors, in order.
    pub fn continuous(&self) -> PaletteGradient { PaletteGradient::new(&self.colors) }
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.colors[index % self.colors.len()]
    }
}

impl IndexMut<usize> for Palette {
    fn index_mut(&mut self, index: usize) -> &mut Rgb {
        let n = self.colors.len();
        &mut self.colors[index % n]
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self { Palette { colors } }
}

impl From<Palette> for Vec<Rgb> {
    fn from(p: Palette) -> Self { p.colors }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Palette { colors: iter.into_iter().collect() }
    }
}

impl Extend<Rgb> for Palette {
    fn extend<I: IntoIterator<Item = Rgb>>(&mut self, iter: I) {
        self.colors.extend(iter)
    }
}

impl IntoIterator for Palette {
    type Item = Rgb;
    type IntoIter = std::vec::IntoIter<Rgb>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn construction() {
        let empty = Palette::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.to_hex().is_empty());
        let p = Palette::from(vec![Rgb::red(), Rgb::green(), Rgb::blue()]);
        assert_eq!(p.len(), 3);
        assert_eq!((p[0], p[1], p[2]), (Rgb::red(), Rgb::green(), Rgb::blue()));
    }

    #[test]
    fn add_and_clear() {
        let mut p = Palette::new();
        p.add(Rgb::red());
        p.add(Rgb::red());
        assert_eq!(p.len(), 2);
        p.add_all(&[Rgb::blue(), Rgb::yellow()]);
        assert_eq!(p.colors(), &[Rgb::red(), Rgb::red(), Rgb::blue(), Rgb::yellow()]);
        p.extend([Rgb::cyan()]);
        assert_eq!(p.len(), 5);
        p.clear();
        assert!(p.is_empty());
        for i in 0 .. 1000 {
            p.add(Rgb::clamped(i % 256, (i * 2) % 256, (i * 3) % 256, 255));
        }
        assert_eq!(p.len(), 1000);
    }

    #[test]
    fn wrapping_index() {
        let mut p: Palette = [Rgb::red(), Rgb::green(), Rgb::blue()].into_iter().collect();
        assert_eq!(p[3], Rgb::red());
        assert_eq!(p[7], Rgb::green());
        assert_eq!(p.get(5), Some(&Rgb::blue()));
        p[4] = Rgb::white();
        assert_eq!(p[1], Rgb::white());
        assert_eq!(Palette::new().get(0), None);
    }

    #[test]
    #[should_panic]
    fn empty_index_panics() {
        let _ = Palette::new()[0];
    }

    #[test]
    fn random_choice() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Palette::new().random_with(&mut rng), Rgb::black());
        assert_eq!(Palette::new().random(), Rgb::black());
        let p = Palette::warm();
        for _ in 0 .. 50 {
            assert!(p.colors().contains(&p.random_with(&mut rng)));
        }
    }

    #[test]
    fn gradient() {
        let g = Palette::gradient(Rgb::red(), Rgb::blue(), 5);
        assert_eq!(g.len(), 5);
        assert_eq!(g[0], Rgb::red());
        assert_eq!(g[4], Rgb::blue());
        let mid = g[2];
        assert!(mid.r > 0 && mid.b > 0);
        assert_eq!(mid.g, 0);
        assert_eq!(g[1], Rgb::new(191, 0, 63));
    }

    #[test]
    fn gradient_degenerate() {
        let same = Palette::gradient(Rgb::red(), Rgb::red(), 5);
        assert_eq!(same.len(), 5);
        assert!(same.iter().all(|&c| c == Rgb::red()));
        assert!(Palette::gradient(Rgb::red(), Rgb::blue(), 0).is_empty());
        let one = Palette::gradient(Rgb::red(), Rgb::blue(), 1);
        assert_eq!(one.colors(), &[Rgb::red()]);
        let two = Palette::gradient(Rgb::red(), Rgb::blue(), 2);
        assert_eq!(two.colors(), &[Rgb::red(), Rgb::blue()]);
    }

    #[test]
    fn multi_gradient() {
        let stops = [Rgb::red(), Rgb::green(), Rgb::blue()];
        let g = Palette::multi_gradient(&stops, 3);
        assert_eq!(g.len(), 6);
        assert_eq!(g.colors(), &[Rgb::red(), Rgb::new(127, 127, 0), Rgb::green(),
                                 Rgb::green(), Rgb::new(0, 127, 127), Rgb::blue()]);
        assert!(Palette::multi_gradient(&stops[..1], 3).is_empty());
        assert!(Palette::multi_gradient(&[], 3).is_empty());
        assert!(Palette::multi_gradient(&stops, 0).is_empty());
    }

    #[test]
    fn predefined() {
        assert_eq!(Palette::material_design().len(), 16);
        assert_eq!(Palette::warm().len(), 5);
        assert_eq!(Palette::cool().len(), 5);
        assert_eq!(Palette::material_design()[0].to_hex(false), "#f44336");
        assert_eq!(Palette::warm()[4].to_hex(false), "#c44569");
    }

    #[test]
    fn monochromatic() {
        let p = Palette::monochromatic(Rgb::red(), 7);
        assert_eq!(p.len(), 7);
        let ls: Vec<f64> = p.iter().map(|&c| Hsl::from(c).l).collect();
        assert_abs_diff_eq!(ls[0], 0.2, epsilon = 0.005);
        assert_abs_diff_eq!(ls[6], 0.8, epsilon = 0.005);
        assert!(ls.windows(2).all(|w| w[0] < w[1]));
        for &c in &p {
            assert_abs_diff_eq!(Hsl::from(c).h, 0., epsilon = 1e-9);
        }
        assert_eq!(Palette::monochromatic(Rgb::red(), 0).len(), 0);
        let one = Palette::monochromatic(Rgb::red(), 1);
        assert_eq!(one.colors(), &[Hsl::new(0., 1., 0.2).to_rgb()]);
    }

    #[test]
    fn analogous() {
        let p = Palette::analogous(Rgb::blue(), DEFAULT_PALETTE_COUNT,
                                   DEFAULT_ANALOGOUS_RANGE);
        assert_eq!(p.len(), 5);
        let hues: Vec<f64> = p.iter().map(|&c| Hsl::from(c).h).collect();
        assert_abs_diff_eq!(hues[0], 210., epsilon = 0.5);
        assert_abs_diff_eq!(hues[2], 240., epsilon = 0.5);
        assert_abs_diff_eq!(hues[4], 270., epsilon = 0.5);
        assert_eq!(p[2], Rgb::blue());
        // Sweeping across 0° wraps the hue.
        let p = Palette::analogous(Rgb::red(), 3, 60.);
        assert_abs_diff_eq!(Hsl::from(p[0]).h, 330., epsilon = 0.5);
        assert_eq!(p[1], Rgb::red());
        assert_eq!(Palette::analogous(Rgb::red(), 1, 60.).len(), 1);
    }

    #[test]
    fn harmonies() {
        let c = Palette::complementary(Rgb::green());
        assert_eq!(c.colors(), &[Rgb::green(), Rgb::magenta()]);
        let t = Palette::triadic(Rgb::red());
        assert_eq!(t.colors(), &[Rgb::red(), Rgb::green(), Rgb::blue()]);
    }

    #[test]
    fn random_palettes() {
        let mut rng = StdRng::seed_from_u64(1);
        let pastel = Palette::pastel_with(8, &mut rng);
        assert_eq!(pastel.len(), 8);
        for &c in &pastel {
            let hsl = Hsl::from(c);
            assert_abs_diff_eq!(hsl.l, 0.8, epsilon = 0.01);
            assert_abs_diff_eq!(hsl.s, 0.3, epsilon = 0.03);
        }
        let vibrant = Palette::vibrant_with(8, &mut rng);
        assert_eq!(vibrant.len(), 8);
        for &c in &vibrant {
            let hsl = Hsl::from(c);
            assert_abs_diff_eq!(hsl.l, 0.5, epsilon = 0.01);
            assert_abs_diff_eq!(hsl.s, 0.8, epsilon = 0.02);
        }
        assert_eq!(Palette::pastel(3).len(), 3);
        assert!(Palette::vibrant(0).is_empty());
    }

    #[test]
    fn export() {
        let p = Palette::from(vec![Rgb::red(), Rgb::green(), Rgb::with_alpha(0, 0, 255, 3)]);
        assert_eq!(p.to_hex(), ["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn continuous() {
        let p = Palette::from(vec![Rgb::black(), Rgb::white()]);
        let g = p.continuous();
        assert_eq!(g.rgb(0.), Rgb::black());
        assert_eq!(g.rgb(1.), Rgb::white());
        assert_eq!(g.rgb(0.5), Rgb::new(127, 127, 127));
    }
}
