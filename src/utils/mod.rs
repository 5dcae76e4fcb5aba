//! Color science helpers: contrast and accessibility, color
//! temperature, color-blindness simulation, harmonies, sorting and
//! nearest-color quantization.

use tracing::trace;
use crate::{Hsl, Lab, Rgb};

mod blindness;
mod contrast;
mod harmony;

pub use blindness::ColorBlindness;
pub use contrast::{best_contrast_color, check_accessibility, contrast_ratio,
                   AccessibilityLevel};
pub use harmony::{generate_harmony, HarmonyScheme};

/// Color temperatures (in Kelvin) below this are warm.
pub const WARM_TEMPERATURE_LIMIT: f64 = 5000.;

/// Correlated color temperature estimate, in Kelvin.
///
/// The chromaticity is computed from the (non linearized) channels
/// and fed to McCamy's cubic approximation, which is only meaningful
/// for colors near the Planckian locus.  Black gives 6500 (daylight).
pub fn color_temperature(c: Rgb) -> f64 {
    let u = c.to_unit();
    let x = u.r * 0.4124 + u.g * 0.3576 + u.b * 0.1805;
    let y = u.r * 0.2126 + u.g * 0.7152 + u.b * 0.0722;
    let z = u.r * 0.0193 + u.g * 0.1192 + u.b * 0.9505;
    let total = x + y + z;
    if total == 0. { return 6500. }
    let (cx, cy) = (x / total, y / total);
    let n = (cx - 0.3320) / (0.1858 - cy);
    449. * n.powi(3) + 3525. * n * n + 6823.3 * n + 5520.33
}

/// Whether [`color_temperature`] is below [`WARM_TEMPERATURE_LIMIT`].
pub fn is_warm_color(c: Rgb) -> bool { color_temperature(c) < WARM_TEMPERATURE_LIMIT }

// Stable sort of `colors` by increasing `key`.
fn sort_by_key_f64(colors: &mut [Rgb], key: impl Fn(Rgb) -> f64) {
    colors.sort_by(|&a, &b| key(a).total_cmp(&key(b)))
}

/// Sort by increasing HSL hue.  Equal hues keep their order.
pub fn sort_by_hue(colors: &mut [Rgb]) {
    sort_by_key_f64(colors, |c| Hsl::from(c).h)
}

/// Sort by increasing [`Rgb::luminance`].  The sort is stable.
pub fn sort_by_brightness(colors: &mut [Rgb]) {
    sort_by_key_f64(colors, |c| c.luminance())
}

/// Sort by increasing HSL saturation.  The sort is stable.
pub fn sort_by_saturation(colors: &mut [Rgb]) {
    sort_by_key_f64(colors, |c| Hsl::from(c).s)
}

/// CIE76 difference of the two colors in L\*a\*b\*.
pub fn color_distance(c1: Rgb, c2: Rgb) -> f64 {
    Lab::from(c1).delta_e(&Lab::from(c2))
}

/// The color of `palette` at the smallest [`color_distance`] from
/// `target`, the earliest one in case of ties.  An empty palette
/// returns `target`.
pub fn find_closest_color(target: Rgb, palette: &[Rgb]) -> Rgb {
    let lab = Lab::from(target);
    let mut best = target;
    let mut best_dist = f64::INFINITY;
    for &c in palette {
        let d = lab.delta_e(&Lab::from(c));
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

/// Replace each color by its [closest](find_closest_color) one in
/// `palette`.
pub fn quantize_to_palette(colors: &[Rgb], palette: &[Rgb]) -> Vec<Rgb> {
    trace!(colors = colors.len(), palette = palette.len(), "quantize");
    colors.iter().map(|&c| find_closest_color(c, palette)).collect()
}
