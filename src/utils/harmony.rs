//! Harmonious color schemes built from a base color.

use tracing::debug;
use crate::{Hsl, Rgb, DEFAULT_HARMONY_ANGLE};

/// Classic color wheel schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarmonyScheme {
    /// The base and its opposite hue.
    Complementary,
    /// Three hues 120° apart.
    Triadic,
    /// The base and the two neighbours of its complement.
    SplitComplementary,
    /// The base and its two neighbours.
    Analogous,
    /// Four hues 90° apart.
    Tetradic,
}

impl HarmonyScheme {
    pub const ALL: [HarmonyScheme; 5] = [
        HarmonyScheme::Complementary, HarmonyScheme::Triadic,
        HarmonyScheme::SplitComplementary, HarmonyScheme::Analogous,
        HarmonyScheme::Tetradic];

    /// Parse the snake case label of a scheme (e.g. `"split_complementary"`).
    pub fn from_label(label: &str) -> Option<HarmonyScheme> {
        HarmonyScheme::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::SplitComplementary => "split_complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Tetradic => "tetradic",
        }
    }

    /// `base` followed by the colors the scheme derives from it.
    /// Neighbours are [`DEFAULT_HARMONY_ANGLE`] degrees away.
    pub fn colors(self, base: Rgb) -> Vec<Rgb> {
        let hsl = Hsl::from(base);
        let derived: Vec<Hsl> = match self {
            HarmonyScheme::Complementary => vec![hsl.complement()],
            HarmonyScheme::Triadic => hsl.triadic()[1..].to_vec(),
            HarmonyScheme::SplitComplementary =>
                hsl.split_complementary(DEFAULT_HARMONY_ANGLE)[1..].to_vec(),
            HarmonyScheme::Analogous => {
                let [before, _, after] = hsl.analogous(DEFAULT_HARMONY_ANGLE);
                vec![before, after]
            }
            HarmonyScheme::Tetradic =>
                [90., 180., 270.].iter().map(|&d| hsl.adjust_hue(d)).collect(),
        };
        let mut colors = Vec::with_capacity(derived.len() + 1);
        colors.push(base);
        colors.extend(derived.iter().map(Hsl::to_rgb));
        colors
    }
}

/// The colors of the scheme named `label` (see
/// [`HarmonyScheme::from_label`]).  An unknown label gives `[base]`.
pub fn generate_harmony(base: Rgb, label: &str) -> Vec<Rgb> {
    match HarmonyScheme::from_label(label) {
        Some(scheme) => scheme.colors(base),
        None => {
            debug!(label, "unknown harmony scheme");
            vec![base]
        }
    }
}
