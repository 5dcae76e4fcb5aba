//! Simulation of color vision deficiencies.

use crate::srgb::{clamp_u8, Rgb};

// Rows give the new (r, g, b) as combinations of the old ones.
const PROTANOPIA: [[f64; 3]; 3] = [
    [0.567, 0.433, 0.],
    [0.558, 0.442, 0.],
    [0., 0.242, 0.758]];
const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.625, 0.375, 0.],
    [0.7, 0.3, 0.],
    [0., 0.3, 0.7]];
const TRITANOPIA: [[f64; 3]; 3] = [
    [0.95, 0.05, 0.],
    [0., 0.433, 0.567],
    [0., 0.475, 0.525]];

/// Color vision deficiencies.  The `*opia` variants lack one kind of
/// cone entirely, the `*omaly` ones are the weakened forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorBlindness {
    /// Red blind.
    Protanopia,
    /// Green blind.
    Deuteranopia,
    /// Blue blind.
    Tritanopia,
    /// Red weak.
    Protanomaly,
    /// Green weak.
    Deuteranomaly,
    /// Blue weak.
    Tritanomaly,
}

impl ColorBlindness {
    pub const ALL: [ColorBlindness; 6] = [
        ColorBlindness::Protanopia, ColorBlindness::Deuteranopia,
        ColorBlindness::Tritanopia, ColorBlindness::Protanomaly,
        ColorBlindness::Deuteranomaly, ColorBlindness::Tritanomaly];

    /// The full deficiency of which `self` is the weakened form (or
    /// `self` if it already is a full one).
    pub fn full(self) -> ColorBlindness {
        use ColorBlindness::*;
        match self {
            Protanopia | Protanomaly => Protanopia,
            Deuteranopia | Deuteranomaly => Deuteranopia,
            Tritanopia | Tritanomaly => Tritanopia,
        }
    }

    pub fn is_anomaly(self) -> bool { self.full() != self }

    /// How `color` is perceived.  Full deficiencies apply a fixed
    /// linear transform to the channels (rescaled to \[0, 1\]), the
    /// result being truncated.  Anomalies mix the full simulation
    /// half and half with `color`.  The alpha is kept.
    pub fn simulate(self, color: Rgb) -> Rgb {
        let m = match self {
            ColorBlindness::Protanopia => &PROTANOPIA,
            ColorBlindness::Deuteranopia => &DEUTERANOPIA,
            ColorBlindness::Tritanopia => &TRITANOPIA,
            _ => return self.full().simulate(color).mix(color, 0.5),
        };
        let u = color.to_unit();
        let row = |k: usize| clamp_u8((m[k][0] * u.r + m[k][1] * u.g + m[k][2] * u.b) * 255.);
        Rgb::with_alpha(row(0), row(1), row(2), color.a)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deficiencies() {
        let red = Rgb::red();
        assert_eq!(ColorBlindness::Protanopia.simulate(red), Rgb::new(144, 142, 0));
        assert_eq!(ColorBlindness::Deuteranopia.simulate(red), Rgb::new(159, 178, 0));
        assert_eq!(ColorBlindness::Tritanopia.simulate(Rgb::blue()), Rgb::new(0, 144, 133));
        assert_eq!(ColorBlindness::Tritanopia.simulate(Rgb::black()), Rgb::black());
    }

    #[test]
    fn anomalies() {
        let c = Rgb::new(255, 100, 50);
        for kind in ColorBlindness::ALL.into_iter().filter(|k| k.is_anomaly()) {
            assert_eq!(kind.simulate(c), kind.full().simulate(c).mix(c, 0.5));
        }
        let full = ColorBlindness::Protanopia.simulate(c);
        let weak = ColorBlindness::Protanomaly.simulate(c);
        assert_ne!(full, c);
        assert_ne!(weak, c);
        assert_ne!(weak, full);
        assert_eq!(ColorBlindness::Protanomaly.simulate(Rgb::red()), Rgb::new(199, 71, 0));
    }

    #[test]
    fn alpha_kept() {
        let c = Rgb::with_alpha(10, 200, 30, 77);
        for kind in ColorBlindness::ALL {
            assert_eq!(kind.simulate(c).a, 77);
        }
    }

    #[test]
    fn classification() {
        assert!(!ColorBlindness::Deuteranopia.is_anomaly());
        assert!(ColorBlindness::Tritanomaly.is_anomaly());
        assert_eq!(ColorBlindness::Deuteranomaly.full(), ColorBlindness::Deuteranopia);
    }
}
