//! WCAG style contrast ratio and accessibility levels.
//!
//! The luminance used here is the BT.601 luma of [`Rgb::luminance`]
//! rescaled to \[0, 1\], not the linearized WCAG relative luminance,
//! so ratios differ slightly from the ones of browser tools.

use crate::Rgb;

/// Accessibility level reached by a foreground/background pair.
///
/// The thresholds are 7:1 for [`AaaNormal`](Self::AaaNormal), 4.5:1
/// for [`AaNormal`](Self::AaNormal) and [`AaaLarge`](Self::AaaLarge),
/// and 3:1 for [`AaLarge`](Self::AaLarge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessibilityLevel {
    Fail,
    AaNormal,
    AaLarge,
    AaaNormal,
    AaaLarge,
}

impl AccessibilityLevel {
    pub fn passes(self) -> bool { self != AccessibilityLevel::Fail }
}

/// Contrast ratio `(L1 + 0.05) / (L2 + 0.05)` where `L1 ≥ L2` are the
/// luminances of the two colors.  The result lies in \[1, 21\] and
/// does not depend on the order of the arguments.
pub fn contrast_ratio(c1: Rgb, c2: Rgb) -> f64 {
    let l1 = c1.luminance() / 255.;
    let l2 = c2.luminance() / 255.;
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Level reached by text of color `fg` on `bg`.
///
/// A ratio of at least 7 is always [`AaaNormal`], even for large text.
/// Between 4.5 and 7, large text reports [`AaaLarge`] and normal text
/// [`AaNormal`].  Between 3 and 4.5 only large text passes, with
/// [`AaLarge`].
///
/// [`AaaNormal`]: AccessibilityLevel::AaaNormal
/// [`AaaLarge`]: AccessibilityLevel::AaaLarge
/// [`AaNormal`]: AccessibilityLevel::AaNormal
/// [`AaLarge`]: AccessibilityLevel::AaLarge
pub fn check_accessibility(fg: Rgb, bg: Rgb, large_text: bool) -> AccessibilityLevel {
    let ratio = contrast_ratio(fg, bg);
    if ratio >= 7. {
        AccessibilityLevel::AaaNormal
    } else if ratio >= 4.5 {
        if large_text { AccessibilityLevel::AaaLarge } else { AccessibilityLevel::AaNormal }
    } else if ratio >= 3. && large_text {
        AccessibilityLevel::AaLarge
    } else {
        AccessibilityLevel::Fail
    }
}

/// White or black, whichever contrasts more with `bg`.  Ties go to
/// black.
pub fn best_contrast_color(bg: Rgb) -> Rgb {
    let with_white = contrast_ratio(Rgb::white(), bg);
    let with_black = contrast_ratio(Rgb::black(), bg);
    if with_white > with_black { Rgb::white() } else { Rgb::black() }
}
