//! Static color data: predefined palettes and named colors.

use lazy_static::lazy_static;
use crate::srgb::Rgb;

pub mod named;

/// Google Material Design primary colors (the 500 shades).
const MATERIAL_DESIGN_HEX: [&str; 16] = [
    "#F44336", // Red
    "#E91E63", // Pink
    "#9C27B0", // Purple
    "#673AB7", // Deep purple
    "#3F51B5", // Indigo
    "#2196F3", // Blue
    "#03A9F4", // Light blue
    "#00BCD4", // Cyan
    "#009688", // Teal
    "#4CAF50", // Green
    "#8BC34A", // Light green
    "#CDDC39", // Lime
    "#FFEB3B", // Yellow
    "#FFC107", // Amber
    "#FF9800", // Orange
    "#FF5722", // Deep orange
];

const WARM_HEX: [&str; 5] = ["#FF6B6B", "#FFE66D", "#FF8E53", "#FF6F91", "#C44569"];

const COOL_HEX: [&str; 5] = ["#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD"];

fn parse(hex: &[&str]) -> Vec<Rgb> {
    hex.iter().filter_map(|h| Rgb::from_hex(h).ok()).collect()
}

lazy_static! {
    pub(crate) static ref MATERIAL_DESIGN: Vec<Rgb> = parse(&MATERIAL_DESIGN_HEX);
    pub(crate) static ref WARM: Vec<Rgb> = parse(&WARM_HEX);
    pub(crate) static ref COOL: Vec<Rgb> = parse(&COOL_HEX);
}
