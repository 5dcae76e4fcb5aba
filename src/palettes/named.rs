//! The CSS/X11 named colors.
//!
//! ```
//! use pigment::{named, Rgb};
//! assert_eq!(named::get("SkyBlue"), Some(Rgb::new(135, 206, 235)));
//! assert_eq!(named::get("no such color"), None);
//! ```
//!
//! Beware that the CSS `green` is `#008000`, not [`Rgb::green`].

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::srgb::Rgb;

/// Names (lowercase) and hex codes, grouped by hue family.
const NAMED_HEX: &[(&str, &str)] = &[
    // Reds and pinks
    ("indianred", "#cd5c5c"),
    ("lightcoral", "#f08080"),
    ("salmon", "#fa8072"),
    ("darksalmon", "#e9967a"),
    ("lightsalmon", "#ffa07a"),
    ("crimson", "#dc143c"),
    ("red", "#ff0000"),
    ("firebrick", "#b22222"),
    ("darkred", "#8b0000"),
    ("pink", "#ffc0cb"),
    ("lightpink", "#ffb6c1"),
    ("hotpink", "#ff69b4"),
    ("deeppink", "#ff1493"),
    ("mediumvioletred", "#c71585"),
    ("palevioletred", "#db7093"),
    // Oranges and yellows
    ("coral", "#ff7f50"),
    ("tomato", "#ff6347"),
    ("orangered", "#ff4500"),
    ("darkorange", "#ff8c00"),
    ("orange", "#ffa500"),
    ("gold", "#ffd700"),
    ("yellow", "#ffff00"),
    ("lightyellow", "#ffffe0"),
    ("lemonchiffon", "#fffacd"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("papayawhip", "#ffefd5"),
    ("moccasin", "#ffe4b5"),
    ("peachpuff", "#ffdab9"),
    ("palegoldenrod", "#eee8aa"),
    ("khaki", "#f0e68c"),
    ("darkkhaki", "#bdb76b"),
    // Purples
    ("lavender", "#e6e6fa"),
    ("thistle", "#d8bfd8"),
    ("plum", "#dda0dd"),
    ("violet", "#ee82ee"),
    ("orchid", "#da70d6"),
    ("fuchsia", "#ff00ff"),
    ("magenta", "#ff00ff"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("blueviolet", "#8a2be2"),
    ("darkviolet", "#9400d3"),
    ("darkorchid", "#9932cc"),
    ("darkmagenta", "#8b008b"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("indigo", "#4b0082"),
    // Greens
    ("greenyellow", "#adff2f"),
    ("chartreuse", "#7fff00"),
    ("lawngreen", "#7cfc00"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("palegreen", "#98fb98"),
    ("lightgreen", "#90ee90"),
    ("mediumspringgreen", "#00fa9a"),
    ("springgreen", "#00ff7f"),
    ("mediumseagreen", "#3cb371"),
    ("seagreen", "#2e8b57"),
    ("forestgreen", "#228b22"),
    ("green", "#008000"),
    ("darkgreen", "#006400"),
    ("yellowgreen", "#9acd32"),
    ("olivedrab", "#6b8e23"),
    ("olive", "#808000"),
    ("darkolivegreen", "#556b2f"),
    // Cyans
    ("mediumaquamarine", "#66cdaa"),
    ("aqua", "#00ffff"),
    ("cyan", "#00ffff"),
    ("lightcyan", "#e0ffff"),
    ("paleturquoise", "#afeeee"),
    ("aquamarine", "#7fffd4"),
    ("turquoise", "#40e0d0"),
    ("mediumturquoise", "#48d1cc"),
    ("darkturquoise", "#00ced1"),
    ("lightseagreen", "#20b2aa"),
    ("cadetblue", "#5f9ea0"),
    ("darkcyan", "#008b8b"),
    ("teal", "#008080"),
    // Blues
    ("lightsteelblue", "#b0c4de"),
    ("powderblue", "#b0e0e6"),
    ("lightblue", "#add8e6"),
    ("skyblue", "#87ceeb"),
    ("lightskyblue", "#87cefa"),
    ("deepskyblue", "#00bfff"),
    ("dodgerblue", "#1e90ff"),
    ("cornflowerblue", "#6495ed"),
    ("steelblue", "#4682b4"),
    ("royalblue", "#4169e1"),
    ("blue", "#0000ff"),
    ("mediumblue", "#0000cd"),
    ("darkblue", "#00008b"),
    ("navy", "#000080"),
    ("midnightblue", "#191970"),
    // Browns
    ("cornsilk", "#fff8dc"),
    ("blanchedalmond", "#ffebcd"),
    ("bisque", "#ffe4c4"),
    ("navajowhite", "#ffdead"),
    ("wheat", "#f5deb3"),
    ("burlywood", "#deb887"),
    ("tan", "#d2b48c"),
    ("rosybrown", "#bc8f8f"),
    ("sandybrown", "#f4a460"),
    ("goldenrod", "#daa520"),
    ("darkgoldenrod", "#b8860b"),
    ("peru", "#cd853f"),
    ("chocolate", "#d2691e"),
    ("saddlebrown", "#8b4513"),
    ("sienna", "#a0522d"),
    ("brown", "#a52a2a"),
    ("maroon", "#800000"),
    // Whites
    ("white", "#ffffff"),
    ("snow", "#fffafa"),
    ("honeydew", "#f0fff0"),
    ("mintcream", "#f5fffa"),
    ("azure", "#f0ffff"),
    ("aliceblue", "#f0f8ff"),
    ("ghostwhite", "#f8f8ff"),
    ("whitesmoke", "#f5f5f5"),
    ("seashell", "#fff5ee"),
    ("beige", "#f5f5dc"),
    ("oldlace", "#fdf5e6"),
    ("floralwhite", "#fffaf0"),
    ("ivory", "#fffff0"),
    ("antiquewhite", "#faebd7"),
    ("linen", "#faf0e6"),
    ("lavenderblush", "#fff0f5"),
    ("mistyrose", "#ffe4e1"),
    // Grays
    ("gainsboro", "#dcdcdc"),
    ("lightgray", "#d3d3d3"),
    ("silver", "#c0c0c0"),
    ("darkgray", "#a9a9a9"),
    ("gray", "#808080"),
    ("dimgray", "#696969"),
    ("lightslategray", "#778899"),
    ("slategray", "#708090"),
    ("darkslategray", "#2f4f4f"),
    ("black", "#000000"),
];

lazy_static! {
    static ref NAMED: HashMap<&'static str, Rgb> = NAMED_HEX.iter()
        .filter_map(|&(name, hex)| Some((name, Rgb::from_hex(hex).ok()?)))
        .collect();
}

/// Look up a named color, ignoring case.
pub fn get(name: &str) -> Option<Rgb> {
    NAMED.get(name.to_ascii_lowercase().as_str()).copied()
}

/// All the names, grouped by hue family.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED_HEX.iter().map(|&(name, _)| name)
}

/// All the named colors, in the order of [`names`].
pub fn all() -> impl Iterator<Item = (&'static str, Rgb)> {
    names().filter_map(|name| Some((name, *NAMED.get(name)?)))
}
