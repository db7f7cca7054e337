//! Named colors and the default trace palette.

use std::collections::HashMap;

use once_cell::sync::Lazy;

// CSS color names used by the built-in dashboards, plus a few extras.
static NAMED: Lazy<HashMap<&'static str, [u8; 3]>> = Lazy::new(|| {
    HashMap::from([
        ("mediumturquoise", [72, 209, 204]),
        ("sandybrown", [244, 164, 96]),
        ("green", [0, 128, 0]),
        ("red", [255, 0, 0]),
        ("blue", [0, 0, 255]),
        ("firebrick", [178, 34, 34]),
        ("orange", [255, 165, 0]),
        ("purple", [128, 0, 128]),
        ("gray", [128, 128, 128]),
        ("black", [0, 0, 0]),
        ("white", [255, 255, 255]),
    ])
});

/// Look up a named color (case-insensitive).
pub fn named(name: &str) -> Option<[u8; 3]> {
    NAMED.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Default palette for series without an explicit color, cycled by index.
pub fn palette_color(index: usize) -> [u8; 3] {
    const PALETTE: [[u8; 3]; 6] = [
        [72, 209, 204],
        [244, 164, 96],
        [0, 128, 0],
        [178, 34, 34],
        [0, 0, 255],
        [128, 0, 128],
    ];
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(named("MediumTurquoise"), Some([72, 209, 204]));
        assert_eq!(named("SandyBrown"), named("sandybrown"));
        assert!(named("not-a-color").is_none());
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), palette_color(6));
    }
}
