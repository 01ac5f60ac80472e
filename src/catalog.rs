//! Offered avatars and accent colors — fixed UI configuration data.
//!
//! The pickers render these lists as-is; the creation rules only consume the
//! two defaults. Order matters: it is the display order of the pickers.

/// Avatar symbols offered by the setup screen.
pub const AVATAR_CHOICES: &[&str] = &[
    "👦", "👧", "👨", "👩", "🧑", "👴", "👵", "👶", "🐱", "🐶",
];

/// Generic placeholder avatar used when no symbol was chosen.
pub const PLACEHOLDER_AVATAR: &str = "👤";

/// Accent colors offered by the setup screen, normalized `#RRGGBB`.
pub const COLOR_CHOICES: &[&str] = &[
    "#FF0000", "#FF9500", "#FFCC00", "#00FF00", "#00C7BE", "#007AFF", "#5856D6", "#FF2D95",
];

/// Fallback accent color used when no color was chosen.
pub const FALLBACK_COLOR: &str = "#4A90E2";

/// Check that a color string is in normalized `#RRGGBB` form
/// (uppercase hex, exactly six digits).
pub fn is_normalized_color(color: &str) -> bool {
    let mut chars = color.chars();
    chars.next() == Some('#')
        && color.len() == 7
        && chars.all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
}
