#![forbid(unsafe_code)]

//! Row theme: semantic color slots and affordance icons.

use sliprow_render::cell::PackedRgba;

/// Semantic colors for task rows.
///
/// The `background` slot is the backing surface revealed behind a dragged
/// row; `surface` is the content layer the text sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTheme {
    /// Backing color revealed behind the content layer.
    pub background: PackedRgba,
    /// Content layer color.
    pub surface: PackedRgba,
    /// Primary text color.
    pub text: PackedRgba,
    /// Placeholder text color.
    pub text_placeholder: PackedRgba,
    /// Completion accent (overlay and committed tick icon).
    pub complete: PackedRgba,
    /// Deletion accent (committed cross icon).
    pub delete: PackedRgba,
    /// Resting affordance icon color.
    pub icon: PackedRgba,
    /// Render icons as Unicode glyphs; ASCII fallback otherwise.
    pub unicode_icons: bool,
}

impl Default for RowTheme {
    fn default() -> Self {
        Self {
            background: PackedRgba::rgb(24, 24, 28),
            surface: PackedRgba::rgb(40, 42, 48),
            text: PackedRgba::rgb(220, 220, 220),
            text_placeholder: PackedRgba::rgb(110, 110, 118),
            complete: PackedRgba::rgb(64, 160, 72),
            delete: PackedRgba::rgb(190, 60, 54),
            icon: PackedRgba::rgb(230, 230, 230),
            unicode_icons: true,
        }
    }
}

impl RowTheme {
    /// Display character for an affordance icon under this theme.
    pub fn icon_char(&self, icon: RowIcon) -> char {
        if self.unicode_icons {
            icon.as_char()
        } else {
            icon.as_ascii()
        }
    }

    /// Accent color for an affordance icon.
    pub const fn icon_accent(&self, icon: RowIcon) -> PackedRgba {
        match icon {
            RowIcon::Complete => self.complete,
            RowIcon::Delete => self.delete,
        }
    }
}

/// The two swipe affordance icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    /// Completion tick, revealed at the left edge.
    Complete,
    /// Deletion cross, revealed at the right edge.
    Delete,
}

impl RowIcon {
    /// Get the display character for this icon.
    pub const fn as_char(self) -> char {
        match self {
            Self::Complete => '\u{2713}', // ✓
            Self::Delete => '\u{2717}',   // ✗
        }
    }

    /// Get the fallback ASCII character for terminals without glyph support.
    pub const fn as_ascii(self) -> char {
        match self {
            Self::Complete => 'v',
            Self::Delete => 'x',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_accents_differ() {
        let theme = RowTheme::default();
        assert_ne!(theme.complete, theme.delete);
        assert_ne!(theme.background, theme.surface);
    }

    #[test]
    fn icon_chars() {
        assert_eq!(RowIcon::Complete.as_char(), '✓');
        assert_eq!(RowIcon::Delete.as_char(), '✗');
        assert_eq!(RowIcon::Complete.as_ascii(), 'v');
        assert_eq!(RowIcon::Delete.as_ascii(), 'x');
    }

    #[test]
    fn theme_selects_icon_repertoire() {
        let mut theme = RowTheme::default();
        assert_eq!(theme.icon_char(RowIcon::Delete), '✗');
        theme.unicode_icons = false;
        assert_eq!(theme.icon_char(RowIcon::Delete), 'x');
    }

    #[test]
    fn icon_accent_matches_slot() {
        let theme = RowTheme::default();
        assert_eq!(theme.icon_accent(RowIcon::Complete), theme.complete);
        assert_eq!(theme.icon_accent(RowIcon::Delete), theme.delete);
    }
}
