#![forbid(unsafe_code)]

//! Style patches.
//!
//! A [`Style`] describes *changes* to apply to a cell: each field is
//! optional, and unset fields leave the cell untouched.

use crate::cell::{PackedRgba, StyleFlags};

/// An optional set of visual properties applied over existing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color override.
    pub fg: Option<PackedRgba>,
    /// Background color override.
    pub bg: Option<PackedRgba>,
    /// Style flags to add.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style (no overrides).
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color (builder).
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set style flags (builder).
    #[must_use]
    pub fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Whether the style overrides nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on top of this style; `other`'s set fields win.
    #[must_use]
    pub fn patch(mut self, other: Style) -> Self {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
        if other.attrs.is_some() {
            self.attrs = other.attrs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        assert!(Style::default().is_empty());
        assert!(Style::new().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let s = Style::new()
            .fg(PackedRgba::rgb(1, 2, 3))
            .bg(PackedRgba::rgb(4, 5, 6))
            .attrs(StyleFlags::BOLD);
        assert_eq!(s.fg, Some(PackedRgba::rgb(1, 2, 3)));
        assert_eq!(s.bg, Some(PackedRgba::rgb(4, 5, 6)));
        assert_eq!(s.attrs, Some(StyleFlags::BOLD));
        assert!(!s.is_empty());
    }

    #[test]
    fn patch_prefers_other() {
        let base = Style::new()
            .fg(PackedRgba::rgb(0, 0, 0))
            .bg(PackedRgba::rgb(9, 9, 9));
        let over = Style::new().fg(PackedRgba::rgb(255, 255, 255));
        let merged = base.patch(over);
        assert_eq!(merged.fg, Some(PackedRgba::rgb(255, 255, 255)));
        assert_eq!(merged.bg, Some(PackedRgba::rgb(9, 9, 9)));
    }

    #[test]
    fn patch_with_empty_is_identity() {
        let base = Style::new().attrs(StyleFlags::STRIKETHROUGH);
        assert_eq!(base.patch(Style::new()), base);
    }
}
