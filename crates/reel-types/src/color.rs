//! Color parsing and alpha blending for skin colors.
//!
//! Skin colors are opaque strings as far as the rest of the workspace is
//! concerned. This module only understands hex notation, which is enough
//! to derive translucent variants such as the time slider's buffer bar.

use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return None;
        }
        match s.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(s.chars()) {
                    let v = digit.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            },
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16).ok()?;
                let g = u8::from_str_radix(&s[2..4], 16).ok()?;
                let b = u8::from_str_radix(&s[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            },
            8 => {
                let r = u8::from_str_radix(&s[0..2], 16).ok()?;
                let g = u8::from_str_radix(&s[2..4], 16).ok()?;
                let b = u8::from_str_radix(&s[4..6], 16).ok()?;
                let a = u8::from_str_radix(&s[6..8], 16).ok()?;
                Some(Self::rgba(r, g, b, a))
            },
            _ => None,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = f32::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {alpha:.2})", self.r, self.g, self.b)
        }
    }
}

/// Return `color` at `alpha_percent` opacity as a CSS `rgba()` expression.
///
/// The percentage is clamped to 0..=100 and replaces any alpha channel the
/// input carried. Colors that are not hex notation are returned unchanged
/// so the stylesheet can decide what to do with them.
pub fn alpha_blend(color: &str, alpha_percent: u8) -> String {
    let Some(c) = Rgba::parse_hex(color) else {
        log::trace!("alpha_blend: passing through non-hex color '{color}'");
        return color.to_string();
    };
    let alpha = f32::from(alpha_percent.min(100)) / 100.0;
    format!("rgba({}, {}, {}, {alpha})", c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Rgba::parse_hex("#FF0000"), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(Rgba::parse_hex("00ff7f"), Some(Rgba::rgb(0, 255, 127)));
    }

    #[test]
    fn parse_short_hex_expands_digits() {
        assert_eq!(Rgba::parse_hex("#fff"), Some(Rgba::rgb(255, 255, 255)));
        assert_eq!(Rgba::parse_hex("#1a2"), Some(Rgba::rgb(0x11, 0xaa, 0x22)));
    }

    #[test]
    fn parse_hex_with_alpha() {
        assert_eq!(
            Rgba::parse_hex("#00FF0080"),
            Some(Rgba::rgba(0, 255, 0, 128))
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(Rgba::parse_hex("red"), None);
        assert_eq!(Rgba::parse_hex("#GG0000"), None);
        assert_eq!(Rgba::parse_hex(""), None);
        assert_eq!(Rgba::parse_hex("#ééé"), None);
    }

    #[test]
    fn display_opaque_and_translucent() {
        assert_eq!(Rgba::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Rgba::rgba(1, 2, 3, 0).to_string(), "rgba(1, 2, 3, 0.00)");
    }

    #[test]
    fn alpha_blend_half() {
        assert_eq!(alpha_blend("#ff0000", 50), "rgba(255, 0, 0, 0.5)");
        assert_eq!(alpha_blend("#fff", 50), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn alpha_blend_replaces_existing_alpha() {
        assert_eq!(alpha_blend("#00000080", 25), "rgba(0, 0, 0, 0.25)");
    }

    #[test]
    fn alpha_blend_clamps_percentage() {
        assert_eq!(alpha_blend("#000000", 250), "rgba(0, 0, 0, 1)");
        assert_eq!(alpha_blend("#000000", 0), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn alpha_blend_passes_through_unknown_formats() {
        assert_eq!(alpha_blend("rebeccapurple", 50), "rebeccapurple");
        assert_eq!(alpha_blend("rgb(1, 2, 3)", 50), "rgb(1, 2, 3)");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn six_digit_hex_always_parses(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let s = format!("#{r:02x}{g:02x}{b:02x}");
                prop_assert_eq!(Rgba::parse_hex(&s), Some(Rgba::rgb(r, g, b)));
            }

            #[test]
            fn blend_keeps_channels(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), pct in 0u8..=100) {
                let out = alpha_blend(&format!("#{r:02X}{g:02X}{b:02X}"), pct);
                let expected = format!("rgba({r}, {g}, {b}, ");
                prop_assert!(out.starts_with(&expected));
            }
        }
    }
}
