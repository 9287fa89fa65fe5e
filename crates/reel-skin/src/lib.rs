//! Player skin colors.
//!
//! A skin is a sparse set of colors from the player setup. It is resolved
//! into a per-category palette ([`normalize_skin`]) and then written as CSS
//! rules scoped to one player element ([`apply_color_overrides`]).

pub mod config;
pub mod inject;
pub mod palette;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{
    ControlbarOverrides, MenusOverrides, SkinConfig, TimesliderOverrides, TooltipsOverrides,
};
pub use inject::{StyleInjector, apply_color_overrides};
pub use palette::{
    ControlbarColors, MenusColors, ResolvedPalette, TimesliderColors, TooltipsColors,
    normalize_skin,
};

use reel_css::StyleSheetService;

/// Resolve `config` and write its colors for `player_id`.
///
/// Called by the player bootstrap whenever the active skin changes.
/// Returns the resolved palette so callers can inspect what was applied.
pub fn apply_skin(
    sheet: &mut dyn StyleSheetService,
    player_id: &str,
    config: &SkinConfig,
) -> ResolvedPalette {
    let palette = normalize_skin(config);
    if palette.is_empty() {
        log::debug!("Skin for '{player_id}' sets no colors");
    }
    apply_color_overrides(sheet, player_id, Some(&palette));
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_css::ScopedStyleSheet;

    #[test]
    fn apply_skin_from_json() {
        let config = SkinConfig::from_json(
            r##"{ "active": "#ff0000", "timeslider": { "rail": "#333333" } }"##,
        )
        .unwrap();
        let mut sheet = ScopedStyleSheet::new();
        let palette = apply_skin(&mut sheet, "botr_player", &config);

        assert_eq!(palette.categories(), vec!["controlbar", "timeslider", "menus"]);
        let css = sheet.to_css("botr_player");
        assert!(css.contains("#botr_player .jw-rail{background-color: #333333;}"));
        assert!(css.contains("#botr_player .jw-buffer{background-color: rgba(255, 0, 0, 0.5);}"));
        assert!(css.contains("#botr_player .jw-color-active{"));
        assert!(!css.contains("jw-color-inactive"));
    }

    #[test]
    fn apply_empty_skin_leaves_sheet_untouched() {
        let mut sheet = ScopedStyleSheet::new();
        let palette = apply_skin(&mut sheet, "p", &SkinConfig::default());
        assert!(palette.is_empty());
        assert!(sheet.is_empty());
    }

    #[test]
    fn changing_skin_overwrites_previous_colors() {
        let mut sheet = ScopedStyleSheet::new();
        let blue = SkinConfig::from_toml("background = \"#0000ff\"").unwrap();
        let red = SkinConfig::from_toml("background = \"#ff0000\"").unwrap();
        apply_skin(&mut sheet, "p", &blue);
        let count = sheet.len();
        apply_skin(&mut sheet, "p", &red);
        assert_eq!(sheet.len(), count);
        let css = sheet.to_css("p");
        assert!(css.contains("#ff0000"));
        assert!(!css.contains("#0000ff"));
    }
}
