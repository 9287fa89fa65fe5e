//! Palette normalization.
//!
//! Turns a sparse [`SkinConfig`] into a [`ResolvedPalette`]. A category is
//! only produced when its override block was given or one of the global
//! colors it inherits from is set; otherwise it stays `None` and the
//! injector leaves that part of the player alone.

use crate::config::{
    ControlbarOverrides, MenusOverrides, SkinConfig, TimesliderOverrides, TooltipsOverrides,
};

/// Fully resolved control bar colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlbarColors {
    pub icons_active: Option<String>,
    pub icons: Option<String>,
    pub text: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimesliderColors {
    pub progress: Option<String>,
    pub rail: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenusColors {
    pub text: Option<String>,
    pub text_active: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipsColors {
    pub text: Option<String>,
    pub background: Option<String>,
}

/// The four skinnable categories. `None` means "do not style".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub controlbar: Option<ControlbarColors>,
    pub timeslider: Option<TimesliderColors>,
    pub menus: Option<MenusColors>,
    pub tooltips: Option<TooltipsColors>,
}

impl ResolvedPalette {
    /// Names of the categories that will be styled.
    pub fn categories(&self) -> Vec<&'static str> {
        [
            ("controlbar", self.controlbar.is_some()),
            ("timeslider", self.timeslider.is_some()),
            ("menus", self.menus.is_some()),
            ("tooltips", self.tooltips.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }
}

/// The global fallback colors, with empty strings already treated as unset.
#[derive(Debug, Clone, Copy)]
struct Globals<'a> {
    active: Option<&'a str>,
    inactive: Option<&'a str>,
    background: Option<&'a str>,
}

/// A color counts as set only when present and non-empty.
pub(crate) fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Override if set, else the fallback.
fn pick(over: &Option<String>, fallback: Option<&str>) -> Option<String> {
    set(over).or(fallback).map(str::to_string)
}

/// Resolve a sparse skin config into per-category colors. Never fails.
pub fn normalize_skin(config: &SkinConfig) -> ResolvedPalette {
    let globals = Globals {
        active: set(&config.active),
        inactive: set(&config.inactive),
        background: set(&config.background),
    };

    let palette = ResolvedPalette {
        controlbar: controlbar(config.controlbar.as_ref(), globals),
        timeslider: timeslider(config.timeslider.as_ref(), globals),
        menus: menus(config.menus.as_ref(), globals),
        tooltips: tooltips(config.tooltips.as_ref(), globals),
    };
    log::debug!("Normalized skin: categories {:?}", palette.categories());
    palette
}

fn controlbar(over: Option<&ControlbarOverrides>, g: Globals<'_>) -> Option<ControlbarColors> {
    if over.is_none() && g.active.is_none() && g.inactive.is_none() && g.background.is_none() {
        return None;
    }
    let default = ControlbarOverrides::default();
    let over = over.unwrap_or(&default);
    Some(ControlbarColors {
        icons_active: pick(&over.icons_active, g.active),
        icons: pick(&over.icons, g.inactive),
        text: pick(&over.text, g.inactive),
        background: pick(&over.background, g.background),
    })
}

fn timeslider(over: Option<&TimesliderOverrides>, g: Globals<'_>) -> Option<TimesliderColors> {
    if over.is_none() && g.active.is_none() {
        return None;
    }
    let default = TimesliderOverrides::default();
    let over = over.unwrap_or(&default);
    Some(TimesliderColors {
        progress: pick(&over.progress, g.active),
        rail: pick(&over.rail, None),
        background: pick(&over.background, None),
    })
}

fn menus(over: Option<&MenusOverrides>, g: Globals<'_>) -> Option<MenusColors> {
    if over.is_none() && g.active.is_none() && g.inactive.is_none() && g.background.is_none() {
        return None;
    }
    let default = MenusOverrides::default();
    let over = over.unwrap_or(&default);
    Some(MenusColors {
        text: pick(&over.text, g.inactive),
        text_active: pick(&over.text_active, g.active),
        background: pick(&over.background, g.background),
    })
}

fn tooltips(over: Option<&TooltipsOverrides>, g: Globals<'_>) -> Option<TooltipsColors> {
    if over.is_none() && g.inactive.is_none() && g.background.is_none() {
        return None;
    }
    let default = TooltipsOverrides::default();
    let over = over.unwrap_or(&default);
    Some(TooltipsColors {
        text: pick(&over.text, g.inactive),
        background: pick(&over.background, g.background),
    })
}
