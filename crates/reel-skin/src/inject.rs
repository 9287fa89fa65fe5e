//! Style injection: resolved palette to scoped CSS rule writes.
//!
//! All writes use the player id as the stylesheet scope. Regular
//! declarations are qualified with `#<player_id>` so that several players on
//! one page can carry different skins; custom-property declarations for the
//! cast button keep their raw selectors.

use reel_css::{
    PropertyMap, PropertyValue, RuleBody, StyleSheetService, descendant_prefix, extend_prefix,
    prefix,
};

use crate::palette::{MenusColors, ResolvedPalette};
use crate::rules::{
    ACCENT_CLASSES, ACCENT_PROPERTIES, CONTROLBAR_RULES, ColorSource, Declaration, MENUS_RULES,
    Rule, TIMESLIDER_RULES, TOOLTIPS_RULES,
};

/// Write the palette's colors into `sheet` under `player_id`.
///
/// Does nothing when `palette` is `None`. Categories that are absent from
/// the palette are skipped, as are individual unset colors.
pub fn apply_color_overrides(
    sheet: &mut dyn StyleSheetService,
    player_id: &str,
    palette: Option<&ResolvedPalette>,
) {
    let Some(palette) = palette else {
        return;
    };
    let mut injector = StyleInjector::new(sheet, player_id);
    injector.apply(palette);
    log::debug!(
        "Applied skin to '{player_id}': {} rule writes for {:?}",
        injector.writes(),
        palette.categories()
    );
}

/// Issues rule writes for one player.
pub struct StyleInjector<'a> {
    sheet: &'a mut dyn StyleSheetService,
    player_id: &'a str,
    writes: usize,
}

impl<'a> StyleInjector<'a> {
    pub fn new(sheet: &'a mut dyn StyleSheetService, player_id: &'a str) -> Self {
        Self {
            sheet,
            player_id,
            writes: 0,
        }
    }

    /// Number of writes issued so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Apply every present category, then the global accent classes.
    pub fn apply(&mut self, palette: &ResolvedPalette) {
        if let Some(c) = &palette.controlbar {
            self.apply_rules(CONTROLBAR_RULES, c);
        }
        if let Some(c) = &palette.timeslider {
            self.apply_rules(TIMESLIDER_RULES, c);
        }
        if let Some(c) = &palette.menus {
            self.apply_rules(MENUS_RULES, c);
        }
        if let Some(c) = &palette.tooltips {
            self.apply_rules(TOOLTIPS_RULES, c);
        }
        self.insert_global_color_classes(palette.menus.as_ref());
    }

    /// Walk a rule table in order against one category's colors.
    pub fn apply_rules(&mut self, rules: &[Rule], colors: &dyn ColorSource) {
        for rule in rules {
            if let Some(field) = rule.guard
                && colors.color(field).is_none()
            {
                continue;
            }
            let value = rule.source.resolve(colors);
            match rule.declaration {
                Declaration::Property(property) => {
                    self.add_style(rule.selectors, property, value, false);
                },
                Declaration::CustomProperty(name) => {
                    self.add_custom_property(rule.selectors, name, value);
                },
            }
        }
    }

    /// Set `property` on the scoped selector group, or do nothing when
    /// `value` is unset.
    pub fn add_style(
        &mut self,
        selectors: &[&str],
        property: &str,
        value: Option<PropertyValue>,
        extend_parent: bool,
    ) {
        let Some(value) = value.filter(is_set) else {
            return;
        };
        let selector = self.scoped(selectors, extend_parent);
        self.write(&selector, RuleBody::single(property, value));
    }

    /// Declare a custom property through a raw body. The selectors are
    /// written as given, only the stylesheet scope ties them to the player.
    fn add_custom_property(&mut self, selectors: &[&str], name: &str, value: Option<PropertyValue>) {
        let Some(value) = value.filter(is_set) else {
            return;
        };
        let selector = selectors.join(", ");
        self.write(
            &selector,
            RuleBody::custom_property(name, &value.to_string()),
        );
    }

    /// Accent utility classes driven by the menus text colors. Written even
    /// when no other category is styled, as long as menus carries a color.
    fn insert_global_color_classes(&mut self, menus: Option<&MenusColors>) {
        let Some(menus) = menus else {
            return;
        };
        for (field, classes) in ACCENT_CLASSES {
            let Some(color) = menus.color(*field) else {
                continue;
            };
            let mut props = PropertyMap::new();
            for property in ACCENT_PROPERTIES {
                props.insert((*property).to_string(), PropertyValue::from(color));
            }
            for class in *classes {
                let selector = self.scoped(&[*class], false);
                self.write(&selector, RuleBody::Properties(props.clone()));
            }
        }
    }

    fn scoped(&self, selectors: &[&str], extend_parent: bool) -> String {
        let root = if extend_parent {
            extend_prefix(self.player_id)
        } else {
            descendant_prefix(self.player_id)
        };
        prefix(selectors, &root).join(", ")
    }

    fn write(&mut self, selector: &str, body: RuleBody) {
        self.sheet.write(selector, body, self.player_id);
        self.writes += 1;
    }
}

fn is_set(value: &PropertyValue) -> bool {
    match value {
        PropertyValue::Text(s) => !s.is_empty(),
        PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
    }
}
