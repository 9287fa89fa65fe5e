//! Declarative CSS rule tables for each skin category.
//!
//! Each table entry names a selector group, the declaration it sets and
//! where the value comes from. The injector walks a table in order and
//! skips entries whose value (or guard field) is unset.

use reel_css::PropertyValue;
use reel_types::color::alpha_blend;

use crate::palette::{ControlbarColors, MenusColors, TimesliderColors, TooltipsColors, set};

/// A color slot of a resolved category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    IconsActive,
    Icons,
    Text,
    TextActive,
    Background,
    Progress,
    Rail,
}

/// Read access to a category's resolved colors by [`Field`].
pub trait ColorSource {
    /// The color for `field`, or `None` when unset or not part of this
    /// category.
    fn color(&self, field: Field) -> Option<&str>;
}

impl ColorSource for ControlbarColors {
    fn color(&self, field: Field) -> Option<&str> {
        match field {
            Field::IconsActive => set(&self.icons_active),
            Field::Icons => set(&self.icons),
            Field::Text => set(&self.text),
            Field::Background => set(&self.background),
            _ => None,
        }
    }
}

impl ColorSource for TimesliderColors {
    fn color(&self, field: Field) -> Option<&str> {
        match field {
            Field::Progress => set(&self.progress),
            Field::Rail => set(&self.rail),
            Field::Background => set(&self.background),
            _ => None,
        }
    }
}

impl ColorSource for MenusColors {
    fn color(&self, field: Field) -> Option<&str> {
        match field {
            Field::Text => set(&self.text),
            Field::TextActive => set(&self.text_active),
            Field::Background => set(&self.background),
            _ => None,
        }
    }
}

impl ColorSource for TooltipsColors {
    fn color(&self, field: Field) -> Option<&str> {
        match field {
            Field::Text => set(&self.text),
            Field::Background => set(&self.background),
            _ => None,
        }
    }
}

/// Where a declaration's value comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// A palette color as-is.
    Color(Field),
    /// A palette color at the given opacity percentage.
    Blend(Field, u8),
    /// A fixed keyword, e.g. `none`.
    Keyword(&'static str),
    /// A fixed number, e.g. an opacity.
    Number(f64),
}

impl Source {
    /// Resolve against a category. `None` means "do not write".
    pub fn resolve(&self, colors: &dyn ColorSource) -> Option<PropertyValue> {
        match *self {
            Self::Color(field) => colors.color(field).map(PropertyValue::from),
            Self::Blend(field, pct) => colors
                .color(field)
                .map(|c| PropertyValue::Text(alpha_blend(c, pct))),
            Self::Keyword(k) => Some(PropertyValue::from(k)),
            Self::Number(n) => Some(PropertyValue::Number(n)),
        }
    }
}

/// What kind of declaration a rule writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// A regular CSS property, e.g. `background-color`.
    Property(&'static str),
    /// A CSS custom property, e.g. `--connected-color`.
    CustomProperty(&'static str),
}

/// One entry of a category rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub selectors: &'static [&'static str],
    pub declaration: Declaration,
    pub source: Source,
    /// Only write when this field is set.
    pub guard: Option<Field>,
}

impl Rule {
    const fn new(
        selectors: &'static [&'static str],
        declaration: Declaration,
        source: Source,
    ) -> Self {
        Self {
            selectors,
            declaration,
            source,
            guard: None,
        }
    }

    const fn only_if(mut self, field: Field) -> Self {
        self.guard = Some(field);
        self
    }
}

const fn color(
    selectors: &'static [&'static str],
    property: &'static str,
    field: Field,
) -> Rule {
    Rule::new(selectors, Declaration::Property(property), Source::Color(field))
}

const fn custom(selector: &'static [&'static str], name: &'static str, field: Field) -> Rule {
    Rule::new(selector, Declaration::CustomProperty(name), Source::Color(field))
}

pub const CONTROLBAR_RULES: &[Rule] = &[
    color(
        &[
            ".jw-controlbar .jw-text",
            ".jw-title-primary",
            ".jw-title-secondary",
        ],
        "color",
        Field::Text,
    ),
    // Idle icons.
    color(
        &[
            ".jw-button-color:not(.jw-icon-cast)",
            ".jw-button-color.jw-toggle.jw-off:not(.jw-icon-cast)",
        ],
        "color",
        Field::Icons,
    )
    .only_if(Field::Icons),
    color(
        &[".jw-display-icon-container .jw-svg-icon"],
        "fill",
        Field::Icons,
    )
    .only_if(Field::Icons),
    custom(
        &[".jw-icon-cast button.jw-off"],
        "--disconnected-color",
        Field::Icons,
    )
    .only_if(Field::Icons),
    // Hovered and toggled icons.
    color(
        &[".jw-display-icon-container:not(.jw-flag-touch):hover .jw-svg-icon"],
        "fill",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    color(
        &[
            ".jw-button-color.jw-toggle:not(.jw-icon-cast)",
            ".jw-button-color:hover:not(.jw-icon-cast)",
            ".jw-button-color.jw-toggle.jw-off:hover:not(.jw-icon-cast)",
        ],
        "color",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    custom(
        &[".jw-icon-cast:hover button.jw-off"],
        "--disconnected-color",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    custom(
        &[".jw-icon-cast button.jw-off:focus"],
        "--disconnected-color",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    custom(
        &[".jw-icon-cast button"],
        "--connected-color",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    custom(
        &[".jw-icon-cast button:focus"],
        "--connected-color",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    custom(
        &[".jw-icon-cast:hover button"],
        "--connected-color",
        Field::IconsActive,
    )
    .only_if(Field::IconsActive),
    // `background` rather than `background-color` so gradients are cleared.
    color(
        &[".jw-controlbar", ".jw-settings-topbar"],
        "background",
        Field::Background,
    ),
];

pub const TIMESLIDER_RULES: &[Rule] = &[
    color(&[".jw-progress", ".jw-knob"], "background-color", Field::Progress),
    Rule::new(
        &[".jw-buffer"],
        Declaration::Property("background-color"),
        Source::Blend(Field::Progress, 50),
    ),
    color(&[".jw-rail"], "background-color", Field::Rail),
    color(
        &[
            ".jw-background-color.jw-slider-time",
            ".jw-slider-time .jw-cue",
        ],
        "background-color",
        Field::Background,
    ),
];

/// Opacity forced on the next-up card when menus get a background, so an
/// opaque color does not hide the video underneath.
pub const NEXTUP_OPACITY: f64 = 0.7;

pub const MENUS_RULES: &[Rule] = &[
    color(
        &[
            ".jw-option",
            ".jw-toggle.jw-off",
            ".jw-skip .jw-skip-icon",
            ".jw-nextup-body",
            ".jw-nextup-header",
            ".jw-settings-content-item",
        ],
        "color",
        Field::Text,
    ),
    color(
        &[
            ".jw-option.jw-active-option",
            ".jw-option:not(.jw-active-option):hover",
            ".jw-settings-item-active",
            ".jw-settings-content-item:hover",
        ],
        "color",
        Field::TextActive,
    ),
    color(
        &[
            ".jw-nextup-body.jw-background-color",
            ".jw-nextup-body",
            ".jw-nextup-header",
            ".jw-settings-submenu",
        ],
        "background",
        Field::Background,
    ),
    Rule::new(
        &[".jw-nextup-body"],
        Declaration::Property("opacity"),
        Source::Number(NEXTUP_OPACITY),
    )
    .only_if(Field::Background),
];

pub const TOOLTIPS_RULES: &[Rule] = &[
    color(
        &[".jw-skip", ".jw-tooltip .jw-text", ".jw-time-tip .jw-text"],
        "background-color",
        Field::Background,
    ),
    // Tooltip containers take the background color as their foreground.
    color(&[".jw-time-tip", ".jw-tooltip"], "color", Field::Background),
    Rule::new(
        &[".jw-skip"],
        Declaration::Property("border"),
        Source::Keyword("none"),
    ),
    color(
        &[
            ".jw-skip .jw-text",
            ".jw-skip .jw-icon",
            ".jw-time-tip .jw-text",
            ".jw-tooltip .jw-text",
        ],
        "color",
        Field::Text,
    ),
];

/// Utility classes that other overlays reuse for the skin's accent colors,
/// keyed by the menus field that drives them.
pub const ACCENT_CLASSES: &[(Field, &[&str])] = &[
    (
        Field::TextActive,
        &[".jw-color-active", ".jw-color-active-hover:hover"],
    ),
    (
        Field::Text,
        &[".jw-color-inactive", ".jw-color-inactive-hover:hover"],
    ),
];

/// Properties each accent class sets to the same color.
pub const ACCENT_PROPERTIES: &[&str] = &["color", "border-color", "stroke"];
