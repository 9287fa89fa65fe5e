//! The stylesheet service trait and the rule bodies it accepts.

use std::collections::BTreeMap;
use std::fmt;

/// A CSS property value: either a raw string or a bare number.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Property name (hyphenated CSS form) to value.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// The body of one rule write.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleBody {
    /// Regular declarations keyed by CSS property name.
    Properties(PropertyMap),
    /// Pre-formatted declaration block including braces, e.g.
    /// `{--connected-color: #fff}`. Used for custom properties.
    Raw(String),
}

impl RuleBody {
    /// A body holding a single declaration.
    pub fn single(property: &str, value: impl Into<PropertyValue>) -> Self {
        let mut map = PropertyMap::new();
        map.insert(property.to_string(), value.into());
        Self::Properties(map)
    }

    /// A raw body declaring one custom property.
    pub fn custom_property(name: &str, value: &str) -> Self {
        Self::Raw(format!("{{{name}: {value}}}"))
    }

    /// Render as a CSS declaration block.
    pub fn to_block(&self) -> String {
        match self {
            Self::Properties(map) => {
                let decls: Vec<String> = map.iter().map(|(k, v)| format!("{k}: {v};")).collect();
                format!("{{{}}}", decls.join(" "))
            },
            Self::Raw(raw) => raw.clone(),
        }
    }
}

/// Inserts or updates CSS rules in a stylesheet shared by many scopes.
///
/// Each call represents one rule. Writing the same selector again under the
/// same scope updates that rule rather than adding another one. Writes never
/// fail; rejecting bad values is up to the implementation's backing store.
pub trait StyleSheetService {
    fn write(&mut self, selector: &str, body: RuleBody, scope: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_display_is_bare() {
        assert_eq!(PropertyValue::from(0.7).to_string(), "0.7");
        assert_eq!(PropertyValue::from(1.0).to_string(), "1");
    }

    #[test]
    fn single_declaration_block() {
        let body = RuleBody::single("background-color", "#fff");
        assert_eq!(body.to_block(), "{background-color: #fff;}");
    }

    #[test]
    fn multiple_declarations_sorted_by_name() {
        let mut map = PropertyMap::new();
        map.insert("stroke".into(), "#0f0".into());
        map.insert("color".into(), "#0f0".into());
        map.insert("border-color".into(), "#0f0".into());
        assert_eq!(
            RuleBody::Properties(map).to_block(),
            "{border-color: #0f0; color: #0f0; stroke: #0f0;}"
        );
    }

    #[test]
    fn custom_property_body_is_raw() {
        let body = RuleBody::custom_property("--connected-color", "#ff0000");
        assert_eq!(body, RuleBody::Raw("{--connected-color: #ff0000}".into()));
        assert_eq!(body.to_block(), "{--connected-color: #ff0000}");
    }
}
