//! In-memory scoped stylesheet.
//!
//! Rules live in a `BTreeMap<String, Vec<StyleRule>>` keyed by scope id.
//! Within a scope, rules keep their first-insertion order, which is also
//! the order they are rendered in.

use std::collections::BTreeMap;

use crate::service::{RuleBody, StyleSheetService};

/// One selector and its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub body: RuleBody,
}

impl StyleRule {
    /// Render as `selector{...}`.
    pub fn to_css(&self) -> String {
        format!("{}{}", self.selector, self.body.to_block())
    }
}

/// A stylesheet holding rules for any number of scopes.
#[derive(Debug, Default, Clone)]
pub struct ScopedStyleSheet {
    scopes: BTreeMap<String, Vec<StyleRule>>,
}

impl ScopedStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules written under `scope`, in insertion order.
    pub fn rules(&self, scope: &str) -> &[StyleRule] {
        self.scopes.get(scope).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up the rule for `selector` under `scope`.
    pub fn rule(&self, scope: &str, selector: &str) -> Option<&StyleRule> {
        self.rules(scope).iter().find(|r| r.selector == selector)
    }

    /// Total number of rules across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scope ids that currently hold at least one rule.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scopes
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(scope, _)| scope.as_str())
    }

    /// Drop every rule of `scope`. Returns `true` if anything was removed.
    pub fn clear_scope(&mut self, scope: &str) -> bool {
        self.scopes
            .remove(scope)
            .is_some_and(|rules| !rules.is_empty())
    }

    /// Render all rules of `scope` as CSS text, one rule per line.
    pub fn to_css(&self, scope: &str) -> String {
        self.rules(scope)
            .iter()
            .map(StyleRule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleSheetService for ScopedStyleSheet {
    fn write(&mut self, selector: &str, body: RuleBody, scope: &str) {
        log::trace!("stylesheet[{scope}]: {selector}{}", body.to_block());
        let rules = self.scopes.entry(scope.to_string()).or_default();
        let Some(idx) = rules.iter().position(|r| r.selector == selector) else {
            rules.push(StyleRule {
                selector: selector.to_string(),
                body,
            });
            return;
        };
        match (&mut rules[idx].body, body) {
            (RuleBody::Properties(current), RuleBody::Properties(update)) => {
                current.extend(update);
            },
            (slot, body) => *slot = body,
        }
    }
}
