//! Stylesheet plumbing for player skins.
//!
//! The skin injector never touches a DOM directly. It talks to a
//! [`StyleSheetService`] that stores rules grouped by a scope id (one scope
//! per player instance). [`ScopedStyleSheet`] is the in-memory
//! implementation; hosts can render it to CSS text or supply their own.

pub mod selector;
pub mod service;
pub mod sheet;

pub use selector::{descendant_prefix, extend_prefix, prefix};
pub use service::{PropertyMap, PropertyValue, RuleBody, StyleSheetService};
pub use sheet::{ScopedStyleSheet, StyleRule};
