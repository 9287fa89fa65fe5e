//! Shared test utilities for reel-skin tests.
//!
//! Provides a [`RecordingSheet`] that records every rule write for assertion.

use reel_css::{RuleBody, StyleSheetService};

/// A recorded `StyleSheetService::write` call.
#[derive(Debug, Clone)]
pub struct WriteCall {
    pub selector: String,
    pub body: RuleBody,
    pub scope: String,
}

/// A stylesheet service that only records calls.
pub struct RecordingSheet {
    pub calls: Vec<WriteCall>,
}

impl RecordingSheet {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// First write whose selector matches exactly.
    pub fn find(&self, selector: &str) -> Option<&WriteCall> {
        self.calls.iter().find(|c| c.selector == selector)
    }
}

impl StyleSheetService for RecordingSheet {
    fn write(&mut self, selector: &str, body: RuleBody, scope: &str) {
        self.calls.push(WriteCall {
            selector: selector.to_string(),
            body,
            scope: scope.to_string(),
        });
    }
}
