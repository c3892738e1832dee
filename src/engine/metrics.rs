//! Formatting trace.
//!
//! Verbose formatting records one [`ExpansionStep`] per rule application so a
//! caller can see which rule handled which value at which depth. Collection
//! is opt-in: the plain `format` path never allocates a trace.

use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

/// One rule application during verbose formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionStep {
    /// Recursion depth (0 for the rule chosen at top level).
    pub depth: usize,
    pub rule_set: String,
    /// Rule key as written in the description: `100`, `1000>`, `x.x`, ...
    pub rule: String,
    /// Value the rule was applied to.
    pub value: f64,
}

/// Steps and timing of one verbose format call.
#[derive(Debug, Default, Clone)]
pub(crate) struct FormatTrace {
    pub steps: Vec<ExpansionStep>,
    pub elapsed: Duration,
}

impl FormatTrace {
    pub(crate) fn record(&mut self, depth: usize, rule_set: &str, rule: String, value: f64) {
        self.steps.push(ExpansionStep { depth, rule_set: rule_set.to_string(), rule, value });
    }

    /// Deepest recursion level reached.
    pub(crate) fn max_depth(&self) -> usize {
        self.steps.iter().map(|s| s.depth).max().unwrap_or(0)
    }
}
