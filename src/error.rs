//! Error types for compiling, formatting and parsing.
//!
//! Compile errors carry the name of the rule set being read and the character
//! offset (not byte offset) of the offending text in the description.

use thiserror::Error;

/// Errors produced by [`compile`](crate::compile), [`format`](crate::format)
/// and [`parse`](crate::parse).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A `key:` prefix is neither numeric nor one of `-x`, `x.x`, `0.x`, `x.0`.
    #[error("malformed rule key `{key}` in {rule_set} at offset {offset}")]
    MalformedRuleKey { rule_set: String, key: String, offset: usize },

    /// A `[` without its `]`, or a `]` without a `[`.
    #[error("unbalanced optional bracket in {rule_set} at offset {offset}")]
    UnterminatedBracket { rule_set: String, offset: usize },

    /// A substitution opened with `<`, `>` or `=` that is never closed.
    #[error("unterminated `{delimiter}` substitution in {rule_set} at offset {offset}")]
    UnterminatedEscape { rule_set: String, delimiter: char, offset: usize },

    /// An optional group opened inside another optional group.
    #[error("nested optional group in {rule_set} at offset {offset}")]
    NestedOptional { rule_set: String, offset: usize },

    /// A substitution body that names neither a rule set nor a numeral pattern.
    #[error("malformed substitution `{token}` in {rule_set} at offset {offset}")]
    MalformedSubstitution { rule_set: String, token: String, offset: usize },

    /// Two rules of the same set claim the same base value (or special key).
    #[error("duplicate rule `{key}` in {rule_set} at offset {offset}")]
    DuplicateBaseValue { rule_set: String, key: String, offset: usize },

    /// A normal rule whose base value is below the one declared before it.
    #[error("base value {base} in {rule_set} at offset {offset} is lower than the preceding rule")]
    BaseValueOutOfOrder { rule_set: String, base: i64, offset: usize },

    /// Two rule sets share one name.
    #[error("rule set {rule_set} is declared twice (second declaration at offset {offset})")]
    DuplicateRuleSet { rule_set: String, offset: usize },

    /// A substitution or caller named a rule set that does not exist.
    #[error("rule set {0} is not defined")]
    UndefinedRuleSetReference(String),

    /// A caller asked for a `%%private` rule set directly.
    #[error("rule set {0} is private")]
    PrivateRuleSet(String),

    /// The description declares no public rule set to default to.
    #[error("no public rule set to format with")]
    NoPublicRuleSet,

    /// Evaluation went deeper than [`Options::max_depth`](crate::Options::max_depth).
    #[error("recursion limit of {limit} exceeded in {rule_set}")]
    RecursionBudgetExceeded { rule_set: String, limit: usize },

    /// The value lies below every normal rule of the set.
    #[error("rule set {rule_set} has no rule for {value}")]
    NoApplicableRule { rule_set: String, value: f64 },

    /// NaN or an infinity was passed to `format`.
    #[error("cannot format non-finite value {0}")]
    NonFiniteValue(f64),

    /// An integral value that does not fit the 64-bit rule arithmetic.
    #[error("value {0} is outside the range rules can divide")]
    ValueOutOfRange(f64),

    /// No rule of the set matched a prefix of the input.
    #[error("no rule in {rule_set} matches the input")]
    NoMatch { rule_set: String },

    /// Failure reported by the numeral bridge.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Errors a [`NumeralBridge`](crate::NumeralBridge) reports back to the engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BridgeError {
    #[error("cannot render non-finite value {0}")]
    NonFinite(f64),

    #[error("invalid numeral pattern `{0}`")]
    InvalidPattern(String),
}

/// A specialized `Result` type for rule compilation and evaluation.
pub type Result<T> = std::result::Result<T, Error>;
