//! Compilation, formatting and parsing engine.
//!
//! The engine is split into focused submodules under `src/engine/`; this file
//! only wires them together and re-exports the public pieces.
//!
//! ## How the parts work together
//!
//! ```text
//! description text
//!      │  prepare + split            (description.rs)
//!      │    - blank `//` comments
//!      │    - lift `%%lenient-parse:` out
//!      │    - split on `;` into rule-set sources
//!      v
//!  RuleSetSource ── parse_rule ──> Rule (grammar.rs)
//!      │                             - key: base, radix, divisor
//!      │                             - template tokens
//!      v
//!  CompiledRules::new                (compiled_rules.rs)
//!      - ordering checks, per-set indexes
//!      - Equivalences::parse         (equivalence.rs)
//!      │
//!      ├──> Formatter::format        (formatter.rs)
//!      │      - negative / fraction / normal dispatch
//!      │      - substitutions, optional groups, rollback
//!      │      - ExpansionStep trace  (metrics.rs)
//!      │
//!      └──> Parser::run              (parser.rs)
//!             - fold input into units (equivalence.rs)
//!             - try candidate rules, keep the longest match
//!             - memoize (set, mode, span) results (memo.rs)
//! ```
//!
//! Compilation is the only step that allocates long-lived data. Both
//! directions borrow the compiled model immutably, so one `CompiledRules`
//! can serve any number of threads.
//!
//! ## Responsibilities by module
//!
//! - `description.rs`: comment stripping and top-level splitting.
//! - `grammar.rs`: rule keys, divisor arithmetic and template tokens.
//! - `compiled_rules.rs`: `RuleSet`, `CompiledRules` and the rule lookup.
//! - `equivalence.rs`: `%%lenient-parse` groups and input folding.
//! - `formatter.rs`: value to text.
//! - `parser.rs`: text to value.
//! - `memo.rs`: memo keys that keep left-recursive descriptions finite.
//! - `metrics.rs`: verbose formatting trace.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at `debug` (compilation summaries) and
//! `trace` (every rule application and parse candidate). Install any
//! subscriber to see them.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/description.rs"]
mod description;
#[path = "engine/equivalence.rs"]
mod equivalence;
#[path = "engine/formatter.rs"]
mod formatter;
#[path = "engine/grammar.rs"]
mod grammar;
#[path = "engine/memo.rs"]
mod memo;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;

pub use compiled_rules::{CompiledRules, RuleClasses, RuleSet};
pub(crate) use formatter::Formatter;
pub use metrics::ExpansionStep;
pub(crate) use parser::Parser;
