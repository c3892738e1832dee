use crate::bridge::{DecimalBridge, NumeralBridge};
use crate::engine::{self, CompiledRules, ExpansionStep};
use crate::error::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

static DEFAULT_BRIDGE: DecimalBridge = DecimalBridge;

/// Collaborators a format or parse call relies on.
///
/// The numeral bridge renders and reads the positional numerals that rule
/// text asks for through escapes such as `=#,##0=`.
#[derive(Clone, Copy)]
pub struct Context<'b> {
    pub bridge: &'b dyn NumeralBridge,
}

impl Default for Context<'static> {
    fn default() -> Self {
        Self { bridge: &DEFAULT_BRIDGE }
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("bridge", &"dyn NumeralBridge").finish()
    }
}

/// Options that affect formatting and parsing behavior.
#[derive(Debug, Clone)]
pub struct Options {
    /// Deepest chain of nested rule applications before giving up with
    /// [`Error::RecursionBudgetExceeded`].
    pub max_depth: usize,
    /// Parse with `%%lenient-parse` equivalences, ignorable characters and
    /// case-insensitive comparison.
    pub lenient: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: 64, lenient: false }
    }
}

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOutcome {
    pub value: f64,
    /// Bytes of the input the match consumed, counted from its start.
    pub consumed: usize,
}

/// Result from [`format_verbose_with`].
#[derive(Debug, Clone)]
pub struct FormatResultVerbose {
    pub text: String,
    pub elapsed: Duration,
    /// Every rule application in expansion order.
    pub steps: Vec<ExpansionStep>,
}

/// Compile a rule description.
///
/// # Example
/// ```
/// let rules = rbnf::compile("%main: zero; one; two;").unwrap();
/// assert_eq!(rules.public_rule_set_names(), vec!["%main"]);
/// ```
pub fn compile(description: &str) -> Result<CompiledRules> {
    CompiledRules::new(description)
}

/// Format `value` with the public rule set `rule_set`.
///
/// # Example
/// ```
/// let rules = rbnf::compile("%main: zero; one; two; three; 10: ten[-and->>];").unwrap();
/// assert_eq!(rbnf::format(&rules, 12.0, "%main").unwrap(), "ten-and-two");
/// ```
pub fn format(rules: &CompiledRules, value: f64, rule_set: &str) -> Result<String> {
    format_with(rules, value, Some(rule_set), &Context::default(), &Options::default())
}

/// Format `value` with the provided `context`/`options`.
///
/// `rule_set` defaults to the first public set of the description.
pub fn format_with(
    rules: &CompiledRules,
    value: f64,
    rule_set: Option<&str>,
    context: &Context<'_>,
    options: &Options,
) -> Result<String> {
    let (_, set) = rules.entry_set(rule_set)?;
    let text = engine::Formatter::new(rules, context.bridge, options.max_depth).format(set, value)?;
    debug!(rule_set = set.name(), value, text = text.as_str(), "formatted");
    Ok(text)
}

/// Format `value` and return the rule-by-rule expansion trace.
///
/// The default [`format_with`] path does not allocate this trace.
pub fn format_verbose_with(
    rules: &CompiledRules,
    value: f64,
    rule_set: Option<&str>,
    context: &Context<'_>,
    options: &Options,
) -> Result<FormatResultVerbose> {
    let start = Instant::now();
    let (_, set) = rules.entry_set(rule_set)?;

    let mut formatter = engine::Formatter::new(rules, context.bridge, options.max_depth).with_trace();
    let text = formatter.format(set, value)?;
    let mut trace = formatter.into_trace();
    trace.elapsed = start.elapsed();

    debug!(rule_set = set.name(), value, steps = trace.steps.len(), depth = trace.max_depth(), "formatted (verbose)");
    Ok(FormatResultVerbose { text, elapsed: trace.elapsed, steps: trace.steps })
}

/// Parse `text` with the public rule set `rule_set`.
///
/// The match may stop before the end of `text`; see
/// [`ParseOutcome::consumed`].
pub fn parse(rules: &CompiledRules, text: &str, rule_set: &str, lenient: bool) -> Result<ParseOutcome> {
    let options = Options { lenient, ..Options::default() };
    parse_with(rules, text, Some(rule_set), &Context::default(), &options)
}

/// Parse `text` with the provided `context`/`options`.
pub fn parse_with(
    rules: &CompiledRules,
    text: &str,
    rule_set: Option<&str>,
    context: &Context<'_>,
    options: &Options,
) -> Result<ParseOutcome> {
    let (index, set) = rules.entry_set(rule_set)?;
    let mut parser = engine::Parser::new(rules, context.bridge, text, options.lenient, options.max_depth);

    match parser.run(index)? {
        Some((value, consumed)) => {
            debug!(rule_set = set.name(), value, consumed, lenient = options.lenient, "parsed");
            Ok(ParseOutcome { value, consumed })
        }
        None => Err(Error::NoMatch { rule_set: set.name().to_string() }),
    }
}
