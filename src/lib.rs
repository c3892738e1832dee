//! Rule-based number formatting.
//!
//! A description written in the RBNF rule language is compiled once into a
//! [`CompiledRules`] model, then used to spell values out ([`format`]) or to
//! read them back from text ([`parse`]).
//!
//! ```
//! let rules = rbnf::compile(
//!     "zero; one; two; three; four; five; six; seven; eight; nine;\n\
//!      10: ten[ and >>];",
//! )
//! .unwrap();
//!
//! assert_eq!(rbnf::format(&rules, 13.0, "%default").unwrap(), "ten and three");
//! assert_eq!(rbnf::parse(&rules, "ten and three", "%default", true).unwrap().value, 13.0);
//! ```

#[macro_use]
mod macros;
mod api;
mod bridge;
mod engine;
mod error;

use std::fmt;

pub use api::{
    Context, FormatResultVerbose, Options, ParseOutcome, compile, format, format_verbose_with, format_with, parse,
    parse_with,
};
pub use bridge::{DecimalBridge, NumeralBridge, NumeralPattern};
pub use engine::{CompiledRules, ExpansionStep, RuleClasses, RuleSet};
pub use error::{BridgeError, Error, Result};

// --- Rule model --------------------------------------------------------------

/// The reserved key a fraction rule was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractionForm {
    /// `x.x`: values with a fractional part.
    Improper,
    /// `0.x`: values strictly between 0 and 1.
    Proper,
    /// `x.0`: every non-negative value when present. The other two forms
    /// take over only for values with a fractional part.
    Whole,
}

impl FractionForm {
    pub(crate) const ALL: [FractionForm; 3] = [FractionForm::Improper, FractionForm::Proper, FractionForm::Whole];

    pub(crate) fn slot(self) -> usize {
        match self {
            FractionForm::Improper => 0,
            FractionForm::Proper => 1,
            FractionForm::Whole => 2,
        }
    }
}

/// How a rule was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `-x:`
    Negative,
    /// `x.x:`, `0.x:` or `x.0:`
    Fraction(FractionForm),
    /// Explicit numeric key such as `20:` or `1000/12:`.
    Numeric,
    /// Numeric key with trailing `>` marks; each lowers the divisor exponent by one.
    ExponentDecrement(u32),
    /// Rule without a key; its base continues from the previous rule.
    MasterPattern,
}

impl RuleKind {
    /// True for the rules selected by base value.
    pub fn is_normal(self) -> bool {
        matches!(self, RuleKind::Numeric | RuleKind::ExponentDecrement(_) | RuleKind::MasterPattern)
    }
}

/// One compiled rule: its key data plus the text template.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub(crate) kind: RuleKind,
    pub(crate) base: i64,
    pub(crate) radix: u32,
    pub(crate) divisor: i64,
    pub(crate) template: Vec<Segment>,
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Threshold at or above which the rule applies (0 for special rules).
    pub fn base(&self) -> i64 {
        self.base
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Power of the radix splitting the value into quotient and remainder.
    pub fn divisor(&self) -> i64 {
        self.divisor
    }

    pub fn template(&self) -> &[Segment] {
        &self.template
    }

    /// Number of substitutions in the template, optional groups included.
    pub fn substitution_count(&self) -> usize {
        fn count(segments: &[Segment]) -> usize {
            segments
                .iter()
                .map(|s| match s {
                    Segment::Text(_) => 0,
                    Segment::Substitution(_) => 1,
                    Segment::Optional(inner) => count(inner),
                })
                .sum()
        }
        count(&self.template)
    }
}

/// Renders the rule key the way it is written in a description.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Negative => f.write_str("-x"),
            RuleKind::Fraction(FractionForm::Improper) => f.write_str("x.x"),
            RuleKind::Fraction(FractionForm::Proper) => f.write_str("0.x"),
            RuleKind::Fraction(FractionForm::Whole) => f.write_str("x.0"),
            RuleKind::Numeric | RuleKind::MasterPattern | RuleKind::ExponentDecrement(_) => {
                write!(f, "{}", self.base)?;
                if self.radix != 10 {
                    write!(f, "/{}", self.radix)?;
                }
                if let RuleKind::ExponentDecrement(n) = self.kind {
                    for _ in 0..n {
                        f.write_str(">")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// A piece of a rule template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied verbatim.
    Text(String),
    Substitution(Substitution),
    /// `[...]`: dropped when its governing value is zero.
    Optional(Vec<Segment>),
}

impl Segment {
    /// First substitution in `segments`, which governs optional-group elision.
    pub(crate) fn first_substitution(segments: &[Segment]) -> Option<&Substitution> {
        segments.iter().find_map(|s| match s {
            Segment::Substitution(sub) => Some(sub),
            _ => None,
        })
    }
}

/// A substitution token.
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// `<<`, `<%name<`, `<#,##0<`
    Quotient(Target),
    /// `>>`, `>%name>`, `>0>`
    Remainder(Target),
    /// `>>>`: remainder through the preceding rule, never elided.
    ForcedRemainder,
    /// `==`, `=%name=`, `=#,##0=`
    SameValue(Target),
}

/// Where a substitution sends its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// The rule set that owns the rule.
    Owner,
    /// A rule set named by `%name` or `%%name`.
    RuleSet(String),
    /// A numeral pattern handled by the bridge.
    Numeral(NumeralPattern),
}
