//! Value to text.
//!
//! Formatting picks one rule for the value and expands its template:
//!
//! ```text
//! value ──> negative?   ── -x rule, or "-" + |value|
//!       ──> fractional? ── 0.x (value < 1) → x.x → x.0 → rounded normal rule
//!       ──> integral    ── x.0 when present, else the normal rule
//!                          (greatest base ≤ value, one-step rollback)
//! ```
//!
//! Each substitution recurses with a derived value. Output is written into
//! one buffer owned by the caller, and an error aborts the whole call, so a
//! failed format never returns partial text.

use super::compiled_rules::{CompiledRules, RuleSet};
use super::metrics::FormatTrace;
use crate::bridge::NumeralBridge;
use crate::error::{Error, Result};
use crate::{FractionForm, Rule, Segment, Substitution, Target};
use tracing::trace;

/// Closest-match tolerance when choosing a fraction-rule-set denominator.
const FRACTION_EPSILON: f64 = 1e-9;

/// Values strictly inside this bound convert to `i64` without loss of range.
const WHOLE_LIMIT: f64 = 9_223_372_036_854_775_807.0;

/// A value handed to a rule: integral values use exact integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Operand {
    Whole(i64),
    Real(f64),
}

impl Operand {
    fn as_f64(self) -> f64 {
        match self {
            Operand::Whole(n) => n as f64,
            Operand::Real(v) => v,
        }
    }

    fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }
}

fn to_whole(value: f64) -> Result<i64> {
    if value > -WHOLE_LIMIT && value < WHOLE_LIMIT {
        Ok(value as i64)
    } else {
        Err(Error::ValueOutOfRange(value))
    }
}

/// How the rule being expanded was reached; decides what each token means.
#[derive(Debug, Clone, Copy)]
enum Application {
    Normal { index: usize },
    Fraction,
    Negative,
    FractionSet,
}

/// Values the substitutions of one rule application see.
#[derive(Debug, Clone, Copy)]
struct Operands {
    whole: Operand,
    quotient: Operand,
    remainder: Operand,
    /// Fraction-set mode: optional groups are kept only for numerators other than 1.
    singular: Option<bool>,
}

pub(crate) struct Formatter<'a> {
    rules: &'a CompiledRules,
    bridge: &'a dyn NumeralBridge,
    max_depth: usize,
    trace: Option<FormatTrace>,
}

impl<'a> Formatter<'a> {
    pub(crate) fn new(rules: &'a CompiledRules, bridge: &'a dyn NumeralBridge, max_depth: usize) -> Self {
        Self { rules, bridge, max_depth, trace: None }
    }

    /// Record every rule application.
    pub(crate) fn with_trace(mut self) -> Self {
        self.trace = Some(FormatTrace::default());
        self
    }

    pub(crate) fn into_trace(self) -> FormatTrace {
        self.trace.unwrap_or_default()
    }

    pub(crate) fn format(&mut self, set: &'a RuleSet, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(Error::NonFiniteValue(value));
        }
        let mut out = String::new();
        self.format_real(set, value, 0, &mut out)?;
        Ok(out)
    }

    // --- Dispatch ------------------------------------------------------------

    fn format_operand(&mut self, set: &'a RuleSet, operand: Operand, depth: usize, out: &mut String) -> Result<()> {
        match operand {
            Operand::Whole(n) => self.format_whole(set, n, depth, out),
            Operand::Real(v) => self.format_real(set, v, depth, out),
        }
    }

    fn format_real(&mut self, set: &'a RuleSet, value: f64, depth: usize, out: &mut String) -> Result<()> {
        self.enter(set, depth)?;

        if value < 0.0 {
            let magnitude = -value;
            let operand =
                if magnitude.fract() == 0.0 { Operand::Whole(to_whole(magnitude)?) } else { Operand::Real(magnitude) };
            return self.format_negative(set, operand, depth, out);
        }

        if value.fract() != 0.0 {
            let proper = set.fraction_rule(FractionForm::Proper).filter(|_| value < 1.0);
            let rule = proper
                .or_else(|| set.fraction_rule(FractionForm::Improper))
                .or_else(|| set.fraction_rule(FractionForm::Whole));
            return match rule {
                Some(rule) => self.apply_fraction(set, rule, value, depth, out),
                None => self.format_whole(set, to_whole(value.round())?, depth, out),
            };
        }

        match set.fraction_rule(FractionForm::Whole) {
            Some(rule) => self.apply_fraction(set, rule, value, depth, out),
            None => self.format_whole(set, to_whole(value)?, depth, out),
        }
    }

    fn format_whole(&mut self, set: &'a RuleSet, value: i64, depth: usize, out: &mut String) -> Result<()> {
        self.enter(set, depth)?;

        if value < 0 {
            let magnitude = value.checked_neg().ok_or(Error::ValueOutOfRange(value as f64))?;
            return self.format_negative(set, Operand::Whole(magnitude), depth, out);
        }

        let index = set
            .find_rule(value)
            .ok_or_else(|| Error::NoApplicableRule { rule_set: set.name().to_string(), value: value as f64 })?;
        let index = rollback(set, index, value);
        self.apply_normal(set, index, value, depth, out)
    }

    fn format_negative(&mut self, set: &'a RuleSet, magnitude: Operand, depth: usize, out: &mut String) -> Result<()> {
        match set.negative_rule() {
            Some(rule) => {
                self.record(set, rule, -magnitude.as_f64(), depth);
                let operands = Operands { whole: magnitude, quotient: magnitude, remainder: magnitude, singular: None };
                self.expand(set, rule, Application::Negative, &operands, depth, out)
            }
            None => {
                out.push('-');
                self.format_operand(set, magnitude, depth + 1, out)
            }
        }
    }

    // --- Rule application ----------------------------------------------------

    fn apply_normal(
        &mut self,
        set: &'a RuleSet,
        index: usize,
        value: i64,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        let rule = &set.rules()[index];
        let divisor = rule.divisor();
        self.record(set, rule, value as f64, depth);

        let operands = Operands {
            whole: Operand::Whole(value),
            quotient: Operand::Whole(value / divisor),
            remainder: Operand::Whole(value % divisor),
            singular: None,
        };
        self.expand(set, rule, Application::Normal { index }, &operands, depth, out)
    }

    fn apply_fraction(
        &mut self,
        set: &'a RuleSet,
        rule: &'a Rule,
        value: f64,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        self.record(set, rule, value, depth);

        let integral = value.trunc();
        let operands = Operands {
            whole: Operand::Real(value),
            quotient: Operand::Whole(to_whole(integral)?),
            remainder: Operand::Real(value - integral),
            singular: None,
        };
        self.expand(set, rule, Application::Fraction, &operands, depth, out)
    }

    /// Fraction-rule-set mode: every normal rule base is a candidate
    /// denominator, and the one that brings `fraction * base` closest to an
    /// integer wins. Earlier rules win ties.
    fn format_fraction_set(&mut self, set: &'a RuleSet, fraction: f64, depth: usize, out: &mut String) -> Result<()> {
        self.enter(set, depth)?;

        let mut best: Option<(usize, f64)> = None;
        for (index, rule) in set.rules().iter().enumerate().filter(|(_, r)| r.base() > 0) {
            let scaled = fraction * rule.base() as f64;
            let miss = (scaled - scaled.round()).abs();
            if best.is_none_or(|(_, closest)| miss < closest - FRACTION_EPSILON) {
                best = Some((index, miss));
                if miss < FRACTION_EPSILON {
                    break;
                }
            }
        }

        let (index, _) =
            best.ok_or_else(|| Error::NoApplicableRule { rule_set: set.name().to_string(), value: fraction })?;
        let rule = &set.rules()[index];
        let numerator = to_whole((fraction * rule.base() as f64).round())?;
        self.record(set, rule, fraction, depth);

        let operands = Operands {
            whole: Operand::Whole(numerator),
            quotient: Operand::Whole(numerator),
            remainder: Operand::Whole(0),
            singular: Some(numerator == 1),
        };
        self.expand(set, rule, Application::FractionSet, &operands, depth, out)
    }

    // --- Templates -----------------------------------------------------------

    fn expand(
        &mut self,
        set: &'a RuleSet,
        rule: &'a Rule,
        app: Application,
        operands: &Operands,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        for segment in rule.template() {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Substitution(sub) => self.substitute(set, rule, app, operands, sub, depth, out)?,
                Segment::Optional(inner) => {
                    if elided(inner, operands) {
                        continue;
                    }
                    for segment in inner {
                        match segment {
                            Segment::Text(text) => out.push_str(text),
                            Segment::Substitution(sub) => self.substitute(set, rule, app, operands, sub, depth, out)?,
                            Segment::Optional(_) => {}
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn substitute(
        &mut self,
        set: &'a RuleSet,
        rule: &'a Rule,
        app: Application,
        operands: &Operands,
        sub: &'a Substitution,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        match (sub, app) {
            (Substitution::Quotient(target), Application::FractionSet) => {
                // `<<` in a fraction set spells the numerator with the default set.
                let owner = self.rules.default_rule_set().unwrap_or(set);
                self.render(owner, target, operands.quotient, depth, out)
            }
            (Substitution::Quotient(target), Application::Normal { .. })
                if matches!(target, Target::Numeral(pattern) if pattern.keeps_fraction()) =>
            {
                let scaled = operands.whole.as_f64() / rule.divisor() as f64;
                self.render(set, target, Operand::Real(scaled), depth, out)
            }
            (Substitution::Quotient(target), _) => self.render(set, target, operands.quotient, depth, out),

            (Substitution::Remainder(Target::Owner), Application::Fraction) => {
                self.spell_digits(set, operands.whole.as_f64(), " ", depth, out)
            }
            (Substitution::Remainder(Target::RuleSet(name)), Application::Fraction) => {
                let target = self.lookup(name)?;
                self.format_fraction_set(target, operands.remainder.as_f64(), depth + 1, out)
            }
            (Substitution::Remainder(target), _) => self.render(set, target, operands.remainder, depth, out),

            (Substitution::ForcedRemainder, Application::Fraction) => {
                self.spell_digits(set, operands.whole.as_f64(), "", depth, out)
            }
            (Substitution::ForcedRemainder, Application::Normal { index }) if index > 0 => {
                let Operand::Whole(remainder) = operands.remainder else {
                    return self.render(set, &Target::Owner, operands.remainder, depth, out);
                };
                self.enter(set, depth + 1)?;
                self.apply_normal(set, index - 1, remainder, depth + 1, out)
            }
            (Substitution::ForcedRemainder, _) => self.render(set, &Target::Owner, operands.remainder, depth, out),

            (Substitution::SameValue(target), _) => self.render(set, target, operands.whole, depth, out),
        }
    }

    fn render(
        &mut self,
        owner: &'a RuleSet,
        target: &Target,
        operand: Operand,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        match target {
            Target::Owner => self.format_operand(owner, operand, depth + 1, out),
            Target::RuleSet(name) => {
                let set = self.lookup(name)?;
                self.format_operand(set, operand, depth + 1, out)
            }
            Target::Numeral(pattern) => {
                out.push_str(&self.bridge.format_numeral(operand.as_f64(), pattern)?);
                Ok(())
            }
        }
    }

    /// Spell the fraction digits of `value` one by one with the owning set.
    fn spell_digits(
        &mut self,
        set: &'a RuleSet,
        value: f64,
        separator: &str,
        depth: usize,
        out: &mut String,
    ) -> Result<()> {
        let rendered = format!("{}", value.abs());
        let digits = rendered.split_once('.').map_or("", |(_, d)| d);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            let digit = i64::from(digit.to_digit(10).unwrap_or(0));
            self.format_whole(set, digit, depth + 1, out)?;
        }
        Ok(())
    }

    // --- Helpers -------------------------------------------------------------

    fn lookup(&self, name: &str) -> Result<&'a RuleSet> {
        let rules: &'a CompiledRules = self.rules;
        rules.rule_set(name).ok_or_else(|| Error::UndefinedRuleSetReference(name.to_string()))
    }

    fn enter(&self, set: &RuleSet, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::RecursionBudgetExceeded { rule_set: set.name().to_string(), limit: self.max_depth });
        }
        Ok(())
    }

    fn record(&mut self, set: &RuleSet, rule: &Rule, value: f64, depth: usize) {
        trace!(rule_set = set.name(), rule = %rule, value, depth, "apply rule");
        if let Some(trace) = self.trace.as_mut() {
            trace.record(depth, set.name(), rule.to_string(), value);
        }
    }
}

/// Step back one rule when a two-substitution rule would print a zero
/// remainder the previous rule would not (e.g. "two hundredth" instead of
/// "two hundred zeroth" for a base-101 rule).
fn rollback(set: &RuleSet, index: usize, value: i64) -> usize {
    let rule = &set.rules()[index];
    let divisor = rule.divisor();
    if index > 0 && rule.substitution_count() == 2 && value % divisor == 0 && rule.base() % divisor != 0 {
        index - 1
    } else {
        index
    }
}

/// An optional group is dropped when the value its first substitution
/// governs is zero. `>>>` groups are always kept.
fn elided(inner: &[Segment], operands: &Operands) -> bool {
    if let Some(singular) = operands.singular {
        return singular;
    }
    match Segment::first_substitution(inner) {
        Some(Substitution::Quotient(_)) => operands.quotient.is_zero(),
        Some(Substitution::ForcedRemainder) => false,
        Some(Substitution::SameValue(_)) => operands.whole.is_zero(),
        Some(Substitution::Remainder(_)) | None => operands.remainder.is_zero(),
    }
}
