//! Text to value.
//!
//! Parsing runs the rules backwards. For a rule set and a span of the input,
//! every candidate rule tries to match its template against a prefix of the
//! span; the candidate that consumes the most text wins and earlier
//! candidates win ties.
//!
//! ## Candidates
//!
//! ```text
//! Mode::Full          -x, x.x, 0.x, x.0, then normal rules by descending base
//! Mode::Integer(b)    normal rules with base < b, results below b
//! Mode::FractionSet   normal rules with base > 0, value = numerator / base
//! ```
//!
//! A `<<` or `>>` inside a normal rule parses in `Integer` mode bounded by the
//! rule's divisor, which keeps "one hundred" from being read as a quotient of
//! the thousands rule.
//!
//! ## Templates
//!
//! A template with optional groups expands into alternatives (with and
//! without each group). Matching an alternative walks its elements:
//!
//! - literal text must match at the current position;
//! - a substitution followed by a literal tries every position where that
//!   literal occurs, and must consume exactly the text before it;
//! - two adjacent substitutions try every split point, shortest first, and
//!   stop at the first one that covers the whole span;
//! - a trailing substitution takes its longest match.
//!
//! ## Lenient mode
//!
//! Input and literals are folded into units through the `%%lenient-parse`
//! equivalences (`equivalence.rs`). Ignorable units may be skipped between
//! significant ones, and comparison is case-insensitive.

use super::compiled_rules::{CompiledRules, RuleClasses, RuleSet};
use super::equivalence::{Equivalences, Unit, UnitKey};
use super::memo::{MemoKey, Slot};
use crate::bridge::{NumeralBridge, NumeralPattern};
use crate::error::{Error, Result};
use crate::{FractionForm, Rule, Segment, Substitution, Target};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

/// A value read from the units `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Match {
    pub value: f64,
    pub end: usize,
}

/// Which rules of a set may answer a parse question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Mode {
    Full,
    Integer { bound: Option<i64> },
    FractionSet,
}

#[derive(Debug, Clone, Copy)]
enum Application {
    Normal { index: usize, base: i64, divisor: i64 },
    Fraction,
    Negative,
    FractionSet { base: i64 },
}

/// The rule currently being matched.
#[derive(Debug, Clone, Copy)]
struct RuleScope {
    set: usize,
    app: Application,
    /// Bound inherited from the enclosing `Integer` question.
    bound: Option<i64>,
}

/// Substitution values read so far.
#[derive(Debug, Clone, Copy, Default)]
struct Parts {
    quotient: Option<f64>,
    remainder: Option<f64>,
    same: Option<f64>,
}

impl Parts {
    fn with(mut self, sub: &Substitution, value: f64) -> Self {
        match sub {
            Substitution::Quotient(_) => self.quotient = Some(value),
            Substitution::Remainder(_) | Substitution::ForcedRemainder => self.remainder = Some(value),
            Substitution::SameValue(_) => {
                self.same.get_or_insert(value);
            }
        }
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Elem<'r> {
    Text(&'r str),
    Sub(&'r Substitution),
}

/// A rule literal folded the same way as the input.
#[derive(Debug)]
struct Literal {
    keys: Vec<UnitKey>,
    only_ignorable: bool,
}

impl Literal {
    fn fold(rules: &CompiledRules, lenient: bool, text: &str) -> Self {
        let units = if lenient { rules.equivalences().fold(text) } else { Equivalences::exact(text) };
        Literal {
            keys: units.iter().filter(|u| !u.ignorable).map(|u| u.key).collect(),
            only_ignorable: !units.is_empty() && units.iter().all(|u| u.ignorable),
        }
    }
}

pub(crate) struct Parser<'a> {
    rules: &'a CompiledRules,
    bridge: &'a dyn NumeralBridge,
    text: &'a str,
    lenient: bool,
    max_depth: usize,
    units: Vec<Unit>,
    memo: HashMap<MemoKey, Slot<Option<Match>>>,
    literals: HashMap<&'a str, Rc<Literal>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        rules: &'a CompiledRules,
        bridge: &'a dyn NumeralBridge,
        text: &'a str,
        lenient: bool,
        max_depth: usize,
    ) -> Self {
        let units = if lenient { rules.equivalences().fold(text) } else { Equivalences::exact(text) };
        Self { rules, bridge, text, lenient, max_depth, units, memo: HashMap::new(), literals: HashMap::new() }
    }

    /// Parse the longest prefix of the input with the set at `set`.
    ///
    /// Returns the value and the number of bytes consumed, or `None` when no
    /// rule matches a non-empty prefix.
    pub(crate) fn run(&mut self, set: usize) -> Result<Option<(f64, usize)>> {
        let end = self.units.len();
        let found = self.parse_set(set, Mode::Full, 0, end, 0)?;
        trace!(memo_entries = self.memo.len(), found = ?found, "parse finished");
        Ok(found.filter(|m| m.end > 0).map(|m| (m.value, self.units[m.end - 1].end)))
    }

    // --- Rule sets -----------------------------------------------------------

    fn parse_set(&mut self, set: usize, mode: Mode, start: usize, end: usize, depth: usize) -> Result<Option<Match>> {
        let key = MemoKey { set, mode, start, end };
        match self.memo.get(&key) {
            Some(Slot::Pending) => return Ok(None),
            Some(Slot::Done(found)) => return Ok(*found),
            None => {}
        }

        let rules: &'a CompiledRules = self.rules;
        let rule_set = rules.set_at(set);
        if depth > self.max_depth {
            return Err(Error::RecursionBudgetExceeded { rule_set: rule_set.name().to_string(), limit: self.max_depth });
        }

        self.memo.insert(key, Slot::Pending);
        let found = self.best_candidate(set, rule_set, mode, start, end, depth)?;
        self.memo.insert(key, Slot::Done(found));
        Ok(found)
    }

    fn best_candidate(
        &mut self,
        set: usize,
        rule_set: &'a RuleSet,
        mode: Mode,
        start: usize,
        end: usize,
        depth: usize,
    ) -> Result<Option<Match>> {
        let mut best = None;
        match mode {
            Mode::Full => {
                let classes = rule_set.classes();
                if let Some(rule) = rule_set.negative_rule().filter(|_| classes.contains(RuleClasses::NEGATIVE)) {
                    let found = self.match_rule(set, rule, Application::Negative, None, start, end, depth)?;
                    keep_longest(&mut best, found);
                }
                if classes.intersects(RuleClasses::FRACTION) {
                    for rule in FractionForm::ALL.into_iter().filter_map(|form| rule_set.fraction_rule(form)) {
                        let found = self.match_rule(set, rule, Application::Fraction, None, start, end, depth)?;
                        keep_longest(&mut best, found);
                    }
                }
                for (index, rule) in rule_set.rules().iter().enumerate().rev() {
                    let app = Application::Normal { index, base: rule.base(), divisor: rule.divisor() };
                    let found = self.match_rule(set, rule, app, None, start, end, depth)?;
                    keep_longest(&mut best, found);
                }
            }
            Mode::Integer { bound } => {
                let below = |v: f64| bound.is_none_or(|b| v < b as f64);
                for (index, rule) in rule_set.rules().iter().enumerate().rev() {
                    if !below(rule.base() as f64) {
                        continue;
                    }
                    let app = Application::Normal { index, base: rule.base(), divisor: rule.divisor() };
                    let found = self.match_rule(set, rule, app, bound, start, end, depth)?;
                    keep_longest(&mut best, found.filter(|m| below(m.value)));
                }
            }
            Mode::FractionSet => {
                for rule in rule_set.rules().iter().rev().filter(|r| r.base() > 0) {
                    let app = Application::FractionSet { base: rule.base() };
                    let found = self.match_rule(set, rule, app, None, start, end, depth)?;
                    keep_longest(&mut best, found);
                }
            }
        }

        trace!(rule_set = rule_set.name(), ?mode, start, end, value = best.map(|m| m.value), "parse candidates");
        Ok(best)
    }

    // --- Rules ---------------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    fn match_rule(
        &mut self,
        set: usize,
        rule: &'a Rule,
        app: Application,
        bound: Option<i64>,
        start: usize,
        end: usize,
        depth: usize,
    ) -> Result<Option<Match>> {
        let scope = RuleScope { set, app, bound };
        let mut best = None;
        for elems in alternatives(rule.template()) {
            if let Some((stop, parts)) = self.match_elems(&scope, &elems, start, end, Parts::default(), depth)? {
                keep_longest(&mut best, Some(Match { value: compose(app, parts), end: stop }));
            }
        }
        Ok(best)
    }

    fn match_elems(
        &mut self,
        scope: &RuleScope,
        elems: &[Elem<'a>],
        pos: usize,
        end: usize,
        parts: Parts,
        depth: usize,
    ) -> Result<Option<(usize, Parts)>> {
        let Some((first, rest)) = elems.split_first() else {
            return Ok(Some((pos, parts)));
        };

        let sub = match *first {
            Elem::Text(text) => {
                return match self.match_literal(text, pos, end) {
                    Some(next) => self.match_elems(scope, rest, next, end, parts, depth),
                    None => Ok(None),
                };
            }
            Elem::Sub(sub) => sub,
        };

        let mut best: Option<(usize, Parts)> = None;
        match rest.first() {
            Some(&Elem::Text(delimiter)) => {
                for split in pos..=end {
                    let Some(after) = self.match_literal(delimiter, split, end) else { continue };
                    let Some(value) = self.parse_exact(scope, sub, pos, split, depth)? else { continue };
                    let found = self.match_elems(scope, &rest[1..], after, end, parts.with(sub, value), depth)?;
                    keep_furthest(&mut best, found);
                    if reaches(best, end) {
                        break;
                    }
                }
            }
            Some(&Elem::Sub(_)) => {
                for split in pos..=end {
                    let Some(value) = self.parse_exact(scope, sub, pos, split, depth)? else { continue };
                    let found = self.match_elems(scope, rest, split, end, parts.with(sub, value), depth)?;
                    keep_furthest(&mut best, found);
                    if reaches(best, end) {
                        break;
                    }
                }
            }
            None => {
                if let Some(found) = self.parse_sub(scope, sub, pos, end, depth)? {
                    best = Some((found.end, parts.with(sub, found.value)));
                }
            }
        }
        Ok(best)
    }

    // --- Substitutions -------------------------------------------------------

    /// Parse `sub` so that it covers exactly `[start, stop)` (trailing
    /// ignorables allowed in lenient mode).
    fn parse_exact(
        &mut self,
        scope: &RuleScope,
        sub: &'a Substitution,
        start: usize,
        stop: usize,
        depth: usize,
    ) -> Result<Option<f64>> {
        let Some(found) = self.parse_sub(scope, sub, start, stop, depth)? else {
            return Ok(None);
        };
        let covered = found.end == stop || (self.lenient && self.units[found.end..stop].iter().all(|u| u.ignorable));
        Ok(covered.then_some(found.value))
    }

    fn parse_sub(
        &mut self,
        scope: &RuleScope,
        sub: &'a Substitution,
        start: usize,
        stop: usize,
        depth: usize,
    ) -> Result<Option<Match>> {
        let set = scope.set;
        let depth = depth + 1;

        match (scope.app, sub) {
            (Application::Normal { divisor, .. }, Substitution::Quotient(target)) => {
                self.parse_target(set, target, Mode::Integer { bound: Some(divisor) }, start, stop, depth)
            }
            (Application::Normal { divisor, .. }, Substitution::Remainder(target)) => {
                let found = self.parse_target(set, target, Mode::Integer { bound: Some(divisor) }, start, stop, depth)?;
                Ok(found.filter(|m| m.value < divisor as f64))
            }
            (Application::Normal { index, divisor, .. }, Substitution::ForcedRemainder) => {
                if index == 0 {
                    let mode = Mode::Integer { bound: Some(divisor) };
                    return self.parse_target(set, &Target::Owner, mode, start, stop, depth);
                }
                let rules: &'a CompiledRules = self.rules;
                let prev = &rules.set_at(set).rules()[index - 1];
                let app = Application::Normal { index: index - 1, base: prev.base(), divisor: prev.divisor() };
                self.match_rule(set, prev, app, Some(divisor), start, stop, depth)
            }
            (Application::Normal { .. }, Substitution::SameValue(target)) => {
                self.parse_target(set, target, Mode::Integer { bound: scope.bound }, start, stop, depth)
            }

            (Application::Fraction, Substitution::Quotient(target)) => {
                self.parse_target(set, target, Mode::Integer { bound: None }, start, stop, depth)
            }
            (Application::Fraction, Substitution::Remainder(Target::Owner)) => {
                self.parse_digits(set, true, start, stop, depth)
            }
            (Application::Fraction, Substitution::ForcedRemainder) => self.parse_digits(set, false, start, stop, depth),
            (Application::Fraction, Substitution::Remainder(Target::RuleSet(name))) => {
                let target = self.resolve(name)?;
                self.parse_set(target, Mode::FractionSet, start, stop, depth)
            }
            (Application::Fraction, Substitution::Remainder(target) | Substitution::SameValue(target)) => {
                self.parse_target(set, target, Mode::Full, start, stop, depth)
            }

            (Application::Negative, Substitution::ForcedRemainder) => {
                self.parse_target(set, &Target::Owner, Mode::Full, start, stop, depth)
            }
            (
                Application::Negative,
                Substitution::Quotient(target) | Substitution::Remainder(target) | Substitution::SameValue(target),
            ) => self.parse_target(set, target, Mode::Full, start, stop, depth),

            (Application::FractionSet { .. }, Substitution::Quotient(Target::Owner)) => {
                let numerator_set = self.rules.default_index().unwrap_or(set);
                self.parse_set(numerator_set, Mode::Integer { bound: None }, start, stop, depth)
            }
            (Application::FractionSet { .. }, Substitution::ForcedRemainder) => {
                self.parse_target(set, &Target::Owner, Mode::Integer { bound: None }, start, stop, depth)
            }
            (
                Application::FractionSet { .. },
                Substitution::Quotient(target) | Substitution::Remainder(target) | Substitution::SameValue(target),
            ) => self.parse_target(set, target, Mode::Integer { bound: None }, start, stop, depth),
        }
    }

    fn parse_target(
        &mut self,
        owner: usize,
        target: &Target,
        mode: Mode,
        start: usize,
        stop: usize,
        depth: usize,
    ) -> Result<Option<Match>> {
        match target {
            Target::Owner => self.parse_set(owner, mode, start, stop, depth),
            Target::RuleSet(name) => {
                let set = self.resolve(name)?;
                self.parse_set(set, mode, start, stop, depth)
            }
            Target::Numeral(pattern) => Ok(self.parse_numeral(pattern, start, stop)),
        }
    }

    /// Digits spelled one by one after a decimal point (`>>` in a fraction
    /// rule; `>>>` when `spaced` is false).
    fn parse_digits(
        &mut self,
        set: usize,
        spaced: bool,
        start: usize,
        stop: usize,
        depth: usize,
    ) -> Result<Option<Match>> {
        let mut digits = String::new();
        let mut pos = start;

        loop {
            let mut at = pos;
            if spaced && !digits.is_empty() {
                if self.lenient {
                    while at < stop && self.units[at].ignorable {
                        at += 1;
                    }
                } else if at < stop && self.units[at].key == UnitKey::Char(' ') {
                    at += 1;
                } else {
                    break;
                }
            }

            let Some(found) = self.parse_set(set, Mode::Integer { bound: Some(10) }, at, stop, depth)? else { break };
            if found.end == at || found.value.fract() != 0.0 || !(0.0..10.0).contains(&found.value) {
                break;
            }
            digits.push(char::from(b'0' + found.value as u8));
            pos = found.end;
        }

        if digits.is_empty() {
            return Ok(None);
        }
        Ok(format!("0.{digits}").parse::<f64>().ok().map(|value| Match { value, end: pos }))
    }

    /// Hand the span to the bridge as plain text; in lenient mode ignorable
    /// units are left out, so declared separators read as digit grouping.
    fn parse_numeral(&self, pattern: &NumeralPattern, start: usize, stop: usize) -> Option<Match> {
        let mut compact = String::new();
        let mut boundaries: Vec<(usize, usize)> = Vec::new();
        for (offset, unit) in self.units[start..stop].iter().enumerate() {
            if self.lenient && unit.ignorable {
                continue;
            }
            compact.push_str(&self.text[unit.start..unit.end]);
            boundaries.push((compact.len(), start + offset + 1));
        }

        let (value, consumed) = self.bridge.parse_numeral(&compact, pattern)?;
        let end = boundaries.iter().take_while(|(len, _)| *len <= consumed).last().map(|&(_, end)| end)?;
        Some(Match { value, end })
    }

    // --- Literals ------------------------------------------------------------

    fn match_literal(&mut self, text: &'a str, pos: usize, end: usize) -> Option<usize> {
        let (rules, lenient) = (self.rules, self.lenient);
        let literal =
            Rc::clone(self.literals.entry(text).or_insert_with(|| Rc::new(Literal::fold(rules, lenient, text))));

        let mut at = pos;
        if literal.keys.is_empty() {
            if !literal.only_ignorable {
                return Some(pos);
            }
            while at < end && self.units[at].ignorable {
                at += 1;
            }
            return (at > pos).then_some(at);
        }

        for key in &literal.keys {
            while self.lenient && at < end && self.units[at].ignorable {
                at += 1;
            }
            if at < end && self.units[at].key == *key {
                at += 1;
            } else {
                return None;
            }
        }
        Some(at)
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.rules.index_of(name).ok_or_else(|| Error::UndefinedRuleSetReference(name.to_string()))
    }
}

/// Expand optional groups into with/without alternatives, "with" first.
fn alternatives(template: &[Segment]) -> Vec<Vec<Elem<'_>>> {
    let mut alts: Vec<Vec<Elem<'_>>> = vec![Vec::new()];
    for segment in template {
        match segment {
            Segment::Text(text) => alts.iter_mut().for_each(|a| a.push(Elem::Text(text))),
            Segment::Substitution(sub) => alts.iter_mut().for_each(|a| a.push(Elem::Sub(sub))),
            Segment::Optional(inner) => {
                let mut with = alts.clone();
                for alt in &mut with {
                    for segment in inner {
                        match segment {
                            Segment::Text(text) => alt.push(Elem::Text(text)),
                            Segment::Substitution(sub) => alt.push(Elem::Sub(sub)),
                            Segment::Optional(_) => {}
                        }
                    }
                }
                with.extend(alts);
                alts = with;
            }
        }
    }
    alts
}

/// Value of a matched rule from the substitution values it read.
fn compose(app: Application, parts: Parts) -> f64 {
    match app {
        Application::Normal { base, divisor, .. } => {
            if let Some(same) = parts.same {
                return same;
            }
            match (parts.quotient, parts.remainder) {
                (Some(q), r) => q * divisor as f64 + r.unwrap_or(0.0),
                (None, Some(r)) => (base - base % divisor) as f64 + r,
                (None, None) => base as f64,
            }
        }
        Application::Fraction => {
            parts.same.unwrap_or_else(|| parts.quotient.unwrap_or(0.0) + parts.remainder.unwrap_or(0.0))
        }
        Application::Negative => -parts.remainder.or(parts.same).or(parts.quotient).unwrap_or(0.0),
        Application::FractionSet { base } => parts.quotient.or(parts.same).unwrap_or(1.0) / base as f64,
    }
}

fn keep_longest(best: &mut Option<Match>, found: Option<Match>) {
    if let Some(found) = found {
        if best.is_none_or(|b| found.end > b.end) {
            *best = Some(found);
        }
    }
}

fn keep_furthest(best: &mut Option<(usize, Parts)>, found: Option<(usize, Parts)>) {
    if let Some(found) = found {
        if best.is_none_or(|b| found.0 > b.0) {
            *best = Some(found);
        }
    }
}

/// No later split can beat a match that already covers the whole span.
fn reaches(best: Option<(usize, Parts)>, end: usize) -> bool {
    best.is_some_and(|(stop, _)| stop == end)
}
