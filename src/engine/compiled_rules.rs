//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the immutable model
//! built once from a description and shared by every format and parse call.
//!
//! Compilation runs in three steps:
//!
//! 1. **Prepare/split** (`description.rs`): comments and the lenient section
//!    are blanked, the text is cut into rule-set sources.
//! 2. **Read rules** (`grammar.rs`): each body becomes a [`Rule`].
//! 3. **Index** (this module): rules are sorted into their slots (negative,
//!    the three fraction forms, the ascending normal list), ordering is
//!    checked and sets are indexed by name.
//!
//! ## Invariants
//!
//! - Normal rules of a [`RuleSet`] are strictly ascending by base value, so
//!   the rule for a value is found with one binary search.
//! - Every rule-set name is unique; `by_name` indexes `sets`.
//! - The default set is the first public set in declaration order.

use super::description::{self, RuleSetSource};
use super::equivalence::Equivalences;
use super::grammar::{self, Locator, RuleContext};
use crate::error::{Error, Result};
use crate::{FractionForm, Rule, RuleKind};
use std::collections::HashMap;
use tracing::debug;

// --- Rule sets -----------------------------------------------------------------

bitflags::bitflags! {
    /// Rule classes a rule set declares.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleClasses: u8 {
        const NEGATIVE = 1 << 0;
        const IMPROPER = 1 << 1;
        const PROPER   = 1 << 2;
        const WHOLE    = 1 << 3;
        const NORMAL   = 1 << 4;
        const FRACTION = Self::IMPROPER.bits() | Self::PROPER.bits() | Self::WHOLE.bits();
    }
}

impl RuleClasses {
    fn for_kind(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Negative => Self::NEGATIVE,
            RuleKind::Fraction(FractionForm::Improper) => Self::IMPROPER,
            RuleKind::Fraction(FractionForm::Proper) => Self::PROPER,
            RuleKind::Fraction(FractionForm::Whole) => Self::WHOLE,
            RuleKind::Numeric | RuleKind::ExponentDecrement(_) | RuleKind::MasterPattern => Self::NORMAL,
        }
    }
}

/// A named collection of rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    negative: Option<Rule>,
    fractions: [Option<Rule>; 3],
    rules: Vec<Rule>,
    classes: RuleClasses,
}

impl RuleSet {
    pub(crate) fn from_source(source: &RuleSetSource<'_>, locator: Locator<'_>) -> Result<Self> {
        let cx = RuleContext { rule_set: source.name, locator };
        let mut set = RuleSet {
            name: source.name.to_string(),
            negative: None,
            fractions: [None, None, None],
            rules: Vec::new(),
            classes: RuleClasses::empty(),
        };

        let mut next_base = 0i64;
        for piece in &source.bodies {
            let rule = grammar::parse_rule(*piece, next_base, &cx)?;
            let duplicate = || Error::DuplicateBaseValue {
                rule_set: set.name.clone(),
                key: rule.to_string(),
                offset: cx.offset(piece.offset),
            };
            let class = RuleClasses::for_kind(rule.kind());
            if !rule.kind().is_normal() && set.classes.contains(class) {
                return Err(duplicate());
            }

            match rule.kind() {
                RuleKind::Negative => set.negative = Some(rule),
                RuleKind::Fraction(form) => set.fractions[form.slot()] = Some(rule),
                RuleKind::Numeric | RuleKind::ExponentDecrement(_) | RuleKind::MasterPattern => {
                    if let Some(prev) = set.rules.last() {
                        if rule.base() == prev.base() {
                            return Err(duplicate());
                        }
                        if rule.base() < prev.base() {
                            return Err(Error::BaseValueOutOfOrder {
                                rule_set: set.name.clone(),
                                base: rule.base(),
                                offset: cx.offset(piece.offset),
                            });
                        }
                    }
                    next_base = rule.base().saturating_add(1);
                    set.rules.push(rule);
                }
            }
            set.classes |= class;
        }

        Ok(set)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public sets are named `%name`; `%%name` sets are private helpers.
    pub fn is_public(&self) -> bool {
        !self.name.starts_with("%%")
    }

    /// Normal rules in ascending base order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn negative_rule(&self) -> Option<&Rule> {
        self.negative.as_ref()
    }

    pub fn fraction_rule(&self, form: FractionForm) -> Option<&Rule> {
        self.fractions[form.slot()].as_ref()
    }

    pub fn classes(&self) -> RuleClasses {
        self.classes
    }

    /// Index of the normal rule with the greatest base not above `value`.
    pub fn find_rule(&self, value: i64) -> Option<usize> {
        self.rules.partition_point(|r| r.base() <= value).checked_sub(1)
    }
}

// --- Compiled model --------------------------------------------------------------

/// Immutable model of a compiled description.
///
/// Safe to share across threads; formatting and parsing only borrow it.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    sets: Vec<RuleSet>,
    by_name: HashMap<String, usize>,
    default_set: Option<usize>,
    equivalences: Equivalences,
}

impl CompiledRules {
    /// Compile a rule description.
    ///
    /// Rule-set references inside templates are resolved lazily, so a
    /// description may refer to sets declared after the referring rule.
    pub fn new(description: &str) -> Result<Self> {
        let locator = Locator::new(description);
        let prepared = description::prepare(description);
        let sources = description::split(&prepared.text);

        let mut sets = Vec::with_capacity(sources.len());
        let mut by_name = HashMap::with_capacity(sources.len());
        for source in &sources {
            if by_name.contains_key(source.name) {
                return Err(Error::DuplicateRuleSet {
                    rule_set: source.name.to_string(),
                    offset: locator.char_offset(source.offset),
                });
            }
            by_name.insert(source.name.to_string(), sets.len());
            sets.push(RuleSet::from_source(source, locator)?);
        }

        let equivalences = match &prepared.lenient {
            Some((body, offset)) => Equivalences::parse(body, *offset, &locator)?,
            None => Equivalences::default(),
        };
        let default_set = sets.iter().position(RuleSet::is_public);

        debug!(
            rule_sets = sets.len(),
            rules = sets.iter().map(|s| s.rules.len()).sum::<usize>(),
            equivalence_groups = equivalences.group_count(),
            default = default_set.map(|i| sets[i].name()),
            "compiled rule description"
        );

        Ok(CompiledRules { sets, by_name, default_set, equivalences })
    }

    /// Look up a rule set by its full name (`%name` or `%%name`).
    pub fn rule_set(&self, name: &str) -> Option<&RuleSet> {
        self.index_of(name).map(|i| &self.sets[i])
    }

    /// All rule sets in declaration order.
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.sets
    }

    /// First public rule set, used when no name is given.
    pub fn default_rule_set(&self) -> Option<&RuleSet> {
        self.default_set.map(|i| &self.sets[i])
    }

    pub fn public_rule_set_names(&self) -> Vec<&str> {
        self.sets.iter().filter(|s| s.is_public()).map(RuleSet::name).collect()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn set_at(&self, index: usize) -> &RuleSet {
        &self.sets[index]
    }

    pub(crate) fn default_index(&self) -> Option<usize> {
        self.default_set
    }

    pub(crate) fn equivalences(&self) -> &Equivalences {
        &self.equivalences
    }

    /// Resolve the rule set a caller asked for; `None` means the default set.
    ///
    /// Private sets are refused here but stay reachable from rule text.
    pub(crate) fn entry_set(&self, name: Option<&str>) -> Result<(usize, &RuleSet)> {
        let index = match name {
            Some(name) => self.index_of(name).ok_or_else(|| Error::UndefinedRuleSetReference(name.to_string()))?,
            None => self.default_set.ok_or(Error::NoPublicRuleSet)?,
        };
        let set = &self.sets[index];
        if !set.is_public() {
            return Err(Error::PrivateRuleSet(set.name.clone()));
        }
        Ok((index, set))
    }
}
