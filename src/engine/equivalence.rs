//! Lenient-parse equivalences and input folding.
//!
//! The `%%lenient-parse:` section declares groups of strings that compare
//! equal while parsing:
//!
//! ```text
//! & ' ' , ',' ;          // a space and a comma are interchangeable
//! & '1/2' , '½' ;
//! ```
//!
//! `&` starts a group, items are quoted (`'...'`, `''` for a literal quote)
//! or bare runs, and the relation operators `,` `;` `=` `<` all mean "same
//! as" here. A group is *ignorable* when one of its members consists only of
//! default-ignorable characters (whitespace and `-`); ignorable text may be
//! skipped between significant units and may stand in for an ignorable
//! literal.
//!
//! Both the input and rule literals are folded into [`Unit`]s with the same
//! table, so matching becomes a comparison of unit keys.

use super::description::LENIENT_SECTION;
use super::grammar::Locator;
use crate::error::{Error, Result};

/// Comparison key of one folded unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum UnitKey {
    /// Member of the equivalence group with this index.
    Group(usize),
    /// Any other character (lowercased in lenient mode).
    Char(char),
}

/// One folded unit of text, with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit {
    pub key: UnitKey,
    pub start: usize,
    pub end: usize,
    pub ignorable: bool,
}

/// Compiled equivalence groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equivalences {
    /// Every member with the index of its group, longest member first.
    members: Vec<(String, usize)>,
    ignorable: Vec<bool>,
}

impl Equivalences {
    /// Read the body of a `%%lenient-parse:` section found at byte `offset`.
    pub(crate) fn parse(body: &str, offset: usize, locator: &Locator<'_>) -> Result<Self> {
        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut chars = body.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                c if c.is_whitespace() => {}
                '&' => groups.push(Vec::new()),
                ',' | ';' | '=' | '<' => {}
                '\'' => {
                    let mut item = String::new();
                    let mut closed = false;
                    while let Some((_, q)) = chars.next() {
                        if q != '\'' {
                            item.push(q);
                        } else if chars.peek().is_some_and(|&(_, n)| n == '\'') {
                            chars.next();
                            item.push('\'');
                        } else {
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(Error::UnterminatedEscape {
                            rule_set: LENIENT_SECTION.to_string(),
                            delimiter: '\'',
                            offset: locator.char_offset(offset + i),
                        });
                    }
                    push_item(&mut groups, item);
                }
                _ => {
                    let mut item = String::from(c);
                    while let Some(&(_, n)) = chars.peek() {
                        if n.is_whitespace() || matches!(n, '&' | ',' | ';' | '=' | '<' | '\'') {
                            break;
                        }
                        item.push(n);
                        chars.next();
                    }
                    push_item(&mut groups, item);
                }
            }
        }

        let ignorable = groups.iter().map(|g| g.iter().any(|m| m.chars().all(is_default_ignorable))).collect();
        let mut members: Vec<(String, usize)> =
            groups.into_iter().enumerate().flat_map(|(gi, g)| g.into_iter().map(move |m| (m, gi))).collect();
        members.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Ok(Self { members, ignorable })
    }

    /// Number of declared groups.
    pub fn group_count(&self) -> usize {
        self.ignorable.len()
    }

    /// Fold `text` for lenient comparison.
    pub(crate) fn fold(&self, text: &str) -> Vec<Unit> {
        let mut units = Vec::with_capacity(text.len());
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            if let Some((member, group)) = self.members.iter().find(|(m, _)| rest.starts_with(m.as_str())) {
                let ignorable = self.ignorable.get(*group).copied().unwrap_or(false);
                units.push(Unit { key: UnitKey::Group(*group), start: i, end: i + member.len(), ignorable });
                i += member.len();
                continue;
            }

            let Some(c) = rest.chars().next() else { break };
            let lower = c.to_lowercase().next().unwrap_or(c);
            let end = i + c.len_utf8();
            units.push(Unit { key: UnitKey::Char(lower), start: i, end, ignorable: is_default_ignorable(c) });
            i = end;
        }

        units
    }

    /// Units for exact comparison: one per character, nothing ignorable.
    pub(crate) fn exact(text: &str) -> Vec<Unit> {
        text.char_indices()
            .map(|(i, c)| Unit { key: UnitKey::Char(c), start: i, end: i + c.len_utf8(), ignorable: false })
            .collect()
    }
}

fn push_item(groups: &mut Vec<Vec<String>>, item: String) {
    if item.is_empty() {
        return;
    }
    match groups.last_mut() {
        Some(group) => group.push(item),
        None => groups.push(vec![item]),
    }
}

fn is_default_ignorable(c: char) -> bool {
    c.is_whitespace() || c == '-'
}
