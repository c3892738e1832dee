//! Rule grammar: keys, divisors and template tokens.
//!
//! A rule body is `[key:] ['] template`. The key decides the rule kind and,
//! for normal rules, the base value, radix and divisor. The template is a
//! flat token stream of literal text, substitutions and at most one level of
//! `[...]` optional groups.
//!
//! ```text
//! 1000>: <%%alt-hundreds<[ >>]
//! ^^^^^  ^^^^^^^^^^^^^^^^^^^^^
//! key    template: Quotient(%%alt-hundreds), Optional[Text(" "), Remainder(Owner)]
//! ```

use super::description::Piece;
use crate::bridge::NumeralPattern;
use crate::error::{Error, Result};
use crate::{FractionForm, Rule, RuleKind, Segment, Substitution, Target};

/// Maps byte offsets in the description to character offsets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Locator<'a> {
    source: &'a str,
}

impl<'a> Locator<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub(crate) fn char_offset(&self, byte: usize) -> usize {
        self.source.get(..byte).map_or_else(|| self.source.chars().count(), |s| s.chars().count())
    }
}

/// What an error raised while reading one rule needs to know.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleContext<'a> {
    pub rule_set: &'a str,
    pub locator: Locator<'a>,
}

impl RuleContext<'_> {
    pub(crate) fn offset(&self, byte: usize) -> usize {
        self.locator.char_offset(byte)
    }
}

/// Parse one rule body.
///
/// `next_base` is the base a keyless rule receives (previous normal base + 1).
pub(crate) fn parse_rule(piece: Piece<'_>, next_base: i64, cx: &RuleContext<'_>) -> Result<Rule> {
    let (key, text, offset) = split_key(piece);
    let (kind, base, radix) = match key {
        Some(key) => parse_key(key, cx)?,
        None => (RuleKind::MasterPattern, next_base, 10),
    };

    let (text, offset) = match text.strip_prefix('\'') {
        Some(rest) => (rest, offset + 1),
        None => (text, offset),
    };

    let template = parse_template(text, offset, cx)?;
    let divisor = match kind {
        RuleKind::ExponentDecrement(marks) => divisor(base, radix, marks),
        RuleKind::Numeric | RuleKind::MasterPattern => divisor(base, radix, 0),
        RuleKind::Negative | RuleKind::Fraction(_) => 1,
    };

    Ok(Rule { kind, base, radix, divisor, template })
}

/// `radix ^ max(0, floor(log_radix(base)) - marks)`, in integer arithmetic.
pub(crate) fn divisor(base: i64, radix: u32, marks: u32) -> i64 {
    let radix = i64::from(radix.max(2));
    let mut exponent = 0u32;
    let mut power = 1i64;
    while let Some(next) = power.checked_mul(radix) {
        if next > base {
            break;
        }
        power = next;
        exponent += 1;
    }
    radix.pow(exponent.saturating_sub(marks))
}

// --- Keys --------------------------------------------------------------------

/// Separate `key:` from the template.
///
/// A colon only introduces a key when nothing before it could start a
/// substitution, an optional group or a quoted section.
fn split_key(piece: Piece<'_>) -> (Option<Piece<'_>>, &str, usize) {
    let Some(colon) = piece.text.find(':') else {
        return (None, piece.text, piece.offset);
    };
    let prefix = &piece.text[..colon];
    if prefix.contains(['<', '=', '[', ']', '\'']) {
        return (None, piece.text, piece.offset);
    }

    let rest = &piece.text[colon + 1..];
    let lead = rest.len() - rest.trim_start().len();
    let key = Piece { text: prefix, offset: piece.offset };
    (Some(key), &rest[lead..], piece.offset + colon + 1 + lead)
}

fn parse_key(key: Piece<'_>, cx: &RuleContext<'_>) -> Result<(RuleKind, i64, u32)> {
    let text = key.text.trim();
    let special = match text {
        "-x" => Some(RuleKind::Negative),
        "x.x" => Some(RuleKind::Fraction(FractionForm::Improper)),
        "0.x" => Some(RuleKind::Fraction(FractionForm::Proper)),
        "x.0" => Some(RuleKind::Fraction(FractionForm::Whole)),
        _ => None,
    };
    if let Some(kind) = special {
        return Ok((kind, 0, 10));
    }

    let malformed = || Error::MalformedRuleKey {
        rule_set: cx.rule_set.to_string(),
        key: text.to_string(),
        offset: cx.offset(key.offset),
    };

    let caps = regex!(r"^([0-9][0-9,]*)(?:/([0-9][0-9,]*))?(>*)$").captures(text).ok_or_else(malformed)?;
    let base = caps.get(1).and_then(|m| strip_commas(m.as_str()).parse::<i64>().ok()).ok_or_else(malformed)?;
    let radix = match caps.get(2) {
        Some(m) => strip_commas(m.as_str()).parse::<u32>().ok().filter(|&r| r >= 2).ok_or_else(malformed)?,
        None => 10,
    };
    let marks = caps.get(3).map_or(0, |m| m.as_str().len() as u32);

    let kind = if marks > 0 { RuleKind::ExponentDecrement(marks) } else { RuleKind::Numeric };
    Ok((kind, base, radix))
}

fn strip_commas(s: &str) -> String {
    s.chars().filter(|&c| c != ',').collect()
}

// --- Templates ---------------------------------------------------------------

fn parse_template(text: &str, offset: usize, cx: &RuleContext<'_>) -> Result<Vec<Segment>> {
    let mut top: Vec<Segment> = Vec::new();
    let mut group: Option<(Vec<Segment>, usize)> = None;
    let mut literal = String::new();
    let mut i = 0;

    while let Some(c) = text[i..].chars().next() {
        match c {
            '[' => {
                if group.is_some() {
                    return Err(Error::NestedOptional {
                        rule_set: cx.rule_set.to_string(),
                        offset: cx.offset(offset + i),
                    });
                }
                flush(&mut literal, &mut top);
                group = Some((Vec::new(), offset + i));
                i += 1;
            }
            ']' => {
                let Some((mut inner, _)) = group.take() else {
                    return Err(Error::UnterminatedBracket {
                        rule_set: cx.rule_set.to_string(),
                        offset: cx.offset(offset + i),
                    });
                };
                flush(&mut literal, &mut inner);
                top.push(Segment::Optional(inner));
                i += 1;
            }
            '<' | '>' | '=' => {
                let (sub, len) = parse_substitution(&text[i..], offset + i, cx)?;
                let current = match group.as_mut() {
                    Some((inner, _)) => inner,
                    None => &mut top,
                };
                flush(&mut literal, current);
                current.push(Segment::Substitution(sub));
                i += len;
            }
            _ => {
                literal.push(c);
                i += c.len_utf8();
            }
        }
    }

    if let Some((_, at)) = group {
        return Err(Error::UnterminatedBracket { rule_set: cx.rule_set.to_string(), offset: cx.offset(at) });
    }
    flush(&mut literal, &mut top);
    Ok(top)
}

fn flush(literal: &mut String, into: &mut Vec<Segment>) {
    if !literal.is_empty() {
        into.push(Segment::Text(std::mem::take(literal)));
    }
}

/// Read one substitution starting at `<`, `>` or `=`; returns it with its byte length.
fn parse_substitution(text: &str, at: usize, cx: &RuleContext<'_>) -> Result<(Substitution, usize)> {
    let Some(delimiter) = text.chars().next() else {
        return Err(Error::UnterminatedEscape {
            rule_set: cx.rule_set.to_string(),
            delimiter: '=',
            offset: cx.offset(at),
        });
    };
    let after = &text[1..];

    if delimiter != '=' && after.starts_with(delimiter) {
        if delimiter == '>' && after[1..].starts_with('>') {
            return Ok((Substitution::ForcedRemainder, 3));
        }
        let sub = match delimiter {
            '<' => Substitution::Quotient(Target::Owner),
            _ => Substitution::Remainder(Target::Owner),
        };
        return Ok((sub, 2));
    }

    let Some(close) = after.find(delimiter) else {
        return Err(Error::UnterminatedEscape { rule_set: cx.rule_set.to_string(), delimiter, offset: cx.offset(at) });
    };
    let body = &after[..close];
    let target = parse_target(body).ok_or_else(|| Error::MalformedSubstitution {
        rule_set: cx.rule_set.to_string(),
        token: format!("{delimiter}{body}{delimiter}"),
        offset: cx.offset(at),
    })?;

    let sub = match delimiter {
        '<' => Substitution::Quotient(target),
        '>' => Substitution::Remainder(target),
        _ => Substitution::SameValue(target),
    };
    Ok((sub, close + 2))
}

fn parse_target(body: &str) -> Option<Target> {
    if body.is_empty() {
        return Some(Target::Owner);
    }
    if regex!(r"^%%?[^\s%<>=\[\];:]+$").is_match(body) {
        return Some(Target::RuleSet(body.to_string()));
    }
    NumeralPattern::parse(body).ok().map(Target::Numeral)
}
