//! Memo keys for parsing.
//!
//! Parsing explores many overlapping spans: a substitution is tried against
//! every split point a following literal allows, and nested rule sets are
//! re-entered at the same positions. The parser memoizes each
//! `(rule set, mode, start, end)` question once per call.
//!
//! A slot is marked [`Slot::Pending`] while its question is being answered.
//! Re-entering a pending slot (a left-recursive chain such as
//! `%a: =%b=; %b: =%a=;`) answers "no match" instead of looping, so every
//! parse terminates.

use super::parser::Mode;

/// Stable identity of one parse question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MemoKey {
    pub(crate) set: usize,
    pub(crate) mode: Mode,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Slot<T> {
    Pending,
    Done(T),
}
