//! Top-level description text.
//!
//! Before any rule is read the description goes through two byte-preserving
//! passes: `//` comments are overwritten with spaces, and the
//! `%%lenient-parse:` section is lifted out and blanked the same way. Byte
//! offsets in the cleaned text therefore still point at the same characters
//! of the original, which keeps error offsets exact.
//!
//! The cleaned text is then split on `;` into rule bodies, and bodies are
//! grouped under their `%name:` headers.

/// Name given to the rule set of a description without any header.
pub(crate) const DEFAULT_SET_NAME: &str = "%default";

/// Name of the pseudo rule set holding lenient-parse equivalences.
pub(crate) const LENIENT_SECTION: &str = "%%lenient-parse";

/// One rule body and the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Piece<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Header plus rule bodies of one rule set, still unparsed.
#[derive(Debug, Clone)]
pub(crate) struct RuleSetSource<'a> {
    pub name: &'a str,
    pub offset: usize,
    pub bodies: Vec<Piece<'a>>,
}

/// Description text with comments and the lenient section blanked out.
#[derive(Debug, Clone)]
pub(crate) struct Prepared {
    pub text: String,
    /// Body of `%%lenient-parse:` and its byte offset, when present.
    pub lenient: Option<(String, usize)>,
}

pub(crate) fn prepare(source: &str) -> Prepared {
    let mut text = blank_comments(source);
    let lenient = take_lenient_section(&mut text);
    Prepared { text, lenient }
}

/// Group the bodies of a prepared text under their rule-set headers.
///
/// Bodies ahead of the first header form a set named `%default`.
pub(crate) fn split(text: &str) -> Vec<RuleSetSource<'_>> {
    let mut sets: Vec<RuleSetSource<'_>> = Vec::new();

    for piece in split_bodies(text) {
        if let Some(caps) = regex!(r"^(%%?[^\s:;%<>=\[\]]+)\s*:").captures(piece.text) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let header_end = caps.get(0).map_or(0, |m| m.end());
            let rest = &piece.text[header_end..];
            let lead = rest.len() - rest.trim_start().len();
            sets.push(RuleSetSource { name, offset: piece.offset, bodies: Vec::new() });
            if let Some(set) = sets.last_mut() {
                set.bodies.push(Piece { text: &rest[lead..], offset: piece.offset + header_end + lead });
            }
            continue;
        }

        if sets.is_empty() {
            sets.push(RuleSetSource { name: DEFAULT_SET_NAME, offset: piece.offset, bodies: Vec::new() });
        }
        if let Some(set) = sets.last_mut() {
            set.bodies.push(piece);
        }
    }

    sets
}

// --- Passes ------------------------------------------------------------------

/// Replace `//` comments with spaces of the same byte length.
///
/// A comment starts at `//` when it opens the line or follows whitespace, so
/// text such as `1/2` or `http://` inside a rule is left alone.
fn blank_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.split_inclusive('\n') {
        let start = line
            .match_indices("//")
            .map(|(at, _)| at)
            .find(|&at| at == 0 || line[..at].ends_with(char::is_whitespace));
        match start {
            Some(at) => {
                out.push_str(&line[..at]);
                out.push_str(&blank(&line[at..]));
            }
            None => out.push_str(line),
        }
    }
    out
}

fn take_lenient_section(text: &mut String) -> Option<(String, usize)> {
    let header = regex!(r"(?:^|[;\s])(%%lenient-parse\s*:)").captures(text.as_str())?.get(1)?;
    let (start, body_start) = (header.start(), header.end());
    let body_end = regex!(r"(?:^|[;\s])(%%?[^\s:;%<>=\[\]]+\s*:)")
        .captures(&text[body_start..])
        .and_then(|caps| caps.get(1))
        .map_or(text.len(), |m| body_start + m.start());

    let body = text[body_start..body_end].to_string();
    let blanked = blank(&text[start..body_end]);
    text.replace_range(start..body_end, &blanked);
    Some((body, body_start))
}

/// Spaces with the byte length of `s`, keeping line breaks.
fn blank(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '\n' || c == '\r' {
            out.push(c);
        } else {
            out.extend(std::iter::repeat_n(' ', c.len_utf8()));
        }
    }
    out
}

/// Split on `;`, trimming layout whitespace.
///
/// Every `;` ends a rule, inside an optional group or not, so an unclosed
/// `[` stays in its own rule and is reported there. An empty body between
/// two semicolons is kept (it is a legal empty rule); an empty final piece
/// after the last `;` is dropped.
fn split_bodies(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, _) in text.match_indices(';') {
        pieces.push(trim_piece(text, start, i));
        start = i + 1;
    }

    let tail = trim_piece(text, start, text.len());
    if !tail.text.is_empty() {
        pieces.push(tail);
    }
    pieces
}

/// Leading whitespace always goes; trailing whitespace only when it holds a
/// line break, so `" and "`-style bodies keep their significant spaces.
fn trim_piece(text: &str, start: usize, end: usize) -> Piece<'_> {
    let raw = &text[start..end];
    let lead = raw.len() - raw.trim_start().len();
    let body = &raw[lead..];
    let trimmed = body.trim_end();
    let body = if body[trimmed.len()..].contains(['\n', '\r']) { trimmed } else { body };
    Piece { text: body, offset: start + lead }
}
