use crate::Subject;

/// Find the first candidate whose rendered subject (without verb) matches
/// `text`, ignoring case.
///
/// Candidates are scanned in order and need not be unique; the first match
/// wins. The match is returned as an owned copy, the slice is only read.
///
/// ```rust
/// use event_subject::{Subject, find_by_subject};
///
/// let known = [Subject::new("app", "svc", "mod")];
/// assert!(find_by_subject("APP.SVC.MOD", &known).is_some());
/// assert!(find_by_subject("app.svc", &known).is_none());
/// ```
pub fn find_by_subject(text: &str, candidates: &[Subject]) -> Option<Subject> {
    let found = candidates
        .iter()
        .find(|candidate| eq_fold(text, &candidate.render(None)))
        .cloned();
    if found.is_none() {
        tracing::debug!(subject = %text, candidates = candidates.len(), "No subject matched");
    }
    found
}

/// Find the first candidate whose module segment matches `text`, ignoring
/// case. Application and service are not compared.
pub fn find_by_module(text: &str, candidates: &[Subject]) -> Option<Subject> {
    let found = candidates
        .iter()
        .find(|candidate| eq_fold(text, candidate.module()))
        .cloned();
    if found.is_none() {
        tracing::debug!(module = %text, candidates = candidates.len(), "No module matched");
    }
    found
}

/// Case-insensitive string equality under Unicode simple case folding.
///
/// Strings are compared code point by code point, each reduced to a
/// canonical member of its simple case-fold orbit. `K` (Kelvin sign)
/// equals `k`, `ſ` (long s) equals `S` and `ẞ` equals `ß`. Full foldings
/// that expand to several code points (`ß` to `SS`) don't match, and the
/// Turkic-only foldings of `ı` and `İ` are not applied, so neither equals
/// `i` or `I`.
pub fn eq_fold(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y || simple_fold(x) == simple_fold(y) => continue,
            _ => return false,
        }
    }
}

// Code points whose case mappings reach outside their simple fold orbit.
const FOLD_SELF: &[char] = &['\u{130}', '\u{131}'];

// Simple fold pairs not reachable through single-character case mappings.
const FOLD_EXTRA: &[(char, char)] = &[
    ('\u{1FD3}', '\u{390}'),
    ('\u{1FE3}', '\u{3B0}'),
    ('\u{FB05}', '\u{FB06}'),
];

/// Canonical representative of the simple case-fold orbit of `c`.
fn simple_fold(c: char) -> char {
    if FOLD_SELF.contains(&c) {
        return c;
    }
    if let Some(&(_, to)) = FOLD_EXTRA.iter().find(|(from, _)| *from == c) {
        return to;
    }
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase())
        .or_else(|| single(c.to_lowercase()))
        .unwrap_or(c)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
