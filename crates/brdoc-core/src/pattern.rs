//! # Format Matchers
//!
//! Stateless shape predicates over untrusted interactive text. All
//! patterns are anchored (full-string, never substring) and
//! case-insensitive, and none of them panic — empty input simply fails
//! the match.

use regex::Regex;
use std::sync::LazyLock;

static CEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("CEP regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9][a-z0-9.'+_-]*@[a-z0-9][a-z0-9-]*(\.[a-z0-9][a-z0-9-]*)+$")
        .expect("email regex")
});

static TRACKING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\D{2}\d+\D{2}$").expect("tracking-code regex"));

/// Whether `text` is a CEP: `NNNNN-NNN` or 8 bare digits.
pub fn is_cep(text: &str) -> bool {
    CEP_RE.is_match(text)
}

/// Whether `text` looks like an email address: local part, `@`, and a
/// domain containing at least one dot. `-`, `+`, `.` and `'` are
/// permitted inside segments; matching is case-insensitive.
pub fn is_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Whether `text` has the shape of a postal tracking code: two
/// non-digits, one or more digits, two non-digits.
pub fn is_tracking_code(text: &str) -> bool {
    TRACKING_RE.is_match(text)
}
