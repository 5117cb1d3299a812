//! # Display-Mask Formatting
//!
//! Pure positional insertion of literal separators into a digits-only
//! string, keyed by [`DocumentKind`]. Slots are applied in order against
//! the growing string, so each position is an index into the partially
//! masked text. Input that violates the precondition (wrong length, or
//! not all digits) is returned unchanged — callers can tell "valid but
//! unmasked" apart from "masked".

use crate::kind::DocumentKind;

/// Insert the kind's separators into `raw`.
///
/// `raw` must be exactly `kind.unmasked_len()` ASCII digits; anything
/// else is returned as-is, unmasked.
pub fn apply_mask(kind: DocumentKind, raw: &str) -> String {
    if raw.len() != kind.unmasked_len() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    let mut masked = String::with_capacity(kind.masked_len());
    masked.push_str(raw);
    for &(position, separator) in kind.mask_slots() {
        masked.insert(position, separator);
    }
    masked
}

/// Drop everything but ASCII digits.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
