//! # CPF Check-Digit Validation
//!
//! An 11-digit CPF ends in two check digits, each a weighted modulo-11
//! sum of the digits before it. The first digit weights the nine base
//! digits 10 down to 2; the second weights the nine base digits plus the
//! first check digit 11 down to 2. A remainder below 2 maps to 0,
//! otherwise the digit is 11 minus the remainder — so a check digit is
//! always a single digit 0–9.
//!
//! Only `.` and `-` are stripped before validation; any other character
//! (including whitespace) is a format mismatch. Repeated-digit strings
//! such as `00000000000` that happen to satisfy the checksum are
//! accepted; there is no denylist.

use crate::error::ValidationError;
use crate::kind::DocumentKind;

const CPF_LEN: usize = 11;

/// Validate a CPF and return its digits-only form.
///
/// # Errors
///
/// [`ValidationError::FormatMismatch`] unless stripping `.` and `-`
/// leaves exactly 11 ASCII digits; [`ValidationError::ChecksumMismatch`]
/// when the trailing two digits disagree with the computed check digits.
pub fn validate_cpf(text: &str) -> Result<String, ValidationError> {
    let stripped: String = text.chars().filter(|&c| c != '.' && c != '-').collect();
    if stripped.len() != CPF_LEN || !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::FormatMismatch {
            kind: DocumentKind::Cpf,
        });
    }

    let digits: Vec<u32> = stripped.bytes().map(|b| u32::from(b - b'0')).collect();
    let first = check_digit(&digits[..9], 10);
    let mut with_first = digits[..9].to_vec();
    with_first.push(first);
    let second = check_digit(&with_first, 11);

    if digits[9] == first && digits[10] == second {
        Ok(stripped)
    } else {
        Err(ValidationError::ChecksumMismatch {
            kind: DocumentKind::Cpf,
        })
    }
}

/// Whether `text` is a valid CPF.
pub fn is_cpf(text: &str) -> bool {
    validate_cpf(text).is_ok()
}

/// Weighted modulo-11 check digit. `weight_base` is the weight of the
/// first digit; weights descend by one per position, ending at 2.
fn check_digit(digits: &[u32], weight_base: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (weight_base - i as u32))
        .sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}
