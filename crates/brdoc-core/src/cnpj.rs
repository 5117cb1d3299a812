//! # CNPJ Check-Digit Validation
//!
//! A 14-digit CNPJ ends in two check digits computed from the fixed
//! weight table `[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]`. The first
//! check digit weights digits 0..=11 with the table starting at index 1;
//! the second weights digits 0..=12 (including the first check digit)
//! with the full table. As with CPF, a remainder below 2 maps to 0 and
//! anything else to 11 minus the remainder.
//!
//! Unlike CPF, every non-digit character is stripped before validation,
//! so `11.222.333/0001-81` and `11222333000181` are equivalent inputs.
//! Repeated-digit strings that satisfy the checksum are accepted.

use crate::error::ValidationError;
use crate::kind::DocumentKind;

const CNPJ_LEN: usize = 14;

/// Weight of digit position `i`, counting from the table offset.
const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a CNPJ and return its digits-only form.
///
/// # Errors
///
/// [`ValidationError::FormatMismatch`] unless stripping non-digits leaves
/// exactly 14 digits; [`ValidationError::ChecksumMismatch`] when the
/// trailing two digits disagree with the computed check digits.
pub fn validate_cnpj(text: &str) -> Result<String, ValidationError> {
    let stripped: String = text.chars().filter(char::is_ascii_digit).collect();
    if stripped.len() != CNPJ_LEN {
        return Err(ValidationError::FormatMismatch {
            kind: DocumentKind::Cnpj,
        });
    }

    let digits: Vec<u32> = stripped.bytes().map(|b| u32::from(b - b'0')).collect();
    let first = check_digit(&digits[..12], &WEIGHTS[1..]);
    let second = check_digit(&digits[..13], &WEIGHTS);

    if digits[12] == first && digits[13] == second {
        Ok(stripped)
    } else {
        Err(ValidationError::ChecksumMismatch {
            kind: DocumentKind::Cnpj,
        })
    }
}

/// Whether `text` is a valid CNPJ.
pub fn is_cnpj(text: &str) -> bool {
    validate_cnpj(text).is_ok()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(&d, &w)| d * w).sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}
