//! # Document Kinds
//!
//! The single source of truth for the document types this workspace
//! validates. Each kind carries its digits-only length, its masked display
//! length, and the mask-insertion slots, so dispatch is data-driven —
//! every consumer `match`es exhaustively and adding a kind forces all of
//! them to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::{cnpj, cpf, pattern, strip_separators};

/// A Brazilian document format with a fixed digits-only length and a
/// conventional display mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Natural-person taxpayer registry number, 11 digits, `NNN.NNN.NNN-NN`.
    Cpf,
    /// Company registry number, 14 digits, `NN.NNN.NNN/NNNN-NN`.
    Cnpj,
    /// Postal code, 8 digits, `NNNNN-NNN`.
    Cep,
}

impl DocumentKind {
    /// Length of the digits-only (normalized) form.
    pub fn unmasked_len(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
            Self::Cep => 8,
        }
    }

    /// Length of the masked display form.
    pub fn masked_len(self) -> usize {
        match self {
            Self::Cpf => 14,
            Self::Cnpj => 18,
            Self::Cep => 9,
        }
    }

    /// Separator insertion slots, applied in order against the growing
    /// string. Positions are indices into the partially masked text, not
    /// the raw digits.
    pub fn mask_slots(self) -> &'static [(usize, char)] {
        match self {
            Self::Cpf => &[(3, '.'), (7, '.'), (11, '-')],
            Self::Cnpj => &[(2, '.'), (6, '.'), (10, '/'), (15, '-')],
            Self::Cep => &[(5, '-')],
        }
    }

    /// Validate `text` against this kind and return the digits-only
    /// normalized form.
    ///
    /// CPF and CNPJ run the full check-digit computation; CEP is a shape
    /// check only. The returned string is always all ASCII digits with
    /// exactly [`unmasked_len()`](Self::unmasked_len) characters.
    ///
    /// # Errors
    ///
    /// [`ValidationError::FormatMismatch`] when the text does not have the
    /// kind's shape, [`ValidationError::ChecksumMismatch`] when the shape
    /// matched but the check digits are wrong.
    pub fn validate(self, text: &str) -> Result<String, ValidationError> {
        match self {
            Self::Cpf => cpf::validate_cpf(text),
            Self::Cnpj => cnpj::validate_cnpj(text),
            Self::Cep => {
                if pattern::is_cep(text) {
                    Ok(strip_separators(text))
                } else {
                    Err(ValidationError::FormatMismatch { kind: self })
                }
            }
        }
    }

    /// Boolean shorthand for [`validate()`](Self::validate).
    pub fn matches(self, text: &str) -> bool {
        self.validate(text).is_ok()
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cep => "CEP",
        };
        f.write_str(s)
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "cep" => Ok(Self::Cep),
            other => Err(format!("unknown document kind: {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_are_consistent_with_mask_slots() {
        for kind in [DocumentKind::Cpf, DocumentKind::Cnpj, DocumentKind::Cep] {
            assert_eq!(
                kind.masked_len(),
                kind.unmasked_len() + kind.mask_slots().len(),
                "masked length must equal digits plus separators for {kind}"
            );
        }
    }

    #[test]
    fn test_validate_normalizes_to_unmasked_len() {
        let cases = [
            (DocumentKind::Cpf, "111.444.777-35"),
            (DocumentKind::Cnpj, "11.222.333/0001-81"),
            (DocumentKind::Cep, "12345-678"),
        ];
        for (kind, text) in cases {
            let normalized = kind.validate(text).unwrap();
            assert_eq!(normalized.len(), kind.unmasked_len());
            assert!(normalized.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for kind in [DocumentKind::Cpf, DocumentKind::Cnpj, DocumentKind::Cep] {
            let parsed: DocumentKind = kind.to_string().to_lowercase().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("rg".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&DocumentKind::Cnpj).unwrap();
        assert_eq!(json, "\"cnpj\"");
        let back: DocumentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DocumentKind::Cnpj);
    }
}
