//! # Validation Error Taxonomy
//!
//! Rejections fall into two buckets: the text did not have the document's
//! shape at all (`FormatMismatch`), or it had the shape but the check
//! digits disagreed (`ChecksumMismatch`). Both are ordinary return values;
//! interactive input fails constantly and nothing here is fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::DocumentKind;

/// Why a document string was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The text does not match the kind's expected shape.
    #[error("text does not match the {kind} format")]
    FormatMismatch {
        /// The document kind that was being validated.
        kind: DocumentKind,
    },

    /// The shape matched but the trailing check digits are wrong.
    #[error("check digits do not match for {kind}")]
    ChecksumMismatch {
        /// The document kind that was being validated.
        kind: DocumentKind,
    },
}

impl ValidationError {
    /// The document kind the rejected text was validated against.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::FormatMismatch { kind } | Self::ChecksumMismatch { kind } => *kind,
        }
    }
}
