//! # Commit-Time Field Evaluation
//!
//! Runs whenever a document field commits its text (blur-equivalent).
//! The outcome is one of four states:
//!
//! - `Empty` — blank and not required.
//! - `Invalid` — blank-but-required, or the text failed the kind's
//!   validation; the recorded error says which.
//! - `ValidMasked` — validated, display text reformatted with the mask.
//! - `ValidRaw` — validated but displayed as typed (masking disabled, or
//!   the normalized length did not match the kind's).
//!
//! The digits-only value accessor never returns the masked display
//! string.

use serde::{Deserialize, Serialize};

use brdoc_core::{apply_mask, DocumentKind, ValidationError};

use crate::config::FieldConfig;

/// The state a field settles into after a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    /// Blank and not required.
    Empty,
    /// Blank-but-required, or validation failed.
    Invalid,
    /// Validated; displayed without the mask.
    ValidRaw,
    /// Validated; displayed with the mask applied.
    ValidMasked,
}

impl FieldState {
    /// Whether the field holds a validated value.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::ValidRaw | Self::ValidMasked)
    }
}

/// The complete result of one commit-time evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEvaluation {
    /// The state the field settles into.
    pub state: FieldState,
    /// Digits-only normalized value when the state is valid.
    pub normalized: Option<String>,
    /// The text the field should display next.
    pub display_text: String,
    /// Why validation failed, when it did.
    pub error: Option<ValidationError>,
}

impl FieldEvaluation {
    /// The typed value: the digits-only string when valid, `None`
    /// otherwise. Never the masked display text.
    pub fn value(&self) -> Option<&str> {
        self.normalized.as_deref()
    }
}

/// Evaluate a document field's committed text.
///
/// Pure function of its arguments; see the module docs for the state
/// rules.
pub fn evaluate(kind: DocumentKind, text: &str, config: &FieldConfig) -> FieldEvaluation {
    if text.trim().is_empty() {
        if config.required {
            tracing::debug!(%kind, "blank input on required field");
            return FieldEvaluation {
                state: FieldState::Invalid,
                normalized: None,
                display_text: text.to_string(),
                error: None,
            };
        }
        return FieldEvaluation {
            state: FieldState::Empty,
            normalized: None,
            display_text: text.to_string(),
            error: None,
        };
    }

    match kind.validate(text) {
        Err(error) => {
            tracing::debug!(%kind, %error, "field input rejected");
            FieldEvaluation {
                state: FieldState::Invalid,
                normalized: None,
                display_text: text.to_string(),
                error: Some(error),
            }
        }
        Ok(normalized) => {
            if config.mask_on_blur && normalized.len() == kind.unmasked_len() {
                let display_text = apply_mask(kind, &normalized);
                FieldEvaluation {
                    state: FieldState::ValidMasked,
                    normalized: Some(normalized),
                    display_text,
                    error: None,
                }
            } else {
                FieldEvaluation {
                    state: FieldState::ValidRaw,
                    normalized: Some(normalized),
                    display_text: text.to_string(),
                    error: None,
                }
            }
        }
    }
}
