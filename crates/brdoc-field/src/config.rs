//! # Field Configuration

use brdoc_numeric::NumberLocale;
use serde::{Deserialize, Serialize};

/// Per-field behavior switches, owned by the consuming form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Whether blank input is a validation failure.
    pub required: bool,
    /// Whether valid input is reformatted with the display mask on commit.
    pub mask_on_blur: bool,
    /// Number-formatting culture for the form's numeric fields.
    pub locale: NumberLocale,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            required: false,
            mask_on_blur: true,
            locale: NumberLocale::default(),
        }
    }
}
