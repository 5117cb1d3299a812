//! # Number Locale
//!
//! A value describing how a culture writes numbers: decimal separator,
//! group separator, and currency symbol placement. Passing this
//! explicitly keeps parsing reentrant — nothing here touches a
//! process-wide locale.

use serde::{Deserialize, Serialize};

/// Culture-specific number formatting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    /// Character separating the integer and fractional parts.
    pub decimal_separator: char,
    /// Character grouping the integer part in threes.
    pub group_separator: char,
    /// Currency symbol, e.g. `R$` or `$`.
    pub currency_symbol: String,
    /// Whether a space sits between symbol and amount (`R$ 1.234,56`
    /// versus `$1,234.56`).
    pub symbol_spaced: bool,
}

impl NumberLocale {
    /// Brazilian Portuguese: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            currency_symbol: "R$".to_string(),
            symbol_spaced: true,
        }
    }

    /// US English: `$1,234.56`.
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            currency_symbol: "$".to_string(),
            symbol_spaced: false,
        }
    }
}

impl Default for NumberLocale {
    /// The library's home culture.
    fn default() -> Self {
        Self::pt_br()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_disagree_on_separators() {
        let br = NumberLocale::pt_br();
        let us = NumberLocale::en_us();
        assert_eq!(br.decimal_separator, us.group_separator);
        assert_eq!(br.group_separator, us.decimal_separator);
    }

    #[test]
    fn test_default_is_pt_br() {
        assert_eq!(NumberLocale::default(), NumberLocale::pt_br());
    }

    #[test]
    fn test_serde_round_trip() {
        let locale = NumberLocale::en_us();
        let json = serde_json::to_string(&locale).unwrap();
        let back: NumberLocale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
