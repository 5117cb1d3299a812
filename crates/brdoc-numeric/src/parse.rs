//! # Integer and Decimal Parsing
//!
//! Integers are strict. Decimals follow the supplied locale, with one
//! exception carried over from interactive-typing behavior: text
//! containing a comma always parses under comma-decimal rules, and a
//! bare `,` or `.` is an in-progress edit ([`DecimalParse::Pending`]),
//! not a failure — the user has typed the separator and not yet the
//! fraction.

use rust_decimal::Decimal;

use crate::error::NumericError;
use crate::locale::NumberLocale;

/// Outcome of parsing decimal text from an interactive field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalParse {
    /// A complete, well-formed value.
    Value(Decimal),
    /// A lone separator: not yet a number, not yet an error.
    Pending,
}

impl DecimalParse {
    /// The parsed value, if complete.
    pub fn value(self) -> Option<Decimal> {
        match self {
            Self::Value(v) => Some(v),
            Self::Pending => None,
        }
    }
}

/// Strictly parse an integer.
///
/// # Errors
///
/// [`NumericError::ParseFailure`] when the trimmed text is not a plain
/// base-10 integer.
pub fn parse_integer(text: &str) -> Result<i64, NumericError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| NumericError::ParseFailure {
            text: text.to_string(),
        })
}

/// Parse decimal text under `locale`.
///
/// Text containing a comma is interpreted with `,` as the decimal
/// separator and `.` as grouping, regardless of `locale`; everything
/// else uses the locale's separators. A bare `,` or `.` yields
/// [`DecimalParse::Pending`].
///
/// # Errors
///
/// [`NumericError::ParseFailure`] when the normalized text is not a
/// well-formed decimal.
pub fn parse_decimal(text: &str, locale: &NumberLocale) -> Result<DecimalParse, NumericError> {
    let trimmed = text.trim();
    if trimmed == "," || trimmed == "." {
        return Ok(DecimalParse::Pending);
    }

    let (decimal_sep, group_sep) = if trimmed.contains(',') {
        (',', '.')
    } else {
        (locale.decimal_separator, locale.group_separator)
    };

    let normalized: String = trimmed
        .chars()
        .filter(|&c| c != group_sep)
        .map(|c| if c == decimal_sep { '.' } else { c })
        .collect();

    normalized
        .parse::<Decimal>()
        .map(DecimalParse::Value)
        .map_err(|_| NumericError::ParseFailure {
            text: text.to_string(),
        })
}

/// Enforce inclusive bounds on a parsed value.
///
/// Range limits belong to the consuming field, not to parsing, so this
/// is a separate step callers opt into.
///
/// # Errors
///
/// [`NumericError::OutOfRange`] when `value` is outside `min..=max`.
pub fn ensure_range(value: Decimal, min: Decimal, max: Decimal) -> Result<Decimal, NumericError> {
    if value < min || value > max {
        return Err(NumericError::OutOfRange { value, min, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_strict() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer(" -7 "), Ok(-7));
        assert!(parse_integer("1.5").is_err());
        assert!(parse_integer("abc").is_err());
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn test_comma_forces_comma_decimal_rules() {
        // Even under the dot-decimal locale, a comma means comma-decimal.
        let us = NumberLocale::en_us();
        assert_eq!(
            parse_decimal("1,5", &us),
            Ok(DecimalParse::Value(Decimal::new(15, 1)))
        );
    }

    #[test]
    fn test_locale_rules_apply_without_comma() {
        let br = NumberLocale::pt_br();
        let us = NumberLocale::en_us();
        // pt-BR: dot is grouping.
        assert_eq!(
            parse_decimal("1.234", &br),
            Ok(DecimalParse::Value(Decimal::new(1234, 0)))
        );
        // en-US: dot is the decimal point.
        assert_eq!(
            parse_decimal("1.234", &us),
            Ok(DecimalParse::Value(Decimal::new(1234, 3)))
        );
    }

    #[test]
    fn test_grouped_comma_decimal() {
        let br = NumberLocale::pt_br();
        assert_eq!(
            parse_decimal("1.234,56", &br),
            Ok(DecimalParse::Value(Decimal::new(123456, 2)))
        );
    }

    #[test]
    fn test_bare_separator_is_pending() {
        let br = NumberLocale::pt_br();
        assert_eq!(parse_decimal(",", &br), Ok(DecimalParse::Pending));
        assert_eq!(parse_decimal(".", &br), Ok(DecimalParse::Pending));
        assert_eq!(parse_decimal(",", &br).unwrap().value(), None);
    }

    #[test]
    fn test_garbage_is_parse_failure() {
        let br = NumberLocale::pt_br();
        assert_eq!(
            parse_decimal("abc", &br),
            Err(NumericError::ParseFailure {
                text: "abc".to_string()
            })
        );
        assert!(parse_decimal("1,2,3", &br).is_err());
        assert!(parse_decimal("", &br).is_err());
    }

    #[test]
    fn test_ensure_range() {
        let min = Decimal::new(0, 0);
        let max = Decimal::new(100, 0);
        assert_eq!(ensure_range(Decimal::new(50, 0), min, max), Ok(Decimal::new(50, 0)));
        assert_eq!(ensure_range(min, min, max), Ok(min));
        assert_eq!(ensure_range(max, min, max), Ok(max));
        assert!(matches!(
            ensure_range(Decimal::new(101, 0), min, max),
            Err(NumericError::OutOfRange { .. })
        ));
        assert!(matches!(
            ensure_range(Decimal::new(-1, 0), min, max),
            Err(NumericError::OutOfRange { .. })
        ));
    }
}
