//! # Currency Parsing and Formatting
//!
//! Currency-style text is the most permissive numeric input: the symbol
//! is optional, group separators and embedded spaces are tolerated, and
//! negatives may use a leading minus or accounting parentheses.
//! Formatting is the inverse convention: symbol, 3-digit grouping, and
//! exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::NumericError;
use crate::locale::NumberLocale;

/// Parse currency-style text under `locale`.
///
/// # Errors
///
/// [`NumericError::ParseFailure`] when, after removing the symbol,
/// grouping, and spaces, the text is not a well-formed decimal.
pub fn parse_currency(text: &str, locale: &NumberLocale) -> Result<Decimal, NumericError> {
    let failure = || NumericError::ParseFailure {
        text: text.to_string(),
    };

    let mut body = text.trim();
    let mut negative = false;

    // Accounting negatives: (R$ 1.234,56)
    if body.len() >= 2 && body.starts_with('(') && body.ends_with(')') {
        negative = true;
        body = body[1..body.len() - 1].trim();
    }
    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest.trim_start();
    }
    // The symbol may sit on either side of the amount.
    if let Some(rest) = body.strip_prefix(locale.currency_symbol.as_str()) {
        body = rest.trim_start();
    } else if let Some(rest) = body.strip_suffix(locale.currency_symbol.as_str()) {
        body = rest.trim_end();
    }
    // A minus may also follow the symbol.
    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest.trim_start();
    }

    let normalized: String = body
        .chars()
        .filter(|&c| c != locale.group_separator && c != ' ' && c != '\u{a0}')
        .map(|c| {
            if c == locale.decimal_separator {
                '.'
            } else {
                c
            }
        })
        .collect();

    if normalized.is_empty() {
        return Err(failure());
    }
    let value = normalized.parse::<Decimal>().map_err(|_| failure())?;
    Ok(if negative { -value } else { value })
}

/// Format a value as currency text: sign, symbol, grouped integer part,
/// and exactly two decimals, rounding midpoints away from zero.
pub fn format_currency(value: Decimal, locale: &NumberLocale) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let cents = rounded.mantissa();
    let magnitude = cents.unsigned_abs();
    let whole = (magnitude / 100).to_string();
    let fraction = magnitude % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(locale.group_separator);
        }
        grouped.push(digit);
    }

    let sign = if cents < 0 { "-" } else { "" };
    let space = if locale.symbol_spaced { " " } else { "" };
    format!(
        "{sign}{}{space}{grouped}{}{fraction:02}",
        locale.currency_symbol, locale.decimal_separator
    )
}
