//! # brdoc-numeric — Locale-Aware Numeric Parsing
//!
//! Parsing and formatting for interactive numeric fields: strict
//! integers, decimals that tolerate in-progress typing, and
//! currency-style text with optional symbol and grouping.
//!
//! ## Key Design Principles
//!
//! 1. **The locale is an argument.** Every parse and format call takes a
//!    [`NumberLocale`] value. There is no ambient or process-wide culture
//!    state, so calls are reentrant and safe to issue concurrently.
//!
//! 2. **Failure is the discriminant.** Parsers return `Result`; there is
//!    no sentinel value a caller could mistake for a legitimate number.
//!
//! 3. **No binary floats in money paths.** All decimal and currency
//!    values are [`rust_decimal::Decimal`].

pub mod currency;
pub mod error;
pub mod locale;
pub mod parse;

pub use currency::{format_currency, parse_currency};
pub use error::NumericError;
pub use locale::NumberLocale;
pub use parse::{ensure_range, parse_decimal, parse_integer, DecimalParse};
