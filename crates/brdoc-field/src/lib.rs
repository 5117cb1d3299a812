//! # brdoc-field — Document Field Evaluation
//!
//! The shared control logic behind every document input field: given the
//! committed text and a [`FieldConfig`], decide the field's state, its
//! digits-only value, and the next display text. UI layers own focus,
//! events, and rendering; they call [`evaluate`] on commit (blur) and
//! apply the result however they like.
//!
//! ## Design
//!
//! Evaluation is a pure function of `(kind, text, config)`. Nothing is
//! cached and nothing is global, so callers may keep their own
//! previous-valid-text cache and re-evaluate at will, including from
//! multiple threads.

pub mod config;
pub mod field;

pub use config::FieldConfig;
pub use field::{evaluate, FieldEvaluation, FieldState};
