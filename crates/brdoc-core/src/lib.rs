//! # brdoc-core — Document Validation Primitives
//!
//! The leaf crate of the brdoc workspace. It defines the document kinds,
//! checksum validators, format matchers, and mask formatting that the
//! field-evaluation and CLI crates build on.
//!
//! ## Key Design Principles
//!
//! 1. **Configuration-driven dispatch.** A single [`DocumentKind`] enum
//!    carries the per-kind lengths and mask slots. There is no type
//!    hierarchy to extend; adding a kind forces every `match` to handle it.
//!
//! 2. **Normalization is the product of validation.** Validators return
//!    the digits-only form on success, so callers never re-strip text.
//!    When `validate()` succeeds, the normalized string is all ASCII
//!    digits and exactly `unmasked_len()` long.
//!
//! 3. **Failure is a value.** Untrusted interactive text fails often;
//!    every rejection is a [`ValidationError`] or a `false`, never a panic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `brdoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; the only `expect`s are
//!   on literal regex patterns, asserted at first use.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod cnpj;
pub mod cpf;
pub mod error;
pub mod kind;
pub mod mask;
pub mod pattern;

// Re-export primary items for ergonomic imports.
pub use cnpj::{is_cnpj, validate_cnpj};
pub use cpf::{is_cpf, validate_cpf};
pub use error::ValidationError;
pub use kind::DocumentKind;
pub use mask::{apply_mask, strip_separators};
pub use pattern::{is_cep, is_email, is_tracking_code};
