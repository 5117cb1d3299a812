//! # Field Evaluation Lifecycle Tests
//!
//! Drives the evaluation function the way a form would across an edit
//! session: repeated commits with evolving text, per kind and per
//! configuration. Exercises the caller-visible distinction between the
//! masked and unmasked valid states and the stability of re-evaluating
//! already-masked text.

use brdoc_core::{DocumentKind, ValidationError};
use brdoc_field::{evaluate, FieldConfig, FieldState};

#[test]
fn test_reevaluating_masked_output_is_stable() {
    // A form that re-commits its own display text must not oscillate.
    let config = FieldConfig::default();
    for (kind, typed) in [
        (DocumentKind::Cpf, "11144477735"),
        (DocumentKind::Cnpj, "11222333000181"),
        (DocumentKind::Cep, "12345678"),
    ] {
        let first = evaluate(kind, typed, &config);
        assert_eq!(first.state, FieldState::ValidMasked);

        let second = evaluate(kind, &first.display_text, &config);
        assert_eq!(second, first, "second commit changed the outcome for {kind}");
    }
}

#[test]
fn test_cep_both_shapes_normalize_identically() {
    let config = FieldConfig::default();
    let bare = evaluate(DocumentKind::Cep, "12345678", &config);
    let masked = evaluate(DocumentKind::Cep, "12345-678", &config);
    assert_eq!(bare.value(), Some("12345678"));
    assert_eq!(bare.value(), masked.value());
    assert_eq!(bare.display_text, "12345-678");
    assert_eq!(masked.display_text, "12345-678");
}

#[test]
fn test_edit_session_blank_then_invalid_then_valid() {
    let config = FieldConfig {
        required: true,
        ..FieldConfig::default()
    };

    let blank = evaluate(DocumentKind::Cnpj, "", &config);
    assert_eq!(blank.state, FieldState::Invalid);
    assert_eq!(blank.error, None);

    let wrong = evaluate(DocumentKind::Cnpj, "11.222.333/0001-80", &config);
    assert_eq!(wrong.state, FieldState::Invalid);
    assert_eq!(
        wrong.error,
        Some(ValidationError::ChecksumMismatch {
            kind: DocumentKind::Cnpj
        })
    );
    // Display text is left for the UI layer to decide what to do with.
    assert_eq!(wrong.display_text, "11.222.333/0001-80");

    let good = evaluate(DocumentKind::Cnpj, "11.222.333/0001-81", &config);
    assert_eq!(good.state, FieldState::ValidMasked);
    assert_eq!(good.value(), Some("11222333000181"));
}

#[test]
fn test_shape_failure_reported_distinctly_from_checksum() {
    let config = FieldConfig::default();
    let shape = evaluate(DocumentKind::Cpf, "12.34", &config);
    assert_eq!(
        shape.error,
        Some(ValidationError::FormatMismatch {
            kind: DocumentKind::Cpf
        })
    );
    let checksum = evaluate(DocumentKind::Cpf, "11144477736", &config);
    assert_eq!(
        checksum.error,
        Some(ValidationError::ChecksumMismatch {
            kind: DocumentKind::Cpf
        })
    );
}

#[test]
fn test_evaluation_serializes_for_consumers() {
    let result = evaluate(
        DocumentKind::Cpf,
        "111.444.777-35",
        &FieldConfig::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["state"], "valid_masked");
    assert_eq!(json["normalized"], "11144477735");
    assert_eq!(json["display_text"], "111.444.777-35");
}
