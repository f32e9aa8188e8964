//! Tests for the primitive validators.

use proptest::prelude::*;

use super::{GitSha, GpgSignature, validate_email, validate_timestamp};
use crate::error::ValidationError;

// =============================================================================
// GitSha
// =============================================================================

#[test]
fn sha_normalizes_case_and_whitespace() {
    assert_eq!(GitSha::new("ABCD1234").unwrap().as_str(), "abcd1234");
    assert_eq!(GitSha::new("  abc123  ").unwrap().as_str(), "abc123");
    assert_eq!(GitSha::new("\tabc123\n").unwrap().as_str(), "abc123");
    assert_eq!(GitSha::new("abcd1234").unwrap().as_str(), "abcd1234");
}

#[test]
fn sha_accepts_boundary_lengths() {
    assert_eq!(GitSha::new("abc1").unwrap().len(), 4);
    assert_eq!(GitSha::new("1234").unwrap().len(), 4);

    let full = "abc123def456789abcdef123456789abcdef1234";
    assert_eq!(GitSha::new(full).unwrap().as_str(), full);

    let extended = "a".repeat(64);
    assert_eq!(GitSha::new(&extended).unwrap().len(), 64);
}

#[test]
fn sha_rejects_bad_lengths() {
    for raw in ["", "a", "ab", "abc", "   ", "\t\n"] {
        let err = GitSha::new(raw).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidShaFormat { .. }), "{raw:?}");
    }
    let too_long = "a".repeat(65);
    assert!(GitSha::new(&too_long).is_err());
}

#[test]
fn sha_rejects_non_hex_characters() {
    for raw in ["abcg", "abc-123", "abc 123", "abcz123"] {
        let err = GitSha::new(raw).unwrap_err();
        match err {
            ValidationError::InvalidShaFormat { field, reason, .. } => {
                assert_eq!(field, "sha");
                assert!(reason.contains("hexadecimal"), "{reason}");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn sha_abbreviation_clamps_to_length() {
    let sha = GitSha::new("abc12345def67890").unwrap();
    assert_eq!(sha.short(), "abc12345");
    assert_eq!(sha.abbrev(4), "abc1");
    assert_eq!(sha.abbrev(100), "abc12345def67890");
}

#[test]
fn sha_serde_round_trip_and_gate() {
    let sha = GitSha::new("ABC123").unwrap();
    let json = serde_json::to_string(&sha).unwrap();
    assert_eq!(json, "\"abc123\"");
    let back: GitSha = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sha);

    // Deserialization runs the same gate as construction.
    assert!(serde_json::from_str::<GitSha>("\"not-hex\"").is_err());
    assert!(serde_json::from_str::<GitSha>("\"ab\"").is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sha_accepts_all_valid_hex(raw in "[0-9a-fA-F]{4,64}") {
        let sha = GitSha::new(&raw).unwrap();
        prop_assert_eq!(sha.as_str(), raw.to_lowercase());
    }

    #[test]
    fn sha_rejects_any_non_hex(raw in "[0-9a-f]{0,10}[g-z!@#][0-9a-f]{0,10}") {
        prop_assert!(GitSha::new(&raw).is_err());
    }
}

// =============================================================================
// GpgSignature
// =============================================================================

#[test]
fn signature_none_passes_through() {
    assert!(GpgSignature::from_optional(None).unwrap().is_none());
}

#[test]
fn signature_rejects_empty_input() {
    for raw in ["", "   ", "\t\n", "  \t  \n  "] {
        let err = GpgSignature::new(raw).unwrap_err();
        assert!(matches!(err, ValidationError::EmptySignature { field: "signature" }));
    }
}

#[test]
fn signature_accepts_git_formats() {
    assert_eq!(GpgSignature::new("gpgsig test").unwrap().as_str(), "gpgsig test");

    let pgp = "-----BEGIN PGP SIGNATURE-----\n\
               Version: GnuPG v2\n\n\
               iQIcBAABCAAGBQJhXYZ1AAoJEH8JWXvNOxq+ABC123\n\
               =AbC1\n\
               -----END PGP SIGNATURE-----";
    assert_eq!(GpgSignature::new(pgp).unwrap().as_str(), pgp);
}

#[test]
fn signature_trims_surrounding_whitespace() {
    assert_eq!(GpgSignature::new("  gpgsig test  ").unwrap().as_str(), "gpgsig test");
    assert_eq!(
        GpgSignature::new("  -----BEGIN PGP SIGNATURE-----  ").unwrap().as_str(),
        "-----BEGIN PGP SIGNATURE-----"
    );
}

#[test]
fn signature_rejects_unknown_prefixes() {
    for raw in [
        "invalid signature",
        "sig gpgsig test",
        "BEGIN PGP SIGNATURE",
        "GPGSIG test",
        "-----begin PGP SIGNATURE-----",
    ] {
        let err = GpgSignature::new(raw).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidSignatureFormat { .. }),
            "{raw:?}"
        );
    }
}

// =============================================================================
// Email
// =============================================================================

#[test]
fn email_normalizes_to_lowercase() {
    assert_eq!(validate_email("JOHN.DOE@EXAMPLE.COM").unwrap(), "john.doe@example.com");
    assert_eq!(validate_email("  user@host  ").unwrap(), "user@host");
}

#[test]
fn email_accepts_git_realistic_identifiers() {
    // Real Git history is full of non-RFC identifiers. They must pass.
    for raw in [
        "plainaddress",
        "user@",
        "@domain.com",
        "build-system",
        "noreply",
        "user@internal",
        "automated-system-123",
    ] {
        assert_eq!(validate_email(raw).unwrap(), raw.to_lowercase());
    }
}

#[test]
fn email_rejects_blank_and_oversized() {
    assert!(matches!(
        validate_email("   ").unwrap_err(),
        ValidationError::EmptyField { field: "email" }
    ));

    let oversized = "a".repeat(321);
    assert!(matches!(
        validate_email(&oversized).unwrap_err(),
        ValidationError::FieldTooLong { field: "email", limit: 320, actual: 321 }
    ));
}

// =============================================================================
// Timestamp
// =============================================================================

#[test]
fn timestamp_accepts_offset_aware_forms() {
    let ts = validate_timestamp("2023-01-01T12:00:00+00:00").unwrap();
    assert_eq!(ts.timestamp(), 1_672_574_400);

    let zulu = validate_timestamp("2023-01-01T12:00:00Z").unwrap();
    assert_eq!(zulu, ts);

    let spaced = validate_timestamp("2023-01-01 12:00:00 +0530").unwrap();
    assert_eq!(spaced.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
}

#[test]
fn timestamp_rejects_naive_input() {
    for raw in ["2023-01-01T12:00:00", "2023-01-01 12:00:00"] {
        let err = validate_timestamp(raw).unwrap_err();
        assert!(matches!(err, ValidationError::NaiveTimestamp { .. }), "{raw:?}");
    }
}

#[test]
fn timestamp_rejects_garbage() {
    for raw in ["", "yesterday", "2023-13-99", "1672574400"] {
        let err = validate_timestamp(raw).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }), "{raw:?}");
    }
}
