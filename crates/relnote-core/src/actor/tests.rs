//! Tests for the actor module.

use chrono::{FixedOffset, TimeZone};
use proptest::prelude::*;

use super::GitActor;
use crate::error::ValidationError;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn create_actor(name: &str, email: &str) -> GitActor {
    let timestamp = utc().with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
    GitActor::new(name, email, timestamp).unwrap()
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn actor_trims_and_normalizes_fields() {
    let actor = create_actor("  John Doe  ", "  JOHN.DOE@EXAMPLE.COM  ");
    assert_eq!(actor.name(), "John Doe");
    assert_eq!(actor.email(), "john.doe@example.com");
}

#[test]
fn actor_rejects_blank_name() {
    let timestamp = utc().with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
    for name in ["", "   ", "\t\n"] {
        let err = GitActor::new(name, "a@b", timestamp).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { field: "name" }), "{name:?}");
    }
}

#[test]
fn actor_enforces_name_length_bound() {
    let timestamp = utc().with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();

    let max_name = "A".repeat(255);
    assert_eq!(GitActor::new(&max_name, "a@b", timestamp).unwrap().name(), max_name);

    let oversized = "A".repeat(256);
    let err = GitActor::new(&oversized, "a@b", timestamp).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::FieldTooLong { field: "name", limit: 255, actual: 256 }
    ));
}

#[test]
fn actor_accepts_special_and_unicode_names() {
    for name in [
        "John O'Connor",
        "Mary-Jane Smith",
        "Jean-Luc Picard",
        "李小明",
        "Müller, Hans",
    ] {
        assert_eq!(create_actor(name, "a@b").name(), name);
    }
}

#[test]
fn actor_accepts_corporate_identity_patterns() {
    for (name, email) in [
        ("Build System", "build@ci"),
        ("Jenkins", "jenkins"),
        ("GitHub", "noreply@github.com"),
        ("Automated Deploy", "deploy-bot"),
        ("Code Review Bot", "review-bot@internal"),
    ] {
        let actor = create_actor(name, email);
        assert_eq!(actor.name(), name);
        assert_eq!(actor.email(), email.to_lowercase());
    }
}

// =============================================================================
// Git format rendering
// =============================================================================

#[test]
fn git_format_is_bit_exact_for_utc() {
    let actor = create_actor("John Doe", "john.doe@example.com");
    assert_eq!(
        actor.to_git_format(),
        "John Doe <john.doe@example.com> 1672574400 +0000"
    );
    assert_eq!(actor.to_string(), actor.to_git_format());
}

#[test]
fn git_format_preserves_non_utc_offset() {
    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let timestamp = ist.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
    let actor = GitActor::new("Priya", "priya@example.com", timestamp).unwrap();

    assert_eq!(actor.to_git_format(), "Priya <priya@example.com> 1672554600 +0530");
}

#[test]
fn git_format_negative_offset() {
    let pst = FixedOffset::west_opt(8 * 3600).unwrap();
    let timestamp = pst.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
    let actor = GitActor::new("West Coast", "wc@example.com", timestamp).unwrap();

    assert!(actor.to_git_format().ends_with("-0800"));
}

// =============================================================================
// Git format parsing
// =============================================================================

#[test]
fn parse_git_format_round_trips() {
    let actor = create_actor("John Doe", "john.doe@example.com");
    let parsed = GitActor::parse_git_format(&actor.to_git_format()).unwrap();

    assert_eq!(parsed, actor);
    assert_eq!(parsed.to_git_format(), actor.to_git_format());
}

#[test]
fn parse_git_format_keeps_offset() {
    let parsed = GitActor::parse_git_format("Priya <priya@example.com> 1672554600 +0530").unwrap();
    assert_eq!(parsed.timestamp().offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    assert_eq!(parsed.timestamp().timestamp(), 1_672_554_600);
}

#[test]
fn parse_git_format_rejects_malformed_lines() {
    for line in [
        "",
        "no brackets 1672574400 +0000",
        "John Doe <a@b>",
        "John Doe <a@b> notanumber +0000",
        "John Doe <a@b> 1672574400",
        "John Doe <a@b> 1672574400 +00:00",
        "John Doe <a@b> 1672574400 0000",
        "John Doe <a@b> 1672574400 +0099",
        "John Doe <a@b> 1672574400 +0000 extra",
    ] {
        let err = GitActor::parse_git_format(line).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedActorLine { .. }), "{line:?}");
    }
}

#[test]
fn parse_git_format_still_validates_fields() {
    // Structurally fine, semantically blank name.
    let err = GitActor::parse_git_format("   <a@b> 1672574400 +0000").unwrap_err();
    assert!(matches!(err, ValidationError::EmptyField { field: "name" }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn git_format_round_trip_is_identity(
        name in "[A-Za-z][A-Za-z '.-]{0,40}",
        email in "[a-z0-9._@-]{1,30}",
        epoch in 0i64..4_000_000_000,
        offset_minutes in -14 * 60..14 * 60,
    ) {
        prop_assume!(!name.trim().is_empty());
        prop_assume!(!email.trim().is_empty());
        // Git offsets are whole quarter hours in practice; any minute value
        // representable as ±HHMM must survive.
        let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let timestamp = chrono::DateTime::from_timestamp(epoch, 0).unwrap().with_timezone(&offset);
        let actor = GitActor::new(&name, &email, timestamp).unwrap();
        let parsed = GitActor::parse_git_format(&actor.to_git_format()).unwrap();
        prop_assert_eq!(&parsed, &actor);
        prop_assert_eq!(parsed.to_git_format(), actor.to_git_format());
    }
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn serde_round_trip() {
    let actor = create_actor("John Doe", "john.doe@example.com");
    let json = serde_json::to_string(&actor).unwrap();
    let back: GitActor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, actor);
}

#[test]
fn serde_runs_the_validation_gate() {
    let blank_name = r#"{"name":"   ","email":"a@b","timestamp":"2023-01-01T12:00:00+00:00"}"#;
    assert!(serde_json::from_str::<GitActor>(blank_name).is_err());

    let unknown_field =
        r#"{"name":"A","email":"a@b","timestamp":"2023-01-01T12:00:00+00:00","x":1}"#;
    assert!(serde_json::from_str::<GitActor>(unknown_field).is_err());
}
