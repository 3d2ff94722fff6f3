use super::*;

fn raw(attempts: &str, completions: &str, yards: &str, tds: &str, ints: &str) -> RawPassingInput {
    RawPassingInput {
        player: "Test".to_string(),
        attempts: attempts.to_string(),
        completions: completions.to_string(),
        yards: yards.to_string(),
        touchdowns: tds.to_string(),
        interceptions: ints.to_string(),
    }
}

#[test]
fn test_parse_attempts() {
    assert_eq!(parse_attempts(" 12 "), Ok(Decimal::from(12)));
    assert_eq!(parse_attempts("0.5"), Ok(Decimal::new(5, 1)));
    assert_eq!(parse_attempts("0"), Err(RatingError::NoAttempts));
    assert_eq!(parse_attempts("-3"), Err(RatingError::NoAttempts));
    assert_eq!(
        parse_attempts("abc"),
        Err(RatingError::InvalidInput {
            field: StatField::Attempts
        })
    );
    assert_eq!(
        parse_attempts(""),
        Err(RatingError::InvalidInput {
            field: StatField::Attempts
        })
    );
}

#[test]
fn test_parse_secondary_zero_on_invalid() {
    let v = parse_secondary("x", StatField::Yards, SecondaryPolicy::ZeroOnInvalid).unwrap();
    assert_eq!(v.value, Decimal::ZERO);
    assert!(v.defaulted);

    let v = parse_secondary("42", StatField::Yards, SecondaryPolicy::ZeroOnInvalid).unwrap();
    assert_eq!(v.value, Decimal::from(42));
    assert!(!v.defaulted);
}

#[test]
fn test_parse_secondary_reject() {
    let err = parse_secondary("", StatField::Touchdowns, SecondaryPolicy::Reject).unwrap_err();
    assert_eq!(
        err,
        RatingError::InvalidInput {
            field: StatField::Touchdowns
        }
    );
    let v = parse_secondary("3", StatField::Touchdowns, SecondaryPolicy::Reject).unwrap();
    assert_eq!(v.value, Decimal::from(3));
}

#[test]
fn test_default_policy_is_permissive() {
    assert_eq!(SecondaryPolicy::default(), SecondaryPolicy::ZeroOnInvalid);
}

#[test]
fn test_parse_stats_records_defaulted_fields_in_order() {
    let parsed = parse_stats(&raw("10", "", "oops", "1", ""), SecondaryPolicy::ZeroOnInvalid).unwrap();
    assert_eq!(parsed.stats.attempts, Decimal::from(10));
    assert_eq!(parsed.stats.touchdowns, Decimal::ONE);
    assert_eq!(parsed.stats.yards, Decimal::ZERO);
    assert_eq!(
        parsed.defaulted,
        vec![
            StatField::Completions,
            StatField::Yards,
            StatField::Interceptions
        ]
    );
}

#[test]
fn test_parse_stats_attempts_checked_before_secondaries() {
    let err = parse_stats(&raw("abc", "x", "x", "x", "x"), SecondaryPolicy::Reject).unwrap_err();
    assert_eq!(
        err,
        RatingError::InvalidInput {
            field: StatField::Attempts
        }
    );
    let err = parse_stats(&raw("0", "x", "", "", ""), SecondaryPolicy::Reject).unwrap_err();
    assert_eq!(err, RatingError::NoAttempts);
}

#[test]
fn test_parse_stats_strict_names_first_bad_field() {
    let err = parse_stats(&raw("10", "5", "y", "z", ""), SecondaryPolicy::Reject).unwrap_err();
    assert_eq!(
        err,
        RatingError::InvalidInput {
            field: StatField::Yards
        }
    );
}
