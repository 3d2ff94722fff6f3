use super::*;

#[test]
fn test_from_f64_converts_finite_values() {
    let stats = PassingStats::from_f64(35.0, 25.0, 300.0, 3.0, 1.0).unwrap();
    assert_eq!(stats.attempts, Decimal::from(35));
    assert_eq!(stats.yards, Decimal::from(300));
    assert_eq!(stats.interceptions, Decimal::ONE);
}

#[test]
fn test_from_f64_rejects_non_finite() {
    assert_eq!(
        PassingStats::from_f64(10.0, f64::NAN, 0.0, 0.0, 0.0),
        Err(RatingError::InvalidInput {
            field: StatField::Completions
        })
    );
    assert_eq!(
        PassingStats::from_f64(f64::INFINITY, 0.0, 0.0, 0.0, 0.0),
        Err(RatingError::InvalidInput {
            field: StatField::Attempts
        })
    );
    assert_eq!(
        PassingStats::from_f64(10.0, 0.0, 0.0, 0.0, f64::NEG_INFINITY),
        Err(RatingError::InvalidInput {
            field: StatField::Interceptions
        })
    );
}

#[test]
fn test_from_f64_rejects_out_of_range() {
    assert_eq!(
        PassingStats::from_f64(10.0, 0.0, 1e40, 0.0, 0.0),
        Err(RatingError::InvalidInput {
            field: StatField::Yards
        })
    );
}
