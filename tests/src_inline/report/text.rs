use super::*;
use crate::report::summarize;
use crate::report::tests::report_for;

#[test]
fn test_player_line() {
    let report = report_for("Tom", "10", "0");
    assert_eq!(render_player_line(&report), "Tom's QB Rating is: 39.6");
}

#[test]
fn test_player_line_with_error_message() {
    let report = report_for("Tom", "abc", "0");
    assert_eq!(render_player_line(&report), "Invalid number in Pass Attempts.");
}

#[test]
fn test_batch_text() {
    let reports = vec![
        report_for("A", "10", "0").at_line(2),
        report_for("B", "0", "0").at_line(3),
    ];
    let text = render_batch_text(&reports, &summarize(&reports));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "line 2: A's QB Rating is: 39.6");
    assert_eq!(lines[1], "line 3: The player must have at least 1 pass attempt.");
    assert_eq!(lines[2], "Rated 1 of 2 rows (1 failed)");
    assert_eq!(lines[3], "Best rating: 39.6");
    assert_eq!(lines[4], "Mean rating: 39.6");
}
