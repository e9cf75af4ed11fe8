use gwa_calc::core::calculator::round_half_up;
use gwa_calc::core::format::format_weighted_average;
use gwa_calc::{compute, Calculator, GradingPolicy, Row, Standing};

fn rows(pairs: &[(f64, i64)]) -> Vec<Row> {
    pairs.iter().map(|&(g, u)| Row::new(g, u)).collect()
}

#[test]
fn test_presidents_list_single_row() {
    let result = compute(&rows(&[(1.0, 3)]));
    assert_eq!(result.total_units, 3.0);
    assert_eq!(result.weighted_sum, 3.0);
    assert_eq!(result.raw_average, 1.0);
    assert_eq!(result.rounded_average, 1.0);
    assert_eq!(result.standing.label(), "President's Lister (Maybe)");
}

#[test]
fn test_deans_list_two_rows() {
    let result = compute(&rows(&[(1.0, 3), (1.75, 3)]));
    assert_eq!(result.total_units, 6.0);
    assert_eq!(result.weighted_sum, 8.25);
    assert_eq!(result.raw_average, 1.375);
    assert_eq!(result.rounded_average, 1.38);
    assert_eq!(result.standing.label(), "Dean's Lister (Maybe)");
}

#[test]
fn test_threshold_grade_is_inclusive() {
    let result = compute(&rows(&[(1.0, 3), (2.25, 3)]));
    assert!(result.has_failing_grade);
    assert_eq!(result.standing.label(), "---");

    let result = compute(&rows(&[(1.0, 3), (2.0, 3)]));
    assert!(!result.has_failing_grade);
}

#[test]
fn test_half_up_rounding() {
    assert_eq!(round_half_up(1.005, 2), 1.01);
    assert_eq!(round_half_up(1.125, 2), 1.13);
    assert_eq!(round_half_up(1.0749, 2), 1.07);
}

#[test]
fn test_grades_outside_form_range_are_accepted() {
    let result = compute(&rows(&[(0.5, 2), (7.0, 1)]));
    assert_eq!(result.total_units, 3.0);
    assert_eq!(result.weighted_sum, 8.0);
    assert!(result.has_failing_grade);
}

#[test]
fn test_cancelling_units_give_infinite_average() {
    let result = compute(&rows(&[(1.0, 1), (2.0, -1)]));
    assert_eq!(result.total_units, 0.0);
    assert_eq!(result.raw_average, f64::NEG_INFINITY);
    assert!(!result.is_defined());
    assert_eq!(
        format_weighted_average(&result),
        "-Infinity (rounded as -Infinity)"
    );
}

#[test]
fn test_unit_sum_past_i64_range() {
    let result = compute(&rows(&[(1.0, i64::MAX), (1.0, 1)]));
    assert!(result.total_units > i64::MAX as f64 - 1.0);
    assert_eq!(result.raw_average, 1.0);
    assert!(result.is_defined());

    let result = compute(&rows(&[(1.5, i64::MIN), (1.5, -1)]));
    assert!(result.total_units < 0.0);
    assert_eq!(result.raw_average, 1.5);
}

#[test]
fn test_repeated_compute_is_identical() {
    let calculator = Calculator::new(GradingPolicy::default());
    let input = rows(&[(1.25, 3), (1.5, 4), (1.0, 1)]);
    let first = calculator.compute(&input);
    let second = calculator.compute(&input);
    assert_eq!(first, second);
    assert_eq!(first.standing, Standing::DeansLister);
}

#[test]
fn test_result_json_uses_labels() {
    let result = compute(&rows(&[(1.0, 3)]));
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["standing"], "President's Lister (Maybe)");
    assert_eq!(json["total_units"], 3.0);

    let empty = serde_json::to_value(compute(&[])).unwrap();
    assert!(empty["raw_average"].is_null());
}
