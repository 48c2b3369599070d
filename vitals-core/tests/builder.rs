use vitals_core::{
    build_vitals_series, AxisBounds, BloodPressureEntry, DiagnosisEntry, RangeWindow, VitalReading,
};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn reading(value: f64, levels: &str) -> Option<VitalReading> {
    Some(VitalReading {
        value: Some(value),
        levels: Some(levels.to_string()),
    })
}

fn entry(month: &str, year: i32, systolic: f64, diastolic: f64) -> DiagnosisEntry {
    DiagnosisEntry {
        month: Some(month.to_string()),
        year: Some(year),
        blood_pressure: Some(BloodPressureEntry {
            systolic: reading(systolic, "Normal"),
            diastolic: reading(diastolic, "Normal"),
        }),
        ..DiagnosisEntry::default()
    }
}

fn monthly_run(start_month: usize, start_year: i32, count: usize) -> Vec<DiagnosisEntry> {
    (0..count)
        .map(|offset| {
            let slot = start_month + offset;
            entry(
                MONTHS[slot % 12],
                start_year + (slot / 12) as i32,
                110.0 + offset as f64,
                70.0 + offset as f64,
            )
        })
        .collect()
}

#[test]
fn one_year_window_keeps_the_twelve_most_recent_months() {
    let history = monthly_run(0, 2023, 14);

    let series = build_vitals_series(Some(&history), RangeWindow::OneYear)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(series.len(), 12);
    assert_eq!(series.labels.first().map(String::as_str), Some("Mar, 2023"));
    assert_eq!(series.labels.last().map(String::as_str), Some("Feb, 2024"));
    assert_eq!(series.current.systolic.value, 123.0);
    assert_eq!(series.current.diastolic.value, 83.0);
}

#[test]
fn single_record_fills_a_two_year_window() {
    let history = vec![entry("June", 2024, 120.0, 80.0)];

    let series = build_vitals_series(Some(&history), RangeWindow::TwoYears)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(series.len(), 1);
    assert_eq!(series.labels, vec!["Jun, 2024".to_string()]);
    assert_eq!(series.current.systolic.value, 120.0);
    assert_eq!(series.current.systolic.levels.as_deref(), Some("Normal"));
}

#[test]
fn fifteen_month_window_truncates_to_the_most_recent_records() {
    let history = monthly_run(0, 2021, 30);

    let series = build_vitals_series(Some(&history), RangeWindow::FifteenMonths)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(series.len(), 15);
    assert_eq!(series.labels.first().map(String::as_str), Some("Apr, 2022"));
    assert_eq!(series.labels.last().map(String::as_str), Some("Jun, 2023"));
    let expected: Vec<f64> = (15..30).map(|offset| 110.0 + offset as f64).collect();
    assert_eq!(series.systolic, expected);
}

#[test]
fn output_is_chronological_even_for_scrambled_input() {
    let history = vec![
        entry("March", 2024, 140.0, 90.0),
        entry("January", 2024, 120.0, 80.0),
        entry("February", 2024, 130.0, 85.0),
        entry("December", 2023, 110.0, 75.0),
    ];

    let series = build_vitals_series(Some(&history), RangeWindow::Unbounded)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(
        series.labels,
        vec!["Dec, 2023", "Jan, 2024", "Feb, 2024", "Mar, 2024"]
    );
    assert_eq!(series.systolic, vec![110.0, 120.0, 130.0, 140.0]);
}

#[test]
fn records_missing_blood_pressure_yield_the_sentinel() {
    let history = vec![DiagnosisEntry {
        month: Some("May".to_string()),
        year: Some(2024),
        ..DiagnosisEntry::default()
    }];

    assert!(build_vitals_series(Some(&history), RangeWindow::OneYear).is_none());
}

#[test]
fn absent_and_empty_histories_yield_the_sentinel() {
    assert!(build_vitals_series(None, RangeWindow::OneYear).is_none());
    assert!(build_vitals_series(Some(&[]), RangeWindow::Unbounded).is_none());
}

#[test]
fn zero_is_a_defined_value_not_a_missing_one() {
    let history = vec![entry("April", 2024, 0.0, 0.0)];

    let series = build_vitals_series(Some(&history), RangeWindow::OneYear)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(series.systolic, vec![0.0]);
    assert_eq!(series.current.diastolic.value, 0.0);
}

#[test]
fn unparsable_months_are_filtered_out() {
    let history = vec![
        entry("June", 2024, 120.0, 80.0),
        entry("Juneteenth", 2024, 150.0, 95.0),
    ];

    let series = build_vitals_series(Some(&history), RangeWindow::Unbounded)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(series.len(), 1);
    assert_eq!(series.current.systolic.value, 120.0);
}

#[test]
fn unrecognized_selector_leaves_the_window_unbounded() {
    assert_eq!(RangeWindow::from_selector("1"), RangeWindow::OneYear);
    assert_eq!(RangeWindow::from_selector("15"), RangeWindow::FifteenMonths);
    assert_eq!(RangeWindow::from_selector("two_years"), RangeWindow::TwoYears);
    assert_eq!(RangeWindow::from_selector("6"), RangeWindow::Unbounded);
    assert_eq!(RangeWindow::from_selector(""), RangeWindow::Unbounded);

    let history = monthly_run(0, 2021, 30);
    let series = build_vitals_series(Some(&history), RangeWindow::from_selector("mọi thứ"))
        .expect("Chuỗi huyết áp không được rỗng");
    assert_eq!(series.len(), 30);
}

#[test]
fn duplicate_months_keep_input_order_through_both_sort_phases() {
    let mut history: Vec<DiagnosisEntry> = (1..=13)
        .map(|n| entry("June", 2024, n as f64, 60.0))
        .collect();
    history.push(entry("May", 2024, 100.0, 65.0));

    let series = build_vitals_series(Some(&history), RangeWindow::OneYear)
        .expect("Chuỗi huyết áp không được rỗng");

    // 13 bản ghi cùng khóa: cửa sổ 12 giữ đúng 12 bản đầu theo thứ tự nhập,
    // bản May rơi ra vì xếp sau trong bảng xếp hạng mới-nhất-trước.
    let expected: Vec<f64> = (1..=12).map(f64::from).collect();
    assert_eq!(series.systolic, expected);
}

#[test]
fn validity_filter_preserves_relative_order() {
    let history = vec![
        entry("June", 2024, 1.0, 60.0),
        DiagnosisEntry::default(),
        entry("June", 2024, 2.0, 61.0),
        DiagnosisEntry {
            month: Some("June".to_string()),
            ..DiagnosisEntry::default()
        },
        entry("June", 2024, 3.0, 62.0),
    ];

    let series = build_vitals_series(Some(&history), RangeWindow::Unbounded)
        .expect("Chuỗi huyết áp không được rỗng");

    assert_eq!(series.systolic, vec![1.0, 2.0, 3.0]);
}

#[test]
fn identical_inputs_produce_identical_series() {
    let history = monthly_run(3, 2022, 20);

    let first = build_vitals_series(Some(&history), RangeWindow::FifteenMonths);
    let second = build_vitals_series(Some(&history), RangeWindow::FifteenMonths);

    assert_eq!(first, second);
}

#[test]
fn axis_bounds_snap_to_the_step_grid() {
    let history = vec![
        entry("January", 2024, 171.0, 67.0),
        entry("February", 2024, 158.0, 72.0),
    ];
    let series = build_vitals_series(Some(&history), RangeWindow::OneYear)
        .expect("Chuỗi huyết áp không được rỗng");

    let bounds = AxisBounds::fit(&series);
    assert_eq!(bounds.min, 60.0);
    assert_eq!(bounds.max, 180.0);
    assert_eq!(bounds.step, 20.0);

    let defaults = AxisBounds::default();
    assert_eq!(defaults.min, 60.0);
    assert_eq!(defaults.max, 180.0);
}
