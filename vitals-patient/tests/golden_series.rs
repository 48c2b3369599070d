use std::fs;

use serde_json::Value;
use vitals_core::{build_vitals_series, RangeWindow, VitalsError};
use vitals_patient::{find_patient, parse_roster_str};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn roster_series_matches_golden() {
    let roster_json =
        fs::read_to_string(fixture_path("patient_roster.json")).expect("Không đọc được roster mẫu");

    let roster = parse_roster_str(&roster_json).expect("Không parse được roster");
    let patient = find_patient(&roster, "Jessica Taylor").expect("Thiếu bệnh nhân mẫu");

    let series = build_vitals_series(Some(&patient.diagnosis_history), RangeWindow::OneYear)
        .expect("Chuỗi huyết áp không được rỗng");

    let actual = serde_json::to_value(&series).expect("Không serialize được chuỗi");

    let expected: Value = serde_json::from_str(
        &fs::read_to_string(fixture_path("blood_pressure_series.json"))
            .expect("Không đọc được golden series"),
    )
    .expect("Golden không hợp lệ");

    assert_eq!(actual, expected);
}

#[test]
fn malformed_records_survive_extraction_but_not_the_filter() {
    let roster_json =
        fs::read_to_string(fixture_path("patient_roster.json")).expect("Không đọc được roster mẫu");
    let roster = parse_roster_str(&roster_json).expect("Không parse được roster");
    let patient = find_patient(&roster, "Jessica Taylor").expect("Thiếu bệnh nhân mẫu");

    // 6 phần tử thô (kể cả null và bản ghi cụt), chỉ 3 đủ trường để vẽ.
    assert_eq!(patient.diagnosis_history.len(), 6);

    let series = build_vitals_series(Some(&patient.diagnosis_history), RangeWindow::Unbounded)
        .expect("Chuỗi huyết áp không được rỗng");
    assert_eq!(series.len(), 3);
}

#[test]
fn empty_history_yields_the_sentinel() {
    let roster_json =
        fs::read_to_string(fixture_path("patient_roster.json")).expect("Không đọc được roster mẫu");
    let roster = parse_roster_str(&roster_json).expect("Không parse được roster");
    let patient = find_patient(&roster, "Ryan Johnson").expect("Thiếu bệnh nhân mẫu");

    assert!(build_vitals_series(Some(&patient.diagnosis_history), RangeWindow::OneYear).is_none());
}

#[test]
fn roster_must_be_an_array() {
    let err = parse_roster_str(r#"{"name": "Jessica Taylor"}"#).unwrap_err();
    assert!(matches!(err, VitalsError::MissingData));
}
