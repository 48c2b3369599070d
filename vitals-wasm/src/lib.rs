//! Bridge WASM <-> JavaScript trung lập framework.

use serde_wasm_bindgen::{from_value, to_value};
use vitals_core::{build_vitals_series, RangeWindow, VitalsError};
use vitals_patient::{extract_history, find_patient, parse_roster_value};
use wasm_bindgen::prelude::*;

/// Dựng chuỗi huyết áp từ một mảng `diagnosis_history` thô phía JS.
///
/// Trả về `null` khi không còn bản ghi hợp lệ nào, phía host hiển thị
/// placeholder thay vì biểu đồ.
#[wasm_bindgen]
pub fn build_series(history: JsValue, range: Option<String>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let history_value = from_value::<serde_json::Value>(history)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON lịch sử: {err}")))?;

    let entries = extract_history(&history_value);
    serialize_series(build_vitals_series(Some(&entries), selected_range(range)))
}

/// Chuỗi huyết áp của một bệnh nhân chọn theo tên trong roster thô.
#[wasm_bindgen]
pub fn patient_series(
    roster: JsValue,
    name: &str,
    range: Option<String>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let roster_value = from_value::<serde_json::Value>(roster)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON roster: {err}")))?;

    let roster = parse_roster_value(&roster_value)
        .map_err(|err| JsValue::from_str(&format_vitals_error(err)))?;

    let Some(patient) = find_patient(&roster, name) else {
        return Ok(JsValue::NULL);
    };

    serialize_series(build_vitals_series(
        Some(&patient.diagnosis_history),
        selected_range(range),
    ))
}

fn selected_range(range: Option<String>) -> RangeWindow {
    range
        .as_deref()
        .map(RangeWindow::from_selector)
        .unwrap_or_default()
}

fn serialize_series(
    series: Option<vitals_core::BloodPressureSeries>,
) -> Result<JsValue, JsValue> {
    match series {
        Some(series) => to_value(&series)
            .map_err(|err| JsValue::from_str(&format!("Không serialize được chuỗi: {err}"))),
        None => Ok(JsValue::NULL),
    }
}

fn format_vitals_error(err: VitalsError) -> String {
    format!("Vitals error: {err}")
}
