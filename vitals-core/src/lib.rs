//! Kiểu dữ liệu chung và logic dựng chuỗi huyết áp cho dashboard bệnh nhân.

use chrono::Month;
use serde::{Deserialize, Serialize};

/// Một giá trị đo kèm phân loại dạng chữ ("Normal", "Higher than Average"...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// `None` khi upstream thiếu số đo; `0.0` vẫn là giá trị hợp lệ.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub levels: Option<String>,
}

/// Cặp chỉ số huyết áp thô, có thể thiếu một trong hai vế.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureEntry {
    #[serde(default)]
    pub systolic: Option<VitalReading>,
    #[serde(default)]
    pub diastolic: Option<VitalReading>,
}

/// Bản ghi chẩn đoán theo tháng đúng như upstream trả về.
///
/// Mọi trường đều optional: dữ liệu thật thường thiếu từng mảng nhỏ, việc
/// loại bản ghi hỏng là trách nhiệm của bộ lọc trong [`build_vitals_series`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub blood_pressure: Option<BloodPressureEntry>,
    #[serde(default)]
    pub respiratory_rate: Option<VitalReading>,
    #[serde(default)]
    pub temperature: Option<VitalReading>,
    #[serde(default)]
    pub heart_rate: Option<VitalReading>,
}

/// Giá trị đo đã qua kiểm tra: `value` chắc chắn tồn tại.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub levels: Option<String>,
}

/// Cặp số đo của bản ghi mới nhất còn lại trong cửa sổ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentReading {
    pub systolic: Reading,
    pub diastolic: Reading,
}

/// Kết quả sẵn sàng vẽ: nhãn trục hoành và hai dãy giá trị thẳng hàng theo index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureSeries {
    pub labels: Vec<String>,
    pub systolic: Vec<f64>,
    pub diastolic: Vec<f64>,
    pub current: CurrentReading,
}

impl BloodPressureSeries {
    /// Số điểm dữ liệu trên trục thời gian.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Khoảng thời gian người dùng chọn cho biểu đồ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeWindow {
    OneYear,
    FifteenMonths,
    TwoYears,
    /// Giá trị selector không nhận dạng được: không giới hạn cửa sổ.
    Unbounded,
}

impl Default for RangeWindow {
    fn default() -> Self {
        RangeWindow::OneYear
    }
}

impl RangeWindow {
    /// Ánh xạ giá trị của control chọn khoảng; chuỗi lạ rơi về `Unbounded`.
    pub fn from_selector(raw: &str) -> Self {
        match raw.trim() {
            "1" | "one_year" => RangeWindow::OneYear,
            "15" | "fifteen_months" => RangeWindow::FifteenMonths,
            "2" | "two_years" => RangeWindow::TwoYears,
            _ => RangeWindow::Unbounded,
        }
    }

    /// Số bản ghi gần nhất được giữ lại, `None` nghĩa là giữ tất cả.
    pub fn window_size(self) -> Option<usize> {
        match self {
            RangeWindow::OneYear => Some(12),
            RangeWindow::FifteenMonths => Some(15),
            RangeWindow::TwoYears => Some(24),
            RangeWindow::Unbounded => None,
        }
    }
}

/// Biên trục tung cho renderer, chia theo bước cố định.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            min: 60.0,
            max: 180.0,
            step: 20.0,
        }
    }
}

impl AxisBounds {
    /// Nới biên ra lưới `step` gần nhất sao cho bao trọn cả hai dãy giá trị.
    pub fn fit(series: &BloodPressureSeries) -> Self {
        let base = Self::default();
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for value in series.systolic.iter().chain(series.diastolic.iter()) {
            lo = lo.min(*value);
            hi = hi.max(*value);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return base;
        }
        let min = (lo / base.step).floor() * base.step;
        let max = (hi / base.step).ceil() * base.step;
        Self {
            min,
            max: if max > min { max } else { min + base.step },
            step: base.step,
        }
    }
}

/// Hồ sơ bệnh nhân do Data Source cung cấp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub insurance_type: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub diagnosis_history: Vec<DiagnosisEntry>,
    #[serde(default)]
    pub diagnostic_list: Vec<Diagnostic>,
    #[serde(default)]
    pub lab_results: Vec<String>,
}

/// Một dòng trong danh sách chẩn đoán của hồ sơ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

/// Bản ghi đã xác thực: mọi trường bắt buộc đều hiện diện.
#[derive(Debug)]
struct ValidRecord {
    month: Month,
    year: i32,
    systolic: Reading,
    diastolic: Reading,
}

impl ValidRecord {
    fn sort_key(&self) -> (i32, u32) {
        (self.year, self.month.number_from_month())
    }

    fn label(&self) -> String {
        format!("{}, {}", &self.month.name()[..3], self.year)
    }
}

fn validate(entry: &DiagnosisEntry) -> Option<ValidRecord> {
    let month = entry.month.as_deref()?.parse::<Month>().ok()?;
    let year = entry.year?;
    let pressure = entry.blood_pressure.as_ref()?;
    Some(ValidRecord {
        month,
        year,
        systolic: checked_reading(pressure.systolic.as_ref())?,
        diastolic: checked_reading(pressure.diastolic.as_ref())?,
    })
}

fn checked_reading(reading: Option<&VitalReading>) -> Option<Reading> {
    let reading = reading?;
    Some(Reading {
        value: reading.value?,
        levels: reading.levels.clone(),
    })
}

/// Dựng chuỗi huyết áp từ lịch sử chẩn đoán thô.
///
/// `None` (upstream chưa trả dữ liệu), mảng rỗng, hay mảng không còn bản ghi
/// hợp lệ nào đều cho ra `None` để renderer hiển thị placeholder thay vì vẽ.
/// Bản ghi thiếu tháng, năm hoặc số đo huyết áp bị loại trong im lặng.
pub fn build_vitals_series(
    history: Option<&[DiagnosisEntry]>,
    range: RangeWindow,
) -> Option<BloodPressureSeries> {
    let mut records: Vec<ValidRecord> = history?.iter().filter_map(validate).collect();
    if records.is_empty() {
        return None;
    }

    // Xếp hạng mới nhất trước, cắt còn K bản ghi, rồi trả lại thứ tự thời
    // gian. Cả hai lượt đều stable nên bản ghi trùng (năm, tháng) giữ nguyên
    // thứ tự đầu vào.
    records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    if let Some(limit) = range.window_size() {
        records.truncate(limit);
    }
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let newest = records.last()?;
    let current = CurrentReading {
        systolic: newest.systolic.clone(),
        diastolic: newest.diastolic.clone(),
    };

    Some(BloodPressureSeries {
        labels: records.iter().map(ValidRecord::label).collect(),
        systolic: records.iter().map(|r| r.systolic.value).collect(),
        diastolic: records.iter().map(|r| r.diastolic.value).collect(),
        current,
    })
}

/// Lỗi chung của các collaborator quanh core.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("Dữ liệu bệnh nhân thiếu cấu trúc tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Lỗi truyền tải: {0}")]
    Transport(String),
}
