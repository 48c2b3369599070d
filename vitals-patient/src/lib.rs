//! Tolerant converter from the raw patient feed JSON to `vitals-core` types.

use serde_json::Value;
use vitals_core::{
    BloodPressureEntry, DiagnosisEntry, Diagnostic, PatientProfile, VitalReading, VitalsError,
};

/// Parse the patient roster from a JSON string.
pub fn parse_roster_str(roster_json: &str) -> Result<Vec<PatientProfile>, VitalsError> {
    let value: Value =
        serde_json::from_str(roster_json).map_err(|err| VitalsError::Parse(err.to_string()))?;
    parse_roster_value(&value)
}

/// Parse the patient roster from a `serde_json::Value`.
///
/// The top level must be an array; inside it every malformed field degrades
/// to an absent value instead of failing the whole roster.
pub fn parse_roster_value(roster: &Value) -> Result<Vec<PatientProfile>, VitalsError> {
    let entries = roster.as_array().ok_or(VitalsError::MissingData)?;
    Ok(entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(extract_profile)
        .collect())
}

/// Look up a patient by display name, the way the dashboard picks its active
/// profile.
pub fn find_patient<'a>(roster: &'a [PatientProfile], name: &str) -> Option<&'a PatientProfile> {
    roster.iter().find(|patient| patient.name == name)
}

/// Convert a raw `diagnosis_history` array into entries the series builder
/// can filter. Nulls and non-object elements become fully empty entries, so
/// the validity filter drops them downstream without losing positions of the
/// records around them.
pub fn extract_history(history: &Value) -> Vec<DiagnosisEntry> {
    history
        .as_array()
        .map(|records| records.iter().map(extract_entry).collect())
        .unwrap_or_default()
}

fn extract_profile(resource: &Value) -> PatientProfile {
    PatientProfile {
        name: text_field(resource, "name").unwrap_or_default(),
        gender: text_field(resource, "gender"),
        age: resource.get("age").and_then(Value::as_i64),
        date_of_birth: text_field(resource, "date_of_birth"),
        phone_number: text_field(resource, "phone_number"),
        emergency_contact: text_field(resource, "emergency_contact"),
        insurance_type: text_field(resource, "insurance_type"),
        profile_picture: text_field(resource, "profile_picture"),
        diagnosis_history: resource
            .get("diagnosis_history")
            .map(extract_history)
            .unwrap_or_default(),
        diagnostic_list: extract_diagnostics(resource.get("diagnostic_list")),
        lab_results: extract_lab_results(resource.get("lab_results")),
    }
}

fn extract_entry(record: &Value) -> DiagnosisEntry {
    DiagnosisEntry {
        month: text_field(record, "month"),
        year: record
            .get("year")
            .and_then(Value::as_i64)
            .map(|year| year as i32),
        blood_pressure: record
            .get("blood_pressure")
            .and_then(extract_blood_pressure),
        respiratory_rate: record.get("respiratory_rate").and_then(extract_reading),
        temperature: record.get("temperature").and_then(extract_reading),
        heart_rate: record.get("heart_rate").and_then(extract_reading),
    }
}

fn extract_blood_pressure(value: &Value) -> Option<BloodPressureEntry> {
    if !value.is_object() {
        return None;
    }
    Some(BloodPressureEntry {
        systolic: value.get("systolic").and_then(extract_reading),
        diastolic: value.get("diastolic").and_then(extract_reading),
    })
}

fn extract_reading(value: &Value) -> Option<VitalReading> {
    if !value.is_object() {
        return None;
    }
    Some(VitalReading {
        value: value.get("value").and_then(Value::as_f64),
        levels: text_field(value, "levels"),
    })
}

fn extract_diagnostics(list: Option<&Value>) -> Vec<Diagnostic> {
    let Some(entries) = list.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| Diagnostic {
            name: text_field(entry, "name").unwrap_or_default(),
            description: text_field(entry, "description").unwrap_or_default(),
            status: text_field(entry, "status").unwrap_or_default(),
        })
        .collect()
}

fn extract_lab_results(results: Option<&Value>) -> Vec<String> {
    results
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn text_field(resource: &Value, field: &str) -> Option<String> {
    resource
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
pub mod remote {
    //! HTTP fetch of the roster endpoint with Basic authentication.

    use vitals_core::{PatientProfile, VitalsError};

    /// GET the roster endpoint and parse the response body.
    pub fn fetch_roster(
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<Vec<PatientProfile>, VitalsError> {
        let response = reqwest::blocking::Client::new()
            .get(url)
            .basic_auth(username, Some(password))
            .send()
            .map_err(|err| VitalsError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(VitalsError::Transport(format!(
                "HTTP {} from roster endpoint",
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|err| VitalsError::Transport(err.to_string()))?;
        crate::parse_roster_str(&body)
    }
}
