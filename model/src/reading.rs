// Handle sensor reading concerns

use serde_json::Value;
use thiserror::Error;

// Declare a reading as served by the sensor endpoint. Every field may be
// absent or null.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reading {
    pub device: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub received_at: Option<String>,
}

impl Reading {
    /// Read the known fields off a JSON value, tolerating any shape. Values
    /// of the wrong type count as absent, except `received_at`, which the
    /// server may send as something other than a string and which is then
    /// shown as text. `false` and `0` there count as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            device: value.get("device").and_then(Value::as_str).map(String::from),
            temperature: value.get("temperature").and_then(Value::as_f64),
            humidity: value.get("humidity").and_then(Value::as_f64),
            received_at: value.get("received_at").and_then(|received_at| match received_at {
                Value::Null | Value::Bool(false) => None,
                Value::String(text) => Some(text.clone()),
                Value::Number(number) => number
                    .as_f64()
                    .filter(|number| *number != 0.0)
                    .map(format_number),
                other => Some(other.to_string()),
            }),
        }
    }
}

/// What a successful fetch found.
#[derive(Clone, Debug, PartialEq)]
pub enum Snapshot {
    /// The most recent reading i.e. the last element of the list.
    Latest(Reading),
    /// An empty list, or a body that was not a list at all.
    Empty,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Malformed(String),
}

pub type Outcome = Result<Snapshot, FetchError>;

/// Classify a response body. Readings are in chronological order so only
/// the last one is looked at.
pub fn snapshot_from_body(body: &[u8]) -> Outcome {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    match value {
        Value::Array(readings) => match readings.last() {
            Some(Value::Null) => Err(FetchError::Malformed(
                "most recent reading is null".to_string(),
            )),
            Some(last) => Ok(Snapshot::Latest(Reading::from_value(last))),
            None => Ok(Snapshot::Empty),
        },
        _ => Ok(Snapshot::Empty),
    }
}

/// Format a number as a browser would: shortest round-tripping digits, no
/// negative zero, and exponent notation for magnitudes from 1e21 up and
/// below 1e-6.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
