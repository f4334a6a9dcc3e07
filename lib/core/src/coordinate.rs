use crate::error::ValidationError;
use serde::Serialize;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A validated geographic position in decimal degrees
///
/// Both components are finite and inside their domain; the only way to build
/// one is through [`Coordinate::new`] (or the validator built on top of it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        check_range("latitude", latitude, MIN_LATITUDE, MAX_LATITUDE)?;
        check_range("longitude", longitude, MIN_LONGITUDE, MAX_LONGITUDE)?;
        Ok(Self { latitude, longitude })
    }

    #[inline]
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_a_number(field));
    }
    if value < min || value > max {
        return Err(ValidationError::out_of_range(
            field,
            format!("{} must be between {} and {}", field, min, max),
        ));
    }
    Ok(())
}

/// Raw input as it arrives from a query string or a JSON body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a number. `Ok(None)` means the value is absent or blank.
    pub fn to_number(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        match self {
            RawValue::Missing => Ok(None),
            RawValue::Number(n) if n.is_finite() => Ok(Some(*n)),
            RawValue::Number(_) => Err(ValidationError::not_a_number(field)),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(Some(n)),
                    _ => Err(ValidationError::not_a_number(field)),
                }
            }
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Missing,
            serde_json::Value::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => RawValue::Text(s),
            other => RawValue::Text(other.to_string()),
        }
    }
}
