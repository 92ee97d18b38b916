use thiserror::Error;

/// Rejected input when building a workout record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("duration must not be negative, got {seconds}s")]
    NegativeDuration { seconds: i64 },

    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },
}

pub(crate) fn check_measurement(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RecordError::InvalidMeasurement { field, value })
    }
}
