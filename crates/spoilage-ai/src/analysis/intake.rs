use super::domain::FoodInput;

const MIN_TEMP_C: f64 = -40.0;
const MAX_TEMP_C: f64 = 60.0;

/// Validation errors raised before a submission reaches the classifier.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("food name must not be blank")]
    BlankName,
    #[error("hours since preparation must be a finite number >= 0 (found {0})")]
    InvalidHours(f64),
    #[error("storage temperature must be a finite number between -40 and 60 °C (found {0})")]
    InvalidTemperature(f64),
}

/// Reject malformed submissions at the boundary.
///
/// The classifier itself is total over well-typed input, so this is the
/// only place a caller-facing analysis request can be turned away.
pub fn validate(input: &FoodInput) -> Result<(), IntakeError> {
    if input.name.trim().is_empty() {
        return Err(IntakeError::BlankName);
    }

    if !input.hours_since_prep.is_finite() || input.hours_since_prep < 0.0 {
        return Err(IntakeError::InvalidHours(input.hours_since_prep));
    }

    if !input.storage_temp.is_finite()
        || input.storage_temp < MIN_TEMP_C
        || input.storage_temp > MAX_TEMP_C
    {
        return Err(IntakeError::InvalidTemperature(input.storage_temp));
    }

    Ok(())
}
