use super::error::ValidationError;

/// Checks a raw name before it is stored.
///
/// Only emptiness is rejected; surrounding whitespace and character content are kept as-is.
pub fn validate_name(raw: &str) -> Result<&str, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(raw)
}

/// Checks a raw roll number before it is stored. Uniqueness is not enforced.
pub fn validate_roll(raw: i64) -> Result<i64, ValidationError> {
    if raw <= 0 {
        return Err(ValidationError::NonPositiveRoll(raw));
    }

    Ok(raw)
}

/// Parses console input into a roll number; the sign is left for [validate_roll] to judge
pub fn parse_roll(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidRoll(raw.to_string()))
}
