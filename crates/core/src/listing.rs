//! Validation rules for properties, reservations, and reviews.

use crate::error::CoreError;
use crate::search::{MAX_RATING, MIN_RATING};
use crate::types::Date;

/// Maximum length of a property title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Require a non-blank text field.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a property title: non-blank and at most [`MAX_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("title", title)?;
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

/// Counts and prices on a listing can be zero but never negative.
pub fn validate_non_negative(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// A stay ends on or after the day it starts.
pub fn validate_stay(start_date: Date, end_date: Date) -> Result<(), CoreError> {
    if end_date < start_date {
        return Err(CoreError::Validation(format!(
            "end_date ({end_date}) precedes start_date ({start_date})"
        )));
    }
    Ok(())
}

/// Review ratings are whole stars in `MIN_RATING..=MAX_RATING`.
pub fn validate_review_rating(rating: i16) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_required_field_rejected() {
        let err = validate_required("city", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: city must not be empty");
    }

    #[test]
    fn title_length_enforced() {
        assert!(validate_title("Cozy loft").is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn negative_counts_rejected() {
        assert!(validate_non_negative("parking_spaces", 0).is_ok());
        assert!(validate_non_negative("parking_spaces", -1).is_err());
    }

    #[test]
    fn same_day_stay_ok() {
        assert!(validate_stay(date(2024, 6, 1), date(2024, 6, 1)).is_ok());
    }

    #[test]
    fn backwards_stay_rejected() {
        assert!(validate_stay(date(2024, 6, 2), date(2024, 6, 1)).is_err());
    }

    #[test]
    fn review_rating_bounds() {
        assert!(validate_review_rating(1).is_ok());
        assert!(validate_review_rating(5).is_ok());
        assert!(validate_review_rating(0).is_err());
        assert!(validate_review_rating(6).is_err());
    }
}
