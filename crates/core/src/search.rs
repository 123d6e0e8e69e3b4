//! Property search constants and input helpers.
//!
//! This module lives in `core` (zero database deps) so the bounds checks can
//! be unit-tested without a connection and reused by any future caller.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default number of rows returned by property search and reservation lists.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Largest limit a caller may request.
pub const MAX_SEARCH_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// Lowest rating a guest can leave.
pub const MIN_RATING: i16 = 1;

/// Highest rating a guest can leave.
pub const MAX_RATING: i16 = 5;

/// Resolve a caller-provided limit.
///
/// `None` falls back to `default`. Anything outside `1..=max` is rejected
/// rather than silently rewritten.
pub fn resolve_limit(limit: Option<i64>, default: i64, max: i64) -> Result<i64, CoreError> {
    match limit {
        None => Ok(default),
        Some(n) if n < 1 => Err(CoreError::Validation(format!(
            "limit must be at least 1, got {n}"
        ))),
        Some(n) if n > max => Err(CoreError::Validation(format!(
            "limit must be at most {max}, got {n}"
        ))),
        Some(n) => Ok(n),
    }
}

/// Normalize a free-text city filter.
///
/// Blank input means "no constraint". Otherwise the text is kept exactly as
/// given, surrounding spaces included, since they narrow the substring match.
pub fn normalize_city(city: Option<&str>) -> Option<String> {
    city.filter(|c| !c.trim().is_empty()).map(str::to_string)
}

/// Escape `LIKE` metacharacters so user text matches literally.
///
/// PostgreSQL's default escape character for `LIKE`/`ILIKE` is `\`.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build an `ILIKE` pattern matching `text` anywhere in the column.
pub fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

/// Check nightly price bounds. Each bound is optional and independent.
pub fn validate_price_bounds(min: Option<i32>, max: Option<i32>) -> Result<(), CoreError> {
    for (label, bound) in [("minimum", min), ("maximum", max)] {
        if let Some(value) = bound {
            if value < 0 {
                return Err(CoreError::Validation(format!(
                    "{label}_price_per_night must not be negative, got {value}"
                )));
            }
        }
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(CoreError::Validation(format!(
                "minimum_price_per_night ({lo}) exceeds maximum_price_per_night ({hi})"
            )));
        }
    }
    Ok(())
}

/// Check a minimum average rating filter.
///
/// Zero is accepted (it admits every reviewed property); anything outside
/// `0..=MAX_RATING` or non-finite is rejected.
pub fn validate_minimum_rating(rating: Option<f64>) -> Result<(), CoreError> {
    match rating {
        Some(r) if !r.is_finite() || !(0.0..=f64::from(MAX_RATING)).contains(&r) => {
            Err(CoreError::Validation(format!(
                "minimum_rating must be between 0 and {MAX_RATING}, got {r}"
            )))
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- resolve_limit -------------------------------------------------------

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(
            resolve_limit(None, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT).unwrap(),
            10
        );
    }

    #[test]
    fn limit_at_max_accepted() {
        assert_eq!(resolve_limit(Some(100), 10, 100).unwrap(), 100);
    }

    #[test]
    fn limit_above_max_rejected() {
        let err = resolve_limit(Some(101), 10, 100).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: limit must be at most 100, got 101"
        );
    }

    #[test]
    fn limit_passes_through_in_range() {
        assert_eq!(resolve_limit(Some(3), 10, 100).unwrap(), 3);
    }

    #[test]
    fn limit_zero_rejected() {
        assert!(matches!(
            resolve_limit(Some(0), 10, 100),
            Err(CoreError::Validation(_))
        ));
    }

    // -- normalize_city ------------------------------------------------------

    #[test]
    fn city_kept_verbatim() {
        assert_eq!(normalize_city(Some("San ")), Some("San ".into()));
        assert_eq!(normalize_city(Some(" Francisco")), Some(" Francisco".into()));
    }

    #[test]
    fn blank_city_is_no_constraint() {
        assert_eq!(normalize_city(Some("   ")), None);
        assert_eq!(normalize_city(None), None);
    }

    // -- escape_like ---------------------------------------------------------

    #[test]
    fn escape_like_plain_text_unchanged() {
        assert_eq!(escape_like("francisco"), "francisco");
    }

    #[test]
    fn escape_like_metacharacters() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn contains_pattern_wraps_in_wildcards() {
        assert_eq!(contains_pattern("san_fr"), "%san\\_fr%");
    }

    // -- validate_price_bounds -----------------------------------------------

    #[test]
    fn price_bounds_one_sided_ok() {
        assert!(validate_price_bounds(Some(100), None).is_ok());
        assert!(validate_price_bounds(None, Some(100)).is_ok());
        assert!(validate_price_bounds(None, None).is_ok());
    }

    #[test]
    fn price_bounds_equal_ok() {
        assert!(validate_price_bounds(Some(100), Some(100)).is_ok());
    }

    #[test]
    fn price_bounds_inverted_rejected() {
        let err = validate_price_bounds(Some(200), Some(100)).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn price_bounds_negative_rejected() {
        assert!(validate_price_bounds(Some(-1), None).is_err());
        assert!(validate_price_bounds(None, Some(-5)).is_err());
    }

    // -- validate_minimum_rating ---------------------------------------------

    #[test]
    fn rating_in_range_ok() {
        assert!(validate_minimum_rating(Some(4.0)).is_ok());
        assert!(validate_minimum_rating(Some(0.0)).is_ok());
        assert!(validate_minimum_rating(None).is_ok());
    }

    #[test]
    fn rating_out_of_range_rejected() {
        assert!(validate_minimum_rating(Some(5.5)).is_err());
        assert!(validate_minimum_rating(Some(-0.1)).is_err());
        assert!(validate_minimum_rating(Some(f64::NAN)).is_err());
    }
}
