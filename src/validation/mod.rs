//! Two-tier argument validation.
//!
//! Every field goes through the same two steps: a kind check on the raw
//! [`Value`] (see [`Value::expect_text`] and friends), then a range check on the
//! typed result. The helpers here are the range checks plus a few combinators
//! that run both tiers for the common field shapes.

mod error;
mod number;
mod value;

pub use error::*;
pub use number::*;
pub use value::*;

/// Rejects the empty string.
pub fn non_empty(field: &'static str, text: String) -> Result<String, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::out_of_range(field, "must not be empty"));
    }
    Ok(text)
}

/// Rejects strings that are empty after trimming whitespace.
pub fn non_blank(field: &'static str, text: String) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::out_of_range(field, "cannot be empty"));
    }
    Ok(text)
}

pub fn non_negative(field: &'static str, number: Number) -> Result<Number, ValidationError> {
    let x = number.as_f64();
    if x.is_nan() || x < 0.0 {
        return Err(ValidationError::out_of_range(field, "must be >= 0"));
    }
    Ok(number)
}

pub fn positive(field: &'static str, number: Number) -> Result<Number, ValidationError> {
    let x = number.as_f64();
    if x.is_nan() || x <= 0.0 {
        return Err(ValidationError::out_of_range(field, "must be greater than 0"));
    }
    Ok(number)
}

/// Kind check for text, then [`non_empty`].
pub fn required_text(
    field: &'static str,
    value: impl Into<Value>,
) -> Result<String, ValidationError> {
    non_empty(field, Value::of(value).expect_text(field)?)
}

/// Kind check for an integer, then `>= 0`.
pub fn count(field: &'static str, value: impl Into<Value>) -> Result<u64, ValidationError> {
    let raw = Value::of(value).expect_int(field)?;
    u64::try_from(raw).map_err(|_| ValidationError::out_of_range(field, "must be >= 0"))
}

/// Kind check for an integer, then `> 0`.
pub fn positive_count(field: &'static str, value: impl Into<Value>) -> Result<u64, ValidationError> {
    match count(field, value)? {
        0 => Err(ValidationError::out_of_range(field, "must be greater than 0")),
        n => Ok(n),
    }
}

/// Kind check for a number, then `>= 0`, widened to `f64`.
pub fn amount(field: &'static str, value: impl Into<Value>) -> Result<f64, ValidationError> {
    non_negative(field, Value::of(value).expect_number(field)?).map(Number::as_f64)
}

/// Kind check for a number, then `> 0`, widened to `f64`.
pub fn positive_amount(field: &'static str, value: impl Into<Value>) -> Result<f64, ValidationError> {
    positive(field, Value::of(value).expect_number(field)?).map(Number::as_f64)
}

/// Quoted rendering used by the `Type(field='value')` representations.
///
/// Single quotes unless the text holds a `'` and no `"`, as Python's `repr` does.
pub(crate) fn quoted(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\");
    if text.contains('\'') && !text.contains('"') {
        format!("\"{escaped}\"")
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_rejects_negative_as_range() {
        let err = count("quantity", -1).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Range);
        assert_eq!(err.field(), "quantity");
    }

    #[test]
    fn count_rejects_float_as_type() {
        let err = count("quantity", 1.5).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Type);
        assert_eq!(err.to_string(), "quantity must be an integer, got float");
    }

    #[test]
    fn bool_is_not_a_number() {
        let err = amount("price", true).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Type);
    }

    #[test]
    fn nan_is_out_of_range() {
        assert_eq!(
            positive_amount("duration", f64::NAN).unwrap_err().kind(),
            FailureKind::Range
        );
    }

    #[test]
    fn number_display_keeps_int_and_float_apart() {
        assert_eq!(Number::Int(10).to_string(), "10");
        assert_eq!(Number::Float(20.0).to_string(), "20.0");
        assert_eq!(Number::Float(0.5).to_string(), "0.5");
        assert_eq!(format_float(2.0 / 3.0), "0.6666666666666666");
    }

    #[test]
    fn quoted_picks_double_quotes_around_apostrophes() {
        assert_eq!(quoted("Anna"), "'Anna'");
        assert_eq!(quoted("O'Brien"), "\"O'Brien\"");
        assert_eq!(quoted("say \"hi\" it's"), "'say \"hi\" it\\'s'");
        assert_eq!(quoted("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn large_and_tiny_floats_use_exponent_form() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-2.5e-7), "-2.5e-07");
        assert_eq!(format_float(1e300), "1e+300");
        assert_eq!(format_float(9999999999999998.0), "9999999999999998.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn int_float_comparison_is_exact() {
        let big_float = Number::Float(9_007_199_254_740_992.0);
        let next_int = Number::Int(9_007_199_254_740_993);
        assert!(next_int > big_float);
        assert!(big_float < next_int);
        assert_ne!(next_int, big_float);
        assert_eq!(Number::Int(9_007_199_254_740_992), big_float);
        assert!(Number::Int(i64::MAX) < Number::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Number::Int(3).partial_cmp(&Number::Float(f64::NAN)), None);
    }
}
