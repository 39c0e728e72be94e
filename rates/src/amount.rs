//! Validation, sanitization, and display formatting for user-entered
//! amounts.

use thiserror::Error;

/// An error that can occur when validating a user-entered amount.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseAmountError {
    /// The field was empty or contained only whitespace.
    #[error("amount is empty")]
    Empty,
    /// The text did not parse as a number, or parsed to a value that is not
    /// a finite number greater than zero.
    #[error("amount is not a positive number")]
    NotPositive,
}

/// Validates free-form amount text into a finite number strictly greater
/// than zero.
pub fn parse_amount(raw: &str) -> Result<f64, ParseAmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value: f64 = trimmed.parse().map_err(|_| ParseAmountError::NotPositive)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ParseAmountError::NotPositive);
    }

    Ok(value)
}

/// Strips minus signs as the user types, so negative-looking input never
/// reaches the field. Validation still rejects zero and parse failures.
pub fn sanitize_amount(raw: &str) -> String {
    raw.chars().filter(|ch| *ch != '-').collect()
}

/// Formats a computed total for display: two decimal places, with a
/// trailing ".00" dropped (1000 renders as "1000", 1000.5 as "1000.50").
/// Non-finite values render as "0".
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rendered = format!("{value:.2}");
    match rendered.strip_suffix(".00") {
        Some(trimmed) => trimmed.to_owned(),
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_a_positive_decimal() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
    }

    #[test]
    fn parse_amount_trims_surrounding_whitespace() {
        assert_eq!(parse_amount("  7 "), Ok(7.0));
    }

    #[test]
    fn parse_amount_rejects_empty_input() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("  "), Err(ParseAmountError::Empty));
    }

    #[test]
    fn parse_amount_rejects_zero_and_negatives() {
        assert_eq!(parse_amount("0"), Err(ParseAmountError::NotPositive));
        assert_eq!(parse_amount("-5"), Err(ParseAmountError::NotPositive));
    }

    #[test]
    fn parse_amount_rejects_non_numeric_text() {
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::NotPositive));
        assert_eq!(parse_amount("1.2.3"), Err(ParseAmountError::NotPositive));
    }

    #[test]
    fn parse_amount_rejects_non_finite_values() {
        assert_eq!(parse_amount("inf"), Err(ParseAmountError::NotPositive));
        assert_eq!(parse_amount("NaN"), Err(ParseAmountError::NotPositive));
    }

    // =========================================================================
    // sanitize_amount tests
    // =========================================================================

    #[test]
    fn sanitize_amount_strips_every_minus_sign() {
        assert_eq!(sanitize_amount("-12-3"), "123");
    }

    #[test]
    fn sanitize_amount_leaves_clean_input_alone() {
        assert_eq!(sanitize_amount("12.5"), "12.5");
    }

    // =========================================================================
    // format_amount tests
    // =========================================================================

    #[test]
    fn format_amount_drops_a_whole_number_fraction() {
        assert_eq!(format_amount(1000.0), "1000");
    }

    #[test]
    fn format_amount_keeps_two_decimal_places() {
        assert_eq!(format_amount(1000.5), "1000.50");
        assert_eq!(format_amount(0.333), "0.33");
    }

    #[test]
    fn format_amount_clamps_non_finite_to_zero() {
        assert_eq!(format_amount(f64::NAN), "0");
        assert_eq!(format_amount(f64::INFINITY), "0");
    }

    #[test]
    fn format_amount_is_idempotent_over_its_output() {
        for value in [0.0, 1000.0, 1000.5, 0.333, 15690.0] {
            let once = format_amount(value);
            let twice = format_amount(once.parse().unwrap());

            assert_eq!(twice, once);
        }
    }
}
