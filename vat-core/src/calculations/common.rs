//! Common helpers shared by the converter: rounding, display formatting and
//! parsing of typed amounts.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::DecimalSeparator;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vat_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount for display with exactly two decimal places.
///
/// Returns `None` when the value has too many integer digits to keep two
/// decimals within `Decimal`'s 28-digit precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vat_core::DecimalSeparator;
/// use vat_core::calculations::format_amount;
///
/// assert_eq!(format_amount(dec!(100), DecimalSeparator::Comma).as_deref(), Some("100,00"));
/// assert_eq!(format_amount(dec!(8.130081), DecimalSeparator::Point).as_deref(), Some("8.13"));
/// ```
pub fn format_amount(
    value: Decimal,
    separator: DecimalSeparator,
) -> Option<String> {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    // rescale silently settles for a smaller scale near the precision limit
    if rounded.scale() != 2 {
        return None;
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    let text = rounded.to_string();
    Some(match separator {
        DecimalSeparator::Point => text,
        DecimalSeparator::Comma => text.replace('.', ","),
    })
}

/// Reads typed amount text as a non-negative decimal.
///
/// The display separator is mapped to `.` first. A trailing separator
/// (`"12,"`) reads as the integer part. Only ASCII digits and a single
/// separator are accepted, so signs, exponents and `_` groupings return
/// `None` just like empty input.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vat_core::DecimalSeparator;
/// use vat_core::calculations::parse_amount;
///
/// assert_eq!(parse_amount("12,5", DecimalSeparator::Comma), Some(dec!(12.5)));
/// assert_eq!(parse_amount("12,", DecimalSeparator::Comma), Some(dec!(12)));
/// assert_eq!(parse_amount("", DecimalSeparator::Comma), None);
/// ```
pub fn parse_amount(
    text: &str,
    separator: DecimalSeparator,
) -> Option<Decimal> {
    let normalized = text.replace(separator.as_char(), ".");
    let normalized = normalized.strip_suffix('.').unwrap_or(&normalized);
    if normalized.is_empty() {
        return None;
    }

    let well_formed = normalized.chars().all(|c| c.is_ascii_digit() || c == '.')
        && normalized.matches('.').count() <= 1;
    if !well_formed {
        return None;
    }

    Decimal::from_str(normalized).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(0.125));

        assert_eq!(result, dec!(0.13));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.001));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // format_amount tests
    // =========================================================================

    #[test]
    fn format_amount_pads_to_two_places() {
        assert_eq!(format_amount(dec!(5), DecimalSeparator::Point).as_deref(), Some("5.00"));
        assert_eq!(format_amount(dec!(5.1), DecimalSeparator::Point).as_deref(), Some("5.10"));
    }

    #[test]
    fn format_amount_uses_comma_separator() {
        assert_eq!(
            format_amount(dec!(1234.5), DecimalSeparator::Comma).as_deref(),
            Some("1234,50")
        );
    }

    #[test]
    fn format_amount_rounds_long_fractions() {
        let net = dec!(10) / dec!(1.23);

        assert_eq!(format_amount(net, DecimalSeparator::Point).as_deref(), Some("8.13"));
    }

    #[test]
    fn format_amount_never_shows_negative_zero() {
        assert_eq!(format_amount(dec!(-0.001), DecimalSeparator::Point).as_deref(), Some("0.00"));
    }

    #[test]
    fn format_amount_keeps_two_places_up_to_26_integer_digits() {
        let value = Decimal::from_str(&"9".repeat(26)).unwrap();

        let text = format_amount(value, DecimalSeparator::Point).unwrap();

        assert_eq!(text, format!("{}.00", "9".repeat(26)));
    }

    #[test]
    fn format_amount_rejects_values_without_room_for_two_places() {
        for digits in [27, 28] {
            let value = Decimal::from_str(&"9".repeat(digits)).unwrap();

            assert_eq!(format_amount(value, DecimalSeparator::Point), None, "{digits} digits");
        }
    }

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_reads_comma_text() {
        assert_eq!(
            parse_amount("123,45", DecimalSeparator::Comma),
            Some(dec!(123.45))
        );
    }

    #[test]
    fn parse_amount_reads_point_text() {
        assert_eq!(
            parse_amount("0.5", DecimalSeparator::Point),
            Some(dec!(0.5))
        );
    }

    #[test]
    fn parse_amount_treats_lone_leading_zero_separator_as_zero() {
        assert_eq!(parse_amount("0,", DecimalSeparator::Comma), Some(dec!(0)));
    }

    #[test]
    fn parse_amount_rejects_empty_text() {
        assert_eq!(parse_amount("", DecimalSeparator::Comma), None);
    }

    #[test]
    fn parse_amount_rejects_malformed_text() {
        assert_eq!(parse_amount("abc", DecimalSeparator::Comma), None);
        assert_eq!(parse_amount("1,2,3", DecimalSeparator::Comma), None);
        assert_eq!(parse_amount("1e3", DecimalSeparator::Point), None);
        assert_eq!(parse_amount("1_000", DecimalSeparator::Point), None);
        assert_eq!(parse_amount("+5", DecimalSeparator::Comma), None);
        assert_eq!(parse_amount(" 5", DecimalSeparator::Comma), None);
    }

    #[test]
    fn parse_amount_rejects_negative_values() {
        assert_eq!(parse_amount("-5", DecimalSeparator::Comma), None);
    }

    #[test]
    fn parse_amount_rejects_values_beyond_decimal_range() {
        let text = "9".repeat(40);

        assert_eq!(parse_amount(&text, DecimalSeparator::Comma), None);
    }
}
